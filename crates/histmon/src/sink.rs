use anyhow::{Context, Result};
use tracing::debug;

use crate::message::Payload;

pub async fn post_webhook(endpoint: &str, payload: &Payload) -> Result<()> {
    let resp = reqwest::Client::new()
        .post(endpoint)
        .json(payload)
        .send()
        .await
        .with_context(|| format!("Sending notification to {endpoint}"))?
        .error_for_status()
        .with_context(|| "Webhook endpoint returned an error")?;
    debug!(status = %resp.status(), "webhook accepted notification");
    Ok(())
}
