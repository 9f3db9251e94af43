use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::message::{render_content, Payload};
use crate::record::{CommandRecord, MIN_DURATION_MS};
use crate::sink::post_webhook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    /// Command finished too quickly to be worth a notification
    Skipped,
}

pub async fn send(config: &Config, record: &CommandRecord) -> Result<Outcome> {
    if !record.should_notify() {
        info!(
            duration_ms = record.duration_ms(),
            "Command execution time is less than {}s, no message will be sent",
            MIN_DURATION_MS / 1_000
        );
        return Ok(Outcome::Skipped);
    }

    let endpoint = config.endpoint()?;
    let token = config.token()?;
    let host = local_hostname()?;

    let payload = Payload::new(render_content(record, &host), token);
    post_webhook(endpoint, &payload).await?;

    info!(command = %record.command, "Notification sent");
    Ok(Outcome::Sent)
}

fn local_hostname() -> Result<String> {
    let name = hostname::get().context("Failed to get hostname")?;
    Ok(name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn short_command_skips_without_config() {
        let record = CommandRecord {
            command: "ls".into(),
            start_at: 1_000,
            end_at: 1_200,
            ..Default::default()
        };
        let outcome = runtime().block_on(send(&Config::default(), &record));
        assert_matches!(outcome, Ok(Outcome::Skipped));
    }

    #[test]
    fn long_command_requires_endpoint() {
        let record = CommandRecord {
            command: "make".into(),
            start_at: 0,
            end_at: 60_000,
            ..Default::default()
        };
        let result = runtime().block_on(send(&Config::new(None, Some("t".into())), &record));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("ENDPOINT"));
    }
}
