use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::record::CommandRecord;

pub const TITLE: &str = "Command finished";
pub const CHANNEL: &str = "ding";

/// Timestamps are always rendered in UTC+8.
const DISPLAY_OFFSET_SECS: i32 = 8 * 60 * 60;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// JSON body accepted by the notification webhook.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Payload {
    pub title: String,
    pub description: String,
    pub content: String,
    pub channel: String,
    pub token: String,
}

impl Payload {
    pub fn new(content: String, token: &str) -> Self {
        Self {
            title: TITLE.to_string(),
            description: TITLE.to_string(),
            content,
            channel: CHANNEL.to_string(),
            token: token.to_string(),
        }
    }
}

/// Markdown body describing a finished command.
pub fn render_content(record: &CommandRecord, hostname: &str) -> String {
    let mut content = format!(
        "# {TITLE}\n\
         - **Host**: {hostname}\n\
         - **Command**: {command}\n\
         - **Exit status**: {status}\n\
         - **Started at**: {start}\n\
         - **Finished at**: {end}\n\
         - **Duration**: {duration}",
        command = record.command,
        status = record.exit_status,
        start = format_timestamp(record.start_at),
        end = format_timestamp(record.end_at),
        duration = human_duration(record.duration_ms()),
    );

    if !record.output.is_empty() {
        content.push_str("\n- **Output**:\n```\n");
        content.push_str(&record.truncated_output());
        content.push_str("\n```");
    }

    content
}

/// Format a millisecond epoch timestamp; falls back to the raw number when out of range.
pub fn format_timestamp(millis: i64) -> String {
    match (
        FixedOffset::east_opt(DISPLAY_OFFSET_SECS),
        DateTime::from_timestamp_millis(millis),
    ) {
        (Some(offset), Some(utc)) => utc.with_timezone(&offset).format(TIME_FORMAT).to_string(),
        _ => millis.to_string(),
    }
}

/// Render a duration like `1d 3h 12s`; sub-second durations render as `250ms`.
pub fn human_duration(millis: i64) -> String {
    const UNITS: [(i64, &str); 4] = [(86_400, "d"), (3_600, "h"), (60, "m"), (1, "s")];

    if millis < 1_000 {
        return format!("{}ms", millis.max(0));
    }

    let mut remaining = millis / 1_000;
    let mut parts = Vec::new();
    for (size, unit) in UNITS {
        let n = remaining / size;
        if n > 0 {
            parts.push(format!("{n}{unit}"));
        }
        remaining %= size;
    }
    parts.join(" ")
}
