use crate::cli::RecordArgs;

/// Commands finishing faster than this are not reported.
pub const MIN_DURATION_MS: i64 = 5_000;

/// Maximum number of characters of output carried in a notification.
pub const OUTPUT_LIMIT: usize = 1_000;

const TRUNCATION_MARKER: &str = "...";

/// One finished shell command, as reported by the hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRecord {
    pub command: String,
    pub output: String,
    /// Milliseconds since the Unix epoch
    pub start_at: i64,
    /// Milliseconds since the Unix epoch
    pub end_at: i64,
    pub exit_status: i32,
}

impl CommandRecord {
    pub fn duration_ms(&self) -> i64 {
        self.end_at.saturating_sub(self.start_at)
    }

    pub fn should_notify(&self) -> bool {
        self.duration_ms() >= MIN_DURATION_MS
    }

    /// Output cut to [`OUTPUT_LIMIT`] characters, with a trailing marker when cut.
    pub fn truncated_output(&self) -> String {
        match self.output.char_indices().nth(OUTPUT_LIMIT) {
            Some((idx, _)) => format!("{}{}", &self.output[..idx], TRUNCATION_MARKER),
            None => self.output.clone(),
        }
    }
}

impl From<RecordArgs> for CommandRecord {
    fn from(args: RecordArgs) -> Self {
        Self {
            command: args.command,
            output: args.output,
            start_at: args.start_at,
            end_at: args.end_at,
            exit_status: args.exit_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start_at: i64, end_at: i64) -> CommandRecord {
        CommandRecord {
            command: "sleep 10".into(),
            start_at,
            end_at,
            ..Default::default()
        }
    }

    #[test]
    fn short_commands_are_filtered() {
        assert!(!record(1_000, 5_999).should_notify());
        assert!(!record(0, 0).should_notify());
        // clock went backwards
        assert!(!record(10_000, 1_000).should_notify());
        assert!(record(1_000, 6_000).should_notify());
    }

    #[test]
    fn long_output_is_truncated() {
        let rec = CommandRecord {
            output: "x".repeat(1_500),
            ..Default::default()
        };
        let out = rec.truncated_output();
        assert_eq!(out.len(), OUTPUT_LIMIT + TRUNCATION_MARKER.len());
        assert!(out.ends_with("..."));
    }

    #[test]
    fn output_at_limit_is_untouched() {
        let rec = CommandRecord {
            output: "y".repeat(OUTPUT_LIMIT),
            ..Default::default()
        };
        assert_eq!(rec.truncated_output(), rec.output);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let rec = CommandRecord {
            output: "é".repeat(1_200),
            ..Default::default()
        };
        let out = rec.truncated_output();
        assert_eq!(out.chars().count(), OUTPUT_LIMIT + 3);
        assert!(out.starts_with("éé"));
    }
}
