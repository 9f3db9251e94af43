use clap::{Args, Parser, Subcommand};

/// Histmon – notify a chat webhook when a shell command finishes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub record: RecordArgs,

    /// Access token forwarded in the notification payload
    #[arg(long, env = "TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Webhook URL that receives the notification
    #[arg(long, env = "ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Metadata of the finished command, normally exported by the shell hook.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Command line that was executed
    #[arg(id = "command_line", long = "command", env = "COMMAND", default_value = "", global = true)]
    pub command: String,

    /// Captured output of the command
    #[arg(long, env = "OUTPUT", default_value = "", global = true)]
    pub output: String,

    /// Start time in milliseconds since the Unix epoch
    #[arg(long, env = "START_AT", default_value_t = 0, global = true, allow_negative_numbers = true)]
    pub start_at: i64,

    /// End time in milliseconds since the Unix epoch
    #[arg(long, env = "END_AT", default_value_t = 0, global = true, allow_negative_numbers = true)]
    pub end_at: i64,

    /// Exit status reported by the shell
    #[arg(long, env = "EXIT_STATUS", default_value_t = 0, global = true, allow_negative_numbers = true)]
    pub exit_status: i32,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Install the zsh hook into ~/.zshrc
    Install,
    /// Send a notification for the finished command (default)
    Send,
}

impl Cli {
    /// Subcommand to run; `send` when none was given.
    pub fn subcommand(&self) -> Commands {
        self.command.unwrap_or(Commands::Send)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_send() {
        let cli = Cli::try_parse_from(["histmon"]).unwrap();
        assert_eq!(cli.subcommand(), Commands::Send);
    }

    #[test]
    fn parses_install_with_flags() {
        let cli = Cli::try_parse_from([
            "histmon",
            "install",
            "--endpoint",
            "https://hooks.example/notify",
            "--token",
            "t0k",
        ])
        .unwrap();
        assert_eq!(cli.subcommand(), Commands::Install);
        assert_eq!(cli.endpoint.as_deref(), Some("https://hooks.example/notify"));
        assert_eq!(cli.token.as_deref(), Some("t0k"));
    }

    #[test]
    fn parses_record_fields() {
        let cli = Cli::try_parse_from([
            "histmon",
            "send",
            "--command",
            "make all",
            "--start-at",
            "1000",
            "--end-at",
            "9000",
            "--exit-status",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.record.command, "make all");
        assert_eq!(cli.record.start_at, 1000);
        assert_eq!(cli.record.end_at, 9000);
        assert_eq!(cli.record.exit_status, 2);
    }
}
