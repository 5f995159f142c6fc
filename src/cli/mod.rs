use clap::Parser;
use std::path::PathBuf;

pub mod add;
pub mod cleanup;
pub mod command;
pub mod delete;
pub mod display;
pub mod list;
pub mod menu;
pub mod parser;
pub mod search;
pub mod session;
pub mod tag;
pub mod ui;
pub mod update;

pub use command::{Command, CommandError, CommandResult, Index};
pub use display::print_person_list;
pub use menu::run_menu;
pub use parser::{parse_command, ParseError};
pub use session::{BookOrigin, Session, SessionError};

#[derive(Parser)]
#[command(name = "connectus")]
#[command(about = "Personal contact manager driven by one-line commands")]
#[command(version)]
pub struct Cli {
    /// Contact list file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
    /// Config file to read instead of the default one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log filter, e.g. "debug" (RUST_LOG still wins)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
    /// Run this command once and exit, e.g. `connectus list`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_and_command() {
        let cli = Cli::parse_from([
            "connectus",
            "--data-file",
            "/tmp/book.json",
            "--log-level",
            "debug",
            "addt",
            "2",
            "remark=friend",
        ]);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/book.json")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.command_line().as_deref(), Some("addt 2 remark=friend"));
    }

    #[test]
    fn test_cli_without_command_is_interactive() {
        let cli = Cli::parse_from(["connectus"]);
        assert_eq!(cli.command_line(), None);
        assert_eq!(cli.config, None);
    }
}
