use clap::{Command, CommandFactory, Parser, Subcommand};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Command-line arguments for the root command.
#[derive(Parser, Debug)]
#[command(
    name = "gh-glance",
    version,
    about = "A CLI application for quick GitHub lookups"
)]
pub struct Cli {
    /// GitHub API base URL, defaults to the public API.
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Increase logging verbosity (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Say Hello
    Hello {
        /// Accepted and ignored.
        #[arg(hide = true, num_args = 0..)]
        args: Vec<String>,
    },
    /// Get repository info from GitHub
    Repo {
        /// Repository owner (user or organization)
        owner: String,
        /// Repository name
        repo: String,
    },
}

impl Cli {
    /// Default `tracing` filter for the requested verbosity; `RUST_LOG` wins when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "gh_glance=debug",
            _ => "trace",
        }
    }
}

/// Builds the complete command tree with every subcommand attached.
pub fn build_root_command() -> Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        build_root_command().debug_assert();
    }

    #[test]
    fn registers_hello_and_repo() {
        let root = build_root_command();
        let names: Vec<_> = root.get_subcommands().map(|c| c.get_name()).collect();

        assert_eq!(names, ["hello", "repo"]);
    }

    #[test]
    fn no_subcommand_parses_to_none() {
        let cli = Cli::try_parse_from(["gh-glance"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn repo_takes_owner_and_name() {
        let cli = Cli::try_parse_from(["gh-glance", "repo", "octocat", "Hello-World"]).unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Repo {
                owner: "octocat".to_string(),
                repo: "Hello-World".to_string(),
            })
        );
    }

    #[test]
    fn repo_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["gh-glance", "repo", "onlyOneArg"]).is_err());
        assert!(Cli::try_parse_from(["gh-glance", "repo"]).is_err());
        assert!(Cli::try_parse_from(["gh-glance", "repo", "a", "b", "c"]).is_err());
    }

    #[test]
    fn hello_ignores_trailing_arguments() {
        let cli = Cli::try_parse_from(["gh-glance", "hello", "extra", "more"]).unwrap();

        assert!(matches!(cli.command, Some(Commands::Hello { .. })));
    }

    #[test]
    fn verbosity_selects_filter() {
        let quiet = Cli::try_parse_from(["gh-glance", "hello"]).unwrap();
        let debug = Cli::try_parse_from(["gh-glance", "-v", "hello"]).unwrap();
        let trace = Cli::try_parse_from(["gh-glance", "hello", "-vv"]).unwrap();

        assert_eq!(quiet.log_filter(), "warn");
        assert_eq!(debug.log_filter(), "gh_glance=debug");
        assert_eq!(trace.log_filter(), "trace");
    }
}
