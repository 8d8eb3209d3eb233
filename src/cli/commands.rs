use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `hikari` - Aura-Soma colour readings in the terminal.
#[derive(Parser, Debug)]
#[command(name = "hikari")]
#[command(version)]
#[command(about = "Aura-Soma bottle catalog and colour readings.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use instead of the bundled one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Interface language (zh, en)
    #[arg(long, global = true, value_name = "LANG")]
    pub locale: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog interactively
    Gallery {
        /// Initial search (name, number, id or tag)
        #[arg(long)]
        search: Option<String>,
    },

    /// Start a guided four-bottle reading
    Reading,

    /// Print the bottles matching a query
    Search {
        /// Name, number (e.g. 5 or B5), id or tag
        query: String,
    },

    /// Print the full details of one bottle
    Show {
        /// Bottle number, label (B5) or id
        bottle: String,
    },

    /// Request a reading for four bottles without prompts
    Read {
        /// Soul, gifts & challenges, here & now, future, in order
        #[arg(num_args = 4, required = true, value_names = ["B1", "B2", "B3", "B4"])]
        bottles: Vec<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_opens_home() {
        let cli = Cli::try_parse_from(["hikari"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn read_takes_exactly_four_bottles() {
        let cli = Cli::try_parse_from(["hikari", "read", "5", "B12", "7", "30", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Read { bottles, json }) => {
                assert_eq!(bottles, ["5", "B12", "7", "30"]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["hikari", "read", "5", "12", "7"]).is_err());
        assert!(Cli::try_parse_from(["hikari", "read", "5", "12", "7", "30", "1"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli =
            Cli::try_parse_from(["hikari", "search", "angel", "--locale", "en", "-v"]).unwrap();
        assert_eq!(cli.locale.as_deref(), Some("en"));
        assert!(cli.verbose);
    }
}
