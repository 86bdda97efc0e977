use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chroma-node")]
#[command(about = "Vote for your favorite color and watch the results")]
pub struct Cli {
    /// Config file, generated with defaults when missing
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    pub config: PathBuf,

    /// Vote file, overriding `store_path` from the config
    #[arg(short, long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the colors that can be voted for
    Palette,
    /// Show the current results
    Results {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cast one vote and show the updated results
    Vote {
        #[arg(value_name = "COLOR")]
        color: String,
    },
    /// Interactive session reading commands from stdin
    Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vote() {
        let cli = Cli::parse_from(["chroma-node", "--store", "votes.jsonl", "vote", "Red"]);
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert_eq!(cli.store, Some(PathBuf::from("votes.jsonl")));
        assert!(matches!(cli.command, Commands::Vote { color } if color == "Red"));
    }

    #[test]
    fn test_parse_results_json() {
        let cli = Cli::parse_from(["chroma-node", "-c", "node/config.json", "results", "--json"]);
        assert_eq!(cli.config, PathBuf::from("node/config.json"));
        assert!(matches!(cli.command, Commands::Results { json: true }));
    }
}
