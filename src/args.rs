use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default list analyzed by `tlds` when no path is given.
pub const DEFAULT_TLD_LIST: &str = "data/top-100k-domains.csv";

/// Default list scanned by `rank` and `competitors` when no path is given.
pub const DEFAULT_RANK_LIST: &str = "data/top-100m-domains.csv";

#[derive(Parser, Debug)]
#[command(
    name = "domainlist",
    about = "Analyze flat-text domain lists: TLD distribution and domain ranks",
    version,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the most frequent TLDs in a domain list
    Tlds {
        /// Path to the newline-delimited domain list
        #[arg(default_value = DEFAULT_TLD_LIST)]
        list: PathBuf,

        /// Number of top TLDs to display
        #[arg(default_value_t = 20)]
        top: usize,

        /// Emit the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find a domain's rank in an ordered list
    Rank {
        /// Domain to search for
        domain: Option<String>,

        /// Path to the newline-delimited domain list
        #[arg(short, long, default_value = DEFAULT_RANK_LIST)]
        list: PathBuf,
    },

    /// Look up several domains in a single pass over the list
    Competitors {
        /// Domains to look up
        domains: Vec<String>,

        /// Path to the newline-delimited domain list
        #[arg(short, long, default_value = DEFAULT_RANK_LIST)]
        list: PathBuf,
    },
}
