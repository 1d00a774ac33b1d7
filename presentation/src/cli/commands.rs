//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for storeclerk
#[derive(Parser, Debug)]
#[command(name = "storeclerk")]
#[command(author, version, about = "Store assistant backend - product, order and policy lookups")]
#[command(long_about = r#"
Storeclerk answers customer questions about products, orders, and store
policy. Natural-language understanding is delegated to a hosted model,
which calls back into local lookup tools over small JSON datasets:

  search_products    fuzzy product search (tolerates misheard names)
  check_order        order status by (suffix-matched) ID
  get_policy_answer  FAQ/policy lookup

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./clerk.toml      Project-level config
3. ~/.config/storeclerk/config.toml   Global config

Example:
  storeclerk "do you have sony headphones in stock?"
  storeclerk --chat
"#)]
pub struct Cli {
    /// The customer utterance to answer (not required in chat mode)
    pub utterance: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and prefixes, print the bare reply
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
