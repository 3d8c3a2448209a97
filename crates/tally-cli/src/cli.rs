use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Tally — validate and take apart ledger account names",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject invalid account names before operating on them
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report whether each account name is valid
    Valid(AccountsArgs),
    /// Validate account names and explain rejections
    Check(AccountsArgs),
    /// Split an account into its components
    Split(AccountArgs),
    /// Join components into an account name
    Join(JoinArgs),
    /// Print the parent account
    Parent(AccountArgs),
    /// Print the last component
    Leaf(AccountArgs),
    /// Print the account without its root component
    SansRoot(AccountArgs),
    /// Print the first N components
    Root(RootArgs),
    /// Test whether an account contains a whole component
    HasComponent(HasComponentArgs),
    /// Print the common prefix of several accounts
    CommonPrefix(AccountsArgs),
    /// List an account and its ancestors
    Parents(AccountArgs),
    /// Render an account with the configured separator
    Render(AccountArgs),
    /// Parse a rendered name back into an account
    Parse(ParseArgs),
}

#[derive(Args)]
pub struct AccountArgs {
    pub account: String,
}

#[derive(Args)]
pub struct AccountsArgs {
    pub accounts: Vec<String>,
}

#[derive(Args)]
pub struct JoinArgs {
    pub components: Vec<String>,
}

#[derive(Args)]
pub struct RootArgs {
    pub account: String,
    /// Zero or a negative count prints an empty name
    #[arg(short = 'n', long = "components", default_value = "1", allow_negative_numbers = true)]
    pub num_components: isize,
}

#[derive(Args)]
pub struct HasComponentArgs {
    pub account: String,
    pub component: String,
}

#[derive(Args)]
pub struct ParseArgs {
    pub text: String,
}
