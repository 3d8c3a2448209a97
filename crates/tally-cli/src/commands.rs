use colored::Colorize;
use serde::Serialize;
use tally_account::{
    account_root, account_sans_root, common_prefix, has_account_component, is_account_valid,
    join_account, leaf_account, parent_account, parents, split_account, validate_account,
};
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;

/// Result of running a command, before formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Bool(bool),
    Text(String),
    List(Vec<String>),
    Checks(Vec<Check>),
}

/// Validation outcome for one account name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Check {
    pub account: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Output {
    /// `false` when a validation command found an invalid name.
    pub fn is_success(&self) -> bool {
        match self {
            Output::Checks(checks) => checks.iter().all(|c| c.valid),
            _ => true,
        }
    }
}

pub fn run_command(command: &Command, config: &CliConfig) -> anyhow::Result<Output> {
    if config.strict {
        for account in input_accounts(command) {
            validate_account(account)?;
        }
    }
    let output = match command {
        Command::Valid(args) => Output::Checks(
            args.accounts
                .iter()
                .map(|account| Check {
                    account: account.clone(),
                    valid: is_account_valid(account),
                    reason: None,
                })
                .collect(),
        ),
        Command::Check(args) => Output::Checks(
            args.accounts
                .iter()
                .map(|account| {
                    let reason = validate_account(account).err().map(|e| e.to_string());
                    Check { account: account.clone(), valid: reason.is_none(), reason }
                })
                .collect(),
        ),
        Command::Split(args) => Output::List(split_account(&args.account)),
        Command::Join(args) => {
            let joined = join_account(&args.components);
            if config.strict {
                validate_account(&joined)?;
            }
            Output::Text(joined)
        }
        Command::Parent(args) => Output::Text(parent_account(&args.account)),
        Command::Leaf(args) => Output::Text(leaf_account(&args.account)),
        Command::SansRoot(args) => Output::Text(account_sans_root(&args.account)),
        Command::Root(args) => {
            Output::Text(account_root(&args.account, args.num_components).to_owned())
        }
        Command::HasComponent(args) => {
            Output::Bool(has_account_component(&args.account, &args.component))
        }
        Command::CommonPrefix(args) => Output::Text(common_prefix(&args.accounts)),
        Command::Parents(args) => {
            Output::List(parents(&args.account).map(str::to_owned).collect())
        }
        Command::Render(args) => Output::Text(config.transformer().render(&args.account)),
        Command::Parse(args) => {
            let parsed = config.transformer().parse(&args.text);
            if config.strict {
                validate_account(&parsed)?;
            }
            Output::Text(parsed)
        }
    };
    debug!(?output, "command finished");
    Ok(output)
}

/// Account names a command takes as input; checked up front in strict mode.
fn input_accounts(command: &Command) -> Vec<&str> {
    match command {
        Command::Valid(_) | Command::Check(_) | Command::Join(_) | Command::Parse(_) => vec![],
        Command::Split(args)
        | Command::Parent(args)
        | Command::Leaf(args)
        | Command::SansRoot(args)
        | Command::Parents(args)
        | Command::Render(args) => vec![args.account.as_str()],
        Command::Root(args) => vec![args.account.as_str()],
        Command::HasComponent(args) => vec![args.account.as_str()],
        Command::CommonPrefix(args) => args.accounts.iter().map(String::as_str).collect(),
    }
}

pub fn render(output: &Output, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(output)?);
    }
    let text = match output {
        Output::Bool(true) => "true".green().to_string(),
        Output::Bool(false) => "false".red().to_string(),
        Output::Text(text) => text.clone(),
        Output::List(items) => items.join("\n"),
        Output::Checks(checks) => checks
            .iter()
            .map(|check| match (&check.reason, check.valid) {
                (_, true) => format!("{} {}", "✓".green().bold(), check.account),
                (Some(reason), false) => format!("{} {}", "✗".red().bold(), reason),
                (None, false) => format!("{} {}", "✗".red().bold(), check.account),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(text)
}
