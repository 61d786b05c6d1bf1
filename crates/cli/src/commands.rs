//! CLI commands
//!
//! Each command returns the text to print so it can be exercised without a terminal.

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use ledgerkit_transaction::{templates, TransactionDslInput};

use crate::config::CliConfig;

/// Transaction shapes offered by `template`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// `@external/<ASSET>` → account
    Deposit,
    /// account → `@external/<ASSET>`
    Withdrawal,
    /// account → to-account
    Transfer,
}

/// Arguments of the `template` command
#[derive(Debug, Clone, Default)]
pub struct TemplateArgs {
    pub asset: Option<String>,
    pub value: String,
    pub account: String,
    pub to_account: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub pending: bool,
}

/// Read and unmarshal a JSON payload from disk
pub fn read_input(path: &Path) -> Result<TransactionDslInput, anyhow::Error> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let input = TransactionDslInput::from_json_str(&text)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    tracing::debug!(path = %path.display(), "payload decoded");
    Ok(input)
}

/// Validate a payload file
pub fn validate(path: &Path) -> Result<String, anyhow::Error> {
    let input = read_input(path)?;
    input.validate()?;
    tracing::info!(path = %path.display(), "payload is valid");
    Ok(format!("✅ {} is a valid transaction", path.display()))
}

/// Validate a payload file and print its canonical wire form
pub fn normalize(path: &Path, config: &CliConfig) -> Result<String, anyhow::Error> {
    let input = read_input(path)?;
    input.validate()?;
    render(&input, config.pretty)
}

/// Generate a payload from a template
pub fn template(
    kind: TemplateKind,
    args: &TemplateArgs,
    config: &CliConfig,
) -> Result<String, anyhow::Error> {
    let asset = args.asset.as_deref().unwrap_or(&config.default_asset);

    let mut builder = match kind {
        TemplateKind::Deposit => templates::deposit(asset, &args.value, &args.account),
        TemplateKind::Withdrawal => templates::withdrawal(asset, &args.value, &args.account),
        TemplateKind::Transfer => {
            let Some(to_account) = args.to_account.as_deref() else {
                anyhow::bail!("transfer requires --to-account");
            };
            templates::transfer(asset, &args.value, &args.account, to_account)
        }
    };

    if let Some(description) = &args.description {
        builder = builder.description(description.as_str());
    }
    if let Some(code) = &args.code {
        builder = builder.code(code.as_str());
    }

    let input = builder.pending(args.pending).try_build()?;
    tracing::debug!(?kind, asset, "template generated");
    render(&input, config.pretty)
}

fn render(input: &TransactionDslInput, pretty: bool) -> Result<String, anyhow::Error> {
    let value = input.to_json_value();
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}
