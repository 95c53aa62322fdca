//! Command dispatch

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{convert, ApplicationError, ConfigArtifact, ConvertOptions, MIN_NAME_LEN};
use crate::cli::args::{Cli, Commands, DialectArgs, NamingArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{build_tree, Dialect, NodeValue};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Split {
            file,
            dialect,
            naming,
        }) => split(file, dialect, naming),
        Some(Commands::Tree { file, dialect }) => tree(file, dialect),
        Some(Commands::Names {
            file,
            dialect,
            naming,
        }) => names(file, dialect, naming),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn split(file: &Path, dialect: &DialectArgs, naming: &NamingArgs) -> CliResult<()> {
    let settings = Settings::load()?;
    let options = convert_options(&settings, dialect, naming)?;
    let text = read_input(file)?;

    let named = convert(&text, &options).map_err(ApplicationError::from)?;
    if named.is_empty() {
        output::warning("no partitions produced (input has no content lines)");
    }
    let artifacts: Vec<ConfigArtifact> = named.iter().map(ConfigArtifact::from_partition).collect();

    let json = serde_json::to_string_pretty(&artifacts).map_err(|e| {
        ApplicationError::OperationFailed {
            context: "serialize artifacts".to_string(),
            source: Box::new(e),
        }
    })?;
    output::info(&json);
    Ok(())
}

#[instrument]
fn tree(file: &Path, dialect: &DialectArgs) -> CliResult<()> {
    let settings = Settings::load()?;
    let text = read_input(file)?;

    let tree =
        build_tree(&text, effective_dialect(&settings, dialect)).map_err(ApplicationError::from)?;
    debug!(top_level = tree.len(), "rendering tree");

    output::header(&file.display());
    for (command, value) in tree.iter() {
        output::info(&to_termtree(command, value));
    }
    Ok(())
}

#[instrument]
fn names(file: &Path, dialect: &DialectArgs, naming: &NamingArgs) -> CliResult<()> {
    let settings = Settings::load()?;
    let options = convert_options(&settings, dialect, naming)?;
    let text = read_input(file)?;

    let named = convert(&text, &options).map_err(ApplicationError::from)?;
    for partition in &named {
        output::info(&partition.name);
    }
    Ok(())
}

/// Merge loaded settings with command-line overrides.
fn convert_options(
    settings: &Settings,
    dialect: &DialectArgs,
    naming: &NamingArgs,
) -> CliResult<ConvertOptions> {
    let max_name_len = naming.max_len.unwrap_or(settings.naming.max_name_len);
    if max_name_len < MIN_NAME_LEN {
        return Err(CliError::InvalidArgs(format!(
            "max name length must be at least {MIN_NAME_LEN} (digest plus delimiter), got {max_name_len}"
        )));
    }
    Ok(ConvertOptions {
        strategy: naming.strategy.into(),
        owner_prefix: naming
            .prefix
            .clone()
            .unwrap_or_else(|| settings.naming.owner_prefix.clone()),
        endpoint: naming
            .endpoint
            .clone()
            .unwrap_or_else(|| settings.naming.endpoint.clone()),
        max_name_len,
        dialect: effective_dialect(settings, dialect),
    })
}

fn effective_dialect(settings: &Settings, overrides: &DialectArgs) -> Dialect {
    Dialect {
        comment_marker: overrides
            .comment_marker
            .unwrap_or(settings.dialect.comment_marker),
        terminator: overrides
            .terminator
            .clone()
            .unwrap_or_else(|| settings.dialect.terminator.clone()),
    }
}

/// Read the input text from a file, or from stdin for `-`.
fn read_input(file: &Path) -> CliResult<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| ApplicationError::OperationFailed {
                context: "read stdin".to_string(),
                source: Box::new(e),
            })?;
        return Ok(text);
    }
    Ok(
        fs::read_to_string(file).map_err(|e| ApplicationError::OperationFailed {
            context: format!("read config {}", file.display()),
            source: Box::new(e),
        })?,
    )
}

fn to_termtree(command: &str, value: &NodeValue) -> Tree<String> {
    let leaves: Vec<Tree<String>> = match value {
        NodeValue::Children(children) => children
            .iter()
            .map(|(child, grandchildren)| to_termtree(child, grandchildren))
            .collect(),
        NodeValue::Empty => Vec::new(),
    };
    Tree::new(command.to_string()).with_leaves(leaves)
}
