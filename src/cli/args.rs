//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::PartitionStrategy;

/// Split indentation-structured device configs into deterministically named artifacts
#[derive(Parser, Debug)]
#[command(name = "confsplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a config into JSON artifact documents on stdout
    Split {
        /// Config file to read, '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        dialect: DialectArgs,

        #[command(flatten)]
        naming: NamingArgs,
    },

    /// Parse a config and print its command tree
    Tree {
        /// Config file to read, '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        dialect: DialectArgs,
    },

    /// Print the derived resource names, one per line
    Names {
        /// Config file to read, '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        dialect: DialectArgs,

        #[command(flatten)]
        naming: NamingArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Input dialect overrides.
#[derive(Args, Debug, Clone)]
pub struct DialectArgs {
    /// Comment marker character
    #[arg(long)]
    pub comment_marker: Option<char>,

    /// Block terminator keyword
    #[arg(long)]
    pub terminator: Option<String>,
}

/// Partitioning and naming overrides.
#[derive(Args, Debug, Clone)]
pub struct NamingArgs {
    /// Partition strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::TopLevel)]
    pub strategy: StrategyArg,

    /// Owner prefix for derived names
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Endpoint identifier attached to every artifact
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Maximum resource name length
    #[arg(long)]
    pub max_len: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// One artifact per top-level command
    TopLevel,
    /// One artifact per leaf command path
    LeafPath,
}

impl From<StrategyArg> for PartitionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::TopLevel => PartitionStrategy::ByTopLevel,
            StrategyArg::LeafPath => PartitionStrategy::ByLeafPath,
        }
    }
}
