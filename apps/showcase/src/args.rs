//! # CLI Argument Definitions
//!
//! Subcommands pick which showcase runs; their flags override the loaded configuration.

use clap::{Args, Parser, Subcommand};
use foundry::domain::config::ShowcaseConfig;
use foundry::domain::patterns::PatternSet;
use foundry_logger::LevelFilter;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "foundry")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Runs the creational pattern showcases")]
pub struct Cli {
    /// Config file (toml, json, yaml). Defaults to an optional `foundry.*` in the working directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum log level written to stderr
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Also write logs to a rolling file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Showcase to run; without one, the `patterns` config entry decides
    #[command(subcommand)]
    pub command: Option<ShowcaseCommand>,
}

/// Enumeration of available showcases.
#[derive(Debug, Subcommand)]
pub enum ShowcaseCommand {
    /// Build a product family and print what its products report
    AbstractFactory(AbstractFactoryArgs),
    /// Run every creator, including the tagged one
    FactoryMethod(FactoryMethodArgs),
    /// Let a director assemble a product
    Builder,
    /// Run every showcase in order
    All,
}

#[derive(Debug, Args)]
pub struct AbstractFactoryArgs {
    /// Product family (`one` or `two`)
    #[arg(short, long)]
    pub family: Option<String>,
    /// Left operand handed to product B
    #[arg(long, allow_negative_numbers = true)]
    pub lhs: Option<i64>,
    /// Right operand handed to product B
    #[arg(long, allow_negative_numbers = true)]
    pub rhs: Option<i64>,
}

#[derive(Debug, Args)]
pub struct FactoryMethodArgs {
    /// Discriminator for the tagged creator (`lip` or `serum`)
    #[arg(short, long)]
    pub tag: Option<String>,
    /// Reject unknown tags instead of falling back to the default product
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Applies subcommand flags to `config` and returns the showcases to run.
    pub fn apply(&self, config: &mut ShowcaseConfig) -> PatternSet {
        match &self.command {
            None => config.pattern_set(),
            Some(ShowcaseCommand::All) => PatternSet::ALL,
            Some(ShowcaseCommand::Builder) => PatternSet::BUILDER,
            Some(ShowcaseCommand::AbstractFactory(args)) => {
                let settings = &mut config.abstract_factory;
                if let Some(family) = &args.family {
                    settings.family.clone_from(family);
                }
                if let Some(lhs) = args.lhs {
                    settings.lhs = lhs;
                }
                if let Some(rhs) = args.rhs {
                    settings.rhs = rhs;
                }
                PatternSet::ABSTRACT_FACTORY
            },
            Some(ShowcaseCommand::FactoryMethod(args)) => {
                let settings = &mut config.factory_method;
                if let Some(tag) = &args.tag {
                    settings.tag.clone_from(tag);
                }
                settings.strict |= args.strict;
                PatternSet::FACTORY_METHOD
            },
        }
    }
}
