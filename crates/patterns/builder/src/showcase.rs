use crate::builder::ConcreteBuilder;
use crate::director::Director;
use foundry_kernel::domain::config::ShowcaseConfig;
use foundry_kernel::domain::constants::BUILDER;
use foundry_kernel::domain::patterns::PatternSet;
use foundry_kernel::{Showcase, ShowcaseError};
use std::io::Write;
use tracing::info;

/// Lets a director assemble a product and prints it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderShowcase;

impl Showcase for BuilderShowcase {
    fn name(&self) -> &'static str {
        BUILDER
    }

    fn pattern(&self) -> PatternSet {
        PatternSet::BUILDER
    }

    fn run(&self, _config: &ShowcaseConfig, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        info!("Builder showcase");

        let mut director = Director::new(Box::new(ConcreteBuilder::new()));
        let product = director.get_product().map_err(|e| ShowcaseError::pattern(e, BUILDER))?;

        writeln!(out, "{product}")?;
        Ok(())
    }
}
