use crate::family::{Family, FamilyKind, FamilyOne, FamilyTwo};
use crate::kit::Kit;
use foundry_kernel::domain::config::ShowcaseConfig;
use foundry_kernel::domain::constants::ABSTRACT_FACTORY;
use foundry_kernel::domain::patterns::PatternSet;
use foundry_kernel::{Showcase, ShowcaseError};
use std::io::Write;
use std::str::FromStr;
use tracing::info;

/// Builds a kit from the configured family and prints what its products report.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstractFactoryShowcase;

impl Showcase for AbstractFactoryShowcase {
    fn name(&self) -> &'static str {
        ABSTRACT_FACTORY
    }

    fn pattern(&self) -> PatternSet {
        PatternSet::ABSTRACT_FACTORY
    }

    fn run(&self, config: &ShowcaseConfig, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        let settings = &config.abstract_factory;
        let kind = FamilyKind::from_str(&settings.family).map_err(|_| {
            ShowcaseError::InvalidConfig {
                message: format!("unknown product family '{}'", settings.family).into(),
                context: Some("abstract_factory.family".into()),
            }
        })?;
        info!(family = %kind, "Abstract factory showcase");

        match kind {
            FamilyKind::One => client(&FamilyOne, settings.lhs, settings.rhs, out),
            FamilyKind::Two => client(&FamilyTwo, settings.lhs, settings.rhs, out),
        }
    }
}

/// Uses a family only through the [`Family`] trait.
fn client<F: Family>(
    factory: &F,
    x: i64,
    y: i64,
    out: &mut dyn Write,
) -> Result<(), ShowcaseError> {
    for line in Kit::assemble(factory).report(x, y) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
