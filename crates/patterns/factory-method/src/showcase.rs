use crate::creator::{
    Creator, DefaultCreator, FaceSerumCreator, FallbackPolicy, LipOilCreator, TaggedCreator,
};
use crate::product::SkincareProduct;
use foundry_kernel::domain::config::ShowcaseConfig;
use foundry_kernel::domain::constants::FACTORY_METHOD;
use foundry_kernel::domain::patterns::PatternSet;
use foundry_kernel::{Showcase, ShowcaseError};
use std::io::Write;
use tracing::info;

/// Runs every creator once and prints what it produced.
///
/// `factory_method.tag` feeds the tagged creator; `factory_method.strict` switches its
/// policy from falling back to rejecting unknown tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryMethodShowcase;

impl Showcase for FactoryMethodShowcase {
    fn name(&self) -> &'static str {
        FACTORY_METHOD
    }

    fn pattern(&self) -> PatternSet {
        PatternSet::FACTORY_METHOD
    }

    fn run(&self, config: &ShowcaseConfig, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        let settings = &config.factory_method;
        info!(tag = %settings.tag, strict = settings.strict, "Factory method showcase");

        let fixed: [(&str, &dyn Creator); 3] = [
            ("lip-oil creator", &LipOilCreator),
            ("face-serum creator", &FaceSerumCreator),
            ("default creator", &DefaultCreator),
        ];
        for (label, creator) in fixed {
            writeln!(out, "{label}: {}", creator.create_product().operation())?;
        }

        let policy =
            if settings.strict { FallbackPolicy::Reject } else { FallbackPolicy::default() };
        let product = TaggedCreator::new()
            .with_policy(policy)
            .create_product(&settings.tag)
            .map_err(|e| ShowcaseError::pattern(e, FACTORY_METHOD))?;

        writeln!(out, "tagged creator [{}]: {}", settings.tag, product.operation())?;
        Ok(())
    }
}
