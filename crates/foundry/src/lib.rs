//! Facade crate for the creational pattern slices.
//! Re-exports domain/kernel primitives and composes every enabled slice into one registry.
//! Keep this crate thin: it should compose other crates, not implement pattern logic.
//!
//! ## Usage
//! ```rust
//! use foundry::domain::config::ShowcaseConfig;
//! use foundry::domain::patterns::PatternSet;
//!
//! let mut out = Vec::new();
//! let ran = foundry::run(PatternSet::BUILDER, &ShowcaseConfig::default(), &mut out).unwrap();
//! assert_eq!(ran, 1);
//! ```

pub use foundry_domain as domain;
pub use foundry_kernel as kernel;

use foundry_domain::config::ShowcaseConfig;
use foundry_domain::patterns::PatternSet;
use foundry_kernel::{ShowcaseError, ShowcaseRegistry};
use std::io::Write;
use tracing::debug;

/// Pattern slices, by Cargo feature.
pub mod patterns {
    #[cfg(feature = "abstract-factory")]
    pub use foundry_abstract_factory as abstract_factory;
    #[cfg(feature = "builder")]
    pub use foundry_builder as builder;
    #[cfg(feature = "factory-method")]
    pub use foundry_factory_method as factory_method;

    /// Build-time enabled slices (by Cargo feature), in showcase order.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "abstract-factory")]
        foundry_domain::constants::ABSTRACT_FACTORY,
        #[cfg(feature = "factory-method")]
        foundry_domain::constants::FACTORY_METHOD,
        #[cfg(feature = "builder")]
        foundry_domain::constants::BUILDER,
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Registry holding every enabled showcase.
///
/// Order is fixed: abstract factory, factory method, builder.
#[must_use]
pub fn registry() -> ShowcaseRegistry {
    let registry = ShowcaseRegistry::new();

    #[cfg(feature = "abstract-factory")]
    let registry = registry.register(patterns::abstract_factory::AbstractFactoryShowcase);

    #[cfg(feature = "factory-method")]
    let registry = registry.register(patterns::factory_method::FactoryMethodShowcase);

    #[cfg(feature = "builder")]
    let registry = registry.register(patterns::builder::BuilderShowcase);

    debug!(showcases = ?registry.names().collect::<Vec<_>>(), "Showcase registry ready");
    registry
}

/// Runs the showcases in `selection` against `out` and returns how many ran.
///
/// # Errors
/// Propagates the first [`ShowcaseError`] a showcase returns.
pub fn run(
    selection: PatternSet,
    config: &ShowcaseConfig,
    out: &mut dyn Write,
) -> Result<usize, ShowcaseError> {
    registry().run_selected(selection, config, out)
}
