//! The contract every pattern slice fulfils.

use crate::error::ShowcaseError;
use foundry_domain::config::ShowcaseConfig;
use foundry_domain::patterns::PatternSet;
use std::fmt::Debug;
use std::io::Write;

/// One runnable demonstration of a creational pattern.
///
/// A showcase is the composition root of its pattern: it is the only code that names the
/// concrete creators, and it writes a deterministic description of what they produced.
pub trait Showcase: Debug + Send + Sync {
    /// Stable name, also used as the CLI subcommand.
    fn name(&self) -> &'static str;

    /// The flag selecting this showcase in a [`PatternSet`].
    fn pattern(&self) -> PatternSet;

    /// Runs the demonstration and writes its text to `out`.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Io`] if `out` fails, [`ShowcaseError::InvalidConfig`] for
    /// unusable settings, and [`ShowcaseError::Pattern`] for errors raised by the pattern.
    fn run(&self, config: &ShowcaseConfig, out: &mut dyn Write) -> Result<(), ShowcaseError>;
}
