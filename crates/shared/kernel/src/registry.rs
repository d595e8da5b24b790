//! Ordered collection of the showcases a binary knows about.

use crate::error::ShowcaseError;
use crate::showcase::Showcase;
use foundry_domain::config::ShowcaseConfig;
use foundry_domain::patterns::PatternSet;
use std::io::Write;
use tracing::info;

/// Showcases in registration order.
#[derive(Debug, Default)]
pub struct ShowcaseRegistry {
    entries: Vec<Box<dyn Showcase>>,
}

impl ShowcaseRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a showcase. A later showcase with the same name replaces the earlier one
    /// in place, keeping the original position.
    #[must_use]
    pub fn register(mut self, showcase: impl Showcase + 'static) -> Self {
        let boxed: Box<dyn Showcase> = Box::new(showcase);
        match self.entries.iter_mut().find(|s| s.name() == boxed.name()) {
            Some(slot) => *slot = boxed,
            None => self.entries.push(boxed),
        }
        self
    }

    /// Looks a showcase up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Showcase> {
        self.entries.iter().find(|s| s.name() == name).map(AsRef::as_ref)
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|s| s.name())
    }

    /// Showcases whose flag is contained in `selection`, in registration order.
    pub fn select(&self, selection: PatternSet) -> impl Iterator<Item = &dyn Showcase> + '_ {
        self.entries.iter().filter(move |s| selection.contains(s.pattern())).map(AsRef::as_ref)
    }

    /// Runs every selected showcase against the same output, stopping at the first error.
    ///
    /// # Errors
    /// Propagates the first [`ShowcaseError`] returned by a showcase.
    pub fn run_selected(
        &self,
        selection: PatternSet,
        config: &ShowcaseConfig,
        out: &mut dyn Write,
    ) -> Result<usize, ShowcaseError> {
        let mut ran = 0;
        for showcase in self.select(selection) {
            info!(showcase = showcase.name(), "Running showcase");
            showcase.run(config, out)?;
            ran += 1;
        }
        Ok(ran)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Echo {
        name: &'static str,
        pattern: PatternSet,
        line: &'static str,
    }

    impl Showcase for Echo {
        fn name(&self) -> &'static str {
            self.name
        }

        fn pattern(&self) -> PatternSet {
            self.pattern
        }

        fn run(&self, _: &ShowcaseConfig, out: &mut dyn Write) -> Result<(), ShowcaseError> {
            writeln!(out, "{}", self.line)?;
            Ok(())
        }
    }

    fn registry() -> ShowcaseRegistry {
        ShowcaseRegistry::new()
            .register(Echo { name: "builder", pattern: PatternSet::BUILDER, line: "b" })
            .register(Echo {
                name: "abstract-factory",
                pattern: PatternSet::ABSTRACT_FACTORY,
                line: "af",
            })
    }

    #[test]
    fn selection_keeps_registration_order() {
        let mut out = Vec::new();
        let ran = registry()
            .run_selected(PatternSet::ALL, &ShowcaseConfig::default(), &mut out)
            .expect("echo cannot fail");

        assert_eq!(ran, 2);
        assert_eq!(String::from_utf8(out).expect("utf8"), "b\naf\n");
    }

    #[test]
    fn empty_selection_runs_nothing() {
        let mut out = Vec::new();
        let ran = registry()
            .run_selected(PatternSet::FACTORY_METHOD, &ShowcaseConfig::default(), &mut out)
            .expect("nothing to fail");

        assert_eq!(ran, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn re_registering_replaces_in_place() {
        let registry = registry().register(Echo {
            name: "builder",
            pattern: PatternSet::BUILDER,
            line: "b2",
        });

        assert_eq!(registry.names().collect::<Vec<_>>(), ["builder", "abstract-factory"]);
        assert!(registry.get("builder").is_some());
        assert!(registry.get("prototype").is_none());
    }
}
