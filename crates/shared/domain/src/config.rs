use crate::patterns::PatternSet;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Settings for every showcase, loaded once by the composition root.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfigInner {
    pub patterns: Vec<String>,
    pub abstract_factory: AbstractFactoryConfig,
    pub factory_method: FactoryMethodConfig,
}

/// Arc-wrapped config so showcases can hold a cheap clone.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(flatten, default)]
    inner: Arc<ShowcaseConfigInner>,
}

impl Deref for ShowcaseConfig {
    type Target = ShowcaseConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ShowcaseConfig {
    fn deref_mut(&mut self) -> &mut ShowcaseConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl ShowcaseConfigInner {
    /// The showcases selected by `patterns`. An empty list selects all of them.
    #[must_use]
    pub fn pattern_set(&self) -> PatternSet {
        if self.patterns.is_empty() {
            PatternSet::ALL
        } else {
            PatternSet::from_names(&self.patterns)
        }
    }
}

/// Which product family to build and the operands handed to product B.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AbstractFactoryConfig {
    #[serde(deserialize_with = "name_or_number")]
    pub family: String,
    pub lhs: i64,
    pub rhs: i64,
}

/// Discriminator for the tagged creator.
///
/// With `strict` unset an unknown tag falls back to the default product; with it set the
/// tag is rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FactoryMethodConfig {
    #[serde(deserialize_with = "name_or_number")]
    pub tag: String,
    pub strict: bool,
}

// --- Default ---

impl Default for AbstractFactoryConfig {
    fn default() -> Self {
        Self { family: "one".to_owned(), lhs: 2, rhs: 2 }
    }
}

impl Default for FactoryMethodConfig {
    fn default() -> Self {
        Self { tag: "lip".to_owned(), strict: false }
    }
}

// --- Deserialize helpers ---

/// Reads a name that environment parsing may already have turned into a number or bool
/// (`FOUNDRY__ABSTRACT_FACTORY__FAMILY=2` arrives as an integer).
fn name_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct NameVisitor;

    impl Visitor<'_> for NameVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a name, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(NameVisitor)
}
