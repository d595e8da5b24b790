use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// One assembly step's contribution, in build order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Part {
    PartOne,
    PartTwo,
    PartThree,
}

/// The finished, immutable result of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    parts: Vec<Part>,
}

impl Product {
    pub(crate) const fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Parts in the order they were built.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// `true` when every part is present exactly once and in build order.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.parts.iter().copied().eq(Part::iter())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> = self.parts.iter().map(|&p| p.into()).collect();
        write!(f, "Product {{ parts: [{}] }}", names.join(", "))
    }
}
