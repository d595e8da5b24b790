use crate::constants::{ABSTRACT_FACTORY, ALL, BUILDER, FACTORY_METHOD};
use bitflags::bitflags;

bitflags! {
    /// A selection of showcases to run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PatternSet: u8 {
        const ABSTRACT_FACTORY = 1 << 0;
        const FACTORY_METHOD = 1 << 1;
        const BUILDER = 1 << 2;

        const ALL = Self::ABSTRACT_FACTORY.bits()
            | Self::FACTORY_METHOD.bits()
            | Self::BUILDER.bits();
    }
}

impl PatternSet {
    /// Folds a list of names into one set. Unknown names contribute nothing.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().fold(Self::empty(), |set, name| set | Self::from(name.as_ref()))
    }
}

impl From<&str> for PatternSet {
    fn from(s: &str) -> Self {
        match s {
            ABSTRACT_FACTORY => Self::ABSTRACT_FACTORY,
            FACTORY_METHOD => Self::FACTORY_METHOD,
            BUILDER => Self::BUILDER,
            ALL | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}
