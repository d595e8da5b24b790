use crate::product::{FaceSerum, LipOil, Skincare, SkincareKind};
use fxhash::FxHashMap;

/// Constructor stored in a [`CreatorRegistry`].
pub type Constructor = fn() -> Skincare;

/// Lookup table from variant tag to constructor function.
///
/// The default registry knows every built-in variant. Registering a kind again replaces
/// its constructor, which lets tests and callers swap implementations without touching
/// the creator that dispatches through the table.
#[derive(Debug, Clone)]
pub struct CreatorRegistry {
    constructors: FxHashMap<SkincareKind, Constructor>,
}

impl Default for CreatorRegistry {
    fn default() -> Self {
        Self::empty()
            .register(SkincareKind::LipOil, || LipOil.into())
            .register(SkincareKind::FaceSerum, || FaceSerum.into())
    }
}

impl CreatorRegistry {
    /// A registry with no constructors.
    #[must_use]
    pub fn empty() -> Self {
        Self { constructors: FxHashMap::default() }
    }

    /// Binds `constructor` to `kind`, replacing any previous binding.
    #[must_use]
    pub fn register(mut self, kind: SkincareKind, constructor: Constructor) -> Self {
        self.constructors.insert(kind, constructor);
        self
    }

    /// Builds a fresh product for `kind`, if a constructor is registered.
    #[must_use]
    pub fn create(&self, kind: SkincareKind) -> Option<Skincare> {
        self.constructors.get(&kind).map(|construct| construct())
    }

    #[must_use]
    pub fn contains(&self, kind: SkincareKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::SkincareProduct;
    use strum::IntoEnumIterator;

    #[test]
    fn default_registry_covers_every_kind() {
        let registry = CreatorRegistry::default();

        for kind in SkincareKind::iter() {
            let product = registry.create(kind).expect("built-in kind is registered");
            assert_eq!(product.kind(), kind);
        }
        assert_eq!(registry.len(), SkincareKind::iter().count());
    }

    #[test]
    fn empty_registry_creates_nothing() {
        let registry = CreatorRegistry::empty();

        assert!(registry.create(SkincareKind::LipOil).is_none());
        assert!(!registry.contains(SkincareKind::FaceSerum));
    }

    #[test]
    fn registering_again_replaces_the_constructor() {
        let registry =
            CreatorRegistry::default().register(SkincareKind::LipOil, || FaceSerum.into());

        let product = registry.create(SkincareKind::LipOil).expect("registered");
        assert_eq!(product, Skincare::FaceSerum(FaceSerum));
        assert_eq!(registry.len(), 2);
    }
}
