use crate::error::FactoryError;
use crate::product::{FaceSerum, LipOil, Skincare, SkincareKind};
use crate::registry::CreatorRegistry;
use std::str::FromStr;
use tracing::{debug, warn};

/// A creator whose factory method is fixed by the implementing type.
///
/// There is no default body: each implementor decides which variant it produces and
/// always produces that one.
pub trait Creator {
    fn create_product(&self) -> Skincare;
}

/// Always creates a [`LipOil`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LipOilCreator;

impl Creator for LipOilCreator {
    fn create_product(&self) -> Skincare {
        LipOil.into()
    }
}

/// Always creates a [`FaceSerum`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceSerumCreator;

impl Creator for FaceSerumCreator {
    fn create_product(&self) -> Skincare {
        FaceSerum.into()
    }
}

/// Concrete creator with a built-in choice, for when a single variant is all that is
/// ever needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCreator;

impl DefaultCreator {
    /// The variant this creator produces.
    pub const KIND: SkincareKind = SkincareKind::FaceSerum;
}

impl Creator for DefaultCreator {
    fn create_product(&self) -> Skincare {
        FaceSerum.into()
    }
}

/// What a [`TaggedCreator`] does with a tag it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Produce this variant instead.
    Default(SkincareKind),
    /// Fail with [`FactoryError::UnknownDiscriminator`].
    Reject,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::Default(SkincareKind::LipOil)
    }
}

/// A single creator that picks the variant from a runtime tag.
///
/// `"lip"` maps to [`LipOil`] and `"serum"` to [`FaceSerum`]. Any other tag follows the
/// [`FallbackPolicy`], which by default produces a lip oil.
#[derive(Debug, Clone, Default)]
pub struct TaggedCreator {
    registry: CreatorRegistry,
    policy: FallbackPolicy,
}

impl TaggedCreator {
    /// Built-in variants, unknown tags fall back to [`LipOil`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: CreatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Maps a tag to a variant, applying the fallback policy.
    ///
    /// # Errors
    /// [`FactoryError::UnknownDiscriminator`] for an unknown tag under
    /// [`FallbackPolicy::Reject`].
    pub fn resolve(&self, tag: &str) -> Result<SkincareKind, FactoryError> {
        match (SkincareKind::from_str(tag), self.policy) {
            (Ok(kind), _) => Ok(kind),
            (Err(_), FallbackPolicy::Default(kind)) => {
                warn!(tag, fallback = %kind, "Unknown skincare tag, using the default product");
                Ok(kind)
            },
            (Err(_), FallbackPolicy::Reject) => {
                Err(FactoryError::UnknownDiscriminator { tag: tag.to_owned(), context: None })
            },
        }
    }

    /// Creates the product selected by `tag`.
    ///
    /// With the default policy and registry every tag succeeds.
    ///
    /// # Errors
    /// * [`FactoryError::UnknownDiscriminator`] for an unknown tag under
    ///   [`FallbackPolicy::Reject`].
    /// * [`FactoryError::Unregistered`] when the resolved variant has no constructor.
    pub fn create_product(&self, tag: &str) -> Result<Skincare, FactoryError> {
        let kind = self.resolve(tag)?;
        debug!(tag, %kind, "Tagged creator dispatching");
        self.registry.create(kind).ok_or(FactoryError::Unregistered { kind, context: None })
    }
}
