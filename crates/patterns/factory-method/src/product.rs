use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Capability shared by every skincare product.
///
/// Variants differ only in what they return, never in signature. All operations are
/// pure: calling them again yields the same value.
pub trait SkincareProduct {
    /// Describes the product.
    fn operation(&self) -> &'static str;

    /// The variant tag of this product.
    fn kind(&self) -> SkincareKind;
}

/// Closed set of product variants, addressed by their discriminator tag.
///
/// Parsing is exact and case-sensitive: `"lip"` and `"serum"` are the only tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum SkincareKind {
    #[strum(serialize = "lip")]
    LipOil,
    #[strum(serialize = "serum")]
    FaceSerum,
}

impl SkincareKind {
    /// The discriminator tag of this variant.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LipOil;

impl SkincareProduct for LipOil {
    fn operation(&self) -> &'static str {
        "I'm a lip oil"
    }

    fn kind(&self) -> SkincareKind {
        SkincareKind::LipOil
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceSerum;

impl SkincareProduct for FaceSerum {
    fn operation(&self) -> &'static str {
        "I'm a face serum"
    }

    fn kind(&self) -> SkincareKind {
        SkincareKind::FaceSerum
    }
}

/// A created product together with its variant.
///
/// Creators hand this out instead of a trait object so the variant is always visible to
/// `match`; it forwards [`SkincareProduct`] to the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skincare {
    LipOil(LipOil),
    FaceSerum(FaceSerum),
}

impl Skincare {
    fn as_product(&self) -> &dyn SkincareProduct {
        match self {
            Self::LipOil(p) => p,
            Self::FaceSerum(p) => p,
        }
    }
}

impl SkincareProduct for Skincare {
    fn operation(&self) -> &'static str {
        self.as_product().operation()
    }

    fn kind(&self) -> SkincareKind {
        self.as_product().kind()
    }
}

impl From<LipOil> for Skincare {
    fn from(product: LipOil) -> Self {
        Self::LipOil(product)
    }
}

impl From<FaceSerum> for Skincare {
    fn from(product: FaceSerum) -> Self {
        Self::FaceSerum(product)
    }
}
