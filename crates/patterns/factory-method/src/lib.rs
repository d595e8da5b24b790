//! # Factory Method
//!
//! A creator produces a [`SkincareProduct`] without the caller naming the concrete type.
//! Three dispatch strategies are provided:
//!
//! 1. **Abstract dispatch** ([`Creator`]): each implementor returns exactly one variant.
//!    A new product means a new implementor; nothing existing changes.
//! 2. **Default implementation** ([`DefaultCreator`]): one hard-coded variant.
//! 3. **Discriminator dispatch** ([`TaggedCreator`]): a runtime tag picks the variant
//!    through a [`CreatorRegistry`] of constructor functions, with an explicit
//!    [`FallbackPolicy`] for unknown tags.
//!
//! Products are returned as the closed enum [`Skincare`], so callers inspect the variant
//! with `match` or [`SkincareProduct::kind`].
//!
//! ```rust
//! use foundry_factory_method::{Creator, LipOilCreator, SkincareKind, SkincareProduct, TaggedCreator};
//!
//! let product = LipOilCreator.create_product();
//! assert_eq!(product.operation(), "I'm a lip oil");
//!
//! let creator = TaggedCreator::new();
//! let serum = creator.create_product("serum").unwrap();
//! assert_eq!(serum.kind(), SkincareKind::FaceSerum);
//! ```

mod creator;
mod error;
mod product;
mod registry;
mod showcase;

pub use crate::creator::{
    Creator, DefaultCreator, FaceSerumCreator, FallbackPolicy, LipOilCreator, TaggedCreator,
};
pub use crate::error::{FactoryError, FactoryErrorExt};
pub use crate::product::{FaceSerum, LipOil, Skincare, SkincareKind, SkincareProduct};
pub use crate::registry::{Constructor, CreatorRegistry};
pub use crate::showcase::FactoryMethodShowcase;
