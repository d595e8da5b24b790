//! # Abstract Factory
//!
//! A [`Family`] creates two different kinds of products, [`ProductA`] and [`ProductB`],
//! that are meant to be used together. Each family fixes the concrete type of both
//! products through associated types, and a [`Kit`] can only be assembled from one
//! family creator, so handing a family-one product A to a family-two product B does not
//! compile.
//!
//! ```rust
//! use foundry_abstract_factory::{Family, FamilyOne, Kit, ProductA, ProductB};
//!
//! let kit = Kit::assemble(&FamilyOne);
//! assert_eq!(kit.product_a().print(), "ProductA1 printed me");
//! assert_eq!(kit.product_b().sum_two_num(2, 2), 4);
//! ```

mod family;
mod kit;
mod product;
mod showcase;

pub use crate::family::{Family, FamilyKind, FamilyOne, FamilyTwo};
pub use crate::kit::Kit;
pub use crate::product::{ProductA, ProductA1, ProductA2, ProductB, ProductB1, ProductB2};
pub use crate::showcase::AbstractFactoryShowcase;
