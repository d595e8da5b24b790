//! # Builder
//!
//! A [`Builder`] accumulates a [`Product`] one step at a time and hands it out once through
//! [`Builder::get_product`]. A [`Director`] owns a builder behind the trait and knows the
//! order of the steps, so the client never sequences them itself.
//!
//! State is simple: a builder is either empty or holds parts. Taking the product empties
//! it again, and asking an empty builder for a product is [`BuilderError::InvalidState`].
//!
//! ```rust
//! use foundry_builder::{ConcreteBuilder, Director};
//!
//! let mut director = Director::new(Box::new(ConcreteBuilder::new()));
//! let product = director.get_product().unwrap();
//! assert!(product.is_complete());
//! ```

mod builder;
mod director;
mod error;
mod product;
mod showcase;

pub use crate::builder::{Builder, ConcreteBuilder};
pub use crate::director::Director;
pub use crate::error::{BuilderError, BuilderErrorExt};
pub use crate::product::{Part, Product};
pub use crate::showcase::BuilderShowcase;
