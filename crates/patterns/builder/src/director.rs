use crate::builder::Builder;
use crate::error::{BuilderError, BuilderErrorExt};
use crate::product::Product;
use tracing::debug;

/// Sequences the steps of whatever [`Builder`] it is given.
#[derive(Debug)]
pub struct Director {
    builder: Box<dyn Builder>,
}

impl Director {
    #[must_use]
    pub fn new(builder: Box<dyn Builder>) -> Self {
        Self { builder }
    }

    /// Starts from an empty builder, then runs every step in order: part one, part two,
    /// part three. Parts the builder held before are discarded.
    pub fn construct(&mut self) {
        debug!("Director constructing");
        self.builder.reset();
        self.builder.build_part_one();
        self.builder.build_part_two();
        self.builder.build_part_three();
    }

    /// Constructs a product and returns it.
    ///
    /// # Errors
    /// Only fails if the builder rejects the request even after a full construction.
    pub fn get_product(&mut self) -> Result<Product, BuilderError> {
        self.construct();
        self.builder.get_product().context("director")
    }

    /// Hands the builder back, e.g. to reuse it elsewhere.
    #[must_use]
    pub fn into_builder(self) -> Box<dyn Builder> {
        self.builder
    }
}
