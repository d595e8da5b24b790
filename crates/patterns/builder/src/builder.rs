use crate::error::BuilderError;
use crate::product::{Part, Product};
use std::fmt::Debug;
use std::mem;
use tracing::debug;

/// Step-wise assembly of a [`Product`].
///
/// Steps only accumulate; the product is obtained once, at the end, from
/// [`Builder::get_product`].
pub trait Builder: Debug {
    /// Discards any parts accumulated so far.
    fn reset(&mut self);

    fn build_part_one(&mut self);

    fn build_part_two(&mut self);

    fn build_part_three(&mut self);

    /// Takes the accumulated product and leaves the builder empty.
    ///
    /// # Errors
    /// [`BuilderError::InvalidState`] when no step ran since the builder was created or
    /// since the last product was taken.
    fn get_product(&mut self) -> Result<Product, BuilderError>;
}

/// Records each part in the order its step is called.
#[derive(Debug, Default)]
pub struct ConcreteBuilder {
    parts: Vec<Part>,
}

impl ConcreteBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any step has run since the last product was taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn part_one(&mut self) -> &mut Self {
        self.build_part_one();
        self
    }

    pub fn part_two(&mut self) -> &mut Self {
        self.build_part_two();
        self
    }

    pub fn part_three(&mut self) -> &mut Self {
        self.build_part_three();
        self
    }

    fn push(&mut self, part: Part) {
        debug!(%part, "Building part");
        self.parts.push(part);
    }
}

impl Builder for ConcreteBuilder {
    fn reset(&mut self) {
        self.parts.clear();
    }

    fn build_part_one(&mut self) {
        self.push(Part::PartOne);
    }

    fn build_part_two(&mut self) {
        self.push(Part::PartTwo);
    }

    fn build_part_three(&mut self) {
        self.push(Part::PartThree);
    }

    fn get_product(&mut self) -> Result<Product, BuilderError> {
        if self.parts.is_empty() {
            return Err(BuilderError::InvalidState {
                message: "no build step has run".into(),
                context: None,
            });
        }
        Ok(Product::new(mem::take(&mut self.parts)))
    }
}
