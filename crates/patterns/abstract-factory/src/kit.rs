use crate::family::{Family, FamilyKind};
use crate::product::{ProductA, ProductB};
use std::fmt;

/// Products A and B from one family, held together.
///
/// The only constructor takes a single family creator, which makes a mixed kit
/// unrepresentable.
pub struct Kit<F: Family> {
    a: F::A,
    b: F::B,
}

impl<F: Family> Kit<F> {
    /// Creates both products with `factory`.
    pub fn assemble(factory: &F) -> Self {
        Self { a: factory.create_product_a(), b: factory.create_product_b() }
    }

    pub const fn product_a(&self) -> &F::A {
        &self.a
    }

    pub const fn product_b(&self) -> &F::B {
        &self.b
    }

    #[must_use]
    pub const fn family(&self) -> FamilyKind {
        F::KIND
    }

    /// The lines a client prints after using both products with the operands `x` and `y`.
    #[must_use]
    pub fn report(&self, x: i64, y: i64) -> [String; 3] {
        [
            format!("I'm prod A {}", self.a.print()),
            format!("I'm prod B {}", self.b.sum_two_num(x, y)),
            self.b.some_logic().to_owned(),
        ]
    }
}

impl<F: Family> fmt::Debug for Kit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kit")
            .field("family", &F::KIND)
            .field("a", &self.a)
            .field("b", &self.b)
            .finish()
    }
}
