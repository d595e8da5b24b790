use crate::product::{ProductA, ProductA1, ProductA2, ProductB, ProductB1, ProductB2};
use strum_macros::{Display, EnumIter, EnumString};

/// Runtime name of a family, used by the composition root to pick a [`Family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum FamilyKind {
    #[strum(to_string = "one", serialize = "1")]
    One,
    #[strum(to_string = "two", serialize = "2")]
    Two,
}

/// A creator of mutually consistent products.
///
/// The associated types tie both creation operations to the same family: whatever
/// `create_product_a` returns is always meant to work with what `create_product_b`
/// returns.
pub trait Family {
    type A: ProductA;
    type B: ProductB;

    const KIND: FamilyKind;

    fn create_product_a(&self) -> Self::A;

    fn create_product_b(&self) -> Self::B;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyOne;

impl Family for FamilyOne {
    type A = ProductA1;
    type B = ProductB1;

    const KIND: FamilyKind = FamilyKind::One;

    fn create_product_a(&self) -> ProductA1 {
        ProductA1
    }

    fn create_product_b(&self) -> ProductB1 {
        ProductB1
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyTwo;

impl Family for FamilyTwo {
    type A = ProductA2;
    type B = ProductB2;

    const KIND: FamilyKind = FamilyKind::Two;

    fn create_product_a(&self) -> ProductA2 {
        ProductA2
    }

    fn create_product_b(&self) -> ProductB2 {
        ProductB2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn family_names_parse_in_words_and_digits() {
        for (kind, digit) in FamilyKind::iter().zip(["1", "2"]) {
            assert_eq!(FamilyKind::from_str(&kind.to_string()), Ok(kind));
            assert_eq!(FamilyKind::from_str(digit), Ok(kind));
        }
        assert_eq!(FamilyKind::iter().map(|k| k.to_string()).collect::<Vec<_>>(), ["one", "two"]);
        assert!(FamilyKind::from_str("three").is_err());
    }

    #[test]
    fn creators_stay_inside_their_family() {
        assert_eq!(FamilyOne.create_product_a().family(), FamilyOne::KIND);
        assert_eq!(FamilyOne.create_product_b().family(), FamilyOne::KIND);
        assert_eq!(FamilyTwo.create_product_a().family(), FamilyTwo::KIND);
        assert_eq!(FamilyTwo.create_product_b().family(), FamilyTwo::KIND);
    }
}
