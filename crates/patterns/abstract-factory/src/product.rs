use crate::family::FamilyKind;
use std::fmt::Debug;

/// First product kind: something that can describe itself.
pub trait ProductA: Debug {
    fn print(&self) -> &'static str;

    fn family(&self) -> FamilyKind;
}

/// Second product kind: a small computation plus a description of its own logic.
pub trait ProductB: Debug {
    /// Adds two numbers, saturating at the bounds of `i64`.
    fn sum_two_num(&self, x: i64, y: i64) -> i64 {
        x.saturating_add(y)
    }

    fn some_logic(&self) -> &'static str;

    fn family(&self) -> FamilyKind;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA1;

impl ProductA for ProductA1 {
    fn print(&self) -> &'static str {
        "ProductA1 printed me"
    }

    fn family(&self) -> FamilyKind {
        FamilyKind::One
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA2;

impl ProductA for ProductA2 {
    fn print(&self) -> &'static str {
        "ProductA2 printed me"
    }

    fn family(&self) -> FamilyKind {
        FamilyKind::Two
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB1;

impl ProductB for ProductB1 {
    fn some_logic(&self) -> &'static str {
        "ProductB1 making some logic"
    }

    fn family(&self) -> FamilyKind {
        FamilyKind::One
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB2;

impl ProductB for ProductB2 {
    fn some_logic(&self) -> &'static str {
        "ProductB2 making some crazy logic"
    }

    fn family(&self) -> FamilyKind {
        FamilyKind::Two
    }
}
