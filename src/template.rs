//! Category templates for contract diagnostics.

use std::fmt;

use serde::Serialize;

/// Which contract family a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Unreachable code path; carries no condition.
    Fail,
    /// Precondition the caller must guarantee.
    Requires,
    /// Postcondition the implementation guarantees.
    Ensures,
    /// Condition that must hold at a checkpoint.
    Invariant,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Fail => "Fail",
            Category::Requires => "Requires",
            Category::Ensures => "Ensures",
            Category::Invariant => "Invariant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shape of the checked expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Flavor {
    /// Arbitrary boolean expression (also used by `Fail`).
    Plain,
    /// Value checked against the null sentinel.
    NonNull,
    /// Two operands checked for identity.
    Equal,
}

/// A category/flavor pair; decides how a violation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Template {
    pub category: Category,
    pub flavor: Flavor,
}

impl Template {
    const fn new(category: Category, flavor: Flavor) -> Self {
        Self { category, flavor }
    }

    /// Message pattern with `<expr>`, `<a>` and `<b>` placeholders.
    pub fn pattern(self) -> &'static str {
        use Category::*;
        use Flavor::*;

        match (self.category, self.flavor) {
            (Fail, _) => "Fail.",
            (Requires, Plain) => "Requires `<expr>' failed.",
            (Requires, NonNull) => "Requires `<expr>' != NULL failed.",
            (Requires, Equal) => "Requires `<a>' == `<b>' failed.",
            (Ensures, Plain) => "Ensures `<expr>' failed.",
            (Ensures, NonNull) => "Ensures `<expr>' != NULL failed.",
            (Ensures, Equal) => "Ensures `<a>' == `<b>' failed.",
            (Invariant, Plain) => "Invariant `<expr>' failed.",
            (Invariant, NonNull) => "Invariant `<expr>' != NULL failed.",
            (Invariant, Equal) => "Invariant `<a>' == `<b>' failed.",
        }
    }
}

pub const FAIL: Template = Template::new(Category::Fail, Flavor::Plain);

pub const REQUIRES: Template = Template::new(Category::Requires, Flavor::Plain);
pub const REQUIRES_NON_NULL: Template = Template::new(Category::Requires, Flavor::NonNull);
pub const REQUIRES_EQUAL: Template = Template::new(Category::Requires, Flavor::Equal);

pub const ENSURES: Template = Template::new(Category::Ensures, Flavor::Plain);
pub const ENSURES_NON_NULL: Template = Template::new(Category::Ensures, Flavor::NonNull);
pub const ENSURES_EQUAL: Template = Template::new(Category::Ensures, Flavor::Equal);

pub const INVARIANT: Template = Template::new(Category::Invariant, Flavor::Plain);
pub const INVARIANT_NON_NULL: Template = Template::new(Category::Invariant, Flavor::NonNull);
pub const INVARIANT_EQUAL: Template = Template::new(Category::Invariant, Flavor::Equal);
