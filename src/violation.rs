//! The record of a failed check and its one-line rendering.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::site::Site;
use crate::template::{Category, Flavor, Template};

/// Source text of the checked expression(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands<'a> {
    /// `Fail` checks carry no expression.
    None,
    /// Plain and non-null checks.
    Expr(&'a str),
    /// Equality checks: left then right operand.
    Pair(&'a str, &'a str),
}

/// A contract that did not hold.
///
/// Only ever built on the failure path; a passing check never constructs
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation<'a> {
    site: Site,
    template: Template,
    operands: Operands<'a>,
}

impl<'a> Violation<'a> {
    pub fn new(site: Site, template: Template, operands: Operands<'a>) -> Self {
        Self {
            site,
            template,
            operands,
        }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub fn category(&self) -> Category {
        self.template.category
    }

    pub fn operands(&self) -> Operands<'a> {
        self.operands
    }
}

impl fmt::Display for Violation<'_> {
    /// Renders the diagnostic line without its trailing newline, e.g.
    /// ``src/area.rs:42: compute_area: Requires `x > 0' failed.``
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: ",
            self.site.file(),
            self.site.line(),
            self.site.function()
        )?;

        let category = self.template.category;
        if category == Category::Fail {
            return f.write_str("Fail.");
        }

        match (self.template.flavor, self.operands) {
            (Flavor::Plain, Operands::Expr(expr)) => write!(f, "{category} `{expr}' failed."),
            (Flavor::NonNull, Operands::Expr(expr)) => {
                write!(f, "{category} `{expr}' != NULL failed.")
            }
            (Flavor::Equal, Operands::Pair(a, b)) => {
                write!(f, "{category} `{a}' == `{b}' failed.")
            }
            // Mismatched operands still produce a usable line.
            (_, Operands::Pair(a, b)) => write!(f, "{category} `{a}' `{b}' failed."),
            (_, Operands::Expr(expr)) => write!(f, "{category} `{expr}' failed."),
            (_, Operands::None) => write!(f, "{category} failed."),
        }
    }
}

impl Serialize for Violation<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 6)?;
        state.serialize_field("site", &self.site)?;
        state.serialize_field("category", &self.template.category)?;
        state.serialize_field("flavor", &self.template.flavor)?;
        match self.operands {
            Operands::None => {
                state.skip_field("expr")?;
                state.skip_field("lhs")?;
                state.skip_field("rhs")?;
            }
            Operands::Expr(expr) => {
                state.serialize_field("expr", expr)?;
                state.skip_field("lhs")?;
                state.skip_field("rhs")?;
            }
            Operands::Pair(lhs, rhs) => {
                state.skip_field("expr")?;
                state.serialize_field("lhs", lhs)?;
                state.serialize_field("rhs", rhs)?;
            }
        }
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{ENSURES_NON_NULL, FAIL, INVARIANT_EQUAL, REQUIRES};

    fn site() -> Site {
        Site::new("src/area.rs", 42, 5, "area", "area::compute_area::__dbc_here")
    }

    #[test]
    fn renders_plain() {
        let violation = Violation::new(site(), REQUIRES, Operands::Expr("x > 0"));
        assert_eq!(
            violation.to_string(),
            "src/area.rs:42: compute_area: Requires `x > 0' failed."
        );
    }

    #[test]
    fn renders_non_null() {
        let violation = Violation::new(site(), ENSURES_NON_NULL, Operands::Expr("ptr"));
        assert_eq!(
            violation.to_string(),
            "src/area.rs:42: compute_area: Ensures `ptr' != NULL failed."
        );
    }

    #[test]
    fn renders_equal() {
        let violation = Violation::new(site(), INVARIANT_EQUAL, Operands::Pair("a", "b"));
        assert_eq!(
            violation.to_string(),
            "src/area.rs:42: compute_area: Invariant `a' == `b' failed."
        );
    }

    #[test]
    fn renders_fail_without_operands() {
        let violation = Violation::new(site(), FAIL, Operands::None);
        assert_eq!(violation.to_string(), "src/area.rs:42: compute_area: Fail.");
    }
}
