//! Diagnostic core: decides pass/fail and hands failures to a [`Reporter`].
//!
//! The passing path only inspects its inputs. Building the [`Violation`]
//! and everything after it lives behind a cold, never-inlined call.

use crate::handle::{Identity, Nullable};
use crate::report::Reporter;
use crate::site::Site;
use crate::template::{self, Flavor, Template};
use crate::violation::{Operands, Violation};

#[cold]
#[inline(never)]
fn violated<R: Reporter>(reporter: R, violation: Violation<'_>) -> ! {
    reporter.report(&violation)
}

/// Terminates through `reporter` unless `condition` holds.
#[inline]
pub fn evaluate_boolean<R: Reporter>(
    reporter: R,
    condition: bool,
    expr: &str,
    site: Site,
    template: Template,
) {
    debug_assert_eq!(template.flavor, Flavor::Plain);
    if !condition {
        violated(reporter, Violation::new(site, template, Operands::Expr(expr)));
    }
}

/// Returns `value` unless it is the null sentinel.
#[inline]
pub fn evaluate_non_null<R: Reporter, T: Nullable>(
    reporter: R,
    value: T,
    expr: &str,
    site: Site,
    template: Template,
) -> T {
    debug_assert_eq!(template.flavor, Flavor::NonNull);
    if value.is_null() {
        violated(reporter, Violation::new(site, template, Operands::Expr(expr)));
    }
    value
}

/// Returns `a` unless it is a different object than `b`.
///
/// Identity, not `PartialEq`: two equal values at different addresses fail.
#[inline]
pub fn evaluate_equal<R: Reporter, H: Identity>(
    reporter: R,
    a: H,
    b: &H,
    a_text: &str,
    b_text: &str,
    site: Site,
    template: Template,
) -> H {
    debug_assert_eq!(template.flavor, Flavor::Equal);
    if !a.same_as(b) {
        violated(
            reporter,
            Violation::new(site, template, Operands::Pair(a_text, b_text)),
        );
    }
    a
}

/// Marks a path that must never be reached.
#[cold]
#[inline(never)]
pub fn evaluate_fail<R: Reporter>(reporter: R, site: Site) -> ! {
    reporter.report(&Violation::new(site, template::FAIL, Operands::None))
}
