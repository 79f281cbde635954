//! Design-by-contract checks.
//!
//! `requires!`, `ensures!` and `invariant!` (plus their `_non_null` and
//! `_equal` forms) check a condition at run time. A failed check prints one
//! line to stderr and exits the process with [`VIOLATION_EXIT_CODE`]:
//!
//! ```text
//! src/geometry.rs:42: compute_area: Requires `w > 0' failed.
//! ```
//!
//! `fail!()` marks unreachable code. The `weak_` macros are removed from the
//! build when the `weak-contracts` feature is disabled.
//!
//! Violations never unwind and cannot be caught.

pub mod evaluate;
pub mod handle;
mod macros;
pub mod report;
pub mod site;
pub mod template;
pub mod violation;
mod weak;

pub use evaluate::{evaluate_boolean, evaluate_equal, evaluate_fail, evaluate_non_null};
pub use handle::{Identity, Nullable};
pub use report::{Fatal, Reporter, VIOLATION_EXIT_CODE, terminate};
pub use site::Site;
pub use template::{Category, Flavor, Template};
pub use violation::{Operands, Violation};
pub use weak::WEAK_CONTRACTS;
