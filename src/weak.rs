//! Weak contracts.
//!
//! Gated behind the `weak-contracts` feature, which is on by default. The
//! expansion is selected when this crate is compiled, so every call site in
//! a binary agrees. With the feature enabled each `weak_*` macro is its
//! strong counterpart. With it disabled:
//!
//! | Macro                  | Expands to                                   |
//! |------------------------|----------------------------------------------|
//! | `weak_requires!(e)`    | dead block; `e` is type-checked, not run     |
//! | `weak_*_non_null!(x)`  | `x`                                          |
//! | `weak_*_equal!(a, b)`  | `a`; `b` is type-checked, not run            |

/// Whether weak contracts are compiled into this build.
pub const WEAK_CONTRACTS: bool = cfg!(feature = "weak-contracts");

#[cfg(feature = "weak-contracts")]
mod enabled {
    /// Precondition that disappears when weak contracts are disabled.
    #[macro_export]
    macro_rules! weak_requires {
        ($cond:expr $(,)?) => {
            $crate::requires!($cond)
        };
    }

    #[macro_export]
    macro_rules! weak_requires_non_null {
        ($value:expr $(,)?) => {
            $crate::requires_non_null!($value)
        };
    }

    #[macro_export]
    macro_rules! weak_requires_equal {
        ($a:expr, $b:expr $(,)?) => {
            $crate::requires_equal!($a, $b)
        };
    }

    /// Postcondition that disappears when weak contracts are disabled.
    #[macro_export]
    macro_rules! weak_ensures {
        ($cond:expr $(,)?) => {
            $crate::ensures!($cond)
        };
    }

    #[macro_export]
    macro_rules! weak_ensures_non_null {
        ($value:expr $(,)?) => {
            $crate::ensures_non_null!($value)
        };
    }

    #[macro_export]
    macro_rules! weak_ensures_equal {
        ($a:expr, $b:expr $(,)?) => {
            $crate::ensures_equal!($a, $b)
        };
    }
}

#[cfg(not(feature = "weak-contracts"))]
mod disabled {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __dbc_elided {
        ($($checked:expr),+) => {
            if false {
                $(let _ = &$checked;)+
            }
        };
    }

    /// Precondition that disappears when weak contracts are disabled.
    #[macro_export]
    macro_rules! weak_requires {
        ($cond:expr $(,)?) => {
            $crate::__dbc_elided!($cond)
        };
    }

    #[macro_export]
    macro_rules! weak_requires_non_null {
        ($value:expr $(,)?) => {
            $value
        };
    }

    #[macro_export]
    macro_rules! weak_requires_equal {
        ($a:expr, $b:expr $(,)?) => {{
            $crate::__dbc_elided!($b);
            $a
        }};
    }

    /// Postcondition that disappears when weak contracts are disabled.
    #[macro_export]
    macro_rules! weak_ensures {
        ($cond:expr $(,)?) => {
            $crate::__dbc_elided!($cond)
        };
    }

    #[macro_export]
    macro_rules! weak_ensures_non_null {
        ($value:expr $(,)?) => {
            $value
        };
    }

    #[macro_export]
    macro_rules! weak_ensures_equal {
        ($a:expr, $b:expr $(,)?) => {{
            $crate::__dbc_elided!($b);
            $a
        }};
    }
}
