//! Strong contract macros. Always compiled in.
//!
//! Each macro captures its [`Site`](crate::Site) and the source text of its
//! operands, then forwards to the matching `evaluate_*` function with the
//! stderr reporter.

#[doc(hidden)]
#[macro_export]
macro_rules! __dbc_plain {
    ($template:ident, $cond:expr) => {
        $crate::evaluate_boolean(
            $crate::Fatal::stderr(),
            $cond,
            ::core::stringify!($cond),
            $crate::site!(),
            $crate::template::$template,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dbc_non_null {
    ($template:ident, $value:expr) => {
        $crate::evaluate_non_null(
            $crate::Fatal::stderr(),
            $value,
            ::core::stringify!($value),
            $crate::site!(),
            $crate::template::$template,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dbc_equal {
    ($template:ident, $a:expr, $b:expr) => {
        $crate::evaluate_equal(
            $crate::Fatal::stderr(),
            $a,
            &$b,
            ::core::stringify!($a),
            ::core::stringify!($b),
            $crate::site!(),
            $crate::template::$template,
        )
    };
}

/// Marks a path that must be unreachable. Evaluates to `!`.
///
/// Any tokens given are ignored and never evaluated.
///
/// ```no_run
/// fn quadrant(x: i32, y: i32) -> u8 {
///     match (x >= 0, y >= 0) {
///         (true, true) => 1,
///         (false, true) => 2,
///         (false, false) => 3,
///         (true, false) => 4,
///         #[allow(unreachable_patterns)]
///         _ => dbc::fail!(),
///     }
/// }
/// ```
#[macro_export]
macro_rules! fail {
    ($($ignored:tt)*) => {
        $crate::evaluate_fail($crate::Fatal::stderr(), $crate::site!())
    };
}

/// Precondition.
///
/// ```
/// fn compute_area(w: i64, h: i64) -> i64 {
///     dbc::requires!(w > 0 && h > 0);
///     w * h
/// }
/// assert_eq!(compute_area(2, 3), 6);
/// ```
#[macro_export]
macro_rules! requires {
    ($cond:expr $(,)?) => {
        $crate::__dbc_plain!(REQUIRES, $cond)
    };
}

/// Precondition that `value` is not null. Evaluates to `value`.
#[macro_export]
macro_rules! requires_non_null {
    ($value:expr $(,)?) => {
        $crate::__dbc_non_null!(REQUIRES_NON_NULL, $value)
    };
}

/// Precondition that `a` and `b` are the same object. Evaluates to `a`.
///
/// ```
/// let config = std::rc::Rc::new(1);
/// let seen = std::rc::Rc::clone(&config);
/// let checked = dbc::requires_equal!(&*seen, &*config);
/// assert_eq!(*checked, 1);
/// ```
#[macro_export]
macro_rules! requires_equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::__dbc_equal!(REQUIRES_EQUAL, $a, $b)
    };
}

/// Postcondition.
#[macro_export]
macro_rules! ensures {
    ($cond:expr $(,)?) => {
        $crate::__dbc_plain!(ENSURES, $cond)
    };
}

/// Postcondition that `value` is not null. Evaluates to `value`.
#[macro_export]
macro_rules! ensures_non_null {
    ($value:expr $(,)?) => {
        $crate::__dbc_non_null!(ENSURES_NON_NULL, $value)
    };
}

/// Postcondition that `a` and `b` are the same object. Evaluates to `a`.
#[macro_export]
macro_rules! ensures_equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::__dbc_equal!(ENSURES_EQUAL, $a, $b)
    };
}

/// Invariant checkpoint.
#[macro_export]
macro_rules! invariant {
    ($cond:expr $(,)?) => {
        $crate::__dbc_plain!(INVARIANT, $cond)
    };
}

#[macro_export]
macro_rules! invariant_non_null {
    ($value:expr $(,)?) => {
        $crate::__dbc_non_null!(INVARIANT_NON_NULL, $value)
    };
}

#[macro_export]
macro_rules! invariant_equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::__dbc_equal!(INVARIANT_EQUAL, $a, $b)
    };
}

#[cfg(test)]
mod tests {
    use std::ptr::NonNull;
    use std::sync::Arc;

    #[test]
    fn passing_checks_return() {
        let x = 5;
        crate::requires!(x > 0);
        crate::ensures!(x < 10,);
        crate::invariant!(x == 5);
    }

    #[test]
    fn non_null_checks_evaluate_to_value() {
        let name = crate::requires_non_null!(Some("dbc"));
        assert_eq!(name, Some("dbc"));

        let unit = crate::ensures_non_null!(NonNull::<()>::dangling());
        assert_eq!(unit, NonNull::dangling());

        let mut slot = 3u32;
        let raw = crate::invariant_non_null!(&mut slot as *mut u32);
        assert!(!raw.is_null());
    }

    #[test]
    fn equal_checks_evaluate_to_first_operand() {
        let shared = Arc::new(vec![1, 2, 3]);
        let alias = Arc::clone(&shared);

        let checked = crate::requires_equal!(Arc::clone(&shared), alias);
        assert_eq!(checked.len(), 3);

        let first = &shared[0];
        let again = crate::ensures_equal!(first, &shared[0]);
        assert_eq!(*again, 1);

        let none: Option<&i32> = crate::invariant_equal!(None, None::<&i32>);
        assert!(none.is_none());
    }

    #[test]
    fn fail_has_never_type() {
        fn pick(flag: bool) -> u8 {
            if flag { 1 } else { crate::fail!("unreachable in this test") }
        }
        assert_eq!(pick(true), 1);
    }
}
