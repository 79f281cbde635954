//! Call-site capture.
//!
//! A [`Site`] is assembled from `file!()`, `line!()`, `column!()`,
//! `module_path!()` and a function-name probe at the point where a check is
//! written. Building one copies a handful of `'static` references; the bare
//! function name is only derived when a diagnostic is actually rendered.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Name of the item declared by [`function_name!`] to probe its own path.
#[doc(hidden)]
pub const PROBE: &str = "__dbc_here";

const CLOSURE: &str = "{{closure}}";

/// Source location of a contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    file: &'static str,
    line: u32,
    column: u32,
    module: &'static str,
    probe: &'static str,
}

impl Site {
    /// `probe` is the type name of an item declared inside the enclosing
    /// function, as produced by [`function_name!`].
    pub const fn new(
        file: &'static str,
        line: u32,
        column: u32,
        module: &'static str,
        probe: &'static str,
    ) -> Self {
        Self {
            file,
            line,
            column,
            module,
            probe,
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Qualified path of the enclosing function, with closure frames removed.
    pub fn function_path(&self) -> &'static str {
        enclosing_function(self.probe)
    }

    /// Bare name of the enclosing function (`compute_area`, not
    /// `geometry::compute_area`).
    pub fn function(&self) -> &'static str {
        let path = self.function_path();
        match path.rfind("::") {
            Some(idx) => &path[idx + 2..],
            None => path,
        }
    }
}

/// Strips the probe item and any `{{closure}}` frames from a probe path.
fn enclosing_function(probe: &'static str) -> &'static str {
    let mut path = probe.strip_suffix(PROBE).unwrap_or(probe);
    path = path.strip_suffix("::").unwrap_or(path);
    while let Some(outer) = path.strip_suffix(CLOSURE) {
        path = outer.strip_suffix("::").unwrap_or(outer);
    }
    path
}

impl Serialize for Site {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Site", 5)?;
        state.serialize_field("file", self.file)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("column", &self.column)?;
        state.serialize_field("module", self.module)?;
        state.serialize_field("function", self.function())?;
        state.end()
    }
}

/// Expands to the type path of a probe item declared in the enclosing
/// function. Pass the result to [`Site::new`].
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __dbc_here() {}
        ::core::any::type_name_of_val(&__dbc_here)
    }};
}

/// Expands to the [`Site`] of the macro invocation.
#[macro_export]
macro_rules! site {
    () => {
        $crate::Site::new(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            ::core::module_path!(),
            $crate::function_name!(),
        )
    };
}
