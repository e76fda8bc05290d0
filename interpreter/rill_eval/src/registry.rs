//! Function and constant registries.
//!
//! Built once at startup and read-only afterwards; the evaluator takes
//! them by reference, so there is no hidden global state. Extending
//! either table is a recompile-time edit to [`Registry::new`].

use rustc_hash::FxHashMap;

/// A registered unary function.
///
/// The signature is fixed at `f64 -> f64` and the domain predicate is
/// part of the entry, so every function's input check happens before
/// its transform — there is no call-time type dispatch.
pub struct FnEntry {
    /// Returns true when the input is mathematically valid.
    pub domain: fn(f64) -> bool,
    /// The transform, only applied to inputs passing `domain`.
    pub apply: fn(f64) -> f64,
    /// Used in domain-error messages, e.g. "square root of a negative
    /// number".
    pub domain_hint: &'static str,
}

/// Immutable lookup tables for functions and constants.
pub struct Registry {
    functions: FxHashMap<&'static str, FnEntry>,
    constants: FxHashMap<&'static str, f64>,
}

fn any(_: f64) -> bool {
    true
}

impl Registry {
    /// Build the fixed function and constant tables.
    pub fn new() -> Self {
        let mut functions = FxHashMap::default();

        // Trigonometry in radians.
        functions.insert(
            "sin",
            FnEntry {
                domain: any,
                apply: f64::sin,
                domain_hint: "",
            },
        );
        functions.insert(
            "cos",
            FnEntry {
                domain: any,
                apply: f64::cos,
                domain_hint: "",
            },
        );
        functions.insert(
            "tan",
            FnEntry {
                domain: any,
                apply: f64::tan,
                domain_hint: "",
            },
        );

        // Degree variants, converting via radians = degrees * pi / 180.
        functions.insert(
            "sind",
            FnEntry {
                domain: any,
                apply: |x| x.to_radians().sin(),
                domain_hint: "",
            },
        );
        functions.insert(
            "cosd",
            FnEntry {
                domain: any,
                apply: |x| x.to_radians().cos(),
                domain_hint: "",
            },
        );
        functions.insert(
            "tand",
            FnEntry {
                domain: any,
                apply: |x| x.to_radians().tan(),
                domain_hint: "",
            },
        );

        functions.insert(
            "sqrt",
            FnEntry {
                domain: |x| x >= 0.0,
                apply: f64::sqrt,
                domain_hint: "square root of a negative number",
            },
        );
        functions.insert(
            "log",
            FnEntry {
                domain: |x| x > 0.0,
                apply: f64::ln,
                domain_hint: "logarithm of a non-positive number",
            },
        );
        functions.insert(
            "exp",
            FnEntry {
                domain: any,
                apply: f64::exp,
                domain_hint: "",
            },
        );

        let mut constants = FxHashMap::default();
        constants.insert("pi", std::f64::consts::PI);
        constants.insert("e", std::f64::consts::E);

        Registry {
            functions,
            constants,
        }
    }

    /// Look up a function by name.
    #[inline]
    pub fn lookup_fn(&self, name: &str) -> Option<&FnEntry> {
        self.functions.get(name)
    }

    /// Look up a constant by name.
    #[inline]
    pub fn lookup_const(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
