//! # Function Helpers
//!
//! Argument forwarding, defaulted parameters, a stateful counter and partial
//! application.
//!
//! ## Helpers Provided
//!
//! - **Forwarding**: `return_first_argument`, `return_arguments_array`, `return_fn_result`
//! - **Defaults**: `sum_with_defaults`
//! - **State**: `Counter`, `return_counter`
//! - **Binding**: `bind_function`, `bind_function_with`
//!
//! Optional parameters are explicit `Option`s; their defaults live in the
//! constants below.

/// Second addend used by [`sum_with_defaults`] when none is given.
pub const DEFAULT_ADDEND: f64 = 100.0;

/// Starting value used by [`return_counter`] when none is given.
pub const DEFAULT_COUNTER_START: i64 = 0;

// ============================================================================
// FORWARDING
// ============================================================================

/// Returns its argument unchanged.
pub fn return_first_argument<T>(value: T) -> T {
    value
}

/// Adds `a` and `b`, with `b` defaulting to [`DEFAULT_ADDEND`].
pub fn sum_with_defaults(a: f64, b: Option<f64>) -> f64 {
    a + b.unwrap_or(DEFAULT_ADDEND)
}

/// Collects every forwarded argument, in order, into a vector.
pub fn return_arguments_array<I: IntoIterator>(args: I) -> Vec<I::Item> {
    args.into_iter().collect()
}

/// Calls `f` once and returns what it produced.
pub fn return_fn_result<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    f()
}

// ============================================================================
// COUNTER
// ============================================================================

/// A counter that adds one to its value on every [`Counter::next`] call.
///
/// # Example
///
/// ```
/// use seqkit::functions::return_counter;
///
/// let mut counter = return_counter(Some(5));
/// assert_eq!(counter.next(), Some(6));
/// assert_eq!(counter.next(), Some(7));
/// assert_eq!(counter.value(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    #[must_use]
    pub fn new(start: i64) -> Self {
        Self { value: start }
    }

    /// Returns the last value handed out (or the start value).
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_START)
    }
}

impl Iterator for Counter {
    type Item = i64;

    /// Increments and returns the new value; `None` once `i64::MAX` is reached.
    fn next(&mut self) -> Option<i64> {
        self.value = self.value.checked_add(1)?;
        Some(self.value)
    }
}

/// Creates a counter starting at `start`, or [`DEFAULT_COUNTER_START`].
pub fn return_counter(start: Option<i64>) -> Counter {
    Counter::new(start.unwrap_or(DEFAULT_COUNTER_START))
}

// ============================================================================
// BINDING
// ============================================================================

/// Fixes every argument of `f`; the returned closure takes none.
///
/// ```
/// use seqkit::functions::bind_function;
///
/// let join = |parts: &[&str]| parts.concat();
/// let bound = bind_function(join, vec!["a", "b", "c"]);
/// assert_eq!(bound(), "abc");
/// ```
pub fn bind_function<A, R, F>(f: F, args: Vec<A>) -> impl Fn() -> R
where
    F: Fn(&[A]) -> R,
{
    move || f(&args)
}

/// Fixes the leading arguments of `f`; arguments given at call time follow them.
pub fn bind_function_with<A, R, F>(f: F, bound: Vec<A>) -> impl Fn(&[A]) -> R
where
    A: Clone,
    F: Fn(&[A]) -> R,
{
    move |rest: &[A]| {
        let mut args = bound.clone();
        args.extend_from_slice(rest);
        f(&args)
    }
}
