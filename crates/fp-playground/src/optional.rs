//! Lazy defaults for missing values.
//!
//! ## Rust Lesson #9: Laziness with Closures
//!
//! Passing a *value* as the fallback means it is computed before the call,
//! whether or not it is needed. Passing a *closure* (`|| expensive()`)
//! delays the work until someone actually calls it.
//!
//! `FnOnce` fits: the fallback runs at most once, and is allowed to move
//! things out of its captures.
//!
//! The standard library's `Option::unwrap_or_else` does exactly this;
//! these wrappers exist to show the shape of it.

/// The contained value, or `fallback()` if there is none.
///
/// `fallback` is only called when `value` is `None`.
pub fn or_else<T>(value: Option<T>, fallback: impl FnOnce() -> T) -> T {
    match value {
        Some(v) => v,
        None => fallback(),
    }
}

/// Method form of [`or_else`], in place of a custom `??` operator.
///
/// ```
/// use fp_playground::optional::Coalesce;
///
/// let port: Option<u16> = None;
/// assert_eq!(port.coalesce(|| 8080), 8080);
/// ```
pub trait Coalesce<T> {
    fn coalesce(self, fallback: impl FnOnce() -> T) -> T;
}

impl<T> Coalesce<T> for Option<T> {
    #[inline]
    fn coalesce(self, fallback: impl FnOnce() -> T) -> T {
        or_else(self, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn present_value_skips_fallback() {
        let calls = Cell::new(0);
        let out = or_else(Some(7), || {
            calls.set(calls.get() + 1);
            99
        });
        assert_eq!(out, 7);
        assert_eq!(calls.get(), 0, "fallback must not run when a value is present");
    }

    #[test]
    fn absent_value_runs_fallback_once() {
        let calls = Cell::new(0);
        let out = or_else(None, || {
            calls.set(calls.get() + 1);
            99
        });
        assert_eq!(out, 99);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn coalesce_is_lazy_too() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            String::from("default")
        };

        assert_eq!(Some(String::from("given")).coalesce(fallback), "given");
        assert_eq!(calls.get(), 0);

        assert_eq!(None::<String>.coalesce(|| String::from("default")), "default");
    }

    #[test]
    fn fallback_can_move_captures() {
        let owned = vec![1, 2, 3];
        let out = or_else(None, move || owned);
        assert_eq!(out, vec![1, 2, 3]);
    }
}
