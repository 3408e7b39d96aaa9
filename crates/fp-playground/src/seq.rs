//! Hand-rolled `map`, `filter` and `reduce`.
//!
//! The standard library already has all three on iterators
//! (`iter().map()`, `iter().filter()`, `iter().fold()`). Writing them by
//! hand once shows there is nothing magic about them: each is a single
//! loop that calls a function you pass in.
//!
//! ## Rust Lesson #6: Generics & Closure Traits
//!
//! `impl FnMut(T) -> U` means "any callable that takes a `T` and returns
//! a `U`". There are three closure traits:
//! - `Fn`     = can be called many times, only reads what it captured
//! - `FnMut`  = can be called many times, may mutate what it captured
//! - `FnOnce` = can be called once (it may move captured values out)
//!
//! Taking `FnMut` here is the most permissive choice for a loop: callers
//! can pass a plain `Fn` or a closure that keeps a counter.

/// Apply `f` to every element, keeping order.
pub fn map<T, U>(xs: impl IntoIterator<Item = T>, mut f: impl FnMut(T) -> U) -> Vec<U> {
    let mut result = Vec::new();
    for x in xs {
        result.push(f(x));
    }
    result
}

/// Keep the elements for which `check` returns true, in order.
pub fn filter<T>(xs: impl IntoIterator<Item = T>, mut check: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut result = Vec::new();
    for x in xs {
        if check(&x) {
            result.push(x);
        }
    }
    result
}

/// Fold left: thread an accumulator through `combine`, starting at `initial`.
///
/// An empty input hands `initial` straight back.
pub fn reduce<A, R>(xs: impl IntoIterator<Item = A>, initial: R, mut combine: impl FnMut(R, A) -> R) -> R {
    let mut result = initial;
    for a in xs {
        result = combine(result, a);
    }
    result
}

// ============================================================================
// DEMONSTRATIONS
// ============================================================================
//
// The same three shapes of loop, first written out longhand, then
// expressed with the combinators above.

/// Add one to every element (written out longhand).
pub fn increment_all(xs: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(xs.len());
    for x in xs {
        result.push(x + 1);
    }
    result
}

pub fn double_all(xs: &[i64]) -> Vec<i64> {
    map(xs.iter().copied(), |x| x * 2)
}

pub fn is_even_all(xs: &[i64]) -> Vec<bool> {
    map(xs.iter().copied(), |x| x % 2 == 0)
}

/// Names ending in `suffix`.
pub fn with_suffix<'a>(names: &[&'a str], suffix: &str) -> Vec<&'a str> {
    filter(names.iter().copied(), |name| name.ends_with(suffix))
}

/// Sum with an explicit loop.
pub fn sum(xs: &[i64]) -> i64 {
    let mut result = 0;
    for x in xs {
        result += x;
    }
    result
}

/// Concatenate with an explicit loop.
pub fn concatenate(xs: &[&str]) -> String {
    let mut result = String::new();
    for x in xs {
        result.push_str(x);
    }
    result
}

pub fn sum_by_reduce(xs: &[i64]) -> i64 {
    reduce(xs.iter().copied(), 0, |result, x| result + x)
}

pub fn concatenate_by_reduce(xs: &[&str]) -> String {
    reduce(xs.iter().copied(), String::new(), |mut result, x| {
        result.push_str(x);
        result
    })
}
