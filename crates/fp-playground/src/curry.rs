//! Currying and function composition.
//!
//! ## Rust Lesson #10: Returning Closures
//!
//! A function can hand back a closure as `impl Fn(...)` when there is a
//! single concrete closure type, or as `Box<dyn Fn(...)>` when the type
//! must be named (in a struct field, or nested inside another closure).
//!
//! Currying turns `f(x, y)` into `f(x)(y)`: supply one argument now, get a
//! function waiting for the rest.

use std::ops::Shr;

pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

/// `add` in curried form: `add_curried(1)(2) == add(1, 2)`.
pub fn add_curried(x: i64) -> impl Fn(i64) -> i64 {
    move |y: i64| x + y
}

/// Turn a two-argument function into a chain of one-argument functions.
///
/// The first argument is cloned into each inner closure, so `A: Clone`.
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    move |a: A| {
        let f = f.clone();
        let rest: Box<dyn Fn(B) -> C> = Box::new(move |b: B| f(a.clone(), b));
        rest
    }
}

/// The inverse of [`curry`].
pub fn uncurry<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |a: A, b: B| f(a)(b)
}

/// `x -> g(f(x))`: run `f`, then `g`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x: A| g(f(x))
}

/// An ordered chain of `T -> T` stages.
///
/// `a >> b` runs every stage of `a`, then every stage of `b`.
/// Chains associate to the left, the same as `(a >> b) >> c`.
pub struct Pipeline<T> {
    stages: Vec<Box<dyn Fn(T) -> T>>,
}

impl<T> Pipeline<T> {
    /// The identity pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn from_fn(stage: impl Fn(T) -> T + 'static) -> Self {
        Self::new().then(stage)
    }

    /// Append a stage.
    pub fn then(mut self, stage: impl Fn(T) -> T + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage, first to last.
    pub fn apply(&self, input: T) -> T {
        let mut value = input;
        for stage in &self.stages {
            value = stage(value);
        }
        value
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Shr for Pipeline<T> {
    type Output = Pipeline<T>;

    fn shr(mut self, rhs: Pipeline<T>) -> Pipeline<T> {
        self.stages.extend(rhs.stages);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::region::{circle, invert, Region};

    #[test]
    fn curried_add_matches_add() {
        assert_eq!(add(1, 2), 3);
        assert_eq!(add_curried(1)(2), 3);

        let add_ten = add_curried(10);
        assert_eq!(add_ten(5), 15);
        assert_eq!(add_ten(-10), 0);
    }

    #[test]
    fn curry_and_uncurry_round_trip() {
        let curried = curry(add);
        assert_eq!(curried(1)(2), 3);

        let plain = uncurry(add_curried);
        assert_eq!(plain(4, 5), add(4, 5));
    }

    #[test]
    fn curry_with_owned_argument() {
        let greet = curry(|greeting: String, name: &'static str| format!("{}, {}!", greeting, name));
        let hello = greet(String::from("Hello"));
        assert_eq!(hello("Kobe"), "Hello, Kobe!");
        assert_eq!(hello("Jordan"), "Hello, Jordan!");
    }

    #[test]
    fn compose_runs_left_to_right() {
        let f = compose(|x: i64| x + 1, |x: i64| x * 10);
        assert_eq!(f(2), 30); // (2 + 1) * 10, not 2 * 10 + 1
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let p: Pipeline<i64> = Pipeline::new();
        assert!(p.is_empty());
        assert_eq!(p.apply(42), 42);
    }

    #[test]
    fn pipeline_operator_concatenates() {
        let a = Pipeline::from_fn(|x: i64| x + 1).then(|x| x * 2);
        let b = Pipeline::from_fn(|x: i64| x - 3);
        let c = Pipeline::from_fn(|x: i64| x * x);

        let chained = a >> b >> c;
        assert_eq!(chained.len(), 4);
        assert_eq!(chained.apply(4), 49); // ((4 + 1) * 2 - 3)^2
    }

    #[test]
    fn pipeline_over_regions() {
        let p = Pipeline::from_fn(|r: Region| r.shifted(Point::new(10.0, 0.0))).then(invert);
        let r = p.apply(circle(1.0));
        assert!(!r.contains(Point::new(10.0, 0.0)));
        assert!(r.contains(Point::ORIGIN));
    }
}
