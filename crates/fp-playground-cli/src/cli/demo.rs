//! Demo command: evaluate the playground's examples and print the results.

use std::cell::Cell;

use anyhow::Result;
use fp_playground::optional::Coalesce;
use fp_playground::seq::{
    concatenate, concatenate_by_reduce, double_all, increment_all, is_even_all, sum, sum_by_reduce,
    with_suffix,
};
use fp_playground::{
    add, add_curried, circle, compose, curry, in_range, map, or_else, sample, Engagement, Point,
    Viewport,
};

const NUMBERS: [i64; 4] = [1, 2, 3, 4];
const PLAYERS: [&str; 4] = ["Kareem", "Malone", "Kobe", "Jordan"];

/// Execute the demo command.
pub fn cmd_demo() -> Result<()> {
    section("Currying");
    show("add(1, 2)", add(1, 2));
    show("add_curried(1)(2)", add_curried(1)(2));
    show("curry(add)(1)(2)", curry(add)(1)(2));
    let plus_one_times_ten = compose(add_curried(1), |x: i64| x * 10);
    show("compose(+1, *10)(2)", plus_one_times_ten(2));

    section("Map, filter, reduce");
    show("increment_all([1, 2, 3, 4])", format!("{:?}", increment_all(&NUMBERS)));
    show("double_all([1, 2, 3, 4])", format!("{:?}", double_all(&NUMBERS)));
    show("is_even_all([1, 2, 3, 4])", format!("{:?}", is_even_all(&NUMBERS)));
    show("map(x > 2)", format!("{:?}", map(NUMBERS, |x| x > 2)));
    show("map(\"{x} points\")", format!("{:?}", map(NUMBERS, |x| format!("{} points", x))));
    show("players ending in 'e'", format!("{:?}", with_suffix(&PLAYERS, "e")));
    show("sum", sum(&NUMBERS));
    show("sum_by_reduce", sum_by_reduce(&NUMBERS));
    show("concatenate", concatenate(&PLAYERS));
    show("concatenate_by_reduce", concatenate_by_reduce(&PLAYERS));

    section("Lazy defaults");
    let fallback_calls = Cell::new(0);
    let expensive = || {
        fallback_calls.set(fallback_calls.get() + 1);
        "unknown".to_string()
    };
    show("or_else(Some(\"Kobe\"), ..)", or_else(Some("Kobe".to_string()), expensive));
    show("fallback calls so far", fallback_calls.get());
    show("None.coalesce(..)", None::<String>.coalesce(expensive));
    show("fallback calls so far", fallback_calls.get());

    section("Regions");
    show("in_range((3, 4), 5)", in_range(Point::new(3.0, 4.0), 5.0));
    let engagement = Engagement::new(8.0);
    let own = Point::ORIGIN;
    let friendly = Point::new(5.0, 0.0);
    for target in [Point::new(0.0, 6.0), Point::new(5.0, 1.0), Point::new(1.0, 0.0), Point::new(9.0, 0.0)] {
        show(
            &format!("can_engage(target = ({}, {}))", target.x, target.y),
            engagement.can_engage(own, friendly, target),
        );
    }

    println!();
    let viewport = Viewport::centered(9.0, 37, 19)?;
    let zone = engagement.firing_zone(own, friendly) | circle(0.5);
    print!("{}", sample(&zone, viewport).to_ascii('#', '.'));
    Ok(())
}

fn section(title: &str) {
    println!();
    println!("── {} ──", title);
}

fn show(label: &str, value: impl std::fmt::Display) {
    println!("  {:<32} {}", label, value);
}
