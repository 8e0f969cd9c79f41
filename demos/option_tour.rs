// Example demonstrating the optio Option type.
//
// Run with `RUST_LOG=optio=debug cargo run --example option_tour` to see the
// failures that the safe combinators swallow.

use anyhow::{bail, Result};
use colored::*;
use optio::{apply, first_option, flatten, none, safe_apply, some, Option, SequenceExt};
use tracing_subscriber::EnvFilter;

fn unwrap_or(opt: Option<i32>, default: i32) -> i32 {
    opt.match_on(|n| n, || default)
}

fn find_first_even(start: i32, end_val: i32) -> Option<i32> {
    (start..=end_val).filter(|i| i % 2 == 0).first_option()
}

fn parse_port(raw: &str) -> Option<u16> {
    some(raw).safe_map(|r| r.trim().parse::<u16>())
}

fn section(title: &str) {
    println!("\n{}", format!("== {} ==", title).blue().bold());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    section("Basic Option usage");
    let x = some(42);
    let y: Option<i32> = none().into();
    println!("x = {}, y = {}", x, y);
    println!("x unwrap_or 0 = {}", unwrap_or(x, 0));
    println!("y unwrap_or 0 = {}", unwrap_or(y, 0));

    section("Finding the first even number");
    find_first_even(1, 10).match_with(
        |n| println!("{}", n.to_string().green()),
        || println!("{}", "No even number found".yellow()),
    );
    find_first_even(7, 7).match_with(
        |n| println!("{}", n.to_string().green()),
        || println!("{}", "No even number found".yellow()),
    );

    section("Nested options");
    let nested = some(some(100));
    println!("{} flattens to {}", nested, nested.flat_map(|inner| inner));

    section("Safe mapping");
    for raw in ["8080", " 443 ", "http", "70000"] {
        let port = parse_port(raw);
        let shown = port.fold(|| "rejected".red().to_string(), |p| p.to_string().green().to_string());
        println!("{:<10} -> {}", format!("{:?}", raw), shown);
    }
    let divided = safe_apply(|| 10i32.checked_div(0));
    println!("10 / 0 = {}", divided.map(|n| n.to_string()).get_or_else(|| "undefined".into()));

    section("Sequences");
    let readings = vec![some(3), Option::None, some(5), Option::None, some(8)];
    let present: Vec<i32> = flatten(readings.clone()).collect();
    println!("{} readings, {} present: {:?}", readings.len(), present.len(), present);
    println!("first reading: {}", first_option(present.iter().copied()));

    let total: i32 = apply(present.iter().copied().reduce(|a, b| a + b)).get_or(0);
    if total != 16 {
        bail!("unexpected total {}", total);
    }
    println!("total: {}", total.to_string().bold());

    Ok(())
}
