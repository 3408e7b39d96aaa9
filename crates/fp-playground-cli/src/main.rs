//! fp-playground - explore regions and functional building blocks
//!
//! Usage:
//!   fp-playground demo                      Evaluate the playground examples
//!   fp-playground render <scene.yaml>       Sample a scene and print it
//!   fp-playground svg <file.svg>            Sample the shapes of an SVG file
//!   fp-playground engage --friendly x,y --target x,y
//!   fp-playground area <scene.yaml>         Estimate a scene's area

mod cli;
mod conf;

use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use env_logger::Env;
use log::debug;

use cli::{cmd_area, cmd_demo, cmd_engage, cmd_render, cmd_svg};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let program = args.first().map(String::as_str).unwrap_or("fp-playground");
    let Some(command) = args.get(1) else {
        print_usage(program);
        return Ok(());
    };

    if matches!(command.as_str(), "help" | "--help" | "-h") {
        print_usage(program);
        return Ok(());
    }

    let settings = conf::load().context("Failed to load configuration")?;
    debug!("settings: {:?}", settings);

    let rest = &args[2..];
    match command.as_str() {
        "demo" => cmd_demo(),
        "render" => cmd_render(rest, &settings),
        "svg" => cmd_svg(rest, &settings),
        "engage" => cmd_engage(rest, &settings),
        "area" => cmd_area(rest, &settings),
        other => {
            print_usage(program);
            bail!("unknown command '{}'", other)
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("fp-playground - regions, closures and other functional building blocks");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    {} <command> [options]", program);
    eprintln!();
    eprintln!("COMMANDS:");
    eprintln!("    demo                          Evaluate the playground examples");
    eprintln!("    render <scene.yaml>           Sample a YAML scene");
    eprintln!("    svg <file.svg>                Sample the union of an SVG file's shapes");
    eprintln!("    engage --friendly x,y --target x,y [--own x,y] [--range R] [--min-distance D]");
    eprintln!("    area <scene.yaml>             Grid and Monte Carlo area estimates");
    eprintln!("    help                          Show this message");
    eprintln!();
    eprintln!("RENDER / SVG OPTIONS:");
    eprintln!("    -f, --format <fmt>     ascii (default), svg, png or json");
    eprintln!("    -o, --output <file>    Write to a file (required for png)");
    eprintln!("    --columns <n>          Grid columns");
    eprintln!("    --rows <n>             Grid rows");
    eprintln!("    --bounds <x0,y0,x1,y1> Override the viewport");
    eprintln!();
    eprintln!("AREA OPTIONS:");
    eprintln!("    -n, --samples <n>      Monte Carlo samples");
    eprintln!("    --seed <n>             Random seed");
    eprintln!("    --json                 JSON output");
    eprintln!();
    eprintln!("CONFIGURATION:");
    eprintln!("    fp-playground.{{yaml,yml,toml,json}} in the working directory, then");
    eprintln!("    FP_PLAYGROUND__<SECTION>__<KEY> environment variables.");
    eprintln!("    Logging follows RUST_LOG (default: warn).");
}
