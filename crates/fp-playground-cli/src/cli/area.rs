//! Area command: grid and Monte Carlo estimates of a scene's area.

use std::fs;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use fp_playground::{estimate_area, sample, Scene, Viewport};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::common::flag_number;
use crate::conf::Settings;

#[derive(Serialize)]
struct JsonArea<'a> {
    name: &'a str,
    viewport_area: f64,
    grid_area: f64,
    grid_cells: usize,
    monte_carlo_area: f64,
    samples: usize,
    seed: u64,
}

/// Execute the area command.
pub fn cmd_area(args: &[String], settings: &Settings) -> Result<()> {
    let mut path: Option<&str> = None;
    let mut samples = settings.area.samples;
    let mut seed = settings.area.seed;
    let mut columns = settings.render.columns;
    let mut rows = settings.render.rows;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--samples" => samples = flag_number(args, &mut i, "--samples")?,
            "--seed" => seed = flag_number(args, &mut i, "--seed")?,
            "--columns" => columns = flag_number(args, &mut i, "--columns")?,
            "--rows" => rows = flag_number(args, &mut i, "--rows")?,
            "--json" => json = true,
            p if !p.starts_with('-') => {
                if path.is_none() {
                    path = Some(p);
                }
            }
            other => return Err(anyhow!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let path = path.ok_or_else(|| anyhow!("scene file required\n\n{}", USAGE))?;
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let scene = Scene::from_yaml(&content).with_context(|| format!("Failed to load scene {}", path))?;
    let region = scene.region().context("Failed to build scene")?;

    let viewport = match scene.viewport {
        Some(vp) => vp,
        None => Viewport::centered(settings.render.extent, columns, rows)?,
    };
    let grid = viewport.with_resolution(columns, rows)?;

    let start = Instant::now();
    let mask = sample(&region, grid);
    let mut rng = StdRng::seed_from_u64(seed);
    let monte_carlo = estimate_area(&region, &viewport, samples, &mut rng);
    info!("area estimates for '{}' took {:?}", scene.name, start.elapsed());

    if json {
        let report = JsonArea {
            name: &scene.name,
            viewport_area: viewport.area(),
            grid_area: mask.area(),
            grid_cells: grid.cell_count(),
            monte_carlo_area: monte_carlo,
            samples,
            seed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Scene: {}", scene.name);
    println!("  viewport area:       {:.4}", viewport.area());
    println!("  grid ({}x{}):        {:.4}", columns, rows, mask.area());
    println!("  monte carlo ({}):  {:.4}", samples, monte_carlo);
    Ok(())
}

const USAGE: &str = "Usage: fp-playground area <scene.yaml> [--samples N] [--seed S] [--columns N] [--rows N] [--json]";
