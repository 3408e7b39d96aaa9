//! Engage command: can our ship fire at a target?

use anyhow::{anyhow, Result};
use fp_playground::targeting::distances;
use fp_playground::{Engagement, Point};
use log::warn;
use serde::Serialize;

use super::common::{flag_number, flag_value, parse_point};
use crate::conf::Settings;

/// Engagement report in JSON output format.
#[derive(Serialize)]
struct JsonEngagement {
    own: Point,
    friendly: Point,
    target: Point,
    range: f64,
    min_distance: f64,
    target_distance: f64,
    friendly_distance: f64,
    direct: bool,
    regions: bool,
}

/// Execute the engage command.
pub fn cmd_engage(args: &[String], settings: &Settings) -> Result<()> {
    let mut own: Option<Point> = None;
    let mut friendly: Option<Point> = None;
    let mut target: Option<Point> = None;
    let mut range = settings.engagement.range;
    let mut min_distance = settings.engagement.min_distance;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--own" => own = Some(parse_point(flag_value(args, &mut i, "--own")?)?),
            "--friendly" => friendly = Some(parse_point(flag_value(args, &mut i, "--friendly")?)?),
            "--target" => target = Some(parse_point(flag_value(args, &mut i, "--target")?)?),
            "-r" | "--range" => range = flag_number(args, &mut i, "--range")?,
            "--min-distance" => min_distance = flag_number(args, &mut i, "--min-distance")?,
            "--json" => json = true,
            other => return Err(anyhow!("Unknown option: {}\n\n{}", other, USAGE)),
        }
        i += 1;
    }

    let own = own.unwrap_or(Point::ORIGIN);
    let friendly = friendly.ok_or_else(|| anyhow!("--friendly is required\n\n{}", USAGE))?;
    let target = target.ok_or_else(|| anyhow!("--target is required\n\n{}", USAGE))?;

    let engagement = Engagement::new(range).with_min_distance(min_distance);
    let direct = engagement.can_engage_direct(own, friendly, target);
    let regions = engagement.can_engage(own, friendly, target);
    if direct != regions {
        warn!("target sits exactly on a safety margin; the two checks disagree");
    }

    let (target_distance, friendly_distance) = distances(own, friendly, target);

    if json {
        let report = JsonEngagement {
            own,
            friendly,
            target,
            range,
            min_distance,
            target_distance,
            friendly_distance,
            direct,
            regions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Target at ({}, {})", target.x, target.y);
    println!("  distance to own ship:      {:.3} (range {}, margin {})", target_distance, range, min_distance);
    println!("  distance to friendly ship: {:.3}", friendly_distance);
    println!("  direct check:  {}", verdict(direct));
    println!("  region check:  {}", verdict(regions));
    Ok(())
}

fn verdict(engage: bool) -> &'static str {
    if engage { "ENGAGE" } else { "hold fire" }
}

const USAGE: &str = "Usage: fp-playground engage [--own x,y] --friendly x,y --target x,y [--range R] [--min-distance D] [--json]";
