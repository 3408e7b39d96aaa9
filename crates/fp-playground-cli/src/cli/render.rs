//! Render commands: sample a scene file or an SVG file and print it.

use std::fs;

use anyhow::{anyhow, Context, Result};
use fp_playground::svg::bounds_of;
use fp_playground::{polygons_from_svg, region, sample, Point, Region, Scene, Viewport};
use log::{debug, info};

use super::common::{flag_number, flag_value, output_mask, parse_bounds, OutputFormat};
use crate::conf::Settings;

/// Options shared by `render` and `svg`.
struct RenderArgs<'a> {
    input: Option<&'a str>,
    output: Option<&'a str>,
    format: OutputFormat,
    columns: Option<usize>,
    rows: Option<usize>,
    bounds: Option<(f64, f64, f64, f64)>,
}

fn parse_render_args(args: &[String]) -> Result<RenderArgs<'_>> {
    let mut parsed = RenderArgs {
        input: None,
        output: None,
        format: OutputFormat::Ascii,
        columns: None,
        rows: None,
        bounds: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => parsed.output = Some(flag_value(args, &mut i, "--output")?),
            "-f" | "--format" => {
                let name = flag_value(args, &mut i, "--format")?;
                parsed.format = OutputFormat::from_name(name)
                    .ok_or_else(|| anyhow!("Unknown format: {}. Use ascii, svg, png or json.", name))?;
            }
            "--json" => parsed.format = OutputFormat::Json,
            "--columns" => parsed.columns = Some(flag_number(args, &mut i, "--columns")?),
            "--rows" => parsed.rows = Some(flag_number(args, &mut i, "--rows")?),
            "--bounds" => parsed.bounds = Some(parse_bounds(flag_value(args, &mut i, "--bounds")?)?),
            path if !path.starts_with('-') => {
                if parsed.input.is_none() {
                    parsed.input = Some(path);
                }
            }
            other => return Err(anyhow!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(parsed)
}

fn viewport_from_bounds(bounds: (f64, f64, f64, f64), columns: usize, rows: usize) -> Result<Viewport> {
    let (min_x, min_y, max_x, max_y) = bounds;
    Ok(Viewport::new(Point::new(min_x, min_y), Point::new(max_x, max_y), columns, rows)?)
}

/// Execute the render command.
pub fn cmd_render(args: &[String], settings: &Settings) -> Result<()> {
    let opts = parse_render_args(args)?;
    let path = opts.input.ok_or_else(|| anyhow!("scene file required\n\n{}", USAGE_RENDER))?;

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let scene = Scene::from_yaml(&content).with_context(|| format!("Failed to load scene {}", path))?;
    let region = scene.region().context("Failed to build scene")?;

    let style = &settings.render;
    let columns = opts.columns.or(scene.viewport.map(|v| v.columns())).unwrap_or(style.columns);
    let rows = opts.rows.or(scene.viewport.map(|v| v.rows())).unwrap_or(style.rows);

    let viewport = match (opts.bounds, scene.viewport) {
        (Some(bounds), _) => viewport_from_bounds(bounds, columns, rows)?,
        (None, Some(vp)) => vp.with_resolution(columns, rows)?,
        (None, None) => Viewport::centered(style.extent, columns, rows)?,
    };
    debug!("rendering '{}' through {:?}", scene.name, viewport);

    let mask = sample(&region, viewport);
    info!("'{}': {} of {} cells filled", scene.name, mask.filled(), viewport.cell_count());
    output_mask(&mask, &scene.name, opts.format, opts.output, style)
}

/// Execute the svg command: render the union of an SVG file's shapes.
pub fn cmd_svg(args: &[String], settings: &Settings) -> Result<()> {
    let opts = parse_render_args(args)?;
    let path = opts.input.ok_or_else(|| anyhow!("SVG file required\n\n{}", USAGE_SVG))?;

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let polygons = polygons_from_svg(&content).with_context(|| format!("Failed to parse {}", path))?;
    info!("loaded {} shapes from {}", polygons.len(), path);

    let bounds = match opts.bounds {
        Some(bounds) => bounds,
        None => {
            let (min_x, min_y, max_x, max_y) =
                bounds_of(&polygons).ok_or_else(|| anyhow!("shapes have no extent"))?;
            let pad = 0.05 * (max_x - min_x).max(max_y - min_y);
            (min_x - pad, min_y - pad, max_x + pad, max_y + pad)
        }
    };

    let style = &settings.render;
    let columns = opts.columns.unwrap_or(style.columns);
    let rows = opts.rows.unwrap_or(style.rows);

    // SVG's y axis points down while rows are laid out from max_y, so
    // mirror the region and the viewport to keep the drawing upright.
    let shapes = region::union_all(polygons.into_iter().map(region::polygon));
    let upright = Region::new(move |p| shapes.contains(Point::new(p.x, -p.y)));
    let (min_x, min_y, max_x, max_y) = bounds;
    let viewport = viewport_from_bounds((min_x, -max_y, max_x, -min_y), columns, rows)?;

    let mask = sample(&upright, viewport);
    output_mask(&mask, path, opts.format, opts.output, style)
}

const USAGE_RENDER: &str = "Usage: fp-playground render <scene.yaml> [-f ascii|svg|png|json] [-o file] [--columns N] [--rows N] [--bounds x0,y0,x1,y1]";
const USAGE_SVG: &str = "Usage: fp-playground svg <file.svg> [-f ascii|svg|png|json] [-o file] [--columns N] [--rows N] [--bounds x0,y0,x1,y1]";

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_options() {
        let a = args(&["scene.yaml", "-f", "svg", "-o", "out.svg", "--columns", "20", "--rows", "10", "--bounds", "0,0,4,2"]);
        let opts = parse_render_args(&a).unwrap();
        assert_eq!(opts.input, Some("scene.yaml"));
        assert_eq!(opts.output, Some("out.svg"));
        assert_eq!(opts.format, OutputFormat::Svg);
        assert_eq!(opts.columns, Some(20));
        assert_eq!(opts.rows, Some(10));
        assert_eq!(opts.bounds, Some((0.0, 0.0, 4.0, 2.0)));
    }

    #[test]
    fn rejects_unknown_flags_and_formats() {
        assert!(parse_render_args(&args(&["x.yaml", "--frobnicate"])).is_err());
        assert!(parse_render_args(&args(&["x.yaml", "-f", "gif"])).is_err());
        assert!(parse_render_args(&args(&["x.yaml", "--rows", "many"])).is_err());
    }
}
