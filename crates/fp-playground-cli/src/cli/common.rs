//! Common utilities shared across CLI commands.

use std::fs;

use anyhow::{anyhow, bail, Context, Result};
use fp_playground::{Mask, Point};
use log::info;
use quick_xml::escape::escape;
use serde::Serialize;

use crate::conf::Render;

/// Output format for a sampled region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Ascii,
    Svg,
    Png,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ascii" | "text" => Some(OutputFormat::Ascii),
            "svg" => Some(OutputFormat::Svg),
            "png" => Some(OutputFormat::Png),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Take the value following a flag, advancing the cursor.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} needs a value", flag))
}

/// Parse a number following a flag.
pub fn flag_number<T>(args: &[String], i: &mut usize, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = flag_value(args, i, flag)?;
    raw.parse().with_context(|| format!("invalid value for {}: '{}'", flag, raw))
}

/// Parse `x,y` into a point.
pub fn parse_point(raw: &str) -> Result<Point> {
    let numbers = parse_numbers(raw)?;
    match numbers.as_slice() {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => bail!("expected 'x,y', got '{}'", raw),
    }
}

/// Parse `min_x,min_y,max_x,max_y`.
pub fn parse_bounds(raw: &str) -> Result<(f64, f64, f64, f64)> {
    let numbers = parse_numbers(raw)?;
    match numbers.as_slice() {
        [a, b, c, d] => Ok((*a, *b, *c, *d)),
        _ => bail!("expected 'min_x,min_y,max_x,max_y', got '{}'", raw),
    }
}

fn parse_numbers(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>().with_context(|| format!("'{}' is not a number", part))
        })
        .collect()
}

/// Summary of a sampled region in JSON output format.
#[derive(Serialize)]
pub struct JsonMask<'a> {
    pub name: &'a str,
    pub columns: usize,
    pub rows: usize,
    pub filled: usize,
    pub coverage: f64,
    pub area: f64,
    pub bounds: [f64; 4],
    pub grid: Vec<String>,
}

impl<'a> JsonMask<'a> {
    pub fn new(name: &'a str, mask: &Mask, style: &Render) -> Self {
        let vp = mask.viewport();
        let text = mask.to_ascii(style.filled_char(), style.empty_char());
        Self {
            name,
            columns: mask.columns(),
            rows: mask.rows(),
            filled: mask.filled(),
            coverage: mask.coverage(),
            area: mask.area(),
            bounds: [vp.min_x(), vp.min_y(), vp.max_x(), vp.max_y()],
            grid: text.lines().map(str::to_string).collect(),
        }
    }
}

/// Convert a mask to SVG, one square per filled cell.
///
/// `title` and the fill colour are escaped; scene names and file paths may
/// contain `&` or `<`.
pub fn mask_to_svg(mask: &Mask, title: &str, style: &Render) -> String {
    let size = style.cell_size;
    let width = mask.columns() as f64 * size;
    let height = mask.rows() as f64 * size;

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}" height="{:.2}"
     viewBox="0 0 {:.2} {:.2}">
  <title>{}</title>
  <rect width="100%" height="100%" fill="white"/>
  <g fill="{}" stroke="none">
"##,
        width,
        height,
        width,
        height,
        escape(title),
        escape(style.color.as_str())
    ));

    for (col, row) in mask.filled_cells() {
        svg.push_str(&format!(
            "    <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/>\n",
            col as f64 * size,
            row as f64 * size,
            size,
            size
        ));
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Rasterize SVG content to a PNG file using resvg.
pub fn svg_to_png(svg_content: &str, png_path: &str) -> Result<(u32, u32)> {
    use resvg::usvg;
    use tiny_skia::Pixmap;

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).context("Failed to parse generated SVG")?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("could not create a {}x{} pixmap", size.width(), size.height()))?;

    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("Failed to write {}", png_path))?;
    Ok((size.width(), size.height()))
}

/// Write text to `path`, or print it when no path is given.
pub fn emit(content: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            info!("wrote {}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Render a mask in the requested format.
pub fn output_mask(mask: &Mask, name: &str, format: OutputFormat, output: Option<&str>, style: &Render) -> Result<()> {
    match format {
        OutputFormat::Ascii => emit(&mask.to_ascii(style.filled_char(), style.empty_char()), output),
        OutputFormat::Svg => emit(&mask_to_svg(mask, name, style), output),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonMask::new(name, mask, style))?;
            emit(&format!("{}\n", json), output)
        }
        OutputFormat::Png => {
            let path = output.ok_or_else(|| anyhow!("PNG output needs -o <file>"))?;
            let (w, h) = svg_to_png(&mask_to_svg(mask, name, style), path)?;
            eprintln!("Wrote: {} ({}x{})", path, w, h);
            Ok(())
        }
    }
}
