//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `demo` - Evaluate the playground examples and print the results
//! - `render` - Sample a YAML scene and print it as text, SVG, PNG or JSON
//! - `svg` - Same, for the shapes in an SVG file
//! - `engage` - Check whether a ship may fire at a target
//! - `area` - Grid and Monte Carlo area estimates for a scene

pub mod common;
pub mod area;
pub mod demo;
pub mod engage;
pub mod render;

pub use area::cmd_area;
pub use demo::cmd_demo;
pub use engage::cmd_engage;
pub use render::{cmd_render, cmd_svg};
