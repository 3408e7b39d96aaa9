//! Settings read from `fp-playground.{yaml,yml,toml,json}` and the
//! environment (`FP_PLAYGROUND__RENDER__COLUMNS=80` and so on).
//!
//! Every key has a default, so no file is required. Command-line flags
//! override whatever is loaded here.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use fp_playground::Engagement;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub render: Render,
    pub engagement: EngagementDefaults,
    pub area: Area,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Render {
    pub columns: usize,
    pub rows: usize,
    /// Character for cells inside the region (first char is used)
    pub filled: String,
    /// Character for cells outside the region
    pub empty: String,
    /// Pixels per cell for SVG and PNG output
    pub cell_size: f64,
    pub color: String,
    /// Half-width of the viewport used when a scene doesn't give one
    pub extent: f64,
}

impl Default for Render {
    fn default() -> Self {
        Self {
            columns: 60,
            rows: 30,
            filled: "#".to_string(),
            empty: ".".to_string(),
            cell_size: 8.0,
            color: "black".to_string(),
            extent: 10.0,
        }
    }
}

impl Render {
    pub fn filled_char(&self) -> char {
        self.filled.chars().next().unwrap_or('#')
    }

    pub fn empty_char(&self) -> char {
        self.empty.chars().next().unwrap_or('.')
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngagementDefaults {
    pub range: f64,
    pub min_distance: f64,
}

impl Default for EngagementDefaults {
    fn default() -> Self {
        let e = Engagement::default();
        Self { range: e.range, min_distance: e.min_distance }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Area {
    pub samples: usize,
    pub seed: u64,
}

impl Default for Area {
    fn default() -> Self {
        Self { samples: 100_000, seed: 42 }
    }
}

/// Load settings from the working directory and the environment.
pub fn load() -> Result<Settings, ConfigError> {
    let mut b = Config::builder();
    b = add_source_files(b, "fp-playground");
    b = b.add_source(
        Environment::with_prefix("FP_PLAYGROUND")
            .separator("__")
            .try_parsing(true),
    );
    b.build()?.try_deserialize()
}

fn add_source_files(builder: ConfigBuilder<DefaultState>, name: &str) -> ConfigBuilder<DefaultState> {
    builder
        .add_source(File::new(&format!("{name}.yaml"), FileFormat::Yaml).required(false))
        .add_source(File::new(&format!("{name}.yml"), FileFormat::Yaml).required(false))
        .add_source(File::new(&format!("{name}.toml"), FileFormat::Toml).required(false))
        .add_source(File::new(&format!("{name}.json"), FileFormat::Json).required(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let s = Settings::default();
        assert_eq!(s.render.filled_char(), '#');
        assert_eq!(s.render.empty_char(), '.');
        assert!(s.render.columns > 0 && s.render.rows > 0);
        assert_eq!(s.engagement.min_distance, 2.0);
        assert!(s.area.samples > 0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = Config::builder()
            .add_source(File::from_str("render:\n  columns: 12\narea:\n  seed: 7\n", FileFormat::Yaml))
            .build()
            .unwrap();
        let s: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(s.render.columns, 12);
        assert_eq!(s.render.rows, 30);
        assert_eq!(s.area.seed, 7);
        assert_eq!(s.area.samples, 100_000);
    }

    #[test]
    fn empty_character_falls_back() {
        let r = Render { filled: String::new(), ..Render::default() };
        assert_eq!(r.filled_char(), '#');
    }
}
