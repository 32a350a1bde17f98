use crate::ir::{ArcSpec, Logo};
use crate::theme::Theme;
use serde::Deserialize;
use std::path::Path;

/// Name the exported image is saved under when no output path is given.
pub const DEFAULT_FILE_NAME: &str = "image.png";

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Side of the square icon area, in pixels.
    pub icon_size: f64,
    /// Doubles the canvas width and draws the word next to the icon.
    pub include_label: bool,
    /// Arc stroke width is `icon_size / stroke_divisor`.
    pub stroke_divisor: f64,
    /// Label strokes are thinner than arc strokes by this factor.
    pub label_stroke_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_size: 1024.0,
            include_label: true,
            stroke_divisor: 32.0,
            label_stroke_scale: 2.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub file_name: String,
    /// Largest raster side the exporter agrees to allocate.
    pub max_dimension: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            max_dimension: 16384,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub logo: Logo,
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    label_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportSection {
    file_name: Option<String>,
    max_dimension: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    icon_size: Option<f64>,
    include_label: Option<bool>,
    arcs: Option<Vec<ArcSpec>>,
    export: Option<ExportSection>,
}

/// Loads a JSON (or JSON5) config file on top of the built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = json5::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::by_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("unknown theme: {theme_name}"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.background {
            // An empty string switches an opaque preset back to transparent.
            config.theme.background = if v.is_empty() { None } else { Some(v) };
        }
    }

    if let Some(v) = parsed.icon_size {
        config.layout.icon_size = v;
    }
    if let Some(v) = parsed.include_label {
        config.layout.include_label = v;
    }
    if let Some(arcs) = parsed.arcs {
        config.logo.arcs = arcs;
    }

    if let Some(export) = parsed.export {
        if let Some(v) = export.file_name {
            config.render.file_name = v;
        }
        if let Some(v) = export.max_dimension {
            config.render.max_dimension = v;
        }
    }

    Ok(config)
}
