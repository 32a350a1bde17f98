#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "png")]
pub mod export;
pub mod geometry;
pub mod ir;
pub mod label;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use error::LayoutError;
#[cfg(feature = "png")]
pub use error::ExportError;
#[cfg(feature = "png")]
pub use export::{ExportedImage, export_png, export_png_async};
pub use ir::{ArcSpec, Glyph, Logo};
pub use layout::{Layout, compute_layout};
pub use render::{render_page, render_svg};
pub use theme::Theme;

/// Everything needed to draw the logo once.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub logo: Logo,
    pub theme: Theme,
    pub layout: LayoutConfig,
}

impl RenderOptions {
    pub fn liumos() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, include_label: bool) -> Self {
        self.layout.include_label = include_label;
        self
    }

    pub fn with_icon_size(mut self, icon_size: f64) -> Self {
        self.layout.icon_size = icon_size;
        self
    }
}

/// Draws the logo and returns the SVG document.
pub fn render_with_options(options: &RenderOptions) -> Result<String, LayoutError> {
    let layout = compute_layout(&options.logo, &options.theme, &options.layout)?;
    Ok(render_svg(&layout, &options.theme))
}
