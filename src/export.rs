//! Raster export: page -> data URI -> decoded drawing -> PNG -> file.
//!
//! Each call owns its raster surface, so concurrent exports never share
//! state. Every step reports failure through [`ExportError`].

use crate::config::RenderConfig;
use crate::error::ExportError;
use crate::render::extract_svg;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::{debug, info};
use std::path::{Path, PathBuf};

const SVG_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8;base64,";
const PNG_URI_PREFIX: &str = "data:image/png;base64,";

/// An encoded PNG together with its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
    pub file_name: String,
}

impl ExportedImage {
    pub fn to_data_uri(&self) -> String {
        format!("{PNG_URI_PREFIX}{}", STANDARD.encode(&self.png))
    }

    /// Saves the image into `dir` under its file name and returns the path.
    pub fn download(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        self.save(&path)?;
        Ok(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, &self.png)?;
        info!(
            "wrote {}x{} PNG to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

pub fn svg_data_uri(svg: &str) -> String {
    format!("{SVG_URI_PREFIX}{}", STANDARD.encode(svg.as_bytes()))
}

/// Payload of a base64 `data:` URI. The media type is not checked.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ExportError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| ExportError::InvalidDataUri(truncate(uri)))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExportError::InvalidDataUri(truncate(uri)))?;
    if !header.ends_with(";base64") {
        return Err(ExportError::InvalidDataUri(truncate(uri)));
    }
    Ok(STANDARD.decode(payload)?)
}

/// Locates the drawing in `page` and turns it into a data URI, the input of
/// the decode step.
pub fn surface_data_uri(page: &str) -> Result<String, ExportError> {
    let svg = extract_svg(page).ok_or(ExportError::MissingSurface)?;
    Ok(svg_data_uri(svg))
}

/// Exports the drawing found in `page` as a PNG of its declared size.
pub fn export_png(page: &str, config: &RenderConfig) -> Result<ExportedImage, ExportError> {
    let uri = surface_data_uri(page)?;
    rasterize_data_uri(&uri, config)
}

/// Same as [`export_png`], with the decode and raster work moved off the
/// calling task. Resolves once the image is ready or has failed.
pub async fn export_png_async(
    page: String,
    config: RenderConfig,
) -> Result<ExportedImage, ExportError> {
    let uri = surface_data_uri(&page)?;
    tokio::task::spawn_blocking(move || rasterize_data_uri(&uri, &config))
        .await
        .map_err(|err| ExportError::Task(err.to_string()))?
}

pub fn rasterize_data_uri(uri: &str, config: &RenderConfig) -> Result<ExportedImage, ExportError> {
    let data = decode_data_uri(uri)?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())?;

    // Declared width/height of the root element, rounded up to whole pixels.
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width > config.max_dimension || height > config.max_dimension {
        return Err(ExportError::SurfaceSize { width, height });
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::SurfaceSize { width, height })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );
    debug!("rasterized drawing at {width}x{height}");

    let png = pixmap
        .encode_png()
        .map_err(|err| ExportError::Encode(err.to_string()))?;
    Ok(ExportedImage {
        width,
        height,
        png,
        file_name: config.file_name.clone(),
    })
}

fn truncate(uri: &str) -> String {
    uri.chars().take(32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"8\" height=\"6\"><path d=\"M 1 1 l 5 0\" stroke=\"#000\"/></svg>";

    #[test]
    fn data_uri_round_trips_utf8() {
        let svg = "<svg><!-- ロゴ --></svg>";
        let uri = svg_data_uri(svg);
        assert!(uri.starts_with("data:image/svg+xml;charset=utf-8;base64,"));
        assert_eq!(decode_data_uri(&uri).unwrap(), svg.as_bytes());
    }

    #[test]
    fn rejects_non_base64_uris() {
        assert!(matches!(
            decode_data_uri("data:image/svg+xml,<svg/>"),
            Err(ExportError::InvalidDataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("http://example.com/logo.svg"),
            Err(ExportError::InvalidDataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("data:image/svg+xml;base64,@@@"),
            Err(ExportError::Base64(_))
        ));
    }

    #[test]
    fn exports_declared_size() {
        let image = export_png(TINY, &RenderConfig::default()).unwrap();
        assert_eq!((image.width, image.height), (8, 6));
        assert_eq!(&image.png[1..4], b"PNG");
        assert_eq!(image.file_name, "image.png");
        assert!(image.to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn oversized_surface_is_refused() {
        let config = RenderConfig {
            max_dimension: 4,
            ..RenderConfig::default()
        };
        assert!(matches!(
            export_png(TINY, &config),
            Err(ExportError::SurfaceSize {
                width: 8,
                height: 6
            })
        ));
    }

    #[test]
    fn missing_surface_is_reported() {
        assert!(matches!(
            export_png("<html><body></body></html>", &RenderConfig::default()),
            Err(ExportError::MissingSurface)
        ));
    }

    #[test]
    fn malformed_surface_fails_to_decode() {
        let page = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"8\" height=\"8\"><path d=\"M 0 0\" <</svg>";
        assert!(matches!(
            export_png(page, &RenderConfig::default()),
            Err(ExportError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn async_export_matches_sync() {
        let sync = export_png(TINY, &RenderConfig::default()).unwrap();
        let async_image = export_png_async(TINY.to_string(), RenderConfig::default())
            .await
            .unwrap();
        assert_eq!(sync, async_image);
    }
}
