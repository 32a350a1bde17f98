use crate::layout::{Layout, ShapeKind};
use crate::render::path_data;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Flat JSON view of a layout, for diffing drawings between versions.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f64,
    pub height: f64,
    pub center: [f64; 2],
    pub shapes: Vec<ShapeDump>,
}

#[derive(Debug, Serialize)]
pub struct ShapeDump {
    pub index: usize,
    pub kind: String,
    pub d: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub radius: Option<f64>,
    pub letter: Option<char>,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let shapes = layout
            .shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| {
                let (kind, radius, letter) = match shape.kind {
                    ShapeKind::Arc { radius, .. } => ("arc", Some(radius), None),
                    ShapeKind::Glyph { letter, .. } => ("glyph", None, Some(letter)),
                };
                ShapeDump {
                    index,
                    kind: kind.to_string(),
                    d: path_data(&shape.commands),
                    stroke: shape.style.color.clone(),
                    stroke_width: shape.style.width,
                    radius,
                    letter,
                }
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            center: [layout.center.0, layout.center.1],
            shapes,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::Logo;
    use crate::layout::compute_layout;
    use crate::theme::Theme;

    #[test]
    fn dump_lists_shapes_in_draw_order() {
        let layout =
            compute_layout(&Logo::liumos(), &Theme::liumos(), &LayoutConfig::default()).unwrap();
        let dump = LayoutDump::from_layout(&layout);
        let json = serde_json::to_value(&dump).unwrap();
        let shapes = json["shapes"].as_array().unwrap();
        assert_eq!(shapes.len(), 10);
        assert_eq!(shapes[0]["kind"], "arc");
        assert_eq!(shapes[0]["radius"], 409.6);
        assert_eq!(shapes[4]["letter"], "l");
        assert_eq!(json["width"], 2048.0);
    }
}
