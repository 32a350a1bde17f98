use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::geometry::{Point, polar_point};
use crate::ir::{ArcSpec, Glyph, LineCap, LineJoin, Logo, PathCommand};
use crate::label::{LabelMetrics, glyph_commands};
use crate::theme::Theme;
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Arc {
        radius: f64,
        start: Point,
        end: Point,
    },
    Glyph {
        letter: char,
        x: f64,
    },
}

/// One stroked path on the canvas. Fill is always `none`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnShape {
    pub kind: ShapeKind,
    pub commands: Vec<PathCommand>,
    pub style: StrokeStyle,
}

/// The finished drawing. Shapes are listed bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub icon_size: f64,
    pub center: Point,
    pub shapes: Vec<DrawnShape>,
}

impl Layout {
    pub fn arcs(&self) -> impl Iterator<Item = &DrawnShape> {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape.kind, ShapeKind::Arc { .. }))
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &DrawnShape> {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape.kind, ShapeKind::Glyph { .. }))
    }
}

/// Canvas size for a given icon size: square, or twice as wide with the label.
pub fn canvas_size(config: &LayoutConfig) -> (f64, f64) {
    let width = if config.include_label {
        config.icon_size * 2.0
    } else {
        config.icon_size
    };
    (width, config.icon_size)
}

pub fn compute_layout(
    logo: &Logo,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    let icon_size = config.icon_size;
    if !icon_size.is_finite() || icon_size <= 0.0 {
        return Err(LayoutError::InvalidIconSize(icon_size));
    }
    let (width, height) = canvas_size(config);
    let center = (icon_size / 2.0, icon_size / 2.0);
    let stroke_width = icon_size / config.stroke_divisor;

    let mut shapes = Vec::with_capacity(logo.arcs.len() + logo.glyphs.len());
    for (index, arc) in logo.arcs.iter().enumerate() {
        shapes.push(arc_shape(index, arc, center, icon_size / 2.0, stroke_width)?);
    }

    if config.include_label {
        let metrics = LabelMetrics::new(width, height);
        let label_width = stroke_width * config.label_stroke_scale;
        for glyph in &logo.glyphs {
            shapes.push(glyph_shape(glyph, &metrics, label_width, &theme.label_color)?);
        }
    }

    debug!(
        "laid out {} shapes on a {}x{} canvas",
        shapes.len(),
        width,
        height
    );

    Ok(Layout {
        width,
        height,
        icon_size,
        center,
        shapes,
    })
}

fn arc_shape(
    index: usize,
    arc: &ArcSpec,
    center: Point,
    max_radius: f64,
    stroke_width: f64,
) -> Result<DrawnShape, LayoutError> {
    let fraction = arc.radius_fraction;
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(LayoutError::RadiusOutOfRange { index, fraction });
    }
    if !arc.start_angle.is_finite() || !arc.end_angle.is_finite() {
        return Err(LayoutError::NonFiniteAngle { index });
    }
    // Flags are emitted as given; a mismatch draws a different arc but is
    // still a valid drawing.
    if !arc.flags_match_span() {
        warn!(
            "arc {index}: large-arc/sweep flags do not match the {:.3}..{:.3} rad span",
            arc.start_angle, arc.end_angle
        );
    }

    let radius = fraction * max_radius;
    let start = polar_point(center, radius, arc.start_angle);
    let end = polar_point(center, radius, arc.end_angle);
    Ok(DrawnShape {
        kind: ShapeKind::Arc { radius, start, end },
        commands: vec![
            PathCommand::MoveTo {
                x: start.0,
                y: start.1,
            },
            PathCommand::ArcTo {
                radius,
                large_arc: arc.use_long_path,
                sweep: arc.clockwise,
                x: end.0,
                y: end.1,
            },
        ],
        style: StrokeStyle {
            color: arc.stroke_color.clone(),
            width: stroke_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Bevel,
        },
    })
}

fn glyph_shape(
    glyph: &Glyph,
    metrics: &LabelMetrics,
    stroke_width: f64,
    color: &str,
) -> Result<DrawnShape, LayoutError> {
    let x = metrics.column_x(glyph.column);
    let commands =
        glyph_commands(glyph.letter, x, metrics).ok_or(LayoutError::UnknownGlyph(glyph.letter))?;
    Ok(DrawnShape {
        kind: ShapeKind::Glyph {
            letter: glyph.letter,
            x,
        },
        commands,
        style: StrokeStyle {
            color: color.to_string(),
            width: stroke_width,
            line_cap: LineCap::Round,
            line_join: glyph.line_join,
        },
    })
}
