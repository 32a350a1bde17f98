use serde::Deserialize;
use std::f64::consts::PI;

use crate::geometry::ArcGeometry;

/// Word spelled by the label glyphs, one glyph per letter.
pub const LABEL_WORD: &str = "liumOS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSpec {
    pub radius_fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub use_long_path: bool,
    pub clockwise: bool,
    pub stroke_color: String,
}

impl ArcSpec {
    pub fn new(
        radius_fraction: f64,
        start_angle: f64,
        end_angle: f64,
        use_long_path: bool,
        clockwise: bool,
        stroke_color: &str,
    ) -> Self {
        Self {
            radius_fraction,
            start_angle,
            end_angle,
            use_long_path,
            clockwise,
            stroke_color: stroke_color.to_string(),
        }
    }

    /// Whether the arc command built from this spec actually runs along the
    /// circle the angles were measured on.
    ///
    /// The sweep flag picks the direction, the large-arc flag must then agree
    /// with the span travelled in that direction. Half turns accept either
    /// large-arc value. A zero or full turn has no drawable arc and never
    /// matches.
    pub fn flags_match_span(&self) -> bool {
        let start = (self.start_angle.cos(), self.start_angle.sin());
        let end = (self.end_angle.cos(), self.end_angle.sin());
        let Some(arc) =
            ArcGeometry::from_endpoints(start, end, 1.0, self.use_long_path, self.clockwise)
        else {
            return false;
        };
        let (cx, cy) = arc.center;
        (cx * cx + cy * cy).sqrt() < 1e-6 && (arc.radius - 1.0).abs() < 1e-6
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// One hand-drawn letter of the label, placed on a fixed column grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub letter: char,
    pub column: f64,
    pub line_join: LineJoin,
}

/// Path segments as emitted into the `d` attribute. Lowercase SVG commands
/// are the relative ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    MoveBy {
        dx: f64,
        dy: f64,
    },
    LineBy {
        dx: f64,
        dy: f64,
    },
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub arcs: Vec<ArcSpec>,
    pub glyphs: Vec<Glyph>,
}

impl Logo {
    pub fn liumos() -> Self {
        Self {
            arcs: default_arcs(),
            glyphs: crate::label::GLYPHS.to_vec(),
        }
    }
}

impl Default for Logo {
    fn default() -> Self {
        Self::liumos()
    }
}

/// The four nested arcs, outermost first. Draw order is bottom to top.
pub fn default_arcs() -> Vec<ArcSpec> {
    vec![
        ArcSpec::new(0.8, 0.0, PI * 1.5, true, true, "#84EC66"),
        ArcSpec::new(0.6, -PI / 2.0, PI / 2.0, true, true, "#f2BA69"),
        ArcSpec::new(0.4, -PI / 4.0, -PI * 3.0 / 4.0, true, true, "#D1422E"),
        ArcSpec::new(0.2, PI / 4.0, PI * 3.0 / 4.0, false, true, "#A022AB"),
    ]
}
