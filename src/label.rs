//! Hand-drawn lettering for the wide variant of the logo.
//!
//! Every glyph is literal move/line geometry on a column grid; there is no
//! font involved.

use crate::ir::{Glyph, LineJoin, PathCommand};

/// Letters of the label and their column on the grid. `O` and `S` are wider
/// than the lowercase letters, hence the uneven columns.
pub const GLYPHS: [Glyph; 6] = [
    Glyph {
        letter: 'l',
        column: 0.0,
        line_join: LineJoin::Bevel,
    },
    Glyph {
        letter: 'i',
        column: 1.0,
        line_join: LineJoin::Bevel,
    },
    Glyph {
        letter: 'u',
        column: 2.0,
        line_join: LineJoin::Round,
    },
    Glyph {
        letter: 'm',
        column: 4.0,
        line_join: LineJoin::Round,
    },
    Glyph {
        letter: 'O',
        column: 7.0,
        line_join: LineJoin::Round,
    },
    Glyph {
        letter: 'S',
        column: 9.5,
        line_join: LineJoin::Round,
    },
];

/// Grid derived from the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelMetrics {
    /// Left edge of column 0.
    pub origin_x: f64,
    pub column_width: f64,
    /// Top of the letters.
    pub top: f64,
    /// Letter height.
    pub len: f64,
    /// Width of a lowercase bowl (`u`, each arch of `m`).
    pub narrow: f64,
    /// Width of a capital.
    pub wide: f64,
}

impl LabelMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        let len = height / 4.0;
        Self {
            origin_x: width / 2.0,
            column_width: width / 24.0,
            top: height / 2.0 - len / 2.0,
            len,
            narrow: width / 16.0 * 2.0 / 3.0,
            wide: width / 16.0,
        }
    }

    pub fn column_x(&self, column: f64) -> f64 {
        self.origin_x + self.column_width * column
    }
}

/// Path for `letter` with its left edge at `x`. `None` for letters without a
/// drawing.
pub fn glyph_commands(letter: char, x: f64, m: &LabelMetrics) -> Option<Vec<PathCommand>> {
    use PathCommand::{LineBy, MoveBy, MoveTo};

    let eighth = m.len / 8.0;
    let top = MoveTo { x, y: m.top };
    let commands = match letter {
        'l' => vec![top, LineBy { dx: 0.0, dy: m.len }],
        'i' => vec![
            top,
            LineBy { dx: 0.0, dy: eighth },
            MoveBy {
                dx: 0.0,
                dy: eighth * 2.0,
            },
            LineBy {
                dx: 0.0,
                dy: eighth * 5.0,
            },
        ],
        'u' => vec![
            top,
            MoveBy {
                dx: 0.0,
                dy: eighth * 3.0,
            },
            LineBy {
                dx: 0.0,
                dy: eighth * 5.0,
            },
            LineBy {
                dx: m.narrow,
                dy: 0.0,
            },
            LineBy {
                dx: 0.0,
                dy: -eighth * 5.0,
            },
        ],
        'm' => vec![
            top,
            MoveBy {
                dx: 0.0,
                dy: eighth * 3.0,
            },
            LineBy {
                dx: 0.0,
                dy: eighth * 5.0,
            },
            top,
            MoveBy {
                dx: 0.0,
                dy: eighth * 3.0,
            },
            LineBy {
                dx: m.narrow,
                dy: 0.0,
            },
            LineBy {
                dx: 0.0,
                dy: eighth * 5.0,
            },
            MoveBy {
                dx: 0.0,
                dy: -eighth * 5.0,
            },
            LineBy {
                dx: m.narrow,
                dy: 0.0,
            },
            LineBy {
                dx: 0.0,
                dy: eighth * 5.0,
            },
        ],
        'O' => vec![
            top,
            LineBy { dx: 0.0, dy: m.len },
            LineBy { dx: m.wide, dy: 0.0 },
            LineBy {
                dx: 0.0,
                dy: -m.len,
            },
            LineBy {
                dx: -m.wide,
                dy: 0.0,
            },
        ],
        'S' => vec![
            MoveTo {
                x: x + m.wide,
                y: m.top,
            },
            LineBy {
                dx: -m.wide,
                dy: 0.0,
            },
            LineBy {
                dx: 0.0,
                dy: m.len / 2.0,
            },
            LineBy { dx: m.wide, dy: 0.0 },
            LineBy {
                dx: 0.0,
                dy: m.len / 2.0,
            },
            LineBy {
                dx: -m.wide,
                dy: 0.0,
            },
        ],
        _ => return None,
    };
    Some(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Absolute pen positions visited by a glyph path.
    fn trace(commands: &[PathCommand]) -> Vec<(f64, f64)> {
        let mut pen = (0.0, 0.0);
        let mut out = Vec::new();
        for cmd in commands {
            pen = match *cmd {
                PathCommand::MoveTo { x, y } => (x, y),
                PathCommand::MoveBy { dx, dy } | PathCommand::LineBy { dx, dy } => {
                    (pen.0 + dx, pen.1 + dy)
                }
                PathCommand::ArcTo { x, y, .. } => (x, y),
            };
            out.push(pen);
        }
        out
    }

    #[test]
    fn metrics_for_wide_canvas() {
        let m = LabelMetrics::new(2048.0, 1024.0);
        assert_eq!(m.origin_x, 1024.0);
        assert!((m.column_width - 85.333_333).abs() < 1e-3);
        assert_eq!(m.len, 256.0);
        assert_eq!(m.top, 384.0);
        assert_eq!(m.wide, 128.0);
        assert!((m.column_x(9.5) - (1024.0 + 9.5 * 2048.0 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn every_label_letter_has_a_drawing() {
        let m = LabelMetrics::new(2048.0, 1024.0);
        for glyph in GLYPHS {
            assert!(glyph_commands(glyph.letter, 0.0, &m).is_some(), "{}", glyph.letter);
        }
        assert!(glyph_commands('x', 0.0, &m).is_none());
    }

    #[test]
    fn glyphs_stay_inside_letter_box() {
        let m = LabelMetrics::new(2048.0, 1024.0);
        for glyph in GLYPHS {
            let x = m.column_x(glyph.column);
            let commands = glyph_commands(glyph.letter, x, &m).unwrap();
            for (px, py) in trace(&commands) {
                assert!(py >= m.top - 1e-9 && py <= m.top + m.len + 1e-9);
                assert!(px >= x - 1e-9 && px <= x + 2.0 * m.wide + 1e-9);
            }
        }
    }

    #[test]
    fn o_is_closed() {
        let m = LabelMetrics::new(2048.0, 1024.0);
        let points = trace(&glyph_commands('O', 100.0, &m).unwrap());
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9);
    }
}
