use crate::ir::PathCommand;
use crate::layout::{DrawnShape, Layout};
use crate::theme::Theme;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Opening, closing or self-closing `svg` tag. Quoted attribute values may
/// contain `>`.
static SVG_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<(/?)svg\b(?:[^>"']|"[^"]*"|'[^']*')*?(/?)>"#).unwrap()
});

pub fn render_svg(layout: &Layout, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = fmt_num(layout.width);
    let height = fmt_num(layout.height);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    if let Some(background) = &theme.background {
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(background)
        ));
    }

    for shape in &layout.shapes {
        svg.push_str(&shape_svg(shape));
    }

    svg.push_str("</svg>");
    svg
}

fn shape_svg(shape: &DrawnShape) -> String {
    format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"{}\"/>",
        path_data(&shape.commands),
        escape_xml(&shape.style.color),
        fmt_num(shape.style.width),
        shape.style.line_cap.as_str(),
        shape.style.line_join.as_str(),
    )
}

pub fn path_data(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|cmd| match *cmd {
            PathCommand::MoveTo { x, y } => format!("M {} {}", fmt_num(x), fmt_num(y)),
            PathCommand::MoveBy { dx, dy } => format!("m {} {}", fmt_num(dx), fmt_num(dy)),
            PathCommand::LineBy { dx, dy } => format!("l {} {}", fmt_num(dx), fmt_num(dy)),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let r = fmt_num(radius);
                format!(
                    "A {r} {r} 0 {} {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    fmt_num(x),
                    fmt_num(y)
                )
            }
        })
        .collect();
    parts.join(" ")
}

/// Wraps a drawing into a minimal page, the way it is shown in a browser.
pub fn render_page(svg: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<div id=\"logo\">{}</div>\n</body>\n</html>\n",
        escape_xml(title),
        svg
    )
}

/// Finds the drawing surface in a page: the first `<svg>` element, like
/// `document.querySelector("svg")`, including any nested `<svg>` children.
/// A bare SVG document is its own surface. `None` when there is no `<svg>`
/// or the first one is never closed.
pub fn extract_svg(page: &str) -> Option<&str> {
    let mut start = None;
    let mut depth = 0usize;
    for caps in SVG_TAG_RE.captures_iter(page) {
        let tag = caps.get(0)?;
        let closing = !caps[1].is_empty();
        let self_closing = !caps[2].is_empty();
        match start {
            None if closing => continue,
            None => {
                if self_closing {
                    return Some(tag.as_str());
                }
                start = Some(tag.start());
                depth = 1;
            }
            Some(begin) => {
                if closing {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&page[begin..tag.end()]);
                    }
                } else if !self_closing {
                    depth += 1;
                }
            }
        }
    }
    None
}

pub fn write_output_text(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
        }
        None => {
            print!("{}", text);
        }
    }
    Ok(())
}

/// Four decimals, trailing zeros trimmed. Keeps the output stable across
/// platforms and small enough to read.
pub(crate) fn fmt_num(value: f64) -> String {
    let mut s = format!("{value:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
