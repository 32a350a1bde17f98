use arclogo::{RenderOptions, Theme, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogoRenderOptions {
    theme: Option<String>,
    icon_size: Option<f64>,
    include_label: Option<bool>,
    label_color: Option<String>,
    background: Option<String>,
}

fn build_render_options(options: LogoRenderOptions) -> Result<RenderOptions, String> {
    let mut render_options = RenderOptions::liumos();

    if let Some(name) = options.theme.as_deref() {
        render_options.theme = Theme::by_name(name).ok_or_else(|| format!("unknown theme: {name}"))?;
    }
    if let Some(icon_size) = options.icon_size {
        render_options.layout.icon_size = icon_size;
    }
    if let Some(include_label) = options.include_label {
        render_options.layout.include_label = include_label;
    }
    if let Some(label_color) = options.label_color {
        render_options.theme.label_color = label_color;
    }
    if let Some(background) = options.background {
        render_options.theme.background = if background.is_empty() { None } else { Some(background) };
    }

    Ok(render_options)
}

fn render_logo(options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw) => serde_json::from_str::<LogoRenderOptions>(raw).map_err(|error| error.to_string())?,
        None => LogoRenderOptions::default(),
    };
    let render_options = build_render_options(options)?;
    render_with_options(&render_options).map_err(|error| error.to_string())
}

/// Returns the logo as an SVG string, ready to be inserted into the page.
#[wasm_bindgen]
pub fn render_logo_svg(options_json: Option<String>) -> Result<String, JsValue> {
    render_logo(options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use super::render_logo;

    #[test]
    fn renders_default_logo_with_label() {
        let svg = render_logo(None).expect("default logo should render");

        assert!(svg.contains("width=\"2048\" height=\"1024\""));
        assert_eq!(svg.matches("<path").count(), 10);
    }

    #[test]
    fn honours_icon_options() {
        let svg = render_logo(Some(r#"{"iconSize": 64, "includeLabel": false, "theme": "light"}"#))
            .expect("icon-only logo should render");

        assert!(svg.contains("width=\"64\" height=\"64\""));
        assert!(svg.contains("fill=\"#FFFFFF\""));
        assert_eq!(svg.matches("<path").count(), 4);
    }

    #[test]
    fn reports_bad_options() {
        assert!(render_logo(Some(r#"{"iconSize": -1}"#)).is_err());
        assert!(render_logo(Some(r#"{"theme": "neon"}"#)).is_err());
        assert!(render_logo(Some("not json")).is_err());
    }
}
