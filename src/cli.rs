use crate::config::{Config, load_config};
use crate::export::export_png;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_page, render_svg, write_output_text};
use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, debug};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "arclogo", version, about = "Draws the nested-arc logo as SVG, HTML or PNG")]
pub struct Args {
    /// Existing SVG or HTML page to export instead of drawing the logo (png only)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for SVG/HTML and to the export file name for PNG.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config file (JSON or JSON5)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Side of the square icon, in pixels
    #[arg(short = 's', long = "iconSize")]
    pub icon_size: Option<f64>,

    /// Draw the word next to the icon
    #[arg(long = "label", overrides_with = "no_label")]
    pub label: bool,

    /// Draw the icon alone on a square canvas
    #[arg(long = "no-label", overrides_with = "label")]
    pub no_label: bool,

    /// Write the computed layout as JSON to this file
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// Log more (repeat for trace output)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Html,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // stdout carries the SVG/HTML output, so log lines go to stderr.
    TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut config = load_config(args.config.as_deref())?;
    apply_args(&mut config, &args);
    debug!("effective layout config: {:?}", config.layout);

    if let Some(input) = args.input.as_deref() {
        if args.output_format != OutputFormat::Png {
            return Err(anyhow::anyhow!("--input can only be exported as png"));
        }
        let page = std::fs::read_to_string(input)?;
        return write_png(&page, args.output.as_deref(), &config);
    }

    let layout = compute_layout(&config.logo, &config.theme, &config.layout)?;
    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout)?;
    }
    let svg = render_svg(&layout, &config.theme);

    match args.output_format {
        OutputFormat::Svg => write_output_text(&svg, args.output.as_deref()),
        OutputFormat::Html => {
            write_output_text(&render_page(&svg, "logo"), args.output.as_deref())
        }
        OutputFormat::Png => write_png(&svg, args.output.as_deref(), &config),
    }
}

fn apply_args(config: &mut Config, args: &Args) {
    if let Some(icon_size) = args.icon_size {
        config.layout.icon_size = icon_size;
    }
    if args.label {
        config.layout.include_label = true;
    }
    if args.no_label {
        config.layout.include_label = false;
    }
}

fn write_png(page: &str, output: Option<&Path>, config: &Config) -> Result<()> {
    let image = export_png(page, &config.render)?;
    match output {
        Some(path) => image.save(path)?,
        None => {
            image.download(Path::new("."))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_flags_override_config() {
        let mut config = Config::default();
        let args = Args::parse_from(["arclogo", "--no-label", "-s", "256"]);
        apply_args(&mut config, &args);
        assert!(!config.layout.include_label);
        assert_eq!(config.layout.icon_size, 256.0);

        let args = Args::parse_from(["arclogo", "--no-label", "--label"]);
        apply_args(&mut config, &args);
        assert!(config.layout.include_label);
    }

    #[test]
    fn parses_output_format() {
        let args = Args::parse_from(["arclogo", "-e", "png", "-o", "logo.png", "-vv"]);
        assert_eq!(args.output_format, OutputFormat::Png);
        assert_eq!(args.output.as_deref(), Some(Path::new("logo.png")));
        assert_eq!(args.verbose, 2);
    }
}
