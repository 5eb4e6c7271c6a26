//! G19 Panel Control Tool
//!
//! CLI for compositing frames and sending them to the Logitech G19 keyboard LCD.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use g19_panel_hw::lcd::{parse_hex_color, parse_hex_rgb};
use g19_panel_hw::{Framebuffer, LcdDevice};
use g19_panel_render::{draw_image, load_image, TextRenderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "g19panelctl")]
#[command(about = "Control tool for the Logitech G19 keyboard LCD")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear the display to a solid color
    Clear {
        /// Color in hex format (e.g., #FF0000 for red)
        #[arg(long, default_value = "#000000")]
        color: String,

        /// Write the frame to a PNG file instead of the device
        #[arg(long)]
        output: Option<String>,
    },
    /// Blend a solid rectangle over the frame
    Fill {
        /// Left edge of the rectangle (may be negative)
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Top edge of the rectangle (may be negative)
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// Rectangle width in pixels
        width: i32,
        /// Rectangle height in pixels
        height: i32,

        /// Color in hex format
        #[arg(long, default_value = "#FFFFFF")]
        color: String,

        /// Blend factor, 0.0 (transparent) to 1.0 (opaque)
        #[arg(long, default_value_t = 1.0, value_parser = parse_alpha)]
        alpha: f32,

        /// Write the frame to a PNG file instead of the device
        #[arg(long)]
        output: Option<String>,
    },
    /// Render text onto the frame
    Text {
        /// The text to render; \n starts a new line
        text: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        x: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        y: i32,

        /// Font size in pixels
        #[arg(long, default_value_t = 16.0)]
        size: f32,

        /// Color in hex format
        #[arg(long, default_value = "#FFFFFF")]
        color: String,

        /// Font file (overrides the configured font)
        #[arg(long)]
        font: Option<String>,

        /// Write the frame to a PNG file instead of the device
        #[arg(long)]
        output: Option<String>,
    },
    /// Draw an image file onto the frame
    Image {
        /// Path to the image file
        path: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        x: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        y: i32,

        /// Target width (defaults to the display width)
        #[arg(long)]
        width: Option<i32>,

        /// Target height (defaults to the display height)
        #[arg(long)]
        height: Option<i32>,

        /// Write the frame to a PNG file instead of the device
        #[arg(long)]
        output: Option<String>,
    },
    /// Set the keyboard backlight color
    Backlight {
        /// Color in hex format
        color: String,

        /// Store the color as the keyboard's power-on default
        #[arg(long)]
        save: bool,
    },
    /// Set display brightness
    Brightness {
        /// Brightness level, 0 (off) to 100 (maximum)
        level: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive("info".parse()?)
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path).context("Failed to load configuration")?;
            info!("Loaded configuration from: {}", path);
            config
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Clear { color, output } => {
            let mut fb = new_framebuffer(&config);
            fb.clear(parse_color(&color)?);
            present(&fb, output.as_deref())
        }
        Commands::Fill {
            x,
            y,
            width,
            height,
            color,
            alpha,
            output,
        } => {
            let mut fb = new_framebuffer(&config);
            fb.fill_rect(x, y, width, height, parse_color(&color)?, alpha);
            present(&fb, output.as_deref())
        }
        Commands::Text {
            text,
            x,
            y,
            size,
            color,
            font,
            output,
        } => {
            let font_path = match font.or_else(|| config.render.font.clone()) {
                Some(path) => path,
                None => bail!("no font available; pass --font or set render.font in the config"),
            };
            let renderer = TextRenderer::from_file(&font_path)
                .with_context(|| format!("Failed to load font: {}", font_path))?;

            let mut fb = new_framebuffer(&config);
            let text = text.replace("\\n", "\n");
            renderer.draw_text(&mut fb, x, y, &text, size, parse_color(&color)?)?;
            present(&fb, output.as_deref())
        }
        Commands::Image {
            path,
            x,
            y,
            width,
            height,
            output,
        } => {
            let mut fb = new_framebuffer(&config);
            let img = load_image(&path).with_context(|| format!("Failed to load image: {}", path))?;
            let width = width.unwrap_or(fb.width() as i32);
            let height = height.unwrap_or(fb.height() as i32);
            draw_image(&mut fb, x, y, width, height, &img)?;
            present(&fb, output.as_deref())
        }
        Commands::Backlight { color, save } => {
            let (r, g, b) = parse_rgb(&color)?;
            let device = open_device()?;
            if save {
                device.save_default_backlight(r, g, b)?;
                println!("Saved default backlight: {}", color);
            } else {
                device.set_backlight(r, g, b)?;
                println!("Backlight set to: {}", color);
            }
            Ok(())
        }
        Commands::Brightness { level } => {
            let device = open_device()?;
            device.set_brightness(level)?;
            println!("Brightness set to: {}", level);
            Ok(())
        }
    }
}

/// Builds a framebuffer with the configured dimensions.
fn new_framebuffer(config: &Config) -> Framebuffer {
    Framebuffer::with_dimensions(config.lcd.width, config.lcd.height)
}

fn open_device() -> Result<LcdDevice> {
    LcdDevice::open().context("Failed to open the G19 LCD")
}

fn parse_color(s: &str) -> Result<u16> {
    parse_hex_color(s).with_context(|| format!("invalid color: {}", s))
}

fn parse_rgb(s: &str) -> Result<(u8, u8, u8)> {
    parse_hex_rgb(s).with_context(|| format!("invalid color: {}", s))
}

/// Parses a blend factor, restricted to 0.0..=1.0.
fn parse_alpha(s: &str) -> std::result::Result<f32, String> {
    let alpha: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(format!("alpha must be between 0.0 and 1.0, got {}", alpha))
    }
}

/// Sends the frame to the device, or writes it to a PNG file.
fn present(fb: &Framebuffer, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => write_png(fb, path),
        None => {
            let device = open_device()?;
            device.send_frame(fb)?;
            Ok(())
        }
    }
}

fn write_png(fb: &Framebuffer, path: &str) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path))?;
    let writer = std::io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, fb.width() as u32, fb.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header().context("Failed to write PNG header")?;
    png_writer
        .write_image_data(&fb.to_rgba8())
        .context("Failed to write PNG data")?;

    println!("Frame saved to: {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["g19panelctl", "fill", "-3", "2", "10", "10"]).unwrap();
        match cli.command {
            Commands::Fill {
                x, y, width, height, ..
            } => assert_eq!((x, y, width, height), (-3, 2, 10, 10)),
            _ => panic!("expected fill command"),
        }
    }

    #[test]
    fn test_text_accepts_negative_offsets() {
        let cli =
            Cli::try_parse_from(["g19panelctl", "text", "hi", "--x", "-4", "--y", "-2"]).unwrap();
        match cli.command {
            Commands::Text { x, y, .. } => assert_eq!((x, y), (-4, -2)),
            _ => panic!("expected text command"),
        }
    }

    #[test]
    fn test_alpha_is_restricted_to_coverage_range() {
        assert!(
            Cli::try_parse_from(["g19panelctl", "fill", "0", "0", "4", "4", "--alpha=1.5"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["g19panelctl", "fill", "0", "0", "4", "4", "--alpha=-0.1"])
                .is_err()
        );
        assert_eq!(parse_alpha("0.5"), Ok(0.5));
        assert!(parse_alpha("nope").is_err());
    }
}

