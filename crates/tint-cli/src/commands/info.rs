//! Color info command.
//!
//! Displays the components of a color together with its derived values
//! (sum, gray, luma, range flags) and its byte/hex form.

use crate::InfoArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use tint_core::{Color32, ColorA};
use tracing::{debug, trace};

use super::InputColor;

/// Everything `info` reports about one color.
#[derive(Debug, Serialize)]
struct ColorReport {
    input: String,
    kind: &'static str,
    components: Vec<f32>,
    sum: f32,
    gray: f32,
    luma1: f32,
    luma2: f32,
    min: f32,
    max: f32,
    is_black: bool,
    is_negative: bool,
    is_finite: bool,
    bytes: Color32,
    hex: String,
    float: ColorA,
}

impl ColorReport {
    fn new(input: InputColor) -> Self {
        // Queries run on the float view; byte types report their own sum/min/max.
        let float = input.to_color_a();
        let bytes = Color32::from(float);
        let has_alpha = matches!(input, InputColor::Rgba(_) | InputColor::Rgba32(_));

        let (sum, gray, min, max) = match input {
            InputColor::Rgb(c) => (c.sum(), c.gray(), c.min(), c.max()),
            InputColor::Rgba(c) => (c.sum(), c.gray(), c.min(), c.max()),
            InputColor::Rgb24(c) => (c.sum() as f32, c.gray() as f32, c.min() as f32, c.max() as f32),
            InputColor::Rgba32(c) => (c.sum() as f32, c.gray() as f32, c.min() as f32, c.max() as f32),
        };

        let hex = if has_alpha {
            bytes.to_hex()
        } else {
            bytes.rgb().to_hex()
        };

        Self {
            input: input.to_string(),
            kind: input.kind(),
            components: input.components(),
            sum,
            gray,
            luma1: float.luma1(),
            luma2: float.luma2(),
            min,
            max,
            is_black: float.is_black(),
            is_negative: float.is_negative(),
            is_finite: float.is_finite(),
            bytes,
            hex,
            float,
        }
    }
}

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, json = args.json, "info::run");

    let report = ColorReport::new(args.color);
    debug!(kind = report.kind, hex = %report.hex, "Built color report");

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_text(&report, verbose);
    }

    Ok(())
}

/// Prints the report in human-readable form.
fn print_text(report: &ColorReport, verbose: u8) {
    println!("{}", report.input);
    println!("  Type:       {}", report.kind);
    println!("  Sum:        {:.6}", report.sum);
    println!("  Gray:       {:.6}", report.gray);
    println!("  Luma 601:   {:.6}", report.luma1);
    println!("  Luma 709:   {:.6}", report.luma2);
    println!("  Min:        {:.6}", report.min);
    println!("  Max:        {:.6}", report.max);
    println!("  Black:      {}", report.is_black);
    println!("  Negative:   {}", report.is_negative);
    println!("  Finite:     {}", report.is_finite);
    println!("  Hex:        {}", report.hex);

    if verbose > 0 {
        println!("  Float:      {}", report.float);
        println!("  Bytes:      {}", report.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::{Color, Color24};

    #[test]
    fn test_report_float_color() {
        let r = ColorReport::new(InputColor::Rgb(Color::new(-1.0, 0.5, 2.0)));
        assert_eq!(r.kind, "Color");
        assert_eq!(r.sum, 1.5);
        assert_eq!(r.min, -1.0);
        assert_eq!(r.max, 2.0);
        assert!(r.is_negative);
        assert!(!r.is_black);
        assert_eq!(r.hex, "#0080ff");
    }

    #[test]
    fn test_report_byte_color() {
        let r = ColorReport::new(InputColor::Rgb24(Color24::WHITE));
        assert_eq!(r.sum, 765.0);
        assert_eq!(r.gray, 255.0);
        assert_eq!(r.components, vec![255.0, 255.0, 255.0]);
        assert_eq!(r.float, ColorA::WHITE);
    }

    #[test]
    fn test_report_keeps_alpha_in_hex() {
        let r = ColorReport::new(InputColor::Rgba32(Color32::new(1, 2, 3, 4)));
        assert_eq!(r.hex, "#01020304");
        assert_eq!(r.bytes, Color32::new(1, 2, 3, 4));
    }

    #[test]
    fn test_report_json_fields() {
        let r = ColorReport::new(InputColor::Rgb(Color::BLACK));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["is_black"], true);
        assert_eq!(json["bytes"]["a"], 255);
        assert_eq!(json["hex"], "#000000");
    }
}
