//! Color conversion command.
//!
//! Moves a color between linear and sRGB encoding, or between float and
//! byte storage. Alpha presence follows the input.

use crate::{ConvertArgs, Target};
use anyhow::Result;
use tracing::{debug, info, trace};

use super::InputColor;

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, to = ?args.to, "convert::run");

    let result = convert(args.color, args.to);
    info!(from = args.color.kind(), to = result.kind(), "Converted color");

    if verbose > 0 {
        println!("{} -> {}", args.color, result);
    }
    println!("{}", result.to_arg());

    Ok(())
}

/// Applies `target` to `color`.
///
/// Transfer functions work on floats, so byte input is expanded first and
/// the result stays float.
pub fn convert(color: InputColor, target: Target) -> InputColor {
    match target {
        Target::Linear => {
            debug!("Decoding sRGB to linear");
            color.map_float(|c| c.srgb_to_linear(), |c| c.srgb_to_linear())
        }
        Target::Srgb => {
            debug!("Encoding linear to sRGB");
            color.map_float(|c| c.linear_to_srgb(), |c| c.linear_to_srgb())
        }
        Target::Bytes => color.to_bytes(),
        Target::Float => color.to_float(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tint_core::{Color, Color24, Color32, ColorA};

    #[test]
    fn test_bytes_saturate() {
        let c = InputColor::Rgb(Color::new(2.0, 0.5, -1.0));
        assert_eq!(convert(c, Target::Bytes), InputColor::Rgb24(Color24::new(255, 128, 0)));
    }

    #[test]
    fn test_float_expands_bytes() {
        let c = InputColor::Rgba32(Color32::new(255, 0, 255, 0));
        assert_eq!(
            convert(c, Target::Float),
            InputColor::Rgba(ColorA::new(1.0, 0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_linear_from_hex() {
        let c = InputColor::Rgb24(Color24::new(255, 0, 0));
        match convert(c, Target::Linear) {
            InputColor::Rgb(out) => {
                assert_abs_diff_eq!(out.r, 1.0, epsilon = 1e-6);
                assert_eq!(out.g, 0.0);
            }
            other => panic!("expected float color, got {:?}", other),
        }
    }

    #[test]
    fn test_srgb_keeps_alpha() {
        let c = InputColor::Rgba(ColorA::new(0.0, 0.0, 1.0, 0.25));
        match convert(c, Target::Srgb) {
            InputColor::Rgba(out) => {
                assert_eq!(out.a, 0.25);
                assert_abs_diff_eq!(out.b, 1.0, epsilon = 1e-4);
            }
            other => panic!("expected float color with alpha, got {:?}", other),
        }
    }
}
