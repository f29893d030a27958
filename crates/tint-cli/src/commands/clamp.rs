//! Clamp command.
//!
//! Clamps the color channels of a float color to a range. Byte input is
//! expanded to floats first; alpha is left alone.

use crate::ClampArgs;
use anyhow::{bail, Result};
use tracing::{debug, info, trace};

use super::InputColor;

/// Runs the clamp command.
pub fn run(args: ClampArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, min = args.min, max = args.max, "clamp::run");

    let result = clamp(args.color, args.min, args.max)?;
    info!(min = args.min, max = args.max, "Clamped color");

    if verbose > 0 {
        println!("{} -> {}", args.color, result);
    }
    println!("{}", result.to_arg());

    Ok(())
}

/// Clamps r, g, b of `color` to `[min, max]`.
pub fn clamp(color: InputColor, min: f32, max: f32) -> Result<InputColor> {
    if min.is_nan() || max.is_nan() {
        bail!("clamp bounds must be numbers, got [{}, {}]", min, max);
    }
    if min > max {
        bail!("--min ({}) is greater than --max ({})", min, max);
    }
    if color.is_bytes() {
        debug!("Expanding byte color to floats");
    }
    Ok(color.map_float(|c| c.clamp(min, max), |c| c.clamp(min, max)))
}
