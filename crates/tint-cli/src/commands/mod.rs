//! CLI command implementations

pub mod clamp;
pub mod convert;
pub mod info;

use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;
use tint_core::{Color, Color24, Color32, ColorA};

/// A color as typed on the command line.
///
/// Keeps the form it was given in (float or byte, with or without alpha) so
/// output can mirror the input shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputColor {
    /// `r,g,b` floats
    Rgb(Color),
    /// `r,g,b,a` floats
    Rgba(ColorA),
    /// `#rrggbb`
    Rgb24(Color24),
    /// `#rrggbbaa`
    Rgba32(Color32),
}

impl InputColor {
    /// Short name of the stored type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rgb(_) => "Color",
            Self::Rgba(_) => "ColorA",
            Self::Rgb24(_) => "Color24",
            Self::Rgba32(_) => "Color32",
        }
    }

    /// Returns true for the byte forms.
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Rgb24(_) | Self::Rgba32(_))
    }

    /// Float RGBA view of the color; RGB inputs get alpha 1.0.
    pub fn to_color_a(self) -> ColorA {
        match self {
            Self::Rgb(c) => c.into(),
            Self::Rgba(c) => c,
            Self::Rgb24(c) => c.into(),
            Self::Rgba32(c) => c.into(),
        }
    }

    /// Stored components in declared order, as floats (bytes are not rescaled).
    pub fn components(&self) -> Vec<f32> {
        match *self {
            Self::Rgb(c) => c.to_array().to_vec(),
            Self::Rgba(c) => c.to_array().to_vec(),
            Self::Rgb24(c) => c.to_array().iter().map(|&v| v as f32).collect(),
            Self::Rgba32(c) => c.to_array().iter().map(|&v| v as f32).collect(),
        }
    }

    /// Same shape in float form.
    pub fn to_float(self) -> Self {
        match self {
            Self::Rgb24(c) => Self::Rgb(c.into()),
            Self::Rgba32(c) => Self::Rgba(c.into()),
            other => other,
        }
    }

    /// Same shape in byte form.
    pub fn to_bytes(self) -> Self {
        match self {
            Self::Rgb(c) => Self::Rgb24(c.into()),
            Self::Rgba(c) => Self::Rgba32(c.into()),
            other => other,
        }
    }

    /// Text form accepted back by [`FromStr`], for piping between commands.
    pub fn to_arg(&self) -> String {
        match self {
            Self::Rgb(c) => format!("{},{},{}", c.r, c.g, c.b),
            Self::Rgba(c) => format!("{},{},{},{}", c.r, c.g, c.b, c.a),
            Self::Rgb24(c) => c.to_hex(),
            Self::Rgba32(c) => c.to_hex(),
        }
    }

    /// Applies a float-color transform, converting byte input to floats first.
    pub fn map_float(self, f3: impl Fn(Color) -> Color, f4: impl Fn(ColorA) -> ColorA) -> Self {
        match self.to_float() {
            Self::Rgb(c) => Self::Rgb(f3(c)),
            Self::Rgba(c) => Self::Rgba(f4(c)),
            _ => unreachable!("to_float always yields a float variant"),
        }
    }
}

impl fmt::Display for InputColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => write!(f, "{}", c),
            Self::Rgba(c) => write!(f, "{}", c),
            Self::Rgb24(c) => write!(f, "{} {}", c.to_hex(), c),
            Self::Rgba32(c) => write!(f, "{} {}", c.to_hex(), c),
        }
    }
}

impl FromStr for InputColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.contains(',') {
            let hex = s.strip_prefix('#').unwrap_or(s);
            return match hex.len() {
                6 => Ok(Self::Rgb24(s.parse()?)),
                8 => Ok(Self::Rgba32(s.parse()?)),
                _ => bail!("expected #rrggbb, #rrggbbaa or r,g,b[,a], got {:?}", s),
            };
        }

        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f32>()
                    .with_context(|| format!("invalid component {:?}", part))
            })
            .collect::<Result<Vec<f32>>>()?;

        match values.len() {
            3 => Ok(Self::Rgb(Color::try_from(values.as_slice())?)),
            4 => Ok(Self::Rgba(ColorA::try_from(values.as_slice())?)),
            n => bail!("expected 3 or 4 components, got {}", n),
        }
    }
}
