use serde::{Deserialize, Serialize};

const MAGMA: [&str; 10] = [
    "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d", "#fd9668",
    "#feca8d", "#fcfdbf",
];

const RD_BU: [&str; 11] = [
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0", "#92c5de",
    "#4393c3", "#2166ac", "#053061",
];

/// Default qualitative palette for categorical colour keys
const QUALITATIVE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Sequential colour scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    Magma,
    RdBu,
}

impl ColorScale {
    pub fn stops(&self) -> &'static [&'static str] {
        match self {
            ColorScale::Magma => &MAGMA,
            ColorScale::RdBu => &RD_BU,
        }
    }

    /// Colour at position `t` of the continuous scale, `t` clamped to `[0, 1]`
    pub fn sample(&self, t: f64) -> String {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let pos = t * (stops.len() - 1) as f64;
        let index = pos.floor() as usize;
        if index >= stops.len() - 1 {
            return stops[stops.len() - 1].to_string();
        }
        let frac = pos - index as f64;

        match (parse_hex(stops[index]), parse_hex(stops[index + 1])) {
            (Some(from), Some(to)) => {
                let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
                format!(
                    "#{:02x}{:02x}{:02x}",
                    mix(from.0, to.0),
                    mix(from.1, to.1),
                    mix(from.2, to.2)
                )
            }
            _ => stops[index].to_string(),
        }
    }

    /// Colour of the `index`-th item when the scale is used as a discrete sequence
    pub fn discrete(&self, index: usize) -> &'static str {
        let stops = self.stops();
        stops[index % stops.len()]
    }
}

/// Colour of the `index`-th distinct key in the qualitative palette
pub fn qualitative(index: usize) -> &'static str {
    QUALITATIVE[index % QUALITATIVE.len()]
}

/// Value range a continuous colour scale is stretched over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, v| match range {
            None => Some(ColorRange { min: v, max: v }),
            Some(r) => Some(ColorRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Position of `value` inside the range; a degenerate range maps to the middle
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        }
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
