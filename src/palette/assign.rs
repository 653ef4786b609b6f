use indexmap::IndexMap;
use rand::Rng as _;
use rand::SeedableRng as _;
use rand::rngs::SmallRng;

use crate::foundation::error::{RacelineError, RacelineResult};
use crate::timeline::model::Frame;

/// Display color as an uppercase `#RRGGBB` hex string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color(String);

impl Color {
    /// Validate and normalize a `#RRGGBB` string (case-insensitive input).
    pub fn parse(s: &str) -> RacelineResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RacelineError::validation(format!(
                "color must be #RRGGBB, got \"{s}\""
            )));
        }
        Ok(Self(format!("#{}", hex.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Color generation strategy.
///
/// `existing` exposes the colors already assigned so a strategy may avoid
/// collisions; the default random strategy does not.
pub trait ColorSource {
    fn next_color(&mut self, existing: &Palette) -> Color;
}

/// Six hex digits, each independently uniform over `0-9A-F`. Colors may
/// repeat by chance; accepted cosmetic limitation.
#[derive(Clone, Debug)]
pub struct RandomColorSource {
    rng: SmallRng,
}

impl RandomColorSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic stream for tests and reproducible runs.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for RandomColorSource {
    fn next_color(&mut self, _existing: &Palette) -> Color {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
        let mut hex = String::with_capacity(7);
        hex.push('#');
        for _ in 0..6 {
            hex.push(DIGITS[self.rng.random_range(0..DIGITS.len())] as char);
        }
        Color(hex)
    }
}

/// Deterministic wheel of visually distinct colors; no repeats until the
/// wheel wraps. Collision-avoiding substitute for the random strategy.
#[derive(Clone, Debug, Default)]
pub struct CyclingColorSource {
    cursor: usize,
}

const WHEEL: [&str; 10] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF",
];

impl CyclingColorSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorSource for CyclingColorSource {
    fn next_color(&mut self, _existing: &Palette) -> Color {
        let color = Color(WHEEL[self.cursor % WHEEL.len()].to_string());
        self.cursor += 1;
        color
    }
}

/// Country → color map. Grows monotonically: once a country has a color it
/// keeps it for the lifetime of the palette.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Palette {
    colors: IndexMap<String, Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a color to every country in `frame` not yet mapped.
    ///
    /// Existing assignments are never touched. Returns how many countries
    /// were newly assigned; 0 means the palette is unchanged and callers can
    /// skip downstream notification.
    pub fn extend_for_frame(&mut self, frame: &Frame, source: &mut dyn ColorSource) -> usize {
        let mut added = 0usize;
        for entry in &frame.entries {
            if !self.colors.contains_key(&entry.country) {
                let color = source.next_color(self);
                self.colors.insert(entry.country.clone(), color);
                added += 1;
            }
        }
        added
    }

    pub fn color_of(&self, country: &str) -> Option<&Color> {
        self.colors.get(country)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/assign.rs"]
mod tests;
