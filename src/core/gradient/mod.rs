
use once_cell::sync::Lazy;
use std::fmt::{self, Display};
use thiserror::Error;

/// Number of entries in the built-in tables, one per MIDI velocity.
pub const GRADIENT_STEPS: usize = 128;
/// Background table entry used to shade black-key rows
pub const BLACK_KEY_INDEX: usize = 12;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    #[error("a gradient needs at least 2 steps, got {0}")]
    TooFewSteps(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Ordered, immutable list of colors linearly interpolated between two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    colors: Vec<Rgb>,
}

impl GradientTable {
    /// Interpolate `steps` colors from `start` to `end`, both included.
    pub fn generate(start: Rgb, end: Rgb, steps: usize) -> Result<Self, GradientError> {
        if steps < 2 {
            return Err(GradientError::TooFewSteps(steps));
        }
        let last = (steps - 1) as f64;
        let channel = |from: u8, to: u8, i: usize| -> u8 {
            let value = from as f64 + (to as f64 - from as f64) * i as f64 / last;
            value.round().clamp(0., 255.) as u8
        };
        let colors = (0..steps)
            .map(|i| {
                Rgb::new(
                    channel(start.r, end.r, i),
                    channel(start.g, end.g, i),
                    channel(start.b, end.b, i),
                )
            })
            .collect();

        Ok(Self { colors })
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn first(&self) -> Rgb {
        self.colors[0]
    }
}

// Brand colors #5DB5D5 -> #154151
const BACKGROUND_START: Rgb = Rgb::new(93, 181, 213);
const BACKGROUND_END: Rgb = Rgb::new(21, 65, 81);

const NOTE_START: Rgb = Rgb::new(66, 66, 61);
const NOTE_END: Rgb = Rgb::new(28, 28, 26);

pub static BACKGROUND_COLORMAP: Lazy<GradientTable> = Lazy::new(|| {
    GradientTable::generate(BACKGROUND_START, BACKGROUND_END, GRADIENT_STEPS)
        .expect("GRADIENT_STEPS is above the minimum")
});

pub static NOTE_COLORMAP: Lazy<GradientTable> = Lazy::new(|| {
    GradientTable::generate(NOTE_START, NOTE_END, GRADIENT_STEPS)
        .expect("GRADIENT_STEPS is above the minimum")
});
