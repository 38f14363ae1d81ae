
use crate::core::roll::RollError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// MIDI pitch domain
pub const PITCH_RANGE: RangeInclusive<i32> = 0..=127;

/// One note event as served by the notes endpoint.
/// `end > start` is assumed, not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub start: f64,
    pub end: f64,
    pub pitch: i32,
    pub velocity: u32,
}

impl Note {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Non-empty ordered list of MIDI pitched notes with a positive time horizon.
/// The first note's start is the time origin, the last note's end closes the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    notes: Vec<Note>,
}

impl Sequence {
    pub fn new(notes: Vec<Note>) -> Result<Self, RollError> {
        let (Some(first), Some(last)) = (notes.first(), notes.last()) else {
            return Err(RollError::EmptySequence);
        };
        let horizon = last.end - first.start;
        // Also rejects NaN
        if !(horizon > 0.) {
            return Err(RollError::ZeroHorizon {
                origin: first.start,
                end: last.end,
            });
        }
        if let Some(note) = notes.iter().find(|n| !PITCH_RANGE.contains(&n.pitch)) {
            return Err(RollError::PitchOutOfRange { pitch: note.pitch });
        }
        Ok(Self { notes })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn origin(&self) -> f64 {
        self.notes[0].start
    }

    /// Duration between the time origin and the last note end
    pub fn horizon(&self) -> f64 {
        self.notes[self.notes.len() - 1].end - self.origin()
    }

    /// Lowest and highest pitch of the sequence
    pub fn pitch_bounds(&self) -> (i32, i32) {
        self.notes
            .iter()
            .fold((i32::MAX, i32::MIN), |(min, max), note| {
                (min.min(note.pitch), max.max(note.pitch))
            })
    }
}
