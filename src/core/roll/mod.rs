
use crate::core::{
    gradient::{BACKGROUND_COLORMAP, BLACK_KEY_INDEX, GradientTable, NOTE_COLORMAP, Rgb},
    note::{Note, Sequence},
    selection::{
        EXIT_SIZE, HANDLE_WIDTH, SelectionController, SelectionEvent, SelectionRange,
    },
};
use thiserror::Error;

/// Charts always show at least two octaves
pub const MIN_PITCH_SPAN: i32 = 24;
/// Semitones added above and below the expanded range
pub const PITCH_MARGIN: i32 = 3;
/// Pitch classes of the black keys
const BLACK_KEYS: [i32; 5] = [1, 3, 6, 8, 10];
const BLACK_KEY_OPACITY: f32 = 0.666;
const KEY_LINE_WIDTH: f64 = 0.001;
const OCTAVE_LINE_WIDTH: f64 = 0.003;
const LINE_COLOR: Rgb = Rgb::new(0, 0, 0);
const SELECTION_COLOR: Rgb = Rgb::new(0, 255, 0);
const SELECTION_OPACITY: f32 = 0.2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("cannot lay out an empty note sequence")]
    EmptySequence,
    #[error("sequence has no duration (starts at {origin}, ends at {end})")]
    ZeroHorizon { origin: f64, end: f64 },
    #[error("pitch {pitch} is outside the MIDI range 0..=127")]
    PitchOutOfRange { pitch: i32 },
    #[error("velocity {velocity} is outside the {table_size} entry color table")]
    VelocityOutOfRange { velocity: u32, table_size: usize },
}

/// Inclusive pitch interval shown on the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchRange {
    pub min: i32,
    pub max: i32,
}

impl PitchRange {
    /// Widen `[low, high]` to at least `MIN_PITCH_SPAN`, the extra going
    /// half below (rounded up) and half above (rounded down).
    pub fn expanded(low: i32, high: i32) -> Self {
        let span = high - low;
        if span >= MIN_PITCH_SPAN {
            return Self { min: low, max: high };
        }
        let diff = MIN_PITCH_SPAN - span;
        let below = (diff + 1) / 2;
        let above = diff / 2;
        Self {
            min: low - below,
            max: high + above,
        }
    }

    /// Expanded range with the visual margin on both sides
    pub fn fit(low: i32, high: i32) -> Self {
        let range = Self::expanded(low, high);
        Self {
            min: range.min - PITCH_MARGIN,
            max: range.max + PITCH_MARGIN,
        }
    }

    pub fn span(&self) -> i32 {
        self.max - self.min
    }

    pub fn row_height(&self) -> f64 {
        1. / self.span() as f64
    }

    /// Top of the row of `pitch`, the y axis grows downwards
    pub fn pitch_to_y(&self, pitch: i32) -> f64 {
        1. - (pitch - self.min) as f64 / self.span() as f64
    }
}

/// Axis aligned rectangle in the unit square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Display independent primitive, handed to a painter adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: NormRect,
        fill: Rgb,
        opacity: f32,
    },
    /// Horizontal line across the whole chart
    Line { y: f64, width: f64, color: Rgb },
    /// Clickable control that drops the selection
    ExitControl { rect: NormRect },
}

/// A source note with its horizontal placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedNote {
    pub note: Note,
    pub position: f64,
    pub width: f64,
}

impl RenderedNote {
    pub fn right(&self) -> f64 {
        self.position + self.width
    }

    /// Strict containment, both bounds inclusive
    pub fn is_within(&self, start: f64, end: f64) -> bool {
        self.position >= start && self.right() <= end
    }
}

pub struct PianoRoll {
    origin: f64,
    horizon: f64,
    pitch_range: PitchRange,
    commands: Vec<DrawCommand>,
    notes: Vec<RenderedNote>,
    selection: SelectionController,
    selected: Vec<RenderedNote>,
}

impl PianoRoll {
    /// Lay out `sequence` with the built-in colormaps
    pub fn new(sequence: &Sequence) -> Result<Self, RollError> {
        Self::with_colormaps(sequence, &NOTE_COLORMAP, &BACKGROUND_COLORMAP)
    }

    pub fn with_colormaps(
        sequence: &Sequence,
        note_colors: &GradientTable,
        background_colors: &GradientTable,
    ) -> Result<Self, RollError> {
        let (low, high) = sequence.pitch_bounds();
        let mut roll = Self {
            origin: sequence.origin(),
            horizon: sequence.horizon(),
            pitch_range: PitchRange::fit(low, high),
            commands: Vec::new(),
            notes: Vec::with_capacity(sequence.len()),
            selection: SelectionController::new(),
            selected: Vec::new(),
        };
        roll.draw_background(background_colors);
        roll.draw_notes(sequence, note_colors)?;
        Ok(roll)
    }

    /// Convert a duration from the time origin to a normalized x
    pub fn time_to_x(&self, time: f64) -> f64 {
        time / self.horizon
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn pitch_range(&self) -> PitchRange {
        self.pitch_range
    }

    pub fn row_height(&self) -> f64 {
        self.pitch_range.row_height()
    }

    pub fn draw_commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn rendered_notes(&self) -> &[RenderedNote] {
        &self.notes
    }

    fn draw_background(&mut self, colors: &GradientTable) {
        let row_height = self.row_height();
        let black_key = colors
            .get(BLACK_KEY_INDEX)
            .unwrap_or_else(|| colors.first());

        // One extra separator closes the top edge of the chart
        for pitch in self.pitch_range.min..=self.pitch_range.max + 1 {
            let y = self.pitch_range.pitch_to_y(pitch);
            let pitch_class = pitch.rem_euclid(12);
            if pitch <= self.pitch_range.max && BLACK_KEYS.contains(&pitch_class) {
                self.commands.push(DrawCommand::Rect {
                    rect: NormRect {
                        x: 0.,
                        y,
                        width: 1.,
                        height: row_height,
                    },
                    fill: black_key,
                    opacity: BLACK_KEY_OPACITY,
                });
            }
            // Key separation, bolder on every octave
            self.commands.push(DrawCommand::Line {
                y: y + row_height,
                width: if pitch_class == 0 {
                    OCTAVE_LINE_WIDTH
                } else {
                    KEY_LINE_WIDTH
                },
                color: LINE_COLOR,
            });
        }
    }

    fn draw_notes(&mut self, sequence: &Sequence, colors: &GradientTable) -> Result<(), RollError> {
        let row_height = self.row_height();
        for note in sequence.notes() {
            let fill = colors
                .get(note.velocity as usize)
                .ok_or(RollError::VelocityOutOfRange {
                    velocity: note.velocity,
                    table_size: colors.len(),
                })?;
            let position = self.time_to_x(note.start - self.origin);
            let width = self.time_to_x(note.duration());

            self.commands.push(DrawCommand::Rect {
                rect: NormRect {
                    x: position,
                    y: self.pitch_range.pitch_to_y(note.pitch),
                    width,
                    height: row_height,
                },
                fill,
                opacity: 1.,
            });
            self.notes.push(RenderedNote {
                note: *note,
                position,
                width,
            });
        }
        Ok(())
    }

    /// Notes lying entirely inside `[start, end]`
    pub fn notes_within(&self, start: f64, end: f64) -> impl Iterator<Item = &RenderedNote> {
        self.notes
            .iter()
            .filter(move |n| n.is_within(start, end))
    }

    // Selection

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn selected_notes(&self) -> impl Iterator<Item = &RenderedNote> {
        self.selected.iter()
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.selection.pointer_down(x);
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.selection.pointer_move(x);
    }

    pub fn pointer_up(&mut self) -> Option<SelectionEvent> {
        let event = self.selection.pointer_up();
        match event {
            Some(SelectionEvent::Confirmed(range)) => self.select_range(range),
            Some(SelectionEvent::Dismissed) => self.selected.clear(),
            None => {}
        }
        event
    }

    /// Handles a press on the chart, returns true if it hit the exit control
    pub fn press_exit_control(&mut self, x: f64, y: f64) -> bool {
        let hit = self
            .selection
            .overlay()
            .is_some_and(|overlay| overlay.exit_contains(x, y));
        if hit {
            self.exit_selection();
        }
        hit
    }

    pub fn exit_selection(&mut self) {
        self.selection.exit();
        self.selected.clear();
    }

    fn select_range(&mut self, range: SelectionRange) {
        self.selected = self.notes_within(range.start, range.end).copied().collect();
        log::info!(
            "Selection {:.3}..{:.3}: {} notes",
            range.start,
            range.end,
            self.selected.len()
        );
    }

    /// Selection visuals, drawn on top of `draw_commands`
    pub fn overlay_commands(&self) -> Vec<DrawCommand> {
        let Some(overlay) = self.selection.overlay() else {
            return Vec::new();
        };
        let mut commands = vec![DrawCommand::Rect {
            rect: NormRect {
                x: overlay.range.start,
                y: 0.,
                width: overlay.range.width(),
                height: 1.,
            },
            fill: SELECTION_COLOR,
            opacity: SELECTION_OPACITY,
        }];
        if overlay.handles_visible {
            for x in [overlay.start_handle, overlay.end_handle] {
                commands.push(DrawCommand::Rect {
                    rect: NormRect {
                        x,
                        y: 0.,
                        width: HANDLE_WIDTH,
                        height: 1.,
                    },
                    fill: SELECTION_COLOR,
                    opacity: 1.,
                });
            }
        }
        let (x, y) = overlay.exit_pos;
        commands.push(DrawCommand::ExitControl {
            rect: NormRect {
                x,
                y,
                width: EXIT_SIZE,
                height: EXIT_SIZE,
            },
        });
        commands
    }
}
