#[cfg(test)]
mod tests;

/// Distance (normalized x) under which a press grabs a selection edge
pub const EDGE_TOLERANCE: f64 = 0.02;
pub const HANDLE_WIDTH: f64 = 0.003;
/// Exit control is placed right of the selection end
pub const EXIT_OFFSET_X: f64 = 0.06;
pub const EXIT_Y: f64 = 0.05;
pub const EXIT_SIZE: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Range selection state. Coordinates are normalized chart x positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// A new range is being dragged out from `anchor`
    Drafting { anchor: f64, start: f64, end: f64 },
    /// Finished range, `start <= end`
    Confirmed { start: f64, end: f64 },
    /// One edge of a confirmed range is being dragged.
    /// Edges are not re-sorted until release.
    Resizing { start: f64, end: f64, edge: Edge },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRange {
    pub start: f64,
    pub end: f64,
}

impl SelectionRange {
    fn sorted(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Outcome of a pointer release
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEvent {
    Confirmed(SelectionRange),
    Dismissed,
}

/// Geometry of the selection visuals in the unit square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOverlay {
    pub range: SelectionRange,
    pub handles_visible: bool,
    pub start_handle: f64,
    pub end_handle: f64,
    /// Top-left corner of the exit control
    pub exit_pos: (f64, f64),
}

impl SelectionOverlay {
    /// Whether a normalized point falls on the exit control
    pub fn exit_contains(&self, x: f64, y: f64) -> bool {
        let (left, top) = self.exit_pos;
        (left..=left + EXIT_SIZE).contains(&x) && (top..=top + EXIT_SIZE).contains(&y)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
    /// Set by any pointer move since the last press
    moved: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// True once a range has been confirmed and until it is exited
    pub fn is_present(&self) -> bool {
        matches!(
            self.state,
            SelectionState::Confirmed { .. } | SelectionState::Resizing { .. }
        )
    }

    /// Current edges, unsorted while resizing
    pub fn range(&self) -> Option<(f64, f64)> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Drafting { start, end, .. }
            | SelectionState::Confirmed { start, end }
            | SelectionState::Resizing { start, end, .. } => Some((start, end)),
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.moved = false;
        match self.state {
            SelectionState::Idle | SelectionState::Drafting { .. } => {
                self.state = SelectionState::Drafting {
                    anchor: x,
                    start: x,
                    end: x,
                };
            }
            SelectionState::Confirmed { start, end } => self.grab_edge(x, start, end),
            SelectionState::Resizing { start, end, .. } => {
                // Release was missed, settle the range before grabbing again
                let range = SelectionRange::sorted(start, end);
                self.grab_edge(x, range.start, range.end);
            }
        }
    }

    fn grab_edge(&mut self, x: f64, start: f64, end: f64) {
        self.state = match nearest_edge(x, start, end) {
            Some(edge) => SelectionState::Resizing { start, end, edge },
            None => SelectionState::Confirmed { start, end },
        };
    }

    /// Edge a press at `x` would grab, if a selection is present
    pub fn edge_at(&self, x: f64) -> Option<Edge> {
        match self.state {
            SelectionState::Confirmed { start, end } => nearest_edge(x, start, end),
            SelectionState::Resizing { edge, .. } => Some(edge),
            _ => None,
        }
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.moved = true;
        match &mut self.state {
            SelectionState::Drafting { anchor, start, end } => {
                let anchor = *anchor;
                *start = anchor.min(x);
                *end = anchor.max(x);
            }
            SelectionState::Resizing { start, end, edge } => match edge {
                Edge::Start => *start = x,
                Edge::End => *end = x,
            },
            SelectionState::Idle | SelectionState::Confirmed { .. } => {}
        }
    }

    pub fn pointer_up(&mut self) -> Option<SelectionEvent> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Drafting { start, end, .. } => {
                if !self.moved {
                    self.exit();
                    return Some(SelectionEvent::Dismissed);
                }
                Some(self.confirm(start, end))
            }
            SelectionState::Resizing { start, end, .. } => Some(self.confirm(start, end)),
            SelectionState::Confirmed { .. } => {
                // Plain click outside the edges dismisses, drags elsewhere are ignored
                if self.moved {
                    None
                } else {
                    self.exit();
                    Some(SelectionEvent::Dismissed)
                }
            }
        }
    }

    fn confirm(&mut self, start: f64, end: f64) -> SelectionEvent {
        let range = SelectionRange::sorted(start, end);
        self.state = SelectionState::Confirmed {
            start: range.start,
            end: range.end,
        };
        SelectionEvent::Confirmed(range)
    }

    /// Drop the selection from any state
    pub fn exit(&mut self) {
        self.state = SelectionState::Idle;
        self.moved = false;
    }

    pub fn overlay(&self) -> Option<SelectionOverlay> {
        let (start, end) = self.range()?;
        Some(SelectionOverlay {
            range: SelectionRange::sorted(start, end),
            handles_visible: self.is_present(),
            start_handle: start,
            end_handle: end,
            exit_pos: (end + EXIT_OFFSET_X, EXIT_Y),
        })
    }
}

/// Edge within `EDGE_TOLERANCE` of `x`, the nearer one when both are. Ties go to start.
fn nearest_edge(x: f64, start: f64, end: f64) -> Option<Edge> {
    let to_start = (x - start).abs();
    let to_end = (x - end).abs();
    if to_start < EDGE_TOLERANCE && to_start <= to_end {
        Some(Edge::Start)
    } else if to_end < EDGE_TOLERANCE {
        Some(Edge::End)
    } else {
        None
    }
}
