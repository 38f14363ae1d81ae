#[cfg(test)]
mod tests;

use crate::core::{
    note::{Note, Sequence},
    roll::{PianoRoll, RollError},
};

pub const DEFAULT_CARD_COUNT: usize = 20;
pub const DEFAULT_NOTES_PER_CARD: usize = 60;
const LIST_HEIGHT: f32 = 150.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    Main,
    List,
}

impl CardRole {
    /// Share of the available width given to the chart
    pub fn width_fraction(&self) -> f32 {
        match self {
            CardRole::Main => 0.9,
            CardRole::List => 0.8,
        }
    }

    /// Chart height for the given available height
    pub fn height(&self, available: f32) -> f32 {
        match self {
            CardRole::Main => available * 0.9,
            CardRole::List => LIST_HEIGHT,
        }
    }

    pub fn description_size(&self) -> f32 {
        match self {
            CardRole::Main => 25.,
            CardRole::List => 16.,
        }
    }
}

pub struct CardModel {
    pub id: usize,
    pub description: String,
    /// Layout failure is kept so the card can say why it is empty
    pub roll: Result<PianoRoll, RollError>,
}

impl CardModel {
    pub fn new(id: usize, notes: &[Note]) -> Self {
        let roll = Sequence::new(notes.to_vec()).and_then(|sequence| PianoRoll::new(&sequence));
        if let Err(err) = &roll {
            log::warn!("Piano roll {id} rejected: {err}");
        }
        Self {
            id,
            description: format!("This is a piano roll number {id}"),
            roll,
        }
    }

    pub fn roll_mut(&mut self) -> Option<&mut PianoRoll> {
        self.roll.as_mut().ok()
    }
}

/// Ordered cards plus which one is shown as the main view
#[derive(Default)]
pub struct GalleryController {
    cards: Vec<CardModel>,
    main: Option<usize>,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice `notes` into `card_count` windows of `notes_per_card`, one card each.
    /// Windows past the end of the data are skipped.
    pub fn from_notes(notes: &[Note], card_count: usize, notes_per_card: usize) -> Self {
        let cards = notes
            .chunks(notes_per_card.max(1))
            .take(card_count)
            .enumerate()
            .map(|(id, window)| CardModel::new(id, window))
            .collect::<Vec<_>>();
        log::info!("Gallery built with {} cards", cards.len());
        Self { cards, main: None }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn card(&self, id: usize) -> Option<&CardModel> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_mut(&mut self, id: usize) -> Option<&mut CardModel> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    pub fn main_id(&self) -> Option<usize> {
        self.main
    }

    pub fn main_card(&self) -> Option<&CardModel> {
        self.main.and_then(|id| self.card(id))
    }

    pub fn main_card_mut(&mut self) -> Option<&mut CardModel> {
        let id = self.main?;
        self.card_mut(id)
    }

    /// Every card but the main one, ordered by id
    pub fn list_cards(&self) -> impl Iterator<Item = &CardModel> {
        self.cards.iter().filter(move |c| Some(c.id) != self.main)
    }

    /// Promote card `id` to the main view. Unknown ids are ignored.
    pub fn set_main_view(&mut self, id: usize) -> bool {
        if self.card(id).is_none() {
            return false;
        }
        if let Some(previous) = self.main
            && previous != id
            && let Some(roll) = self.card_mut(previous).and_then(|c| c.roll_mut())
        {
            roll.exit_selection();
        }
        self.main = Some(id);
        log::debug!("Main view set to piano roll {id}");
        true
    }
}
