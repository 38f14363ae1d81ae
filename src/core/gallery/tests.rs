use crate::core::{
    gallery::{CardRole, GalleryController},
    note::Note,
    roll::RollError,
    selection::SelectionState,
};

fn notes(count: usize) -> Vec<Note> {
    (0..count)
        .map(|i| Note {
            start: i as f64,
            end: i as f64 + 0.5,
            pitch: 60 + (i % 12) as i32,
            velocity: (i % 128) as u32,
        })
        .collect()
}

#[test]
fn test_slices_into_cards() {
    let gallery = GalleryController::from_notes(&notes(1200), 20, 60);
    assert_eq!(gallery.len(), 20);
    for id in 0..20 {
        let card = gallery.card(id).unwrap();
        let roll = card.roll.as_ref().unwrap();
        assert_eq!(roll.rendered_notes().len(), 60);
        assert_eq!(card.description, format!("This is a piano roll number {}", card.id));
    }
    let third = gallery.card(2).unwrap().roll.as_ref().unwrap();
    assert_eq!(third.rendered_notes()[0].note.start, 120.);
}

#[test]
fn test_short_data_skips_missing_windows() {
    let gallery = GalleryController::from_notes(&notes(130), 20, 60);
    assert_eq!(gallery.len(), 3);
    let last = gallery.card(2).unwrap().roll.as_ref().unwrap();
    assert_eq!(last.rendered_notes().len(), 10);
}

#[test]
fn test_extra_data_is_ignored() {
    let gallery = GalleryController::from_notes(&notes(1300), 20, 60);
    assert_eq!(gallery.len(), 20);
}

#[test]
fn test_rejected_card_keeps_error() {
    let mut data = notes(120);
    data[70].velocity = 300;
    let gallery = GalleryController::from_notes(&data, 20, 60);
    assert_eq!(gallery.len(), 2);
    assert!(gallery.card(0).unwrap().roll.is_ok());
    assert_eq!(
        gallery.card(1).unwrap().roll.as_ref().err(),
        Some(&RollError::VelocityOutOfRange {
            velocity: 300,
            table_size: 128
        })
    );
}

#[test]
fn test_out_of_range_pitch_card_keeps_error() {
    let mut data = notes(180);
    data[65].pitch = i32::MAX;
    let gallery = GalleryController::from_notes(&data, 20, 60);
    assert_eq!(gallery.len(), 3);
    assert!(gallery.card(0).unwrap().roll.is_ok());
    assert_eq!(
        gallery.card(1).unwrap().roll.as_ref().err(),
        Some(&RollError::PitchOutOfRange { pitch: i32::MAX })
    );
    assert!(gallery.card(2).unwrap().roll.is_ok());
}

#[test]
fn test_set_main_view_orders_cards() {
    let mut gallery = GalleryController::from_notes(&notes(300), 20, 60);
    let list: Vec<_> = gallery.list_cards().map(|c| c.id).collect();
    assert_eq!(list, vec![0, 1, 2, 3, 4]);
    assert!(gallery.main_card().is_none());

    assert!(gallery.set_main_view(3));
    assert_eq!(gallery.main_card().map(|c| c.id), Some(3));
    let list: Vec<_> = gallery.list_cards().map(|c| c.id).collect();
    assert_eq!(list, vec![0, 1, 2, 4]);

    assert!(gallery.set_main_view(1));
    assert_eq!(gallery.main_id(), Some(1));
    let list: Vec<_> = gallery.list_cards().map(|c| c.id).collect();
    assert_eq!(list, vec![0, 2, 3, 4]);
}

#[test]
fn test_unknown_main_view_is_noop() {
    let mut gallery = GalleryController::from_notes(&notes(120), 20, 60);
    gallery.set_main_view(0);
    assert!(!gallery.set_main_view(42));
    assert_eq!(gallery.main_id(), Some(0));
}

#[test]
fn test_losing_main_resets_selection() {
    let mut gallery = GalleryController::from_notes(&notes(120), 20, 60);
    gallery.set_main_view(0);
    let roll = gallery.main_card_mut().unwrap().roll_mut().unwrap();
    roll.pointer_down(0.1);
    roll.pointer_move(0.6);
    roll.pointer_up();
    assert!(roll.selection().is_present());

    // Re-selecting the same card keeps the selection
    gallery.set_main_view(0);
    let roll = gallery.card(0).unwrap().roll.as_ref().unwrap();
    assert!(roll.selection().is_present());

    gallery.set_main_view(1);
    let roll = gallery.card(0).unwrap().roll.as_ref().unwrap();
    assert_eq!(roll.selection().state(), SelectionState::Idle);
}

#[test]
fn test_card_role_sizes() {
    assert_eq!(CardRole::Main.height(500.), 450.);
    assert_eq!(CardRole::List.height(500.), 150.);
    assert!(CardRole::Main.width_fraction() > CardRole::List.width_fraction());
}
