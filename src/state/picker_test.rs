use super::*;

fn coords(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates {
        latitude,
        longitude,
    }
}

// =============================================================
// Programmatic-move guard
// =============================================================

#[test]
fn user_pan_updates_center() {
    let mut picker = PickerState::default();
    picker.map_moved(coords(13.0, 77.5));
    assert_eq!(picker.center, coords(13.0, 77.5));
}

#[test]
fn echoed_moves_during_recentre_are_ignored() {
    let mut picker = PickerState::default();

    picker.begin_programmatic_move();
    picker.recenter(coords(13.0, 77.5));
    // The map echoes the recentre back as move events.
    picker.map_moved(coords(12.999, 77.499));

    assert_eq!(picker.center, coords(13.0, 77.5));
    assert_eq!(picker.temp_marker, Some(coords(13.0, 77.5)));
}

#[test]
fn pans_after_guard_release_are_honored() {
    let mut picker = PickerState::default();

    picker.begin_programmatic_move();
    picker.recenter(coords(13.0, 77.5));
    picker.end_programmatic_move();

    picker.map_moved(coords(13.1, 77.6));
    assert_eq!(picker.center, coords(13.1, 77.6));
}

#[test]
fn overlapping_recentres_keep_the_guard_until_both_settle() {
    let mut picker = PickerState::default();

    picker.begin_programmatic_move();
    picker.begin_programmatic_move();
    picker.end_programmatic_move();

    picker.map_moved(coords(13.2, 77.7));
    assert_ne!(picker.center, coords(13.2, 77.7));

    picker.end_programmatic_move();
    picker.map_moved(coords(13.2, 77.7));
    assert_eq!(picker.center, coords(13.2, 77.7));
}

#[test]
fn end_without_begin_does_not_underflow() {
    let mut picker = PickerState::default();
    picker.end_programmatic_move();
    picker.map_moved(coords(13.3, 77.8));
    assert_eq!(picker.center, coords(13.3, 77.8));
}

// =============================================================
// Initial report and modes
// =============================================================

#[test]
fn initial_report_fires_once() {
    let mut picker = PickerState::default();
    assert!(picker.report_initial(coords(12.9, 77.6)));
    assert!(!picker.report_initial(coords(13.5, 78.0)));
    assert_eq!(picker.center, coords(12.9, 77.6));
}

#[test]
fn default_center_is_bengaluru() {
    let picker = PickerState::default();
    assert_eq!(picker.center, DEFAULT_CENTER);
    assert!(picker.temp_marker.is_none());
    assert!(!picker.pin_mode);
}

#[test]
fn toggle_pin_mode_flips() {
    let mut picker = PickerState::default();
    picker.toggle_pin_mode();
    assert!(picker.pin_mode);
    picker.toggle_pin_mode();
    assert!(!picker.pin_mode);
}

// =============================================================
// Coordinate parsing
// =============================================================

#[test]
fn parse_accepts_lat_lng_with_spaces() {
    assert_eq!(
        Coordinates::parse(" 12.97914 , 77.61112 "),
        Some(DEFAULT_CENTER)
    );
}

#[test]
fn parse_rejects_out_of_range_and_garbage() {
    assert!(Coordinates::parse("91.0, 10.0").is_none());
    assert!(Coordinates::parse("45.0, 181.0").is_none());
    assert!(Coordinates::parse("not, numbers").is_none());
    assert!(Coordinates::parse("12.9").is_none());
}
