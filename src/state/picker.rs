//! Map coordinate picker: search recentre vs. user pan.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Parse `"lat, lng"` user input, validating the coordinate ranges.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let (lat, lng) = input.split_once(',')?;
        let latitude: f64 = lat.trim().parse().ok()?;
        let longitude: f64 = lng.trim().parse().ok()?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }
}

/// Default map center (Bengaluru).
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 12.979_14,
    longitude: 77.611_12,
};

/// State for the dual-mode coordinate picker.
///
/// A programmatic recentre (search result selected) and a user pan both
/// move the map, and the map echoes programmatic moves back through the
/// same move events. The guard counter keeps those echoes from being
/// mistaken for user pans: [`map_moved`](Self::map_moved) is ignored while
/// a programmatic move is open.
#[derive(Clone, Debug)]
pub struct PickerState {
    pub center: Coordinates,
    pub temp_marker: Option<Coordinates>,
    pub pin_mode: bool,
    programmatic_moves: u32,
    reported_initial: bool,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            temp_marker: None,
            pin_mode: false,
            programmatic_moves: 0,
            reported_initial: false,
        }
    }
}

impl PickerState {
    /// Open the programmatic-move guard.
    pub fn begin_programmatic_move(&mut self) {
        self.programmatic_moves += 1;
    }

    /// Release the guard once the map has settled.
    pub fn end_programmatic_move(&mut self) {
        self.programmatic_moves = self.programmatic_moves.saturating_sub(1);
    }

    /// Recentre on a searched place, dropping a marker there. Callers open
    /// the guard around this so the echoed move events are attributed.
    pub fn recenter(&mut self, coords: Coordinates) {
        self.center = coords;
        self.temp_marker = Some(coords);
    }

    /// The map reported a move. User pans update the center; echoes of a
    /// programmatic recentre are ignored.
    pub fn map_moved(&mut self, coords: Coordinates) {
        if self.programmatic_moves == 0 {
            self.center = coords;
        }
    }

    /// Switch between browse mode and pin-drop mode.
    pub fn toggle_pin_mode(&mut self) {
        self.pin_mode = !self.pin_mode;
    }

    /// First center report from the map after mount. Applies the center and
    /// returns `true` only the first time.
    pub fn report_initial(&mut self, coords: Coordinates) -> bool {
        if self.reported_initial {
            return false;
        }
        self.center = coords;
        self.reported_initial = true;
        true
    }
}
