//! UI display state for the note screen.
//!
//! The view-model owns the draft; the UI owns a cached snapshot of it plus
//! the purely presentational layout facts (grid partitioning, nav
//! destinations). These types are GPUI-independent to enable testing and
//! clear separation.

use chrono::{DateTime, Utc};
use lull_core::{Activity, Feeling, SleepNoteDraft};

/// Tiles per grid row. The last row may be shorter.
pub const GRID_COLUMNS: usize = 3;

// =============================================================================
// Grid Partitioning
// =============================================================================

/// Feeling tiles partitioned into rows of three, in display order.
pub fn feeling_rows() -> std::slice::Chunks<'static, Feeling> {
    static FEELINGS: [Feeling; 6] = Feeling::ALL;
    FEELINGS.chunks(GRID_COLUMNS)
}

/// Activity tiles partitioned into rows of three, in display order.
pub fn activity_rows() -> std::slice::Chunks<'static, Activity> {
    static ACTIVITIES: [Activity; 5] = Activity::ALL;
    ACTIVITIES.chunks(GRID_COLUMNS)
}

// =============================================================================
// Display State
// =============================================================================

/// Cached draft snapshot the screen renders from.
///
/// Updated only from the view-model's subscription; clicks never mutate it
/// directly, so the render is always a function of broadcast state.
#[derive(Debug)]
pub struct NoteDisplayState {
    draft: SleepNoteDraft,
}

impl NoteDisplayState {
    /// Create display state from the subscription's initial snapshot.
    pub fn new(draft: SleepNoteDraft) -> Self {
        Self { draft }
    }

    /// Replace the cached snapshot with a newly broadcast one.
    pub fn sync(&mut self, draft: SleepNoteDraft) {
        self.draft = draft;
    }

    /// Whether this feeling's tile is highlighted.
    pub fn is_feeling_selected(&self, feeling: Feeling) -> bool {
        self.draft.feeling == Some(feeling)
    }

    /// Whether this activity's tile is highlighted.
    pub fn is_activity_selected(&self, activity: Activity) -> bool {
        self.draft.activities.contains(&activity)
    }

    /// When the note was started.
    pub fn noted_at(&self) -> DateTime<Utc> {
        self.draft.noted_at
    }
}

// =============================================================================
// Navigation Destinations
// =============================================================================

/// A destination in the bottom navigation bar.
///
/// Presentation only; no navigation is wired on this screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDestination {
    Home,
    Sleep,
    Relax,
    Profile,
}

impl NavDestination {
    /// All destinations in bar order.
    pub const ALL: [NavDestination; 4] = [
        NavDestination::Home,
        NavDestination::Sleep,
        NavDestination::Relax,
        NavDestination::Profile,
    ];

    /// Display label under the icon.
    pub fn label(&self) -> &'static str {
        match self {
            NavDestination::Home => "Home",
            NavDestination::Sleep => "Sleep",
            NavDestination::Relax => "Relax",
            NavDestination::Profile => "Profile",
        }
    }

    /// Icon glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            NavDestination::Home => "🏠",
            NavDestination::Sleep => "🛏",
            NavDestination::Relax => "🧠",
            NavDestination::Profile => "👤",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
