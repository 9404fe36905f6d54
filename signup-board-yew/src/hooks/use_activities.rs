use std::rc::Rc;

use signup_board_core::{ActivityCatalog, StatusMessage};
use yew::prelude::*;

use crate::services::ActivitiesApi;

/// The rendered snapshot of the activity collection.
///
/// `Unavailable` replaces the list with a static failure notice and leaves
/// the selection control unpopulated.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotState {
    Loading,
    Ready(ActivityCatalog),
    Unavailable,
}

/// Board state accessible via hook
#[derive(Clone)]
pub struct ActivitiesContext {
    pub snapshot: SnapshotState,
    pub status: Option<StatusMessage>,

    /// Backend client shared by all handlers
    pub api: Rc<ActivitiesApi>,

    /// Replace the rendered snapshot with a fresh fetch
    pub reload: Rc<dyn Fn()>,

    /// Show a transient status message, auto-hidden after five seconds
    pub announce: Rc<dyn Fn(StatusMessage)>,
}

impl PartialEq for ActivitiesContext {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot && self.status == other.status
    }
}

/// Hook to access the board state
#[hook]
pub fn use_activities() -> ActivitiesContext {
    use_context::<ActivitiesContext>()
        .expect("use_activities must be used within an ActivitiesProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_board_core::Activity;

    fn sample_catalog() -> ActivityCatalog {
        [(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies".to_string(),
                schedule: "Fridays".to_string(),
                max_participants: 12,
                participants: vec![],
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_snapshot_states_compare_by_content() {
        assert_eq!(SnapshotState::Loading, SnapshotState::Loading);
        assert_ne!(SnapshotState::Loading, SnapshotState::Unavailable);
        assert_eq!(
            SnapshotState::Ready(sample_catalog()),
            SnapshotState::Ready(sample_catalog())
        );
        assert_ne!(
            SnapshotState::Ready(sample_catalog()),
            SnapshotState::Ready(ActivityCatalog::new())
        );
    }
}
