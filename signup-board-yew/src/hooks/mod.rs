mod use_activities;

pub use use_activities::{use_activities, ActivitiesContext, SnapshotState};
