//! # Signup Board Yew
//!
//! Browser-side view layer for the activity signup board: fetches the
//! activity snapshot, renders it, and submits signup/unregister requests,
//! reloading the whole snapshot after every successful mutation.

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod providers;
pub mod services;

// Re-exports for convenience
pub use app::App;
pub use components::{ActivityCard, ActivityList, SignupForm, StatusBanner};
pub use hooks::{use_activities, ActivitiesContext, SnapshotState};
pub use pages::BoardScreen;
pub use providers::{ActivitiesProvider, ActivitiesProviderProps};
pub use services::ActivitiesApi;
