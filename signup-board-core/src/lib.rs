//! # Signup Board Core
//!
//! Domain model and backend wire contract for the activity signup board.
//! Everything in this crate is browser-free and natively testable; the Yew
//! view layer lives in `signup-board-yew`.

pub mod api;
pub mod domain;

pub use api::{catalog_reply, mutation_reply, ApiError, DEFAULT_REJECTION};
pub use domain::{
    Activity, ActivityCatalog, MutationOutcome, Severity, StatusMessage, STATUS_VISIBLE_MS,
};
