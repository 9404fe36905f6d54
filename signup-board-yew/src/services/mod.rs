//! Backend HTTP plumbing

mod activities_api;

pub use activities_api::ActivitiesApi;
