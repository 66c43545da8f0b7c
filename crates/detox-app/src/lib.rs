pub mod group_manager;
pub mod ingestion;
pub mod notifications;
pub mod sample;
pub mod state;

pub use state::AppState;
