pub mod app;
pub mod attendance;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod reports;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use store::{JsonFileStore, MemoryStore, SubjectStore};
