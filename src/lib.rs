pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod session;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use session::Session;
pub use state::AppState;
