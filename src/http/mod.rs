//! HTTP surface: the document browser page and its JSON API

pub mod handler;
pub mod render;
pub mod server;

pub use handler::{ApiError, AppState, BrowseParams};
pub use server::HttpServer;
