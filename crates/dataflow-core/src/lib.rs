pub mod app;
pub mod auth;
pub mod conversion;
pub mod download;
pub mod upload;
pub mod workflow;

pub use app::{App, View};
