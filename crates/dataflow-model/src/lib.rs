pub mod download;
pub mod format;
pub mod navigation;
pub mod session;
pub mod size;
pub mod upload;
pub mod workflow;
