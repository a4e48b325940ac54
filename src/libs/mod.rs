pub mod config;
pub mod data_storage;
pub mod date;
pub mod messages;
pub mod progress;
pub mod project;
pub mod secret;
pub mod view;
