//! Domain model, managers, analytics and the supporting console plumbing.

pub mod activity;
pub mod activity_manager;
pub mod child;
pub mod child_manager;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod progress;
pub mod recommendations;
pub mod suggestions;
pub mod user;
pub mod view;
