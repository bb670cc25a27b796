//! # SmartPlanner Bot
//!
//! A Telegram bot for planning personal events next to a fixed weekly lesson
//! schedule.
//!
//! ## Features
//! - Add dated events through a short conversation (`/add`)
//! - Show lessons and personal events for any date (`/show`)
//! - All data kept in a single JSON file
//! - Health endpoints for process supervision

/// Bot commands, conversation state and message handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Schedule document model and its storage backends
pub mod database;
/// HTTP health service
pub mod services;
/// Utility functions for dates, validation, errors and logging
pub mod utils;
