//! CodeHub - Competitive Programming Stats Aggregator
//!
//! This library provides the core functionality for the CodeHub backend,
//! which collects a user's competitive-programming statistics from several
//! external platforms behind a single HTTP API.
//!
//! # Features
//!
//! - Per-platform adapters (Codeforces, LeetCode, CodeChef, SPOJ,
//!   InterviewBit, HackerRank) normalizing wildly different upstream
//!   contracts into one stats shape
//! - Concurrent, order-preserving aggregation where one unreachable
//!   platform never spoils the rest
//! - Minimal registration/login and profile management over in-memory
//!   stores
//! - A static global leaderboard
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and the aggregation fan-out
//! - **Platforms**: Upstream adapters and their parsers
//! - **Stores**: Process-local state
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod platforms;
pub mod services;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
