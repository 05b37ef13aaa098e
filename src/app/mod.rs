//! Application layer.
//!
//! # Structure
//!
//! - `calc/` - The evaluation pipeline (sanitize, evaluate, format, preview)
//! - `history.rs` - Bounded persisted log of past calculations
//! - `settings.rs` / `session.rs` - Persisted configuration and draft autosave
//! - `state.rs` - Main application coordinator
//! - `messages.rs` - Channel messages handled by the dispatch loop in main

pub mod calc;
pub mod error;
pub mod history;
pub mod messages;
pub mod platform;
pub mod session;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use calc::{Evaluation, Operator};
pub use error::{AppError, Result};
pub use history::{HistoryEntry, HistoryStore, MAX_HISTORY_ITEMS};
pub use messages::Message;
pub use platform::detect_system_dark_mode;
pub use settings::{AppSettings, ThemeMode};
pub use state::AppState;
