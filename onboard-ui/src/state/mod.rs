//! State Management
//!
//! Global application state and the browser-backed store.

pub mod global;
pub mod storage;

pub use global::{provide_app_state, use_app_state, AppState};
pub use storage::BrowserStore;
