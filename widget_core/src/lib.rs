//! # Widget Core
//!
//! Deterministic logic behind the ProjectUcode interactive widgets: mini-game
//! engines, the listing filter/paginate pipeline, and the shared plumbing they
//! sit on (timers, preferences, configuration). This crate owns no rendering
//! and performs no I/O; the UI layer feeds it events and displays its state.

pub mod config;
pub mod games;
pub mod listing;
pub mod prefs;
pub mod quiz;
pub mod score;
pub mod timer;
pub mod tips;
pub mod tutorial;

pub use config::*;
pub use games::*;
pub use listing::*;
pub use prefs::*;
pub use quiz::*;
pub use score::*;
pub use timer::*;
pub use tips::*;
pub use tutorial::*;
