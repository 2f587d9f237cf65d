//! # Assistant Core
//!
//! The "brain" behind the ProjectUcode assistant widgets. This crate matches
//! user questions against immutable knowledge bases, routes site-wide
//! questions through a canned-response table, and keeps the chat transcript
//! state machine that the rendering layer displays.
//!
//! ## Core Components
//!
//! - **knowledge_base**: ordered question/answer pairs with fuzzy lookup
//!   (exact, substring, Levenshtein fallback)
//! - **router**: longest-trigger-wins canned responses with a fallback
//! - **session**: append-only chat transcript with a cancellable typing delay
//!
//! Every widget instance owns its own session and borrows immutable response
//! data, so nothing here is shared mutable state.

pub mod knowledge_base;
pub mod router;
pub mod session;

pub use knowledge_base::*;
pub use router::*;
pub use session::*;
