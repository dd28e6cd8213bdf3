//! Presentation state for a single birthday card session
//!
//! Holds what the card currently shows and reconciles edits and generation
//! results into it. Transient resources (uploaded image, generated song) are
//! tracked as [`ObjectUrl`] handles that are released exactly once, either
//! when replaced or when the session ends.

#![allow(clippy::must_use_candidate)]

mod details;
mod notification;
mod resource;
mod state;

pub use details::{BirthdayDetails, Blob, DEFAULT_MESSAGE};
pub use notification::{Notification, NotificationVariant};
pub use resource::{InMemoryResourceStore, ObjectUrl, ResourceSlot, ResourceStore};
pub use state::{CardState, CardView, PLACEHOLDER_IMAGE};
