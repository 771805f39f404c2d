//! # realty-auth
//!
//! Session lifecycle for the Realty client.
//!
//! [`SessionStore`] is the single owner of the signed-in identity. It
//! mirrors the session into a [`KeyValueStorage`] (keys `user`, `userId`,
//! `userType`), restores it at start-up, and re-verifies it against the
//! backend. The stored copy is treated as truth until the backend says the
//! user is gone; an unreachable backend leaves it in place.
//!
//! Outcomes of login, registration, profile updates, and logout are also
//! reported through a [`Notifier`] as short title/description pairs.

mod error;
pub mod mirror;
pub mod notify;
pub mod storage;
mod store;

pub use error::AuthError;
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier, Variant};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{AuthState, SessionStore};
