pub mod auth;
pub mod contact;
pub mod directory;
pub mod dispatch;
pub mod mortgage;
pub mod property;
pub mod saved;
pub mod shared;
pub mod upload;
pub mod waitlist;
