mod auth;
mod property;
mod upload;

pub use auth::*;
pub use property::*;
pub use upload::*;
