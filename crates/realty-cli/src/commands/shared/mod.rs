pub mod limit;
pub mod password;
