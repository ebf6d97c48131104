pub mod permission;
pub mod time;
