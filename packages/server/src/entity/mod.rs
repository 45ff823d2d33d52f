pub mod quiz;
pub mod session;
pub mod tip;
pub mod user;
