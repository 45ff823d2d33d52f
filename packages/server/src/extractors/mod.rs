pub mod form;
pub mod quiz;
pub mod session;
