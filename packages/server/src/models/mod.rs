pub mod page;
pub mod quiz;
