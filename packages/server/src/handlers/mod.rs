pub mod quiz;
pub mod random_play;
