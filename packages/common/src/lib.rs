pub mod answer;
pub mod error;
pub mod random_play;
pub mod validation;

pub use error::ErrorKind;
pub use random_play::{CheckOutcome, RandomPlay, RoundStep};
pub use validation::{FieldError, QuizFields, ValidationErrors};
