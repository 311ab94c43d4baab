pub mod matcher;
pub mod picker;

pub use matcher::{check_guess, GuessOutcome};
