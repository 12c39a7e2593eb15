//! special judge for numeric answers: read a contestant's output and the
//! reference answer, accept when the relative error is under [`TOLERANCE`].

pub use lib::TOLERANCE;
pub use lib::Verdict;

pub mod error;
pub mod parsing;
pub mod verify;

pub use error::JudgeError;
