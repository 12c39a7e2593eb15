//! numeric core of the judge: relative error against a reference answer,
//! and the verdict it implies.

use std::fmt;

/// relative errors strictly below this are accepted
pub const TOLERANCE: f64 = 0.1f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// the second line the harness stores next to the verdict
    pub fn info(&self) -> &'static str {
        match self {
            Verdict::Accepted => "The error is within bounds",
            Verdict::WrongAnswer => "The error is beyond bounds",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "Accepted"),
            Verdict::WrongAnswer => write!(f, "Wrong Answer"),
        }
    }
}

/// `|(output - answer) / answer|`, scaled by the answer.
///
/// a zero answer has no scale, so only an exact match counts: `0.0` when
/// `output == answer`, `+inf` otherwise (nan output included).
pub fn relative_error(output: f64, answer: f64) -> f64 {
    if answer == 0.0 {
        return if output == 0.0 { 0.0 } else { f64::INFINITY };
    }
    ((output - answer) / answer).abs()
}

/// strict comparison: an error of exactly [`TOLERANCE`] is rejected, and so
/// is a nan error.
pub fn judge_values(output: f64, answer: f64) -> Verdict {
    if relative_error(output, answer) < TOLERANCE {
        Verdict::Accepted
    } else {
        Verdict::WrongAnswer
    }
}
