use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("couldn't read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `path` is `None` when the text didn't come from a file
    #[error(
        "not a number{}: {content:?} ({source})",
        .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default()
    )]
    Parse {
        path: Option<PathBuf>,
        content: String,
        #[source]
        source: ParseFloatError,
    },
}
