use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::JudgeError;

/// parse a whole file's worth of text as a single number, ignoring
/// surrounding whitespace
pub fn parse_number(text: &str) -> Result<f64, JudgeError> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|source| JudgeError::Parse {
        path: None,
        content: trimmed.to_string(),
        source,
    })
}

pub fn read_number(path: &Path) -> Result<f64, JudgeError> {
    let text = fs::read_to_string(path).map_err(|source| JudgeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), bytes = text.len(), "read number file");

    parse_number(&text).map_err(|e| match e {
        JudgeError::Parse {
            content, source, ..
        } => JudgeError::Parse {
            path: Some(path.to_path_buf()),
            content,
            source,
        },
        other => other,
    })
}
