use std::io;
use std::io::Write;
use std::path::Path;

use lib::Verdict;
use lib::judge_values;
use lib::relative_error;
use tracing::debug;

use crate::error::JudgeError;
use crate::parsing::read_number;

/// read both files and judge the output against the answer. the output file
/// is read first; either failing means there is no verdict.
pub fn judge_files(output_path: &Path, answer_path: &Path) -> Result<Verdict, JudgeError> {
    let output = read_number(output_path)?;
    let answer = read_number(answer_path)?;

    let verdict = judge_values(output, answer);
    debug!(
        output,
        answer,
        relative_error = relative_error(output, answer),
        %verdict,
        "judged"
    );

    Ok(verdict)
}

/// the two lines the harness reads: verdict, then info
pub fn report<W: Write>(verdict: Verdict, mut out: W) -> io::Result<()> {
    writeln!(out, "{verdict}")?;
    writeln!(out, "{}", verdict.info())?;
    out.flush()
}
