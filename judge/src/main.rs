//! # Numeric Judge
//! this program should
//! - be run by the judging harness as a special judge
//! - take in a path to the contestant's output
//! - take in a path to the reference answer
//!
//! and then:
//! - read a single number from each file
//! - print the verdict on the first line of stdout
//! - print a short explanation on the second
//!
//! exit:
//! - code 0: a verdict was printed, accepted or not
//! - anything else: a file couldn't be read or parsed, nothing on stdout

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use clap_derive::Parser;
use judge::verify::judge_files;
use judge::verify::report;
use tracing::Level;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// file with the contestant's output
    pub output: PathBuf,
    /// file with the reference answer
    pub answer: PathBuf,
    /// log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // stdout belongs to the harness
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    debug!(output = %args.output.display(), answer = %args.answer.display(), "judging");

    let verdict = judge_files(&args.output, &args.answer)?;

    report(verdict, io::stdout().lock()).context("couldn't write verdict")?;

    Ok(())
}
