//! Reads a matching instance in the PairList-Format from stdin and writes a maximum
//! matching to stdout. Logging goes to stderr and is configured via `RUST_LOG`.
//!
//! Passing `--labelled` switches to the human readable report.

use std::{
    io::{BufWriter, stdin, stdout},
    process::ExitCode,
};

use log::{error, info};
use umatch::{io::*, prelude::*};

fn run(labelled: bool) -> std::io::Result<()> {
    let instance = BipartiteInstance::try_read_instance(stdin().lock())?;
    info!(
        "solving instance with {} left, {} right vertices and {} pairings",
        instance.number_of_left_nodes(),
        instance.number_of_right_nodes(),
        instance.number_of_pairs()
    );

    let matching = instance.maximum_matching();
    MatchingWriter::new().labelled(labelled).try_write_matching(
        &instance,
        &matching,
        BufWriter::new(stdout().lock()),
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let labelled = std::env::args().skip(1).any(|arg| arg == "--labelled");

    match run(labelled) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
