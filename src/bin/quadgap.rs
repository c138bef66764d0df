//! Read one alignment batch from stdin and print the optimal score.
//!
//! Input: `n s m t match_score mismatch_score gap_penalty`, whitespace
//! separated. Exit codes: 0 on success, 2 on invalid input, 1 on I/O
//! failure or an internal invariant violation.

use std::env;
use std::io::{self, Read, Write};

use quadgap::input::parse_input;
use quadgap::{align_score, AlignError};

fn main() {
    if let Some(arg) = env::args().nth(1) {
        eprintln!("quadgap: unexpected argument '{arg}'");
        print_usage();
        std::process::exit(2);
    }

    let mut bytes = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut bytes) {
        eprintln!("quadgap: failed to read stdin: {err}");
        std::process::exit(1);
    }

    match solve(&bytes) {
        Ok(score) => {
            let mut out = io::stdout().lock();
            if let Err(err) = writeln!(out, "{score}").and_then(|_| out.flush()) {
                eprintln!("quadgap: failed to write output: {err}");
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("quadgap: {err}");
            std::process::exit(if err.is_input_error() { 2 } else { 1 });
        }
    }
}

fn solve(bytes: &[u8]) -> Result<i64, AlignError> {
    let input = parse_input(bytes)?;
    align_score(&input.first, &input.second, input.scoring)
}

fn print_usage() {
    eprintln!(
        "\
Usage: quadgap < input

Reads from stdin, whitespace separated:
  n <first sequence> m <second sequence> match_score mismatch_score gap_penalty

Prints the optimal global alignment score where a gap of length L costs
gap_penalty * L^2.
"
    );
}
