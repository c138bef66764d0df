//! Example: quadratic-gap global alignment score.
//!
//! Run with:
//! `cargo run --example align`
//!
//! Prints the optimal score for a few gap penalties and the best end state
//! of every DP cell for a small pair.

use quadgap::{QuadGapEngineBuilder, Scoring};

fn main() {
    let s = b"GATTACA";
    let t = b"GCATGCU";

    // Matches +2, mismatches -1; a gap of length L costs penalty * L^2.
    for penalty in [0, 1, 2, 5] {
        let engine = QuadGapEngineBuilder::new(s, t)
            .match_score(2)
            .mismatch_score(-1)
            .gap_penalty(penalty)
            .build()
            .expect("valid scoring");
        match engine.run() {
            Ok(score) => println!("gap penalty {penalty}: score {score}"),
            Err(err) => println!("gap penalty {penalty}: {err}"),
        }
    }

    let scoring = Scoring::new(2, -1, 1).expect("valid scoring");
    let engine = QuadGapEngineBuilder::new(b"ACGT", b"AGT")
        .scoring(scoring)
        .build()
        .expect("valid instance");
    let tables = engine.fill().expect("tables fit in memory");

    println!();
    println!("best score per cell for ACGT (rows) vs AGT (columns):");
    for i in 0..tables.rows() {
        let row: Vec<String> = (0..tables.cols())
            .map(|j| match tables.best_at(i, j) {
                Some(v) => format!("{v:>4}"),
                None => "   .".to_string(),
            })
            .collect();
        println!("{}", row.join(""));
    }
}
