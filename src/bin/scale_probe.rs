//! Times the hull engine on growing inputs and cross-checks the small ones
//! against the direct origin-scan recurrence.
//!
//! `cargo run --release --bin scale_probe -- [--json] [--verify-limit N]`

use std::env;
use std::time::Instant;

use quadgap::reference::full_quadratic_score;
use quadgap::{align_score, Scoring};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[64, 128, 256, 512, 1024, 2048];

/// Input family: `(name, second length from first, symbol shift, scores)`.
type Family = (&'static str, fn(usize) -> usize, usize, (i64, i64, i64));

const FAMILIES: &[Family] = &[
    ("similar", |n| n - n / 16, 0, (2, -1, 1)),
    ("divergent", |n| n, 1, (1, -6, 1)),
    ("gap_heavy", |n| n / 2, 2, (3, -2, 2)),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Check {
    Skipped,
    Agrees,
    Disagrees(Option<i64>),
}

struct Run {
    family: &'static str,
    n: usize,
    m: usize,
    score: Result<i64, String>,
    engine_s: f64,
    rss_growth_kib: u64,
    check: Check,
}

fn main() {
    let mut json = false;
    let mut verify_limit = 256usize;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--verify-limit" => match args.next().and_then(|v| v.parse().ok()) {
                Some(limit) => verify_limit = limit,
                None => usage_error("--verify-limit needs a non-negative integer"),
            },
            other => usage_error(&format!("unrecognized argument '{other}'")),
        }
    }

    let mut sys = System::new();
    let mut runs = Vec::new();
    for &(family, second_len, shift, (ms, mm, gp)) in FAMILIES {
        let Ok(scoring) = Scoring::new(ms, mm, gp) else {
            continue;
        };
        for &n in SIZES {
            let m = second_len(n);
            let run = probe(family, n, m, shift, scoring, verify_limit, &mut sys);
            eprintln!(
                "{family:>10} n={n:<5} m={m:<5} {:>8.3}s {}",
                run.engine_s,
                check_label(run.check)
            );
            runs.push(run);
        }
    }

    if json {
        write_json(&runs);
    } else {
        write_csv(&runs);
    }

    let failures = runs
        .iter()
        .filter(|r| r.score.is_err() || matches!(r.check, Check::Disagrees(_)))
        .count();
    if failures > 0 {
        eprintln!("scale_probe: {failures} run(s) failed");
        std::process::exit(1);
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("scale_probe: {message}");
    eprintln!("usage: scale_probe [--json] [--verify-limit N]");
    std::process::exit(2);
}

fn probe(
    family: &'static str,
    n: usize,
    m: usize,
    shift: usize,
    scoring: Scoring,
    verify_limit: usize,
    sys: &mut System,
) -> Run {
    let first = dna(n, 0);
    let second = dna(m, shift);

    let rss_before = rss_kib(sys);
    let start = Instant::now();
    let score = align_score(&first, &second, scoring).map_err(|err| err.to_string());
    let engine_s = start.elapsed().as_secs_f64();
    let rss_growth_kib = rss_kib(sys).saturating_sub(rss_before);

    let check = match score {
        Ok(got) if n.max(m) <= verify_limit => {
            let expected = full_quadratic_score(&first, &second, &scoring);
            if expected == Some(got) {
                Check::Agrees
            } else {
                Check::Disagrees(expected)
            }
        }
        _ => Check::Skipped,
    };

    Run {
        family,
        n,
        m,
        score,
        engine_s,
        rss_growth_kib,
        check,
    }
}

fn check_label(check: Check) -> String {
    match check {
        Check::Skipped => "unchecked".to_string(),
        Check::Agrees => "ok".to_string(),
        Check::Disagrees(Some(expected)) => format!("MISMATCH (expected {expected})"),
        Check::Disagrees(None) => "MISMATCH (expected unreachable)".to_string(),
    }
}

fn write_csv(runs: &[Run]) {
    println!("family,n,m,score,engine_s,rss_growth_kib,check");
    for r in runs {
        let score = match &r.score {
            Ok(s) => s.to_string(),
            Err(err) => format!("\"{}\"", err.replace('"', "'")),
        };
        println!(
            "{},{},{},{score},{:.4},{},{}",
            r.family,
            r.n,
            r.m,
            r.engine_s,
            r.rss_growth_kib,
            check_label(r.check)
        );
    }
}

fn write_json(runs: &[Run]) {
    let rows: Vec<String> = runs
        .iter()
        .map(|r| {
            let score = match &r.score {
                Ok(s) => s.to_string(),
                Err(_) => "null".to_string(),
            };
            format!(
                "  {{\"family\":\"{}\",\"n\":{},\"m\":{},\"score\":{score},\
                 \"engine_s\":{:.4},\"rss_growth_kib\":{},\"check\":\"{}\"}}",
                r.family,
                r.n,
                r.m,
                r.engine_s,
                r.rss_growth_kib,
                check_label(r.check)
            )
        })
        .collect();
    println!("[\n{}\n]", rows.join(",\n"));
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

/// Reproducible ACGT string; `shift` rotates the alphabet.
fn dna(len: usize, shift: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * 7 / 5 + shift) % ALPHABET.len()])
        .collect()
}
