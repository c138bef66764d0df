use proptest::prelude::*;
use quadgap::hull::MaxQueryCht;

/// One step of a hull script: either insert a line or query a point.
#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Query,
}

fn naive_max(lines: &[(i64, i64)], x: i64) -> Option<i64> {
    lines.iter().map(|&(m, c)| m * x + c).max()
}

/// Turn raw draws into a script respecting both monotonicity contracts:
/// slopes accumulate non-negative steps, query points never decrease.
fn run_script(
    ops: &[Op],
    slope_steps: &[i64],
    x_steps: &[i64],
) -> Vec<(Option<i64>, Option<i64>)> {
    let mut hull = MaxQueryCht::new();
    let mut lines = Vec::new();
    let mut slope = -50i64;
    let mut x = -20i64;
    let mut slope_draws = slope_steps.iter().cycle();
    let mut x_draws = x_steps.iter().cycle();
    let mut results = Vec::new();

    for op in ops {
        match op {
            Op::Insert(intercept) => {
                slope += slope_draws.next().copied().unwrap_or(0);
                hull.insert(slope, *intercept);
                lines.push((slope, *intercept));
            }
            Op::Query => {
                x += x_draws.next().copied().unwrap_or(0);
                results.push((hull.query(x), naive_max(&lines, x)));
            }
        }
    }
    results
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1_000i64..1_000).prop_map(Op::Insert),
        Just(Op::Query),
    ]
}

proptest! {
    #[test]
    fn hull_matches_naive_scan(
        ops in proptest::collection::vec(op_strategy(), 1..80),
        slope_steps in proptest::collection::vec(0i64..4, 1..10),
        x_steps in proptest::collection::vec(0i64..5, 1..10),
    ) {
        for (got, want) in run_script(&ops, &slope_steps, &x_steps) {
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn all_inserts_then_sweep(
        intercepts in proptest::collection::vec(-10_000i64..10_000, 1..40),
        x_start in -100i64..100,
    ) {
        let mut hull = MaxQueryCht::new();
        let lines: Vec<(i64, i64)> = intercepts
            .iter()
            .enumerate()
            .map(|(k, &c)| (2 * k as i64, c))
            .collect();
        for &(m, c) in &lines {
            hull.insert(m, c);
        }
        for x in x_start..x_start + 60 {
            prop_assert_eq!(hull.query(x), naive_max(&lines, x));
        }
    }

    #[test]
    fn replaying_queries_is_deterministic(
        ops in proptest::collection::vec(op_strategy(), 1..60),
        slope_steps in proptest::collection::vec(0i64..3, 1..6),
        x_steps in proptest::collection::vec(0i64..3, 1..6),
    ) {
        let first = run_script(&ops, &slope_steps, &x_steps);
        let second = run_script(&ops, &slope_steps, &x_steps);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn cloned_hull_answers_identically() {
    let mut hull = MaxQueryCht::new();
    for (m, c) in [(-3, 4), (0, 9), (1, 5), (4, -20)] {
        hull.insert(m, c);
    }
    let mut copy = hull.clone();
    let xs = [0, 1, 1, 3, 6, 10];
    let a: Vec<_> = xs.iter().map(|&x| hull.query(x)).collect();
    let b: Vec<_> = xs.iter().map(|&x| copy.query(x)).collect();
    assert_eq!(a, b);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "query points must be non-decreasing")]
fn out_of_order_query_is_unsupported() {
    let mut hull = MaxQueryCht::new();
    hull.insert(0, 0);
    hull.insert(1, 0);
    hull.query(3);
    hull.query(2);
}
