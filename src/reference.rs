//! Direct evaluation of the quadratic-gap recurrence, without hulls.
//!
//! Every gap cell scans all possible origins, giving O(n * m * (n + m))
//! time. It exists as a baseline for tests, benches and the scaling probe.

use crate::scoring::Scoring;

/// Optimal score by explicit origin scans. `None` only if the final cell is
/// unreachable, which does not happen for any input.
pub fn full_quadratic_score(s: &[u8], t: &[u8], scoring: &Scoring) -> Option<i64> {
    let n = s.len();
    let m = t.len();
    let p = scoring.gap_penalty;
    let mut m_dp: Vec<Vec<Option<i64>>> = vec![vec![None; m + 1]; n + 1];
    let mut ga_dp: Vec<Vec<Option<i64>>> = vec![vec![None; m + 1]; n + 1];
    let mut gb_dp: Vec<Vec<Option<i64>>> = vec![vec![None; m + 1]; n + 1];
    m_dp[0][0] = Some(0);

    for i in 0..=n {
        for j in 0..=m {
            if i == 0 && j == 0 {
                continue;
            }
            if i > 0 && j > 0 {
                let prev = m_dp[i - 1][j - 1]
                    .max(ga_dp[i - 1][j - 1])
                    .max(gb_dp[i - 1][j - 1]);
                m_dp[i][j] = prev.map(|v| v + scoring.score_pair(s[i - 1], t[j - 1]));
            }
            if i > 0 {
                ga_dp[i][j] = (0..i)
                    .filter_map(|k| {
                        let len = (i - k) as i64;
                        m_dp[k][j].max(gb_dp[k][j]).map(|v| v - p * len * len)
                    })
                    .max();
            }
            if j > 0 {
                gb_dp[i][j] = (0..j)
                    .filter_map(|k| {
                        let len = (j - k) as i64;
                        m_dp[i][k].max(ga_dp[i][k]).map(|v| v - p * len * len)
                    })
                    .max();
            }
        }
    }
    m_dp[n][m].max(ga_dp[n][m]).max(gb_dp[n][m])
}
