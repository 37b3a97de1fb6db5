use crate::config::PairingConfig;
use crate::models::{Candidate, GoalPair};
use tracing::{debug, warn};

fn ratio_in_window(ratio: f64, config: &PairingConfig) -> bool {
    ratio > config.distance_ratio - config.tolerance && ratio < config.distance_ratio + config.tolerance
}

/// Whether two candidates have the spacing of the two halves of one goal.
///
/// Candidates sharing a center x are never a pair.
pub fn is_goal_pair(a: &Candidate, b: &Candidate, config: &PairingConfig) -> bool {
    let dist_x = (a.rect.center.0 - b.rect.center.0).abs();
    if dist_x <= 0.0 {
        return false;
    }
    ratio_in_window(a.slant_height() / dist_x, config)
        && ratio_in_window(b.slant_height() / dist_x, config)
}

/// Greedy matching over candidates in index order.
///
/// Pairs are tried in ascending `(i, j)` order; a candidate joins at most one
/// pair and is skipped once consumed.
pub fn pair_candidates(candidates: &[Candidate], config: &PairingConfig) -> Vec<GoalPair> {
    let mut pool: Vec<&Candidate> = candidates.iter().collect();
    pool.sort_by_key(|c| c.index);
    if pool.len() > config.max_candidates {
        warn!(
            "Pairing {} of {} candidates; the rest are dropped",
            config.max_candidates,
            pool.len()
        );
        pool.truncate(config.max_candidates);
    }

    let mut used = vec![false; pool.len()];
    let mut pairs = Vec::new();

    for i in 0..pool.len() {
        if used[i] {
            continue;
        }
        for j in (i + 1)..pool.len() {
            if used[j] {
                continue;
            }
            if is_goal_pair(pool[i], pool[j], config) {
                used[i] = true;
                used[j] = true;
                pairs.push(GoalPair {
                    first: pool[i].clone(),
                    second: pool[j].clone(),
                });
                break;
            }
        }
    }

    debug!("Paired {} goals from {} candidates", pairs.len(), pool.len());
    pairs
}
