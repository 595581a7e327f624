//! Evidence accumulation and winner resolution.
//!
//! Contributions are folded into per-profile candidates (sum, then clamp to
//! [0.0, 1.0]). The winner is the highest clamped score; ties prefer a
//! candidate with image evidence, then the lexicographically smallest id.
//! Both steps are free functions so they can be tested without extractors.

use crate::extractors::{Evidence, SignalKind};
use std::collections::BTreeMap;

/// Scores closer than this are treated as equal.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Accumulated evidence for one profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub raw_score: f64,
    pub has_image: bool,
    pub evidence: Vec<Evidence>,
}

impl Candidate {
    fn absorb(&mut self, evidence: Evidence) {
        self.raw_score += evidence.weight;
        self.has_image |= evidence.kind == SignalKind::Image;
        self.evidence.push(evidence);
    }

    pub fn score(&self) -> f64 {
        self.raw_score.clamp(0.0, 1.0)
    }
}

/// Groups contributions by profile id, preserving per-profile order.
pub fn accumulate<I>(contributions: I) -> BTreeMap<String, Candidate>
where
    I: IntoIterator<Item = Evidence>,
{
    contributions
        .into_iter()
        .fold(BTreeMap::new(), |mut candidates: BTreeMap<String, Candidate>, evidence| {
            candidates
                .entry(evidence.profile_id.clone())
                .or_default()
                .absorb(evidence);
            candidates
        })
}

/// Picks the winning candidate, or `None` when there is no evidence at all.
pub fn resolve(candidates: BTreeMap<String, Candidate>) -> Option<(String, Candidate)> {
    // BTreeMap iterates ids in ascending order, so a later candidate only
    // replaces the current best when it is strictly better.
    candidates
        .into_iter()
        .fold(None, |best: Option<(String, Candidate)>, (id, candidate)| match best {
            None => Some((id, candidate)),
            Some((best_id, best)) => {
                if beats(&candidate, &best) {
                    Some((id, candidate))
                } else {
                    Some((best_id, best))
                }
            }
        })
}

fn beats(challenger: &Candidate, incumbent: &Candidate) -> bool {
    let delta = challenger.score() - incumbent.score();
    if delta > SCORE_EPSILON {
        return true;
    }
    delta.abs() <= SCORE_EPSILON && challenger.has_image && !incumbent.has_image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(profile: &str, kind: SignalKind, weight: f64) -> Evidence {
        Evidence {
            profile_id: profile.to_string(),
            kind,
            matched: "m".to_string(),
            observed: "o".to_string(),
            weight,
        }
    }

    #[test]
    fn test_accumulate_sums_per_profile() {
        let candidates = accumulate(vec![
            ev("a", SignalKind::Image, 0.70),
            ev("b", SignalKind::Port, 0.25),
            ev("a", SignalKind::Env, 0.15),
        ]);
        assert_eq!(candidates.len(), 2);
        let a = &candidates["a"];
        assert!((a.raw_score - 0.85).abs() < 1e-9);
        assert!(a.has_image);
        assert_eq!(a.evidence.len(), 2);
        assert_eq!(a.evidence[1].kind, SignalKind::Env);
        assert!(!candidates["b"].has_image);
    }

    #[test]
    fn test_score_is_clamped() {
        let candidates = accumulate(vec![
            ev("a", SignalKind::Image, 0.70),
            ev("a", SignalKind::Port, 0.25),
            ev("a", SignalKind::Env, 0.15),
        ]);
        let a = &candidates["a"];
        assert!(a.raw_score > 1.0);
        assert_eq!(a.score(), 1.0);
    }

    #[test]
    fn test_resolve_empty_is_none() {
        assert!(resolve(BTreeMap::new()).is_none());
    }

    #[test]
    fn test_resolve_highest_score_wins() {
        let candidates = accumulate(vec![
            ev("redis", SignalKind::Port, 0.25),
            ev("kafka", SignalKind::Image, 0.70),
        ]);
        let (id, _) = resolve(candidates).unwrap();
        assert_eq!(id, "kafka");
    }

    #[test]
    fn test_tie_prefers_image_evidence() {
        // "a" sorts first but only has port and env evidence.
        let candidates = accumulate(vec![
            ev("z", SignalKind::Image, 0.5),
            ev("a", SignalKind::Port, 0.25),
            ev("a", SignalKind::Env, 0.25),
        ]);
        let (id, _) = resolve(candidates).unwrap();
        assert_eq!(id, "z");
    }

    #[test]
    fn test_tie_falls_back_to_lexicographic_id() {
        let candidates = accumulate(vec![
            ev("mysql", SignalKind::Port, 0.25),
            ev("mariadb", SignalKind::Port, 0.25),
        ]);
        let (id, _) = resolve(candidates).unwrap();
        assert_eq!(id, "mariadb");
    }

    #[test]
    fn test_clamped_scores_tie() {
        // Both saturate at 1.0; image evidence decides.
        let candidates = accumulate(vec![
            ev("a", SignalKind::Port, 0.75),
            ev("a", SignalKind::Label, 0.75),
            ev("b", SignalKind::Image, 1.0),
        ]);
        let (id, winner) = resolve(candidates).unwrap();
        assert_eq!(id, "b");
        assert_eq!(winner.score(), 1.0);
    }

    #[test]
    fn test_float_noise_counts_as_tie() {
        // 0.1 + 0.2 is not exactly 0.3 in binary floating point.
        let candidates = accumulate(vec![
            ev("b", SignalKind::Port, 0.1),
            ev("b", SignalKind::Env, 0.2),
            ev("a", SignalKind::Label, 0.3),
        ]);
        let (id, _) = resolve(candidates).unwrap();
        assert_eq!(id, "a");
    }
}
