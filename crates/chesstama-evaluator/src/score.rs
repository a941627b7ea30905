use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer};

use crate::eval_rule::EvalRule;

/// Heuristic value of a board with a per-rule breakdown.
///
/// The ledger counts how many times each [`EvalRule`] fired; the total is the sum of
/// `count * weight` over all rules, computed with saturating arithmetic so the sentinel
/// scores stay at the ends of the `i64` range. The sentinels themselves carry an empty
/// ledger.
///
/// Scores are compared by [`Score::total_score`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    counts: [u32; EvalRule::LEN],
    total: i64,
}

impl Score {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; EvalRule::LEN],
            total: 0,
        }
    }

    /// Forced-win sentinel.
    #[must_use]
    pub const fn max() -> Self {
        Self::sentinel(EvalRule::MaxScore)
    }

    /// Forced-loss sentinel.
    #[must_use]
    pub const fn min() -> Self {
        Self::sentinel(EvalRule::MinScore)
    }

    const fn sentinel(rule: EvalRule) -> Self {
        Self {
            counts: [0; EvalRule::LEN],
            total: rule.weight(),
        }
    }

    pub fn add(&mut self, rule: EvalRule) {
        self.add_count(rule, 1);
    }

    pub fn add_count(&mut self, rule: EvalRule, count: u32) {
        if count == 0 {
            return;
        }
        self.counts[rule.index()] += count;
        self.total = self
            .total
            .saturating_add(rule.weight().saturating_mul(i64::from(count)));
    }

    #[inline]
    #[must_use]
    pub fn count(&self, rule: EvalRule) -> u32 {
        self.counts[rule.index()]
    }

    #[inline]
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.total
    }

    /// Rules that fired, with their counts and signed contribution.
    pub fn contributions(&self) -> impl Iterator<Item = (EvalRule, u32, i64)> + '_ {
        EvalRule::ALL.into_iter().filter_map(|rule| {
            let count = self.count(rule);
            (count > 0).then(|| {
                (
                    rule,
                    count,
                    rule.weight().saturating_mul(i64::from(count)),
                )
            })
        })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut contributions: Vec<_> = self.contributions().collect();
        contributions.sort_by_key(|&(_, _, value)| std::cmp::Reverse(value));
        for (rule, count, value) in contributions {
            writeln!(f, "{:<16} x{count:<3} {value:>8}", rule.to_string())?;
        }
        match self.total {
            i64::MAX => write!(f, "total: MAX_SCORE"),
            i64::MIN => write!(f, "total: MIN_SCORE"),
            total => write!(f, "total: {total}"),
        }
    }
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Repr {
            total: i64,
            rules: BTreeMap<EvalRule, u32>,
        }

        Repr {
            total: self.total,
            rules: self
                .contributions()
                .map(|(rule, count, _)| (rule, count))
                .collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_and_total() {
        let mut score = Score::new();
        score.add(EvalRule::OppPawnCapture);
        score.add_count(EvalRule::UniqueMove, 6);
        score.add(EvalRule::PawnCapture);
        assert_eq!(score.count(EvalRule::OppPawnCapture), 1);
        assert_eq!(score.count(EvalRule::UniqueMove), 6);
        assert_eq!(score.count(EvalRule::KingCapture), 0);
        assert_eq!(score.total_score(), 20_000 + 6 * 50 - 25_000);
        assert_eq!(score.contributions().count(), 3);
    }

    #[test]
    fn test_add_zero_count_is_noop() {
        let mut score = Score::new();
        score.add_count(EvalRule::KingHome, 0);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(Score::max().total_score(), i64::MAX);
        assert_eq!(Score::min().total_score(), i64::MIN);
        assert!(Score::max().total_score() > Score::new().total_score());

        let mut score = Score::max();
        score.add(EvalRule::OppKingCapture);
        assert_eq!(score.total_score(), i64::MAX);
        let mut score = Score::min();
        score.add(EvalRule::KingCapture);
        assert_eq!(score.total_score(), i64::MIN);
    }

    #[test]
    fn test_display() {
        let mut score = Score::new();
        score.add_count(EvalRule::UniqueMove, 5);
        score.add(EvalRule::KingCapture);
        let text = score.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("UNIQUE_MOVE"));
        assert!(lines[1].starts_with("KING_CAPTURE"));
        assert_eq!(lines[2], "total: -149750");
        assert_eq!(Score::min().to_string(), "total: MIN_SCORE");
    }

    #[test]
    fn test_serialize() {
        let mut score = Score::new();
        score.add(EvalRule::OppKingHome);
        let json = serde_json::to_value(score).unwrap();
        assert_eq!(json["total"], 100_000);
        assert_eq!(json["rules"]["OPP_KING_HOME"], 1);
    }
}
