use serde::{Deserialize, Serialize};

/// Unit every rule weight is a multiple of.
pub const BASE_SCORE: i64 = 1;

/// A heuristic rule and its signed weight.
///
/// `OPP_*` rules and `UNIQUE_MOVE` reward the evaluated side, the others penalize threats
/// against it. `MAX_SCORE`/`MIN_SCORE` are the forced win/loss sentinels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum EvalRule {
    #[display("OPP_KING_CAPTURE")]
    OppKingCapture,
    #[display("OPP_KING_HOME")]
    OppKingHome,
    #[display("OPP_PAWN_CAPTURE")]
    OppPawnCapture,
    #[display("UNIQUE_MOVE")]
    UniqueMove,
    #[display("KING_CAPTURE")]
    KingCapture,
    #[display("KING_HOME")]
    KingHome,
    #[display("PAWN_CAPTURE")]
    PawnCapture,
    #[display("MAX_SCORE")]
    MaxScore,
    #[display("MIN_SCORE")]
    MinScore,
}

impl EvalRule {
    pub const LEN: usize = 9;

    pub const ALL: [EvalRule; EvalRule::LEN] = [
        EvalRule::OppKingCapture,
        EvalRule::OppKingHome,
        EvalRule::OppPawnCapture,
        EvalRule::UniqueMove,
        EvalRule::KingCapture,
        EvalRule::KingHome,
        EvalRule::PawnCapture,
        EvalRule::MaxScore,
        EvalRule::MinScore,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn weight(self) -> i64 {
        match self {
            EvalRule::OppKingCapture | EvalRule::OppKingHome => BASE_SCORE * 100_000,
            EvalRule::OppPawnCapture => BASE_SCORE * 20_000,
            EvalRule::UniqueMove => BASE_SCORE * 50,
            EvalRule::KingCapture | EvalRule::KingHome => BASE_SCORE * -150_000,
            EvalRule::PawnCapture => BASE_SCORE * -25_000,
            EvalRule::MaxScore => i64::MAX,
            EvalRule::MinScore => i64::MIN,
        }
    }
}
