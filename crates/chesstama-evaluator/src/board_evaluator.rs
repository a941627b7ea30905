//! Heuristic board evaluation.
//!
//! [`Evaluator`] scores a board for one side (the *perspective*) in three passes:
//!
//! 1. **Threats** - every candidate move of the perspective side that would land on the
//!    opponent king (`OPP_KING_CAPTURE`), bring its own king onto the opponent's home slot
//!    (`OPP_KING_HOME`), or land on an opponent pawn (`OPP_PAWN_CAPTURE`)
//! 2. **Mobility** - number of distinct cells the perspective side can move to
//!    (`UNIQUE_MOVE`)
//! 3. **Counter-threats** - the threat pass run for the opponent, recorded under the
//!    negatively weighted `KING_CAPTURE`, `KING_HOME` and `PAWN_CAPTURE` rules
//!
//! Threats are counted once per (piece, card, offset) candidate, so a cell reachable
//! through both hand cards counts twice. Mobility is only measured for the perspective
//! side.
//!
//! A finished game short-circuits to [`Score::max`] when the perspective side won and
//! [`Score::min`] otherwise.

use std::fmt;

use chesstama_engine::{Board, CellMask, PieceType, Player};

use crate::{eval_rule::EvalRule, score::Score};

/// Scores a board from the point of view of `perspective`. Higher is better for that side.
pub trait BoardEvaluator: fmt::Debug {
    fn evaluate(&self, board: &Board, perspective: Player) -> Score;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

#[derive(Debug, Clone, Copy)]
struct ThreatRules {
    king_capture: EvalRule,
    king_home: EvalRule,
    pawn_capture: EvalRule,
}

const OWN_THREATS: ThreatRules = ThreatRules {
    king_capture: EvalRule::OppKingCapture,
    king_home: EvalRule::OppKingHome,
    pawn_capture: EvalRule::OppPawnCapture,
};

const OPPONENT_THREATS: ThreatRules = ThreatRules {
    king_capture: EvalRule::KingCapture,
    king_home: EvalRule::KingHome,
    pawn_capture: EvalRule::PawnCapture,
};

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Value of the board for the side to move.
    #[must_use]
    pub fn board_value(&self, board: &Board) -> Score {
        self.evaluate(board, board.current_player())
    }
}

impl BoardEvaluator for Evaluator {
    fn evaluate(&self, board: &Board, perspective: Player) -> Score {
        if board.is_game_over() {
            return if board.winner() == Some(perspective) {
                Score::max()
            } else {
                Score::min()
            };
        }

        let mut score = Score::new();
        record_threats(board, perspective, OWN_THREATS, &mut score);
        record_mobility(board, perspective, &mut score);
        record_threats(board, perspective.opponent(), OPPONENT_THREATS, &mut score);
        score
    }
}

fn record_threats(board: &Board, attacker: Player, rules: ThreatRules, score: &mut Score) {
    let defender = attacker.opponent();
    let defender_king = board.king_position(defender);
    let defender_home = defender.king_home();
    let defender_pawns = board.pawn_mask(defender);

    for mv in board.candidate_moves_for(attacker) {
        let to = mv.to();
        if defender_king == Some(to) {
            score.add(rules.king_capture);
        }
        if mv.piece_type() == PieceType::King && to == defender_home {
            score.add(rules.king_home);
        }
        if defender_pawns.contains(to) {
            score.add(rules.pawn_capture);
        }
    }
}

fn record_mobility(board: &Board, player: Player, score: &mut Score) {
    let destinations: CellMask = board
        .candidate_moves_for(player)
        .into_iter()
        .map(|mv| mv.to())
        .collect();
    score.add_count(EvalRule::UniqueMove, destinations.count());
}
