use chesstama_engine::{Board, BoardLiteral, BoardLiteralError, Card, Hand, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionFileError {
    #[display("invalid grid: {_0}")]
    Grid(BoardLiteralError),
    #[display("{player} is to move but has no upcoming card")]
    MissingUpcoming { player: Player },
}

/// Board position as stored in a JSON file.
///
/// `grid` holds five rows of whitespace-separated tokens (`K1`, `P2`, `.`), top row
/// first. A missing `current_player` defaults to P1. The side to move must name its
/// upcoming card; the other side's defaults to `EMPTY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionFile {
    pub grid: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player: Option<Player>,
    pub p1_cards: Hand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p1_upcoming: Option<Card>,
    pub p2_cards: Hand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2_upcoming: Option<Card>,
}

impl PositionFile {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let grid = board.literal().to_string().lines().map(str::to_owned).collect();
        Self {
            grid,
            current_player: Some(board.current_player()),
            p1_cards: board.cards(Player::P1),
            p1_upcoming: Some(board.upcoming_card(Player::P1)),
            p2_cards: board.cards(Player::P2),
            p2_upcoming: Some(board.upcoming_card(Player::P2)),
        }
    }

    pub fn to_board(&self) -> Result<Board, PositionFileError> {
        let literal = BoardLiteral::from_rows(&self.grid).map_err(PositionFileError::Grid)?;
        let current = self.current_player.unwrap_or(Player::P1);
        let upcoming = |player: Player| {
            let card = match player {
                Player::P1 => self.p1_upcoming,
                Player::P2 => self.p2_upcoming,
            }
            .unwrap_or(Card::Empty);
            // The side to move draws its upcoming card into the hand after moving
            if player == current && card.is_empty() {
                return Err(PositionFileError::MissingUpcoming { player });
            }
            Ok(card)
        };
        Ok(Board::builder()
            .pieces(literal)
            .cards(Player::P1, self.p1_cards)
            .upcoming(Player::P1, upcoming(Player::P1)?)
            .cards(Player::P2, self.p2_cards)
            .upcoming(Player::P2, upcoming(Player::P2)?)
            .current_player(current)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use chesstama_engine::Position;

    use super::*;

    fn minimal_json(extra: &str) -> String {
        format!(
            r#"{{
                "grid": [
                    ". . K2 . .",
                    ". P2 . . .",
                    ". . . . .",
                    ". . . P1 .",
                    ". . K1 . ."
                ],
                "p1_cards": ["TIGER", "CRAB"],
                "p2_cards": ["GOOSE", "ROOSTER"]{extra}
            }}"#
        )
    }

    #[test]
    fn test_parse_minimal_file() {
        let file: PositionFile =
            serde_json::from_str(&minimal_json(r#", "p1_upcoming": "EEL""#)).unwrap();
        let board = file.to_board().unwrap();

        assert_eq!(board.current_player(), Player::P1);
        assert_eq!(board.king_position(Player::P2), Some(Position::new(0, 2)));
        assert_eq!(board.pawn_positions(Player::P1).len(), 1);
        assert_eq!(board.cards(Player::P1), [Card::Tiger, Card::Crab]);
        assert_eq!(board.upcoming_card(Player::P1), Card::Eel);
        assert_eq!(board.upcoming_card(Player::P2), Card::Empty);
    }

    #[test]
    fn test_side_to_move_needs_upcoming_card() {
        let file: PositionFile = serde_json::from_str(&minimal_json("")).unwrap();
        assert_eq!(
            file.to_board(),
            Err(PositionFileError::MissingUpcoming { player: Player::P1 })
        );

        let file: PositionFile = serde_json::from_str(&minimal_json(
            r#", "current_player": "P2", "p2_upcoming": "EMPTY""#,
        ))
        .unwrap();
        assert_eq!(
            file.to_board(),
            Err(PositionFileError::MissingUpcoming { player: Player::P2 })
        );
    }

    #[test]
    fn test_hand_stays_playable_after_first_move() {
        let file: PositionFile = serde_json::from_str(&minimal_json(
            r#", "current_player": "P2", "p2_upcoming": "HORSE""#,
        ))
        .unwrap();
        let mut board = file.to_board().unwrap();
        let mv = board.candidate_moves()[0];
        board.make_move(&mv).unwrap();
        assert!(board.cards(Player::P2).iter().all(|card| !card.is_empty()));
        assert_eq!(board.upcoming_card(Player::P1), mv.card());
    }

    #[test]
    fn test_opening_survives_file_format() {
        let board = Board::new();
        let file = PositionFile::from_board(&board);
        assert_eq!(file.grid.len(), 5);

        let json = serde_json::to_string(&file).unwrap();
        let parsed: PositionFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_board().unwrap(), board);
    }

    #[test]
    fn test_rejects_bad_grid() {
        let file = PositionFile {
            grid: vec![". . . . .".to_owned(); 5],
            current_player: None,
            p1_cards: [Card::Tiger, Card::Crab],
            p1_upcoming: None,
            p2_cards: [Card::Goose, Card::Rooster],
            p2_upcoming: None,
        };
        assert!(matches!(
            file.to_board(),
            Err(PositionFileError::Grid(BoardLiteralError::KingCount { .. }))
        ));
    }
}
