use std::{fmt, str::FromStr};

use super::{
    bit_board::{BOARD_COLS, BOARD_ROWS, CellMask, GRID_LEN},
    player::{PieceType, Player},
    position::Position,
};

/// Maximum number of pawns one side may have on the board.
pub const MAX_PAWNS: u32 = 4;

const EMPTY_TOKEN: &str = "..";

/// Piece placement written as a 5x5 grid of tokens.
///
/// Rows are separated by newlines and cells by whitespace. A cell is `K1`/`P1` for a P1
/// king/pawn, `K2`/`P2` for P2, and `.` or `..` for an empty cell. Row 0 (P2's side) is
/// written first.
///
/// ```text
/// P2 P2 K2 P2 P2
/// .. .. .. .. ..
/// .. .. .. .. ..
/// .. .. .. .. ..
/// P1 P1 K1 P1 P1
/// ```
///
/// Parsing requires exactly one king per side and at most [`MAX_PAWNS`] pawns per side.
/// Rendering always writes `..` for empty cells, so a rendered literal parses back to the
/// same placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLiteral {
    pub p1_king: CellMask,
    pub p1_pawns: CellMask,
    pub p2_king: CellMask,
    pub p2_pawns: CellMask,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardLiteralError {
    #[display("expected {BOARD_ROWS} rows, found {found}")]
    WrongRowCount { found: usize },
    #[display("row {row}: expected {BOARD_COLS} cells, found {found}")]
    WrongRowWidth { row: usize, found: usize },
    #[display("unknown token `{token}` at row {row}, column {col}")]
    UnknownToken {
        row: usize,
        col: usize,
        token: String,
    },
    #[display("{player} must have exactly one king, found {found}")]
    KingCount { player: Player, found: u32 },
    #[display("{player} has {found} pawns, at most {MAX_PAWNS} allowed")]
    TooManyPawns { player: Player, found: u32 },
}

impl BoardLiteral {
    /// Parses a literal given as separate row strings.
    pub fn from_rows<S>(rows: &[S]) -> Result<Self, BoardLiteralError>
    where
        S: AsRef<str>,
    {
        if rows.len() != GRID_LEN {
            return Err(BoardLiteralError::WrongRowCount { found: rows.len() });
        }

        let mut literal = BoardLiteral::default();
        for (r, (row, line)) in (0..BOARD_ROWS).zip(rows).enumerate() {
            let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
            if tokens.len() != GRID_LEN {
                return Err(BoardLiteralError::WrongRowWidth {
                    row: r,
                    found: tokens.len(),
                });
            }
            for (c, (col, token)) in (0..BOARD_COLS).zip(tokens).enumerate() {
                let piece = parse_token(token).ok_or_else(|| BoardLiteralError::UnknownToken {
                    row: r,
                    col: c,
                    token: token.to_owned(),
                })?;
                if let Some((player, piece_type)) = piece {
                    literal
                        .mask_mut(player, piece_type)
                        .insert(Position::new(row, col));
                }
            }
        }

        literal.validate()?;
        Ok(literal)
    }

    #[must_use]
    pub fn mask(&self, player: Player, piece_type: PieceType) -> CellMask {
        match (player, piece_type) {
            (Player::P1, PieceType::King) => self.p1_king,
            (Player::P1, PieceType::Pawn) => self.p1_pawns,
            (Player::P2, PieceType::King) => self.p2_king,
            (Player::P2, PieceType::Pawn) => self.p2_pawns,
        }
    }

    fn mask_mut(&mut self, player: Player, piece_type: PieceType) -> &mut CellMask {
        match (player, piece_type) {
            (Player::P1, PieceType::King) => &mut self.p1_king,
            (Player::P1, PieceType::Pawn) => &mut self.p1_pawns,
            (Player::P2, PieceType::King) => &mut self.p2_king,
            (Player::P2, PieceType::Pawn) => &mut self.p2_pawns,
        }
    }

    /// Piece standing on `pos`, if any.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<(Player, PieceType)> {
        Player::ALL
            .into_iter()
            .flat_map(|player| [(player, PieceType::King), (player, PieceType::Pawn)])
            .find(|&(player, piece_type)| self.mask(player, piece_type).contains(pos))
    }

    fn validate(&self) -> Result<(), BoardLiteralError> {
        for player in Player::ALL {
            let kings = self.mask(player, PieceType::King).count();
            if kings != 1 {
                return Err(BoardLiteralError::KingCount {
                    player,
                    found: kings,
                });
            }
            let pawns = self.mask(player, PieceType::Pawn).count();
            if pawns > MAX_PAWNS {
                return Err(BoardLiteralError::TooManyPawns {
                    player,
                    found: pawns,
                });
            }
        }
        Ok(())
    }
}

// `None` is an empty cell, the outer `None` an unknown token.
fn parse_token(token: &str) -> Option<Option<(Player, PieceType)>> {
    if token == "." || token == EMPTY_TOKEN {
        return Some(None);
    }
    let mut chars = token.chars();
    let piece_type = match chars.next()?.to_ascii_uppercase() {
        'K' => PieceType::King,
        'P' => PieceType::Pawn,
        _ => return None,
    };
    let player = Player::from_digit(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some(Some((player, piece_type)))
}

impl FromStr for BoardLiteral {
    type Err = BoardLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for BoardLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.piece_at(Position::new(row, col)) {
                    Some((player, piece_type)) => {
                        write!(f, "{}{}", piece_type.as_char(), player.as_digit())?;
                    }
                    None => f.write_str(EMPTY_TOKEN)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: &str = "
        P2 P2 K2 P2 P2
        .  .  .  .  .
        .  .  .  .  .
        .  .  .  .  .
        P1 P1 K1 P1 P1
    ";

    #[test]
    fn test_parse_standard_layout() {
        let literal: BoardLiteral = STANDARD.parse().unwrap();
        assert_eq!(literal.p1_king.bits(), 0x0000_0200);
        assert_eq!(literal.p1_pawns.bits(), 0x0000_0D80);
        assert_eq!(literal.p2_king.bits(), 0x2000_0000);
        assert_eq!(literal.p2_pawns.bits(), 0xD800_0000);
    }

    #[test]
    fn test_render_uses_double_dots() {
        let literal: BoardLiteral = STANDARD.parse().unwrap();
        let rendered = literal.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "P2 P2 K2 P2 P2");
        assert_eq!(lines[1], ".. .. .. .. ..");
        assert_eq!(lines[4], "P1 P1 K1 P1 P1");
        assert_eq!(rendered.parse::<BoardLiteral>().unwrap(), literal);
    }

    #[test]
    fn test_piece_at() {
        let literal: BoardLiteral = STANDARD.parse().unwrap();
        assert_eq!(
            literal.piece_at(Position::new(0, 2)),
            Some((Player::P2, PieceType::King))
        );
        assert_eq!(
            literal.piece_at(Position::new(4, 0)),
            Some((Player::P1, PieceType::Pawn))
        );
        assert_eq!(literal.piece_at(Position::new(2, 2)), None);
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert_eq!(
            "K1 . . . .".parse::<BoardLiteral>(),
            Err(BoardLiteralError::WrongRowCount { found: 1 })
        );
        let rows = [". . K2 . .", ". . . .", ". . . . .", ". . . . .", ". . K1 . ."];
        assert_eq!(
            BoardLiteral::from_rows(&rows),
            Err(BoardLiteralError::WrongRowWidth { row: 1, found: 4 })
        );
    }

    #[test]
    fn test_rejects_unknown_token() {
        let rows = [". . K2 . .", ". . . . .", ". Q1 . . .", ". . . . .", ". . K1 . ."];
        assert_eq!(
            BoardLiteral::from_rows(&rows),
            Err(BoardLiteralError::UnknownToken {
                row: 2,
                col: 1,
                token: "Q1".to_owned(),
            })
        );
        let rows = [". . K2 . .", ". . . . .", ". K3 . . .", ". . . . .", ". . K1 . ."];
        assert!(matches!(
            BoardLiteral::from_rows(&rows),
            Err(BoardLiteralError::UnknownToken { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_piece_counts() {
        let rows = [". . . . .", ". . . . .", ". . . . .", ". . . . .", ". . K1 . ."];
        assert_eq!(
            BoardLiteral::from_rows(&rows),
            Err(BoardLiteralError::KingCount {
                player: Player::P2,
                found: 0,
            })
        );
        let rows = ["K1 . K2 . .", ". . . . .", ". . . . .", ". . . . .", ". . K1 . ."];
        assert_eq!(
            BoardLiteral::from_rows(&rows),
            Err(BoardLiteralError::KingCount {
                player: Player::P1,
                found: 2,
            })
        );
        let rows = [". . K2 . .", ". . . . .", ". . . . .", "P1 . . . .", "P1 P1 K1 P1 P1"];
        assert_eq!(
            BoardLiteral::from_rows(&rows),
            Err(BoardLiteralError::TooManyPawns {
                player: Player::P1,
                found: 5,
            })
        );
    }
}
