//! FEN-to-GameState parser.
//!
//! Builds a full state from a Forsyth-Edwards Notation string: board, side
//! to move, castling rights, en-passant target and clocks. FEN carries no
//! has-moved history, so it is inferred: pawns off their start row, kings
//! off their home square and corner rooks without a matching castling right
//! count as moved.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BOARD_SIZE, KING_HOME_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let mut field = |name: &str| {
        parts
            .next()
            .ok_or_else(|| ChessErrors::InvalidFENstring(format!("missing {name}")))
    };

    let board_part = field("board layout")?;
    let side_part = field("side to move")?;
    let castling_part = field("castling rights")?;
    let en_passant_part = field("en-passant square")?;
    let halfmove_part = field("halfmove clock")?;
    let fullmove_part = field("fullmove number")?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFENstring("extra trailing fields".to_owned()));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    check_king_counts(&game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_target(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFENstring(format!("halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFENstring(format!("fullmove number: {fullmove_part}")))?;

    infer_has_moved(&mut game_state);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != usize::from(BOARD_SIZE) {
        return Err(ChessErrors::InvalidFENstring(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut next_id = 0u16;
    for (y, row) in (0u8..).zip(rows) {
        let mut x = 0u8;

        for ch in row.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                x += empty_count as u8;
                if x > BOARD_SIZE {
                    return Err(ChessErrors::InvalidFENstring(format!("rank {row} overflows")));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            if x >= BOARD_SIZE {
                return Err(ChessErrors::InvalidFENstring(format!("rank {row} overflows")));
            }

            game_state.board.set(
                Position::new(x, y),
                Some(Piece::new(PieceId(next_id), kind, color)),
            );
            next_id += 1;
            x += 1;
        }

        if x != BOARD_SIZE {
            return Err(ChessErrors::InvalidFENstring(format!(
                "rank {row} does not sum to 8 files"
            )));
        }
    }

    Ok(())
}

/// A board may lack a king, but never hold two of one color.
fn check_king_counts(game_state: &GameState) -> Result<(), ChessErrors> {
    for color in [Color::White, Color::Black] {
        let kings = game_state
            .board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings > 1 {
            return Err(ChessErrors::InvalidFENstring(format!(
                "{kings} {color:?} kings on the board"
            )));
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFENstring(format!("side to move: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(Color::White, CastleSide::Kingside),
            'Q' => rights.grant(Color::White, CastleSide::Queenside),
            'k' => rights.grant(Color::Black, CastleSide::Kingside),
            'q' => rights.grant(Color::Black, CastleSide::Queenside),
            _ => return Err(ChessErrors::InvalidFENtoken(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str) -> Result<Option<Position>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_position(en_passant_part).map(Some)
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| (color, kind))
}

fn infer_has_moved(game_state: &mut GameState) {
    let rights = game_state.castling_rights;
    let placed: Vec<(Position, Piece)> = game_state.board.occupied().collect();

    for (at, piece) in placed {
        let home = piece.color.home_row();
        let unmoved = match piece.kind {
            PieceKind::Pawn => at.y == piece.color.pawn_start_row(),
            PieceKind::King => {
                at == Position::new(KING_HOME_FILE, home)
                    && (rights.has(piece.color, CastleSide::Kingside)
                        || rights.has(piece.color, CastleSide::Queenside))
            }
            PieceKind::Rook => [CastleSide::Kingside, CastleSide::Queenside]
                .into_iter()
                .any(|side| {
                    at == Position::new(side.rook_home_file(), home) && rights.has(piece.color, side)
                }),
            _ => true,
        };

        if !unmoved {
            game_state.board.set(at, Some(Piece { has_moved: true, ..piece }));
        }
    }
}
