use sweeper_core::{CellState, GameSession, GameStatus};

fn cell_glyph(state: CellState, triggered: bool) -> char {
    match state {
        CellState::Hidden => '#',
        CellState::Flagged => 'F',
        CellState::Revealed(0) => '.',
        CellState::Revealed(count) => char::from(b'0' + count),
        CellState::Exploded if triggered => 'X',
        CellState::Exploded => '*',
    }
}

/// Text view of the board with a status line on top.
pub(crate) fn render(game: &GameSession) -> String {
    let board = game.board();
    let mut out = String::new();

    let status = match game.status() {
        GameStatus::InProgress if game.flag_mode() => "flagging",
        GameStatus::InProgress => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    };
    out.push_str(&format!(
        "flags: {}  time: {}s  [{}]\n",
        game.flags_remaining(),
        game.elapsed_seconds(),
        status
    ));

    out.push_str("    ");
    for col in 0..board.columns() {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for row in 0..board.rows() {
        out.push_str(&format!("{:>3} ", row));
        for col in 0..board.columns() {
            let coords = (row, col);
            let glyph = cell_glyph(board[coords].state(), game.triggered_mine() == Some(coords));
            out.push_str(&format!("{:>3}", glyph));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{FixedMinePlacer, GameConfig};

    fn game() -> GameSession {
        let config = GameConfig::new(2, 3, 1).unwrap();
        GameSession::with_placer(config, &mut FixedMinePlacer::new(&[(0, 2)])).unwrap()
    }

    #[test]
    fn renders_hidden_board() {
        let expected = "\
flags: 1  time: 0s  [playing]
      0  1  2
  0   #  #  #
  1   #  #  #
";
        assert_eq!(render(&game()), expected);
    }

    #[test]
    fn renders_numbers_flags_and_explosion() {
        let mut game = game();
        game.reveal((1, 1)).unwrap();
        game.toggle_flag((0, 0)).unwrap();
        assert!(render(&game).contains("  1   #  1  #"));
        assert!(render(&game).starts_with("flags: 0"));

        game.reveal((0, 2)).unwrap();
        let view = render(&game);
        assert!(view.contains("[lost]"));
        assert!(view.contains("  0   F  #  X"));
    }
}
