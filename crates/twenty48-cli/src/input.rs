use twenty48_engine::engine::Move;

/// A line of terminal input, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(Move),
    NewGame,
    KeepPlaying,
    Quit,
}

/// Decode one line. Accepts wasd, vim keys and direction words.
pub fn parse(line: &str) -> Option<Action> {
    let action = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "k" | "up" => Action::Shift(Move::Up),
        "s" | "j" | "down" => Action::Shift(Move::Down),
        "a" | "h" | "left" => Action::Shift(Move::Left),
        "d" | "l" | "right" => Action::Shift(Move::Right),
        "n" | "new" => Action::NewGame,
        "c" | "continue" => Action::KeepPlaying,
        "q" | "quit" | "exit" => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_directions() {
        assert_eq!(parse("w"), Some(Action::Shift(Move::Up)));
        assert_eq!(parse(" Left \n"), Some(Action::Shift(Move::Left)));
        assert_eq!(parse("j"), Some(Action::Shift(Move::Down)));
        assert_eq!(parse("D"), Some(Action::Shift(Move::Right)));
    }

    #[test]
    fn it_parses_commands() {
        assert_eq!(parse("n"), Some(Action::NewGame));
        assert_eq!(parse("continue"), Some(Action::KeepPlaying));
        assert_eq!(parse("q"), Some(Action::Quit));
        assert_eq!(parse(""), None);
        assert_eq!(parse("diagonal"), None);
    }
}
