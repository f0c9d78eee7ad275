use super::error::Result;
use crate::engine::grid::Direction;

const QUIT: char = 'Q';

/// EventSource blocks until the player produces the next event. Keys are read raw: unbuffered
/// and without echo.
pub(crate) trait EventSource {
    fn next_event(&self) -> Result<Event>;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    UserInput(UserInput),
    Resize,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum UserInput {
    Direction(Direction),
    Quit,
    /// Any key without a binding.
    Ignored,
}

impl From<char> for UserInput {
    fn from(c: char) -> Self {
        if c.to_ascii_uppercase() == QUIT {
            return UserInput::Quit;
        }
        match Direction::try_from(c) {
            Ok(d) => UserInput::Direction(d),
            Err(_) => UserInput::Ignored,
        }
    }
}
