use crate::engine::board::{Board, Shift};
use crate::engine::grid::Direction;
use crate::error::Result;
use crate::tui::events::{Event, EventSource, UserInput};
use crate::tui::renderer::Renderer;

pub(crate) struct Vim2048<R: Renderer, E: EventSource> {
    renderer: R,
    event_source: E,
    board: Board,
}

impl<R: Renderer, E: EventSource> Vim2048<R, E> {
    pub(crate) fn new(board: Board, renderer: R, event_source: E) -> Self {
        Self {
            board,
            renderer,
            event_source,
        }
    }

    /// Run consumes the Vim2048 instance and plays until the player quits or input fails.
    pub(crate) fn run(mut self) -> Result<()> {
        self.renderer.clear()?;
        self.renderer.greet()?;
        self.renderer.render(self.board.current())?;

        loop {
            match self.event_source.next_event()? {
                Event::UserInput(UserInput::Quit) => {
                    self.renderer.clear()?;
                    log::info!("quit");
                    break;
                }
                Event::UserInput(UserInput::Direction(d)) => {
                    self.shift(d);
                    self.redraw()?;
                }
                Event::UserInput(UserInput::Ignored) | Event::Resize => self.redraw()?,
            }
        }
        Ok(())
    }
}

impl<R: Renderer, E: EventSource> Vim2048<R, E> {
    fn shift(&mut self, direction: Direction) {
        if let Shift::Accepted { spawned } = self.board.shift(direction) {
            match spawned {
                Some(idx) => log::debug!("shifted {}, new tile at {}", direction, idx),
                None => log::debug!("shifted {}, board full", direction),
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.renderer.clear()?;
        self.renderer.render(self.board.current())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::grid::{Grid, Idx};
    use crate::engine::row::Cell;
    use crate::tui::error::{InnerError, Result as TuiResult};

    #[derive(Clone, Debug, PartialEq)]
    enum Frame {
        Clear,
        Greet,
        Grid(Grid),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        frames: Rc<RefCell<Vec<Frame>>>,
    }

    impl Recorder {
        fn frames(&self) -> Vec<Frame> {
            self.frames.borrow().clone()
        }

        fn grids(&self) -> Vec<Grid> {
            self.frames()
                .into_iter()
                .filter_map(|f| match f {
                    Frame::Grid(g) => Some(g),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for Recorder {
        fn clear(&mut self) -> TuiResult<()> {
            self.frames.borrow_mut().push(Frame::Clear);
            Ok(())
        }

        fn greet(&mut self) -> TuiResult<()> {
            self.frames.borrow_mut().push(Frame::Greet);
            Ok(())
        }

        fn render(&mut self, grid: &Grid) -> TuiResult<()> {
            self.frames.borrow_mut().push(Frame::Grid(grid.clone()));
            Ok(())
        }
    }

    /// Script replays keys and reports a closed stream once they run out.
    struct Script {
        keys: RefCell<VecDeque<char>>,
    }

    impl Script {
        fn new(keys: &str) -> Self {
            Self {
                keys: RefCell::new(keys.chars().collect()),
            }
        }
    }

    impl EventSource for Script {
        fn next_event(&self) -> TuiResult<Event> {
            match self.keys.borrow_mut().pop_front() {
                Some(c) => Ok(Event::UserInput(UserInput::from(c))),
                None => Err(InnerError::InputClosed.into()),
            }
        }
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn board(rows: [[Cell; 5]; 5]) -> Board {
        let mut board = Board::new(SmallRng::seed_from_u64(42));
        board.set_grid(Grid::from(rows));
        board
    }

    fn lone_tile() -> [[Cell; 5]; 5] {
        let mut rows = [[0; 5]; 5];
        rows[2][3] = 1;
        rows
    }

    #[test]
    fn quit_immediately() {
        init_logging();
        let recorder = Recorder::default();
        let game = Vim2048::new(board(lone_tile()), recorder.clone(), Script::new("q"));
        game.run().unwrap();
        assert_eq!(
            recorder.frames(),
            vec![
                Frame::Clear,
                Frame::Greet,
                Frame::Grid(Grid::from(lone_tile())),
                Frame::Clear,
            ]
        );
    }

    #[test]
    fn accepted_move_spawns_one_tile() {
        init_logging();
        let recorder = Recorder::default();
        let game = Vim2048::new(board(lone_tile()), recorder.clone(), Script::new("hQ"));
        game.run().unwrap();

        let grids = recorder.grids();
        assert_eq!(grids.len(), 2);
        let moved = &grids[1];
        assert_eq!(moved.get(&Idx(0, 2)), 1);
        assert_eq!(moved.sum(), 2);
        assert_eq!(moved.empty_cells().len(), 23);
        assert_eq!(recorder.frames().last(), Some(&Frame::Clear));
    }

    #[test]
    fn rejected_and_ignored_keys_rerender_unchanged() {
        init_logging();
        let mut rows = [[0; 5]; 5];
        rows[0][0] = 1;
        let recorder = Recorder::default();
        let game = Vim2048::new(board(rows), recorder.clone(), Script::new("hkx?q"));
        game.run().unwrap();

        let grids = recorder.grids();
        assert_eq!(grids.len(), 5);
        assert!(grids.iter().all(|g| *g == Grid::from(rows)));
    }

    #[test]
    fn quit_stops_without_mutation() {
        init_logging();
        let recorder = Recorder::default();
        let game = Vim2048::new(board(lone_tile()), recorder.clone(), Script::new("qhjkl"));
        game.run().unwrap();
        assert_eq!(recorder.grids(), vec![Grid::from(lone_tile())]);
    }

    #[test]
    fn closed_input_is_fatal() {
        init_logging();
        let recorder = Recorder::default();
        let game = Vim2048::new(board(lone_tile()), recorder.clone(), Script::new("l"));
        let err = game.run().unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::TuiError { ref source } if matches!(source.inner, InnerError::InputClosed)
        ));
        assert_eq!(recorder.grids().len(), 2);
    }
}
