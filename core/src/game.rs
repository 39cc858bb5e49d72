use alloc::string::{String, ToString};

use crate::*;

/// Ticket handed out by [`GameController::begin_loading`], a load result is only accepted with the latest one.
pub type Generation = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl GamePhase {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_playable(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Owns the board and the display for one page; every start replaces both wholesale.
#[derive(Clone, Debug)]
pub struct GameController<R> {
    config: BoardConfig,
    board: Option<Board>,
    renderer: R,
    phase: GamePhase,
    generation: Generation,
}

impl<R: BoardRenderer> GameController<R> {
    pub fn new(config: BoardConfig, renderer: R) -> Self {
        Self {
            config,
            board: None,
            renderer,
            phase: Default::default(),
            generation: 0,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Start or restart: throw away the current board, mask the display and hand out a new generation.
    ///
    /// Any load still running for an older generation becomes stale.
    pub fn begin_loading(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.board = None;
        self.renderer.reset();
        self.phase = GamePhase::Loading;
        log::debug!("loading board, generation {}", self.generation);
        self.generation
    }

    /// Takes the outcome of a load started with `generation`, returns whether it was accepted.
    pub fn end_loading(&mut self, generation: Generation, result: TriviaResult<Board>) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale load, generation {} superseded by {}",
                generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(board) => {
                self.renderer.render(&board);
                self.board = Some(board);
                self.phase = GamePhase::Ready;
                log::debug!("board ready, generation {}", generation);
            }
            Err(err) => {
                log::warn!("failed to load board: {}", err);
                self.phase = GamePhase::Failed(err.to_string());
            }
        }
        true
    }

    /// Fetches a new board through `client` and installs it.
    pub async fn start<S: TriviaSource>(&mut self, client: &mut TriviaClient<S>) -> bool {
        let generation = self.begin_loading();
        let result = client.fetch_board().await;
        self.end_loading(generation, result)
    }

    /// Click on a cell; clicks while there is no board, or outside of it, are ignored.
    pub fn on_cell_activated(&mut self, addr: CellAddr) -> Activation {
        let Self {
            board, renderer, ..
        } = self;

        let Some(board) = board.as_mut() else {
            log::trace!("click on {} without a board", addr);
            return Activation::Ignored;
        };

        match interaction::on_cell_activated(board, renderer, addr) {
            Ok(activation) => activation,
            Err(err) => {
                log::error!("click on {}: {}", addr, err);
                Activation::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::board;
    use crate::client::tests::FakeSource;
    use futures_executor::block_on;

    fn controller(config: BoardConfig) -> GameController<DisplayGrid> {
        GameController::new(config, DisplayGrid::new(config))
    }

    #[test]
    fn starts_idle_and_masked() {
        let game = controller(BoardConfig::STANDARD);

        assert_eq!(game.phase(), &GamePhase::Idle);
        assert!(game.board().is_none());
        assert!(game.renderer().is_masked());
    }

    #[test]
    fn start_renders_a_full_board() {
        let source = FakeSource::with_categories(100, 5);
        let mut client = TriviaClient::new(&source, BoardConfig::STANDARD, 5);
        let mut game = controller(BoardConfig::STANDARD);

        assert!(block_on(game.start(&mut client)));

        assert_eq!(game.phase(), &GamePhase::Ready);
        let board = game.board().unwrap();
        assert_eq!((board.cols(), board.rows()), (6, 5));
        assert_eq!(game.renderer().headers().len(), 6);
        assert!(game.renderer().is_masked());
    }

    #[test]
    fn clicks_reveal_question_then_answer() {
        let config = BoardConfig::new(2, 2);
        let mut game = controller(config);
        let generation = game.begin_loading();
        game.end_loading(generation, Ok(board(config)));
        let addr = CellAddr::new(1, 0);

        assert_eq!(game.on_cell_activated(addr), Activation::Revealed);
        assert_eq!(game.renderer().cell(addr), "c1 q0");
        assert_eq!(game.on_cell_activated(addr), Activation::Revealed);
        assert_eq!(game.renderer().cell(addr), "c1 a0");
        assert_eq!(game.on_cell_activated(addr), Activation::Ignored);
        assert_eq!(game.renderer().cell(addr), "c1 a0");
        assert_eq!(
            game.board().unwrap()[addr].state(),
            RevealState::ShowingAnswer
        );
    }

    #[test]
    fn clicks_without_a_board_or_off_the_board_are_ignored() {
        let config = BoardConfig::new(2, 2);
        let mut game = controller(config);

        assert_eq!(game.on_cell_activated(CellAddr::new(0, 0)), Activation::Ignored);

        let generation = game.begin_loading();
        game.end_loading(generation, Ok(board(config)));
        assert_eq!(game.on_cell_activated(CellAddr::new(0, 9)), Activation::Ignored);
    }

    #[test]
    fn restart_masks_every_cell_before_new_content_arrives() {
        let config = BoardConfig::new(2, 2);
        let mut game = controller(config);
        let generation = game.begin_loading();
        game.end_loading(generation, Ok(board(config)));
        game.on_cell_activated(CellAddr::new(0, 0));
        game.on_cell_activated(CellAddr::new(1, 1));

        let generation = game.begin_loading();

        assert!(game.phase().is_loading());
        assert!(game.board().is_none());
        assert!(game.renderer().is_masked());
        assert!(game.renderer().headers().is_empty());

        assert!(game.end_loading(generation, Ok(board(config))));
        assert_eq!(game.board().unwrap()[CellAddr::new(0, 0)].state(), RevealState::Hidden);
        assert!(game.renderer().is_masked());
    }

    #[test]
    fn stale_load_is_dropped_and_latest_start_wins() {
        let config = BoardConfig::new(2, 2);
        let mut game = controller(config);

        let first = game.begin_loading();
        let second = game.begin_loading();

        assert!(game.end_loading(second, Ok(board(config))));
        assert!(!game.end_loading(
            first,
            Err(TriviaError::Request(String::from("late failure")))
        ));
        assert_eq!(game.phase(), &GamePhase::Ready);
        assert!(game.board().is_some());
    }

    #[test]
    fn failed_load_keeps_no_board_and_allows_retry() {
        let mut source = FakeSource::with_categories(100, 5);
        source.fail_with = Some(TriviaError::Status { code: 503 });
        let mut client = TriviaClient::new(&source, BoardConfig::STANDARD, 5);
        let mut game = controller(BoardConfig::STANDARD);

        assert!(block_on(game.start(&mut client)));

        assert_eq!(
            game.phase(),
            &GamePhase::Failed(String::from("Trivia service responded with status 503"))
        );
        assert!(game.board().is_none());
        assert!(game.renderer().is_masked());

        source.fail_with = None;
        let mut client = TriviaClient::new(&source, BoardConfig::STANDARD, 5);
        assert!(block_on(game.start(&mut client)));
        assert!(game.phase().is_playable());
    }
}
