//! End-to-end frame loop: keys -> InputHandler -> GameDriver, on a manual clock.

use crossterm::event::{KeyCode, KeyEvent};

use tui_2048::core::{Board, Session};
use tui_2048::engine::{Clock, GameConfig, GameDriver, ManualClock, StagedLoader, TickOutcome};
use tui_2048::input::InputHandler;
use tui_2048::types::{Buttons, Direction, TICK_MS};

fn config() -> GameConfig {
    GameConfig {
        seed: 21,
        ..GameConfig::default()
    }
}

struct Harness<L: tui_2048::engine::AssetLoader> {
    clock: ManualClock,
    input: InputHandler,
    driver: GameDriver<L>,
}

impl<L: tui_2048::engine::AssetLoader> Harness<L> {
    fn press(&mut self, code: KeyCode) {
        self.input
            .handle_key_press(KeyEvent::from(code), self.clock.now_ms());
    }

    fn release(&mut self, code: KeyCode) {
        self.input.handle_key_release(KeyEvent::from(code));
    }

    /// Advance one frame and tick.
    fn frame(&mut self) -> TickOutcome {
        self.clock.advance(TICK_MS as u64);
        let now = self.clock.now_ms();
        let buttons = self.input.buttons(now);
        self.driver.tick(now, &buttons)
    }
}

fn harness(session: Session) -> Harness<tui_2048::engine::Preloaded> {
    Harness {
        clock: ManualClock::new(0),
        input: InputHandler::with_key_release_ms(90),
        driver: GameDriver::new(&config()).with_session(session),
    }
}

fn row_session(row: [u32; 4]) -> Session {
    Session::with_board(Board::from_rows([row, [0; 4], [0; 4], [0; 4]]), 8)
}

#[test]
fn tap_moves_exactly_once() {
    let mut h = harness(row_session([0, 0, 0, 2]));
    h.press(KeyCode::Left);
    h.release(KeyCode::Left);
    assert_eq!(h.frame(), TickOutcome::Idle);

    h.press(KeyCode::Left);
    let out = h.frame();
    assert!(matches!(
        out,
        TickOutcome::Moved {
            direction: Direction::Left,
            changed: true,
            ..
        }
    ));
    h.release(KeyCode::Left);

    let mut moves = 0;
    for _ in 0..30 {
        if matches!(h.frame(), TickOutcome::Moved { .. }) {
            moves += 1;
        }
    }
    assert_eq!(moves, 0);
    assert_eq!(h.driver.session().moves(), 1);
}

#[test]
fn one_move_in_flight_at_a_time() {
    let mut h = harness(row_session([2, 0, 0, 0]));
    h.press(KeyCode::Right);
    assert!(matches!(h.frame(), TickOutcome::Moved { .. }));
    assert!(h.driver.is_animating());

    // Input during the animation is dropped.
    h.press(KeyCode::Left);
    let during = h.frame();
    assert_eq!(during, TickOutcome::Animating);
    assert_eq!(h.driver.session().moves(), 1);

    let now = h.clock.now_ms();
    let frame = h.driver.frame(now).unwrap();
    assert!(frame.progress > 0.0 && frame.progress < 1.0);
}

#[test]
fn held_key_without_release_events_stops_after_timeout() {
    let mut h = harness(Session::new(5));
    h.press(KeyCode::Up);
    h.frame();

    // No release event arrives; after the release timeout the button is up.
    for _ in 0..20 {
        h.frame();
    }
    let now = h.clock.now_ms();
    assert_eq!(h.input.buttons(now), Buttons::default());
}

#[test]
fn loading_then_play() {
    let mut h = Harness {
        clock: ManualClock::new(0),
        input: InputHandler::new(),
        driver: GameDriver::with_loader(&config(), StagedLoader::new(3)),
    };
    h.press(KeyCode::Char('a'));

    let mut progress = Vec::new();
    while let TickOutcome::Loading { progress: p } = h.frame() {
        progress.push(p);
    }
    assert_eq!(progress.len(), 3);
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert!(!h.driver.is_loading());
}

#[test]
fn restart_after_loss_with_enter() {
    let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let mut h = harness(Session::with_board(stuck, 1));

    h.press(KeyCode::Down);
    assert_eq!(h.frame(), TickOutcome::Idle);
    assert!(h.driver.snapshot().lost);

    h.release(KeyCode::Down);
    h.press(KeyCode::Enter);
    assert_eq!(h.frame(), TickOutcome::NewGame);

    let snap = h.driver.snapshot();
    assert!(!snap.lost);
    assert_eq!(snap.score, 0);
    assert_eq!(16 - h.driver.session().board().empty_count(), 2);
}
