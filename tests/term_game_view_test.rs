use tui_2048::core::{AnimationFrame, Board, Session};
use tui_2048::engine::{GameConfig, GameDriver};
use tui_2048::term::{tile_color, GameView, Viewport};
use tui_2048::types::{Buttons, Pos};

fn contains(fb: &tui_2048::term::FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_centers_content() {
    let view = GameView::default();
    let (w, h) = view.content_size();
    let vp = Viewport::new(w + 10, h + 4);
    let (x, y) = view.cell_origin(vp, Pos::new(0, 0));
    assert_eq!(x, 5 + 1);
    assert_eq!(y, 2 + 3 + 1);
}

#[test]
fn term_view_draws_session_tiles() {
    let board = Board::from_rows([[2, 0, 0, 0], [0, 64, 0, 0], [0; 4], [0, 0, 0, 131072]]);
    let snap = Session::with_board(board, 1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(50, 26);
    let fb = view.render(&snap, None, None, vp);

    for (pos, value) in [
        (Pos::new(0, 0), 2),
        (Pos::new(1, 1), 64),
        (Pos::new(3, 3), 131072),
    ] {
        let (x, y) = view.cell_origin(vp, pos);
        assert_eq!(fb.get(x, y).unwrap().style.bg, tile_color(value));
    }
    assert!(contains(&fb, "131072"));
    assert!(contains(&fb, "64"));
}

#[test]
fn term_view_tracks_driver_frames() {
    let board = Board::from_rows([[0, 0, 0, 8], [0; 4], [0; 4], [0; 4]]);
    let mut driver = GameDriver::new(&GameConfig::default()).with_session(Session::with_board(board, 2));
    let left = Buttons {
        left: true,
        ..Buttons::default()
    };
    driver.tick(0, &left);

    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let snap = driver.snapshot();
    let mut frame = AnimationFrame::default();
    assert!(driver.frame_into(40, &mut frame));

    // Half way through the slide the 8 sits between its source and target.
    let fb = view.render(&snap, Some(&frame), None, vp);
    let (x0, y0) = view.cell_origin(vp, Pos::new(0, 0));
    let (x3, _) = view.cell_origin(vp, Pos::new(0, 3));
    let row = fb.row_text(y0 + 1);
    let at = row.find('8').unwrap() as u16;
    assert!(at > x0 + 6 && at < x3, "8 drawn at column {at}");

    // Settled frame puts it in column 0.
    let fb = view.render(&snap, None, None, vp);
    let row = fb.row_text(y0 + 1);
    assert_eq!(row.find('8').unwrap() as u16, x0 + 3);
}

#[test]
fn term_view_overlays_follow_flags() {
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let snap = Session::with_board(stuck, 1).snapshot();
    let fb = view.render(&snap, None, None, vp);
    assert!(contains(&fb, "Game Over!"));

    let won = Board::from_rows([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let snap = Session::with_board(won, 1).snapshot();
    let fb = view.render(&snap, None, None, vp);
    assert!(contains(&fb, "You Win!"));
    assert!(!contains(&fb, "Game Over!"));
}
