use tui_2048::core::{AnimationTimeline, Board, Easing, EffectKind, Session};
use tui_2048::types::{Direction, Pos};

#[test]
fn animation_replays_a_real_move() {
    let board = Board::from_rows([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let mut s = Session::with_board(board, 4);
    let turn = s.step(Direction::Left);

    let mut t = AnimationTimeline::new(Easing::Linear);
    t.begin(&turn.result.displacements, &turn.result.merges, 0, 80);
    assert!(t.is_active());

    let start = t.sample(0);
    assert_eq!(start.slides.len(), 2);
    assert_eq!(start.arrivals(Pos::new(0, 0)), 2);
    assert!(start.slides.iter().all(|sl| sl.col == sl.from.col as f32));

    let end = t.sample(80);
    assert!(end.slides.iter().all(|sl| sl.col == 0.0));
    let pulse = end.effect_at(Pos::new(0, 0)).unwrap();
    assert_eq!(pulse.kind, EffectKind::Pulse);
    assert_eq!(pulse.value, 4);

    let spawned = turn.spawned.unwrap();
    assert_eq!(end.effect_at(spawned).unwrap().kind, EffectKind::GrowIn);
}

#[test]
fn completion_and_clear() {
    let mut t = AnimationTimeline::new(Easing::EaseOutCubic);
    t.begin(&[], &[], 100, 80);
    assert!(!t.is_complete(179));
    assert!(t.is_complete(180));
    assert!(t.is_active());

    t.clear();
    assert!(!t.is_active());
    assert!(t.sample(150).slides.is_empty());
    assert_eq!(t.progress(150), 1.0);
}

#[test]
fn zero_duration_completes_immediately() {
    let mut t = AnimationTimeline::default();
    t.begin(&[], &[], 10, 0);
    assert!(t.is_complete(10));
}

#[test]
fn eased_slides_lead_linear_ones() {
    let board = Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let (_, result) = board.slide(Direction::Left);

    let mut linear = AnimationTimeline::new(Easing::Linear);
    let mut quad = AnimationTimeline::new(Easing::EaseOutQuad);
    linear.begin(&result.displacements, &result.merges, 0, 100);
    quad.begin(&result.displacements, &result.merges, 0, 100);

    let l = linear.sample(50).slides[0].col;
    let q = quad.sample(50).slides[0].col;
    assert!((l - 1.5).abs() < 1e-6);
    assert!(q < l);
}

#[test]
fn easing_names_round_trip() {
    for e in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutCubic] {
        assert_eq!(Easing::from_str(e.as_str()), Some(e));
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
    }
    assert_eq!(Easing::from_str("EASE_OUT_QUAD"), Some(Easing::EaseOutQuad));
    assert_eq!(Easing::from_str("bounce"), None);
}
