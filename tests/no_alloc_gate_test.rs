//! The per-frame hot path (tick, sample, snapshot, render) must not allocate
//! once buffers are warm.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::{AnimationFrame, GameSnapshot};
use tui_2048::engine::{GameConfig, GameDriver};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::{Buttons, Direction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn buttons_for(frame: u64) -> Buttons {
    let dir = Direction::ALL[(frame / 7 % 4) as usize];
    Buttons {
        left: dir == Direction::Left,
        right: dir == Direction::Right,
        up: dir == Direction::Up,
        down: dir == Direction::Down,
        confirm: true,
    }
}

#[test]
fn frame_loop_is_allocation_free_after_warmup() {
    let config = GameConfig {
        seed: 17,
        ..GameConfig::default()
    };
    let mut driver = GameDriver::new(&config);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();
    let mut frame = AnimationFrame::default();

    // Warm-up.
    driver.snapshot_into(&mut snap);
    view.render_into(&snap, None, None, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..2_000u64 {
            let now = i * 16;
            driver.tick(now, &buttons_for(i));
            let animating = driver.frame_into(now, &mut frame);
            driver.snapshot_into(&mut snap);
            view.render_into(&snap, animating.then_some(&frame), None, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
