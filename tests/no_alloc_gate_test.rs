use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chicken_sort::core::{
    any_anchor_fits, GameSnapshot, Grid, MemoryScores, Outcome, Pair, Position, Session,
};
use chicken_sort::term::{FrameBuffer, FrameExtras, GameView, PopEffects, Viewport};
use chicken_sort::types::{Orientation, TileKind};

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

fn pair(a: u8, b: u8) -> Pair {
    Pair::new(
        Orientation::Horizontal,
        [TileKind::wrapping(a), TileKind::wrapping(b)],
    )
}

// One test per binary: the counter is global.
#[test]
fn placement_and_playing_frame_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut session = Session::new(1, MemoryScores::new());
    let position = Position {
        grid: Grid::from_rows(&["00----", "------", "11----"]),
        current: pair(0, 1),
        next: pair(1, 2),
        rescued: 0,
        moves: 0,
        goal: 128,
    };

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();
    let mut effects = PopEffects::new();

    // Warm-up.
    session.restore(position.clone());
    let _ = session.try_place(2, 0, 0);
    session.snapshot_into(&mut snap);
    view.render_into(&snap, FrameExtras::default(), viewport, &mut fb);

    let mut now = 1_000u64;
    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            session.restore(position.clone());
            if let Outcome::Placed { resolution, .. } = session.try_place(2, 0, now) {
                effects.spawn(&resolution.cleared);
            }
            let _ = session.try_place(2, 2, now + 100);
            let _ = any_anchor_fits(session.grid(), &pair(3, 3));
            now += 1_000;

            session.snapshot_into(&mut snap);
            let extras = FrameExtras {
                pointer: Some((30, 8)),
                effects: Some(&effects),
            };
            view.render_into(&snap, extras, viewport, &mut fb);
            effects.tick(16);
        }
    });

    assert!(allocs == 0);
}
