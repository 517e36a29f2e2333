use chicken_sort::core::{GameSnapshot, Pair};
use chicken_sort::term::{FrameBuffer, FrameExtras, GameView, PopEffects, Viewport};
use chicken_sort::types::{MenuItem, Difficulty, Orientation, Phase, ScoreEntry, TileKind};

// Layout for an 80x24 terminal with the default 4x2 cells:
// frame 26x14 at (17, 3), board cell (x, y) starts at (18 + 4x, 4 + 2y).
const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn pair(a: u8, b: u8) -> Pair {
    Pair::new(
        Orientation::Horizontal,
        [TileKind::new(a).unwrap(), TileKind::new(b).unwrap()],
    )
}

fn playing() -> GameSnapshot {
    GameSnapshot {
        phase: Phase::Playing,
        current: Some(pair(0, 1)),
        next: Some(pair(2, 3)),
        rescued: 5,
        goal: 128,
        moves: 3,
        ..GameSnapshot::default()
    }
}

#[test]
fn term_view_renders_board_frame() {
    let fb = GameView::default().render(&playing(), FrameExtras::default(), VP);

    assert_eq!(fb.get(17, 3).unwrap().ch, '╭');
    assert_eq!(fb.get(42, 3).unwrap().ch, '╮');
    assert_eq!(fb.get(17, 16).unwrap().ch, '╰');
    assert_eq!(fb.get(42, 16).unwrap().ch, '╯');
}

#[test]
fn term_view_draws_tiles_and_counters() {
    let mut snap = playing();
    snap.grid[0][0] = 1;
    snap.grid[5][5] = 4;
    let fb = GameView::default().render(&snap, FrameExtras::default(), VP);

    assert_eq!(fb.get(19, 5).unwrap().ch, '●');
    assert_eq!(fb.get(18 + 20 + 1, 4 + 10 + 1).unwrap().ch, '◆');
    // Empty cell marker.
    assert_eq!(fb.get(18 + 4 + 2, 5).unwrap().ch, '·');

    let text = screen(&fb);
    assert!(text.contains("Sorted: 5/128"), "{text}");
    assert!(text.contains("Moves:  3"), "{text}");
    assert!(text.contains("NEXT PAIR"), "{text}");
}

#[test]
fn term_view_preview_turns_red_when_blocked() {
    let view = GameView::default();
    // Pointer over board cell (0, 0).
    let extras = FrameExtras {
        pointer: Some((18, 4)),
        effects: None,
    };

    let free = view.render(&playing(), extras, VP);
    let mut blocked_snap = playing();
    blocked_snap.grid[0][1] = 3;
    let blocked = view.render(&blocked_snap, extras, VP);

    let free_bg = free.get(18, 4).unwrap().style.bg;
    let blocked_bg = blocked.get(18, 4).unwrap().style.bg;
    assert_ne!(free_bg, blocked_bg);
    assert!(blocked_bg.r > blocked_bg.g);

    // No preview without a pointer.
    let plain = view.render(&playing(), FrameExtras::default(), VP);
    assert_ne!(plain.get(18, 4).unwrap().style.bg, free_bg);
}

#[test]
fn term_view_draws_pop_effects() {
    let mut effects = PopEffects::new();
    effects.spawn(&[(2, 0)]);
    let extras = FrameExtras {
        pointer: None,
        effects: Some(&effects),
    };
    let fb = GameView::default().render(&playing(), extras, VP);
    assert_eq!(fb.get(18 + 8 + 1, 5).unwrap().ch, '✶');
}

#[test]
fn term_view_menu_buttons_are_clickable() {
    let view = GameView::default();
    let snap = GameSnapshot::default();
    let fb = view.render(&snap, FrameExtras::default(), VP);

    let text = screen(&fb);
    assert!(text.contains("Sort the CHICKENS!"));
    assert!(text.contains("E / M / H / S"));
    assert!(text.contains("Hardcore"));

    // Buttons are 30 wide at x = 25, on rows 9, 11, 13, 15.
    assert_eq!(
        view.menu_item_at(VP, 25, 9),
        Some(MenuItem::Start(Difficulty::Easy))
    );
    assert_eq!(
        view.menu_item_at(VP, 40, 13),
        Some(MenuItem::Start(Difficulty::Hard))
    );
    assert_eq!(view.menu_item_at(VP, 54, 15), Some(MenuItem::Highscores));
    assert_eq!(view.menu_item_at(VP, 24, 9), None);
    assert_eq!(view.menu_item_at(VP, 30, 10), None);
    assert!(fb.row_text(15).contains("Highscores"));
}

#[test]
fn term_view_anchor_mapping_matches_drawn_cells() {
    let view = GameView::default();
    assert_eq!(view.anchor_at(VP, 18, 4), (0, 0));
    assert_eq!(view.anchor_at(VP, 41, 15), (5, 5));
    assert_eq!(view.anchor_at(VP, 17, 4), (-1, 0));
    assert_eq!(view.anchor_at(VP, 0, 0), (-5, -2));
}

#[test]
fn term_view_overlays_per_phase() {
    let view = GameView::default();
    let render = |snap: &GameSnapshot| screen(&view.render(snap, FrameExtras::default(), VP));

    let mut snap = playing();
    snap.phase = Phase::GameOver;
    assert!(render(&snap).contains("GAME OVER"));

    snap.phase = Phase::Victory;
    assert!(render(&snap).contains("All chickens sorted!"));

    snap.phase = Phase::EnteringName;
    snap.name_input = "bob".to_string();
    assert!(render(&snap).contains("Name: bob_"));
}

#[test]
fn term_view_lists_highscores() {
    let snap = GameSnapshot {
        phase: Phase::Highscore,
        highscores: vec![ScoreEntry::new("ada", 512), ScoreEntry::new("bo", 130)],
        ..GameSnapshot::default()
    };
    let text = screen(&GameView::default().render(&snap, FrameExtras::default(), VP));
    assert!(text.contains(" 1. ada"), "{text}");
    assert!(text.contains("512"));
    assert!(text.contains(" 2. bo"));
    assert!(text.contains("[Q]"));

    let empty = GameSnapshot {
        phase: Phase::Highscore,
        ..GameSnapshot::default()
    };
    let text = screen(&GameView::default().render(&empty, FrameExtras::default(), VP));
    assert!(text.contains("No scores yet"));
}
