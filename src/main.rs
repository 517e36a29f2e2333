//! Sort the Chickens terminal runner (default binary).
//!
//! crossterm supplies key and mouse input; frames are drawn through the
//! framebuffer renderer in `chicken_sort::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use chicken_sort::config::AppConfig;
use chicken_sort::core::{GameSnapshot, Outcome, ScoreStore, Session};
use chicken_sort::input::{map_key, should_quit, PointerAction, PointerTracker};
use chicken_sort::ledger::ScoreLedger;
use chicken_sort::logging;
use chicken_sort::term::{FrameBuffer, FrameExtras, GameView, PopEffects, TerminalRenderer, Viewport};
use chicken_sort::types::{InputEvent, Key, Phase};

/// Frame interval; input is polled in between.
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Err(e) = logging::init(&config) {
        // Terminal is not in raw mode yet, so stderr is still readable.
        eprintln!("chicken-sort: logging disabled: {e:#}");
    }
    info!(
        seed = config.seed,
        scores = %config.scores_path.display(),
        "starting"
    );

    let ledger = ScoreLedger::at(config.scores_path.clone());
    let mut session = Session::new(config.seed, ledger);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run<S: ScoreStore>(term: &mut TerminalRenderer, session: &mut Session<S>) -> Result<()> {
    let view = GameView::default();
    let mut pointer = PointerTracker::new();
    let mut hover: Option<(u16, u16)> = None;
    let mut effects = PopEffects::new();

    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Render.
        session.snapshot_into(&mut snapshot);
        let extras = FrameExtras {
            pointer: hover,
            effects: Some(&effects),
        };
        view.render_into(&snapshot, extras, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let now_ms = start.elapsed().as_millis() as u64;
            let input = match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    map_key(key).map(InputEvent::Key)
                }
                Event::Mouse(mouse) => match pointer.handle(mouse) {
                    Some(PointerAction::Down { col, row }) => {
                        hover = Some((col, row));
                        pointer_input(&view, viewport, session.phase(), col, row, false)
                    }
                    Some(PointerAction::Drag { col, row }) => {
                        hover = Some((col, row));
                        pointer_input(&view, viewport, session.phase(), col, row, true)
                    }
                    Some(PointerAction::Hover { col, row }) => {
                        hover = Some((col, row));
                        None
                    }
                    Some(PointerAction::Up) | None => None,
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(input) = input {
                match session.handle(input, now_ms) {
                    Outcome::Quit => return Ok(()),
                    Outcome::Placed { resolution, .. } => effects.spawn(&resolution.cleared),
                    Outcome::PhaseChanged { to, .. } if to != Phase::EnteringName => {
                        effects.clear()
                    }
                    _ => {}
                }
            }
        }

        // Tick animations.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            effects.tick(elapsed.as_millis().min(u128::from(u32::MAX)) as u32);
        }
    }
}

/// Translate a click on terminal cell (col, row) into a session input.
///
/// Menu buttons become their hotkeys; everywhere else the click is a grid anchor.
fn pointer_input(
    view: &GameView,
    viewport: Viewport,
    phase: Phase,
    col: u16,
    row: u16,
    drag: bool,
) -> Option<InputEvent> {
    if phase == Phase::Menu {
        return view
            .menu_item_at(viewport, col, row)
            .map(|item| InputEvent::Key(Key::Char(item.hotkey())));
    }

    let (x, y) = view.anchor_at(viewport, col, row);
    Some(if drag {
        InputEvent::PointerDrag { x, y }
    } else {
        InputEvent::PointerDown { x, y }
    })
}
