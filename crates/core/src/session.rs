//! Session module - the game state machine
//!
//! A [`Session`] owns everything a running game needs: the grid, the pair
//! generator, the counters, the phase and the leaderboard store. Input arrives
//! as [`InputEvent`]s together with a monotonic millisecond clock reading; the
//! session never reads the clock itself, which keeps it deterministic.
//!
//! Phases:
//!
//! ```text
//! Menu -> Playing -> GameOver | Victory -> EnteringName -> Highscore -> Menu
//!            ^  \________ r / Esc ________/     |
//!            |                                  r
//!            +--------------- Menu <------------+
//! ```

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::grid::Grid;
use crate::pair::{any_anchor_fits, can_place, Pair};
use crate::resolver::{resolve, Resolution};
use crate::rng::PairGenerator;
use crate::scores::ScoreStore;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Difficulty, InputEvent, Key, Phase, ScoreEntry, GRID_CELLS, NAME_MAX_CHARS, PLACE_DEBOUNCE_MS,
};

/// What a single input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not meaningful in the current phase
    Ignored,
    /// Placement did not fit (off grid or onto occupied cells)
    Rejected,
    /// Placement came too soon after the previous one
    Debounced,
    /// Pair placed and resolved; `phase` is the phase afterwards
    Placed {
        x: i32,
        y: i32,
        resolution: Resolution,
        phase: Phase,
    },
    /// Phase transition not caused by a placement
    PhaseChanged { from: Phase, to: Phase },
    /// The player asked to leave the game
    Quit,
}

/// Board position used to resume or set up a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub grid: Grid,
    pub current: Pair,
    pub next: Pair,
    pub rescued: u32,
    pub moves: u32,
    pub goal: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session<S> {
    grid: Grid,
    pairs: PairGenerator,
    rescued: u32,
    moves: u32,
    goal: u32,
    current: Option<Pair>,
    next: Option<Pair>,
    phase: Phase,
    name_input: String,
    highscores: Vec<ScoreEntry>,
    /// Cells cleared by the most recent placement
    last_cleared: ArrayVec<(u8, u8), GRID_CELLS>,
    last_place_ms: Option<u64>,
    /// Increments every time a round starts
    round_id: u32,
    store: S,
}

impl<S: ScoreStore> Session<S> {
    /// Create a session sitting in the menu
    pub fn new(seed: u32, store: S) -> Self {
        Self {
            grid: Grid::new(),
            pairs: PairGenerator::new(seed),
            rescued: 0,
            moves: 0,
            goal: Difficulty::Medium.goal(),
            current: None,
            next: None,
            phase: Phase::Menu,
            name_input: String::new(),
            highscores: Vec::new(),
            last_cleared: ArrayVec::new(),
            last_place_ms: None,
            round_id: 0,
            store,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rescued(&self) -> u32 {
        self.rescued
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn current(&self) -> Option<Pair> {
        self.current
    }

    pub fn next(&self) -> Option<Pair> {
        self.next
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn highscores(&self) -> &[ScoreEntry] {
        &self.highscores
    }

    pub fn last_cleared(&self) -> &[(u8, u8)] {
        &self.last_cleared
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);
        out.current = self.current;
        out.next = self.next;
        out.rescued = self.rescued;
        out.goal = self.goal;
        out.moves = self.moves;
        out.phase = self.phase;
        out.name_input.clear();
        out.name_input.push_str(&self.name_input);
        out.highscores.clone_from(&self.highscores);
        out.last_cleared.clone_from(&self.last_cleared);
        out.round_id = self.round_id;
        out.seed = self.pairs.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Feed one input event. `now_ms` is a monotonic clock reading.
    pub fn handle(&mut self, event: InputEvent, now_ms: u64) -> Outcome {
        if let InputEvent::Key(Key::Escape) = event {
            return match self.phase {
                Phase::Playing => self.reset_to_menu(),
                _ => Outcome::Quit,
            };
        }

        match (self.phase, event) {
            (Phase::Menu, InputEvent::Key(Key::Char(c))) => {
                if let Some(difficulty) = Difficulty::from_hotkey(c) {
                    self.start_round(difficulty.goal())
                } else if c.eq_ignore_ascii_case(&'s') {
                    self.open_highscores()
                } else {
                    Outcome::Ignored
                }
            }

            (Phase::Playing, InputEvent::PointerDown { x, y })
            | (Phase::Playing, InputEvent::PointerDrag { x, y }) => self.try_place(x, y, now_ms),
            (Phase::Playing, InputEvent::Key(Key::Char('r' | 'R')))
            | (Phase::GameOver, InputEvent::Key(Key::Char('r' | 'R')))
            | (Phase::Victory, InputEvent::Key(Key::Char('r' | 'R'))) => self.reset_to_menu(),

            (Phase::Victory, InputEvent::Key(Key::Enter)) => {
                self.name_input.clear();
                self.transition(Phase::EnteringName)
            }

            (Phase::EnteringName, InputEvent::Key(key)) => self.edit_name(key),

            (Phase::Highscore, InputEvent::Key(Key::Char('q' | 'Q'))) => self.reset_to_menu(),

            _ => Outcome::Ignored,
        }
    }

    /// Start a round with the given goal: fresh grid, zeroed counters, two new pairs.
    pub fn start_round(&mut self, goal: u32) -> Outcome {
        let from = self.phase;
        self.reset_round_state();
        self.goal = goal;
        self.current = Some(self.pairs.generate());
        self.next = Some(self.pairs.generate());
        self.round_id = self.round_id.wrapping_add(1);
        self.phase = Phase::Playing;
        info!(goal, round = self.round_id, "round started");
        Outcome::PhaseChanged {
            from,
            to: Phase::Playing,
        }
    }

    /// Resume play from a prepared position
    pub fn restore(&mut self, position: Position) {
        self.reset_round_state();
        self.grid = position.grid;
        self.current = Some(position.current);
        self.next = Some(position.next);
        self.rescued = position.rescued;
        self.moves = position.moves;
        self.goal = position.goal;
        self.round_id = self.round_id.wrapping_add(1);
        self.phase = Phase::Playing;
    }

    /// Abandon whatever is going on and go back to the menu with a fresh session
    pub fn reset_to_menu(&mut self) -> Outcome {
        let from = self.phase;
        self.reset_round_state();
        self.phase = Phase::Menu;
        Outcome::PhaseChanged {
            from,
            to: Phase::Menu,
        }
    }

    /// Try to place the current pair with its anchor at (x, y).
    ///
    /// Illegal placements and placements inside the debounce window leave the
    /// session untouched. A successful one mutates the grid, counts a move,
    /// resolves matches, advances the pair queue and checks victory, then
    /// whether the new current pair still fits anywhere.
    pub fn try_place(&mut self, x: i32, y: i32, now_ms: u64) -> Outcome {
        if self.phase != Phase::Playing {
            return Outcome::Ignored;
        }
        let Some(pair) = self.current else {
            return Outcome::Ignored;
        };
        if !can_place(&self.grid, x, y, &pair) {
            return Outcome::Rejected;
        }
        if let Some(last) = self.last_place_ms {
            if now_ms.saturating_sub(last) < PLACE_DEBOUNCE_MS {
                return Outcome::Debounced;
            }
        }

        for (cx, cy, kind) in pair.cells_at(x, y) {
            self.grid.set(cx, cy, Some(kind));
        }
        self.last_place_ms = Some(now_ms);
        self.moves += 1;

        let resolution = resolve(&mut self.grid);
        self.rescued += resolution.total;
        self.last_cleared.clone_from(&resolution.cleared);

        self.current = self.next.take();
        self.next = Some(self.pairs.generate());

        debug!(
            x,
            y,
            cleared = resolution.total,
            rescued = self.rescued,
            moves = self.moves,
            "pair placed"
        );

        if self.rescued >= self.goal {
            info!(rescued = self.rescued, moves = self.moves, "victory");
            self.phase = Phase::Victory;
        } else if !self
            .current
            .is_some_and(|next| any_anchor_fits(&self.grid, &next))
        {
            info!(rescued = self.rescued, moves = self.moves, "game over");
            self.phase = Phase::GameOver;
        }

        Outcome::Placed {
            x,
            y,
            resolution,
            phase: self.phase,
        }
    }

    fn edit_name(&mut self, key: Key) -> Outcome {
        match key {
            Key::Enter => {
                let name = self.name_input.trim();
                if name.is_empty() {
                    return Outcome::Ignored;
                }
                let entry = ScoreEntry::new(name, self.rescued);
                info!(name = %entry.name, score = entry.score, "score submitted");
                self.store.add(entry);
                self.highscores = self.store.load();
                self.transition(Phase::Highscore)
            }
            Key::Backspace => {
                self.name_input.pop();
                Outcome::Ignored
            }
            Key::Char(c) if !c.is_control() => {
                if self.name_input.chars().count() < NAME_MAX_CHARS {
                    self.name_input.push(c);
                }
                Outcome::Ignored
            }
            _ => Outcome::Ignored,
        }
    }

    fn open_highscores(&mut self) -> Outcome {
        self.highscores = self.store.load();
        self.transition(Phase::Highscore)
    }

    fn transition(&mut self, to: Phase) -> Outcome {
        let from = self.phase;
        self.phase = to;
        debug!(from = from.as_str(), to = to.as_str(), "phase change");
        Outcome::PhaseChanged { from, to }
    }

    fn reset_round_state(&mut self) {
        self.grid.clear();
        self.rescued = 0;
        self.moves = 0;
        self.current = None;
        self.next = None;
        self.name_input.clear();
        self.last_cleared.clear();
        self.last_place_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::MemoryScores;
    use crate::types::{Orientation, TileKind};

    fn kind(id: u8) -> TileKind {
        TileKind::new(id).unwrap()
    }

    fn pair(o: Orientation, a: u8, b: u8) -> Pair {
        Pair::new(o, [kind(a), kind(b)])
    }

    fn key(c: char) -> InputEvent {
        InputEvent::Key(Key::Char(c))
    }

    #[test]
    fn menu_hotkeys_start_rounds() {
        let mut s = Session::new(1, MemoryScores::new());
        assert_eq!(s.handle(key('x'), 0), Outcome::Ignored);
        s.handle(key('h'), 0);
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.goal(), 512);
        assert!(s.current().is_some());
        assert!(s.next().is_some());
        assert_eq!(s.rescued(), 0);
        assert_eq!(s.moves(), 0);
    }

    #[test]
    fn debounce_blocks_quick_second_placement() {
        let mut s = Session::new(1, MemoryScores::new());
        s.restore(Position {
            grid: Grid::new(),
            current: pair(Orientation::Horizontal, 0, 1),
            next: pair(Orientation::Horizontal, 2, 3),
            rescued: 0,
            moves: 0,
            goal: 128,
        });

        assert!(matches!(s.try_place(0, 0, 1_000), Outcome::Placed { .. }));
        assert_eq!(s.try_place(0, 1, 1_050), Outcome::Debounced);
        assert_eq!(s.moves(), 1);
        assert!(matches!(s.try_place(0, 1, 1_100), Outcome::Placed { .. }));
        assert_eq!(s.moves(), 2);
    }

    #[test]
    fn rejected_placement_changes_nothing() {
        let mut s = Session::new(1, MemoryScores::new());
        let position = Position {
            grid: Grid::from_rows(&["-0----"]),
            current: pair(Orientation::Horizontal, 1, 1),
            next: pair(Orientation::Vertical, 2, 2),
            rescued: 3,
            moves: 4,
            goal: 128,
        };
        s.restore(position.clone());

        assert_eq!(s.try_place(0, 0, 500), Outcome::Rejected);
        assert_eq!(s.try_place(-3, 2, 500), Outcome::Rejected);
        assert_eq!(s.grid(), &position.grid);
        assert_eq!(s.current(), Some(position.current));
        assert_eq!(s.moves(), 4);
    }

    #[test]
    fn name_entry_is_capped_and_trimmed() {
        let mut s = Session::new(1, MemoryScores::new());
        s.restore(Position {
            grid: Grid::from_rows(&["00----"]),
            current: pair(Orientation::Horizontal, 0, 1),
            next: pair(Orientation::Horizontal, 2, 3),
            rescued: 0,
            moves: 0,
            goal: 3,
        });
        assert!(matches!(s.try_place(2, 0, 0), Outcome::Placed { phase: Phase::Victory, .. }));
        s.handle(InputEvent::Key(Key::Enter), 0);
        assert_eq!(s.phase(), Phase::EnteringName);

        // Blank names are not accepted.
        s.handle(key(' '), 0);
        assert_eq!(s.handle(InputEvent::Key(Key::Enter), 0), Outcome::Ignored);

        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            s.handle(key(c), 0);
        }
        assert_eq!(s.name_input().chars().count(), NAME_MAX_CHARS);
        s.handle(InputEvent::Key(Key::Backspace), 0);
        s.handle(InputEvent::Key(Key::Enter), 0);

        assert_eq!(s.phase(), Phase::Highscore);
        assert_eq!(s.highscores()[0].name, "abcdefghijklmn");
        assert_eq!(s.highscores()[0].score, 3);
    }
}
