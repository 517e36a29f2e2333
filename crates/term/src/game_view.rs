//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! It also owns the inverse mapping: terminal cells back to grid anchors
//! ([`GameView::anchor_at`]) and to menu buttons ([`GameView::menu_item_at`]),
//! since only the view knows where things were drawn.

use crate::core::{can_place, GameSnapshot, Grid, Pair};
use crate::effects::PopEffects;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MenuItem, Phase, TileKind, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Width of the side panel right of the board
const PANEL_W: u16 = 18;
/// Gap between board frame and side panel
const PANEL_GAP: u16 = 2;
/// Rows below the board frame (counters)
const INFO_H: u16 = 3;

const MENU_BUTTON_W: u16 = 30;
const MENU_TITLE_ROWS: u16 = 4;

const BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(45, 50, 65);
const EMPTY_FG: Rgb = Rgb::new(60, 65, 80);
const WHITE: Rgb = Rgb::new(240, 240, 240);
const GREY: Rgb = Rgb::new(170, 178, 189);
const ACCENT: Rgb = Rgb::new(255, 211, 126);
const RED: Rgb = Rgb::new(220, 60, 60);
const BUTTON_BG: Rgb = Rgb::new(60, 70, 90);
const BUTTON_HOVER: Rgb = Rgb::new(80, 95, 120);

/// Where the board and panels land for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Left edge of the side panel
    pub panel_x: u16,
}

/// A lightweight terminal renderer for the chicken board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square with typical terminal glyph aspect ratio.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

/// Per-frame inputs that are not part of the game state
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameExtras<'a> {
    /// Terminal cell under the mouse pointer
    pub pointer: Option<(u16, u16)>,
    pub effects: Option<&'a PopEffects>,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (GRID_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (GRID_HEIGHT as u16) * self.cell_h + 2;
        let content_w = frame_w + PANEL_GAP + PANEL_W;
        let content_h = frame_h + INFO_H;

        let frame_x = viewport.width.saturating_sub(content_w) / 2;
        let frame_y = viewport.height.saturating_sub(content_h) / 2;
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: frame_x + frame_w + PANEL_GAP,
        }
    }

    /// Translate a terminal cell to a grid anchor.
    ///
    /// Uses floor division, so cells left of or above the board give negative
    /// anchors. The result may be outside the grid; placement rejects it.
    pub fn anchor_at(&self, viewport: Viewport, col: u16, row: u16) -> (i32, i32) {
        let layout = self.layout(viewport);
        let origin_x = i32::from(layout.frame_x) + 1;
        let origin_y = i32::from(layout.frame_y) + 1;
        (
            (i32::from(col) - origin_x).div_euclid(i32::from(self.cell_w)),
            (i32::from(row) - origin_y).div_euclid(i32::from(self.cell_h)),
        )
    }

    /// Menu button under a terminal cell, if any
    pub fn menu_item_at(&self, viewport: Viewport, col: u16, row: u16) -> Option<MenuItem> {
        MenuItem::ALL.into_iter().find(|&item| {
            let (x, y) = self.menu_button_origin(viewport, item);
            row == y && col >= x && col < x + MENU_BUTTON_W
        })
    }

    fn menu_top(&self, viewport: Viewport) -> u16 {
        let menu_h = MENU_TITLE_ROWS + (MenuItem::ALL.len() as u16) * 2 + 2;
        viewport.height.saturating_sub(menu_h) / 2
    }

    fn menu_button_origin(&self, viewport: Viewport, item: MenuItem) -> (u16, u16) {
        let idx = MenuItem::ALL.iter().position(|&i| i == item).unwrap_or(0) as u16;
        let x = viewport.width.saturating_sub(MENU_BUTTON_W) / 2;
        let y = self.menu_top(viewport) + MENU_TITLE_ROWS + idx * 2;
        (x, y)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        extras: FrameExtras<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(WHITE, BG).into_cell(' '));

        match snap.phase {
            Phase::Menu => self.draw_menu(fb, viewport, extras.pointer),
            Phase::Highscore => self.draw_highscores(fb, snap, viewport),
            Phase::Playing => self.draw_game(fb, snap, extras, viewport),
            Phase::GameOver => {
                self.draw_game(fb, snap, extras, viewport);
                self.draw_overlay(fb, viewport, "GAME OVER", "Press [R] to restart", RED);
            }
            Phase::Victory => {
                self.draw_game(fb, snap, extras, viewport);
                self.draw_overlay(
                    fb,
                    viewport,
                    "All chickens sorted!",
                    "Press [Enter] for highscore",
                    ACCENT,
                );
            }
            Phase::EnteringName => {
                self.draw_game(fb, snap, extras, viewport);
                let mut line = String::with_capacity(8 + snap.name_input.len());
                line.push_str("Name: ");
                line.push_str(&snap.name_input);
                line.push('_');
                self.draw_overlay(fb, viewport, "Enter your name:", &line, ACCENT);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        extras: FrameExtras<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, extras, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport, pointer: Option<(u16, u16)>) {
        let top = self.menu_top(viewport);
        let title = CellStyle::new(ACCENT, BG).bold();
        fb.put_str_centered(0, viewport.width, top, "Sort the CHICKENS!", title);

        let hovered = pointer.and_then(|(c, r)| self.menu_item_at(viewport, c, r));
        for item in MenuItem::ALL {
            let (x, y) = self.menu_button_origin(viewport, item);
            let bg = if hovered == Some(item) {
                BUTTON_HOVER
            } else {
                BUTTON_BG
            };
            let style = CellStyle::new(WHITE, bg);
            fb.fill_rect(x, y, MENU_BUTTON_W, 1, ' ', style);
            let label = match item {
                MenuItem::Start(d) => {
                    let mut s = String::from(d.label());
                    s.push_str(" - ");
                    s.push_str(&d.goal().to_string());
                    s.push_str(" chickens");
                    s
                }
                MenuItem::Highscores => String::from("Highscores"),
            };
            fb.put_str_centered(x, MENU_BUTTON_W, y, &label, style);
        }

        let hint_y = top + MENU_TITLE_ROWS + (MenuItem::ALL.len() as u16) * 2 + 1;
        fb.put_str_centered(
            0,
            viewport.width,
            hint_y,
            "Click or press E / M / H / S  -  Esc quits",
            CellStyle::new(GREY, BG),
        );
    }

    fn draw_highscores(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let rows = snap.highscores.len().max(1) as u16;
        let top = viewport.height.saturating_sub(rows + 6) / 2;
        fb.put_str_centered(
            0,
            viewport.width,
            top,
            "Highscores",
            CellStyle::new(ACCENT, BG).bold(),
        );

        let text = CellStyle::new(WHITE, BG);
        if snap.highscores.is_empty() {
            fb.put_str_centered(0, viewport.width, top + 2, "No scores yet", text.dim());
        }
        for (i, entry) in snap.highscores.iter().enumerate() {
            let line = format!("{:>2}. {:<16} {:>5}", i + 1, entry.name, entry.score);
            fb.put_str_centered(0, viewport.width, top + 2 + i as u16, &line, text);
        }

        fb.put_str_centered(
            0,
            viewport.width,
            top + 3 + rows + 1,
            "Press [Q] for main menu",
            CellStyle::new(GREY, BG),
        );
    }

    fn draw_game(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        extras: FrameExtras<'_>,
        viewport: Viewport,
    ) {
        let layout = self.layout(viewport);
        let board_bg = CellStyle::new(EMPTY_FG, PANEL_BG);

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            board_bg,
        );
        self.draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            CellStyle::new(GREY, BG),
        );

        for y in 0..GRID_HEIGHT as u16 {
            for x in 0..GRID_WIDTH as u16 {
                let v = snap.grid[y as usize][x as usize];
                match kind_from_cell(v) {
                    Some(kind) => self.draw_tile(fb, &layout, x, y, kind, TileLook::Normal),
                    None => self.draw_empty(fb, &layout, x, y),
                }
            }
        }

        if let Some(effects) = extras.effects {
            for e in effects.iter() {
                self.draw_pop(fb, &layout, u16::from(e.x), u16::from(e.y), e.progress());
            }
        }

        if snap.phase == Phase::Playing {
            if let (Some(pair), Some((col, row))) = (snap.current, extras.pointer) {
                let (ax, ay) = self.anchor_at(viewport, col, row);
                if (0..GRID_WIDTH as i32).contains(&ax) && (0..GRID_HEIGHT as i32).contains(&ay) {
                    self.draw_preview(fb, &layout, snap, &pair, ax, ay);
                }
            }
        }

        self.draw_side_panel(fb, snap, &layout, viewport);
        self.draw_info(fb, snap, &layout);
    }

    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        pair: &Pair,
        ax: i32,
        ay: i32,
    ) {
        let grid = grid_from_snapshot(snap);
        let look = if can_place(&grid, ax, ay, pair) {
            TileLook::Ghost
        } else {
            TileLook::Blocked
        };
        for (x, y, kind) in pair.cells_at(ax, ay) {
            if (0..GRID_WIDTH as i32).contains(&x) && (0..GRID_HEIGHT as i32).contains(&y) {
                self.draw_tile(fb, layout, x as u16, y as u16, kind, look);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        viewport: Viewport,
    ) {
        if layout.panel_x + PANEL_W > viewport.width {
            return;
        }
        let label = CellStyle::new(WHITE, BG).bold();
        let hint = CellStyle::new(GREY, BG);

        let mut y = layout.frame_y;
        fb.put_str(layout.panel_x, y, "NEXT PAIR", label);
        y += 1;
        if let Some(next) = snap.next {
            for p in next.placements() {
                let px = layout.panel_x + (p.dx as u16) * self.cell_w;
                let py = y + (p.dy as u16) * self.cell_h;
                let (fg, ch) = tile_look(p.kind);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(fg, fg));
                fb.put_char(
                    px + self.cell_w / 2,
                    py + self.cell_h / 2,
                    ch,
                    CellStyle::new(BG, fg).bold(),
                );
            }
        }
        y += 2 * self.cell_h + 1;

        fb.put_str(layout.panel_x, y, "[R]   menu", hint);
        y += 1;
        fb.put_str(layout.panel_x, y, "[Esc] menu", hint);
        y += 2;
        fb.put_str(layout.panel_x, y, "Click a cell to", hint.dim());
        y += 1;
        fb.put_str(layout.panel_x, y, "drop the pair", hint.dim());
    }

    fn draw_info(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let y = layout.frame_y + layout.frame_h;
        let x = layout.frame_x + 1;
        let accent = CellStyle::new(ACCENT, BG).bold();
        let text = CellStyle::new(WHITE, BG);

        fb.put_str(x, y, "Sorted: ", accent);
        let mut cx = x + 8;
        cx += fb.put_u32(cx, y, snap.rescued, accent);
        fb.put_char(cx, y, '/', accent);
        fb.put_u32(cx + 1, y, snap.goal, accent);

        fb.put_str(x, y + 1, "Moves:  ", text);
        fb.put_u32(x + 8, y + 1, snap.moves, text);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        title: &str,
        subtitle: &str,
        color: Rgb,
    ) {
        let w = (title.chars().count().max(subtitle.chars().count()) as u16 + 6)
            .min(viewport.width);
        let h = 6u16.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let panel = CellStyle::new(WHITE, PANEL_BG);
        fb.fill_rect(x, y, w, h, ' ', panel);
        self.draw_border(fb, x, y, w, h, CellStyle::new(GREY, PANEL_BG));
        fb.put_str_centered(x, w, y + 2, title, CellStyle::new(color, PANEL_BG).bold());
        fb.put_str_centered(x, w, y + 3, subtitle, panel);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn cell_origin(&self, layout: &Layout, x: u16, y: u16) -> (u16, u16) {
        (
            layout.frame_x + 1 + x * self.cell_w,
            layout.frame_y + 1 + y * self.cell_h,
        )
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16) {
        let (px, py) = self.cell_origin(layout, x, y);
        let style = CellStyle::new(EMPTY_FG, PANEL_BG).dim();
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: u16,
        y: u16,
        kind: TileKind,
        look: TileLook,
    ) {
        let (px, py) = self.cell_origin(layout, x, y);
        let (color, ch) = tile_look(kind);
        let fill = match look {
            TileLook::Normal => color,
            TileLook::Ghost => color.mix(PANEL_BG, 140),
            TileLook::Blocked => color.mix(RED, 180),
        };
        // Leave a one-column gutter so neighbouring tiles stay distinguishable.
        fb.fill_rect(
            px,
            py,
            self.cell_w.saturating_sub(1).max(1),
            self.cell_h,
            ' ',
            CellStyle::new(fill, fill),
        );
        fb.put_char(
            px + self.cell_w.saturating_sub(1) / 2,
            py + self.cell_h / 2,
            ch,
            CellStyle::new(BG, fill).bold(),
        );
    }

    fn draw_pop(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, progress: u8) {
        let (px, py) = self.cell_origin(layout, x, y);
        let fg = ACCENT.mix(PANEL_BG, progress);
        let ch = if progress < 128 { '✶' } else { '·' };
        fb.put_char(
            px + self.cell_w.saturating_sub(1) / 2,
            py + self.cell_h / 2,
            ch,
            CellStyle::new(fg, PANEL_BG).bold(),
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileLook {
    Normal,
    /// Hover preview where the pair fits
    Ghost,
    /// Hover preview where it does not
    Blocked,
}

fn tile_look(kind: TileKind) -> (Rgb, char) {
    match kind.id() {
        0 => (Rgb::new(245, 240, 225), '●'),
        1 => (Rgb::new(205, 140, 70), '▲'),
        2 => (Rgb::new(110, 180, 240), '■'),
        _ => (Rgb::new(225, 95, 95), '◆'),
    }
}

fn kind_from_cell(v: u8) -> Option<TileKind> {
    v.checked_sub(1).and_then(TileKind::new)
}

fn grid_from_snapshot(snap: &GameSnapshot) -> Grid {
    let mut grid = Grid::new();
    for (y, row) in snap.grid.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            grid.set(x as i32, y as i32, kind_from_cell(v));
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_at_uses_floor_division() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(vp);
        let x0 = layout.frame_x + 1;
        let y0 = layout.frame_y + 1;

        assert_eq!(view.anchor_at(vp, x0, y0), (0, 0));
        assert_eq!(view.anchor_at(vp, x0 + 3, y0 + 1), (0, 0));
        assert_eq!(view.anchor_at(vp, x0 + 4, y0 + 2), (1, 1));
        assert_eq!(view.anchor_at(vp, x0 - 1, y0 - 1), (-1, -1));
        assert_eq!(view.anchor_at(vp, x0 + 24, y0), (6, 0));
    }

    #[test]
    fn kind_from_cell_maps_snapshot_values() {
        assert_eq!(kind_from_cell(0), None);
        assert_eq!(kind_from_cell(1), TileKind::new(0));
        assert_eq!(kind_from_cell(4), TileKind::new(3));
        assert_eq!(kind_from_cell(5), None);
    }

    #[test]
    fn menu_items_hit_test() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        for item in MenuItem::ALL {
            let (x, y) = view.menu_button_origin(vp, item);
            assert_eq!(view.menu_item_at(vp, x, y), Some(item));
            assert_eq!(view.menu_item_at(vp, x + MENU_BUTTON_W - 1, y), Some(item));
            assert_eq!(view.menu_item_at(vp, x + MENU_BUTTON_W, y), None);
            assert_eq!(view.menu_item_at(vp, x, y + 1), None);
        }
    }
}
