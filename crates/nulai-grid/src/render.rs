//! Terminal adapter: maps world pixels onto cells and draws the grid.

use nulai_core::{AccentTheme, FontWeight, NEUTRAL_TINT, PAGE_BACKGROUND, Rect, Vec2};
use ratatui::{
    buffer::{Buffer, Cell},
    layout,
    style::{Modifier, Style},
};

use crate::grid::{LabelMetrics, OrbitalGrid};
use crate::highlight::Highlight;

/// How strongly a glow tints the cells under and around a label.
const GLOW_STRENGTH: f32 = 0.35;

/// Widest halo drawn on either side of a glowing label, in cells.
const MAX_HALO_CELLS: i32 = 4;

/// World pixels covered by one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width_px: f32,
    pub height_px: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 12.0,
            height_px: 24.0,
        }
    }
}

impl CellMetrics {
    /// World size of a block of `cols` by `rows` cells.
    pub fn size_of(&self, cols: usize, rows: usize) -> Vec2 {
        Vec2::new(cols as f32 * self.width_px, rows as f32 * self.height_px)
    }
}

impl LabelMetrics for CellMetrics {
    fn label_box(&self, text: &str, center: Vec2) -> Rect {
        let size = self.size_of(text.chars().count(), 1);
        Rect::centered(center, size.x, size.y)
    }
}

/// A terminal area with the world origin at its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: layout::Rect,
    pub metrics: CellMetrics,
}

impl Viewport {
    /// `None` when there is no area to draw into.
    pub fn new(area: Option<layout::Rect>, metrics: CellMetrics) -> Option<Self> {
        area.filter(|a| !a.is_empty()).map(|area| Self { area, metrics })
    }

    /// Center of the area in fractional cell coordinates.
    fn center(&self) -> (f32, f32) {
        (
            self.area.x as f32 + self.area.width as f32 / 2.0,
            self.area.y as f32 + self.area.height as f32 / 2.0,
        )
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.area.contains(layout::Position::new(col, row))
    }

    /// World position of the middle of a cell.
    pub fn cell_to_world(&self, col: u16, row: u16) -> Vec2 {
        let (cx, cy) = self.center();
        Vec2::new(
            (col as f32 + 0.5 - cx) * self.metrics.width_px,
            (row as f32 + 0.5 - cy) * self.metrics.height_px,
        )
    }

    /// Fractional cell coordinates of a world position.
    pub fn world_to_cell(&self, p: Vec2) -> (f32, f32) {
        let (cx, cy) = self.center();
        (
            cx + p.x / self.metrics.width_px,
            cy + p.y / self.metrics.height_px,
        )
    }

    /// World box covered by a block of cells.
    pub fn cells_to_world(&self, cells: layout::Rect) -> Rect {
        let top_left = self.cell_to_world(cells.x, cells.y);
        let (w, h) = (self.metrics.width_px, self.metrics.height_px);
        Rect {
            left: top_left.x - w / 2.0,
            top: top_left.y - h / 2.0,
            right: top_left.x - w / 2.0 + cells.width as f32 * w,
            bottom: top_left.y - h / 2.0 + cells.height as f32 * h,
        }
    }

    /// First cell of a run of `len` cells centered on `p`.
    pub fn text_origin(&self, p: Vec2, len: usize) -> (i32, i32) {
        let (fx, fy) = self.world_to_cell(p);
        ((fx - len as f32 / 2.0).round() as i32, fy.floor() as i32)
    }

    fn cell_mut<'a>(&self, buf: &'a mut Buffer, col: i32, row: i32) -> Option<&'a mut Cell> {
        let col = u16::try_from(col).ok()?;
        let row = u16::try_from(row).ok()?;
        if !self.contains(col, row) {
            return None;
        }
        buf.cell_mut((col, row))
    }
}

/// Draw every visible label of `grid` into `buf`.
pub fn render_grid(
    buf: &mut Buffer,
    viewport: &Viewport,
    grid: &OrbitalGrid,
    accent: AccentTheme,
) {
    for (label, offset, highlight) in grid.visible() {
        render_label(buf, viewport, &label.text, offset, highlight, accent);
    }
}

fn render_label(
    buf: &mut Buffer,
    viewport: &Viewport,
    text: &str,
    offset: Vec2,
    highlight: &Highlight,
    accent: AccentTheme,
) {
    let len = text.chars().count();
    let (col, row) = viewport.text_origin(offset, len);

    let tint = if highlight.accent { accent.rgb() } else { NEUTRAL_TINT };
    let mut style = Style::new().fg(tint.over(PAGE_BACKGROUND, highlight.opacity).into());
    if highlight.weight == FontWeight::Bold {
        style = style.add_modifier(Modifier::BOLD);
    }

    if let Some(glow) = highlight.glow {
        let halo_bg = accent
            .rgb()
            .over(PAGE_BACKGROUND, glow.outer_alpha * GLOW_STRENGTH);
        let halo = (glow.outer_blur / viewport.metrics.width_px).round() as i32;
        let halo = halo.min(MAX_HALO_CELLS);
        for c in (col - halo)..col {
            if let Some(cell) = viewport.cell_mut(buf, c, row) {
                cell.set_bg(halo_bg.into());
            }
        }
        for c in (col + len as i32)..(col + len as i32 + halo) {
            if let Some(cell) = viewport.cell_mut(buf, c, row) {
                cell.set_bg(halo_bg.into());
            }
        }

        let inner_bg = accent.rgb().over(PAGE_BACKGROUND, glow.alpha * GLOW_STRENGTH);
        style = style.bg(inner_bg.into());
    }

    for (i, ch) in text.chars().enumerate() {
        if let Some(cell) = viewport.cell_mut(buf, col + i as i32, row) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }
}
