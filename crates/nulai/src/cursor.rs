//! Pointer-following cursor dot.

use nulai_core::{AccentTheme, Vec2};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Glyph drawn at rest.
const DOT: char = '●';

/// Glyph drawn while over a label.
const HOVER_DOT: char = '◉';

/// A dot easing towards the pointer, in fractional cell coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    position: Option<Vec2>,
    target: Option<Vec2>,
    /// Fraction of the remaining distance covered per frame.
    ease: f32,
    hovering: bool,
}

impl CursorFollower {
    pub fn new(ease: f32) -> Self {
        Self {
            position: None,
            target: None,
            ease: ease.clamp(f32::EPSILON, 1.0),
            hovering: false,
        }
    }

    /// Point the follower at a cell. The first target is adopted immediately.
    pub fn set_target(&mut self, col: u16, row: u16) {
        let target = Vec2::new(col as f32, row as f32);
        self.target = Some(target);
        if self.position.is_none() {
            self.position = Some(target);
        }
    }

    /// Hide the cursor until the pointer comes back.
    pub fn clear(&mut self) {
        self.position = None;
        self.target = None;
        self.hovering = false;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        if let (Some(position), Some(target)) = (self.position, self.target) {
            self.position = Some(position.lerp(target, self.ease));
        }
    }

    /// Cell the dot currently occupies.
    pub fn cell(&self) -> Option<(u16, u16)> {
        let p = self.position?;
        Some((p.x.round().max(0.0) as u16, p.y.round().max(0.0) as u16))
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, accent: AccentTheme) {
        let Some((col, row)) = self.cell() else {
            return;
        };
        if !area.contains((col, row).into()) {
            return;
        }
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_char(if self.hovering { HOVER_DOT } else { DOT });
            cell.set_style(Style::new().fg(accent.color()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_follow() {
        let mut cursor = CursorFollower::new(1.0);
        assert_eq!(cursor.cell(), None);
        cursor.set_target(10, 5);
        assert_eq!(cursor.cell(), Some((10, 5)));
        cursor.set_target(40, 20);
        cursor.update();
        assert_eq!(cursor.cell(), Some((40, 20)));
    }

    #[test]
    fn test_eased_follow() {
        let mut cursor = CursorFollower::new(0.5);
        cursor.set_target(0, 0);
        cursor.set_target(16, 8);
        cursor.update();
        assert_eq!(cursor.cell(), Some((8, 4)));
        cursor.update();
        assert_eq!(cursor.cell(), Some((12, 6)));
    }

    #[test]
    fn test_clear_hides() {
        let mut cursor = CursorFollower::new(1.0);
        cursor.set_target(3, 3);
        cursor.set_hovering(true);
        cursor.clear();
        assert_eq!(cursor.cell(), None);

        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        cursor.render(&mut buf, area, AccentTheme::Orange);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_hover_glyph() {
        let mut cursor = CursorFollower::new(1.0);
        cursor.set_target(2, 1);
        cursor.set_hovering(true);
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        cursor.render(&mut buf, area, AccentTheme::Orange);
        assert_eq!(buf[(2, 1)].symbol(), "◉");
    }
}
