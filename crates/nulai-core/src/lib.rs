//! Core types shared by the nulai crates.
//!
//! Geometry is expressed in world pixels relative to the screen center, the
//! same units the landing page uses for its orbit radii. Terminal cells are
//! converted to and from world pixels by the render adapter.

use std::ops::{Add, Sub};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Page background the labels and glows are blended against.
pub const PAGE_BACKGROUND: Rgb = Rgb(10, 10, 10);

/// Tint of a label at rest.
pub const NEUTRAL_TINT: Rgb = Rgb(255, 255, 255);

/// A point or offset in world pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Move `t` of the way towards `target`.
    pub fn lerp(self, target: Vec2, t: f32) -> Vec2 {
        Vec2::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned box in world pixels. `top < bottom` (y grows downwards).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Box of the given size centered on `center`.
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            right: center.x + width / 2.0,
            bottom: center.y + height / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Grow the box by `horizontal` on the left and right and by `vertical`
    /// on the top and bottom.
    pub fn padded(&self, horizontal: f32, vertical: f32) -> Self {
        Self {
            left: self.left - horizontal,
            top: self.top - vertical,
            right: self.right + horizontal,
            bottom: self.bottom + vertical,
        }
    }

    /// Overlap test. Touching edges count as overlapping.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Composite `self` at `alpha` over `background`.
    pub fn over(self, background: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * a).round() as u8;
        Rgb(
            mix(self.0, background.0),
            mix(self.1, background.1),
            mix(self.2, background.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// Accent color used for highlighted labels, the cursor and the title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentTheme {
    #[default]
    Orange,
    Cyan,
    Green,
    Magenta,
    Yellow,
    Red,
    Blue,
    White,
}

impl AccentTheme {
    /// Cycle to the next accent.
    pub fn next(&self) -> Self {
        match self {
            AccentTheme::Orange => AccentTheme::Cyan,
            AccentTheme::Cyan => AccentTheme::Green,
            AccentTheme::Green => AccentTheme::Magenta,
            AccentTheme::Magenta => AccentTheme::Yellow,
            AccentTheme::Yellow => AccentTheme::Red,
            AccentTheme::Red => AccentTheme::Blue,
            AccentTheme::Blue => AccentTheme::White,
            AccentTheme::White => AccentTheme::Orange,
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            AccentTheme::Orange => Rgb(255, 107, 53),
            AccentTheme::Cyan => Rgb(0, 200, 220),
            AccentTheme::Green => Rgb(80, 220, 120),
            AccentTheme::Magenta => Rgb(230, 80, 200),
            AccentTheme::Yellow => Rgb(245, 210, 60),
            AccentTheme::Red => Rgb(235, 60, 60),
            AccentTheme::Blue => Rgb(70, 130, 255),
            AccentTheme::White => Rgb(240, 240, 240),
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        self.rgb().into()
    }
}

/// Font weight of a label. Terminals only distinguish bold from regular.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    SemiBold,
    Bold,
}

impl FontWeight {
    /// CSS numeric weight.
    pub fn value(self) -> u16 {
        match self {
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// How the rotation step is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationMode {
    /// Step is radians per displayed frame, so speed follows the frame rate.
    #[default]
    PerFrame,
    /// Step is radians per second of wall-clock time.
    PerSecond,
}
