//! Static film-grain background.

use nulai_core::{PAGE_BACKGROUND, Rgb};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Background of a grain speck.
const SPECK: Rgb = Rgb(5, 5, 5);

/// Per-cell grain, regenerated whenever the area changes size.
#[derive(Debug)]
pub struct NoiseField {
    seed: u64,
    density: f32,
    width: u16,
    height: u16,
    specks: Vec<bool>,
}

impl NoiseField {
    pub fn new(seed: u64, density: f32) -> Self {
        Self {
            seed,
            density: density.clamp(0.0, 1.0),
            width: 0,
            height: 0,
            specks: Vec::new(),
        }
    }

    /// Regenerate the grain if the dimensions changed.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height && !self.specks.is_empty() {
            return;
        }
        self.width = width;
        self.height = height;
        // Fresh grain on every resize.
        self.seed = mix(self.seed);

        let threshold = (self.density as f64 * u32::MAX as f64) as u64;
        self.specks = (0..height as u64)
            .flat_map(|y| (0..width as u64).map(move |x| (x, y)))
            .map(|(x, y)| {
                let h = mix(self.seed ^ (y << 32 | x));
                (h >> 32) < threshold
            })
            .collect();
    }

    pub fn is_speck(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.specks[y as usize * self.width as usize + x as usize]
    }

    /// Fill `area` with the page background and grain.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.resize(area.width, area.height);

        let page = Style::new().bg(PAGE_BACKGROUND.into());
        let speck = Style::new().bg(SPECK.into());

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| {
                        if self.is_speck(x, y) {
                            Span::styled(" ", speck)
                        } else {
                            Span::styled(" ", page)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// SplitMix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
