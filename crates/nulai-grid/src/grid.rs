//! Orbital grid state: placed labels, their current offsets and highlights.

use nulai_core::{Rect, Vec2};

use crate::highlight::Highlight;
use crate::placement::{Label, OrbitParams, Verdict, place};
use crate::rotation::Rotation;

/// Measures the box a label occupies once drawn.
pub trait LabelMetrics {
    /// Box of `text` drawn centered on `center`, in world pixels.
    fn label_box(&self, text: &str, center: Vec2) -> Rect;
}

/// Labels orbiting the screen center.
#[derive(Debug, Clone)]
pub struct OrbitalGrid {
    params: OrbitParams,
    labels: Vec<Label>,
    /// Current offset of each label, parallel to `labels`.
    offsets: Vec<Vec2>,
    /// Current highlight of each label, parallel to `labels`.
    highlights: Vec<Highlight>,
}

impl OrbitalGrid {
    /// Place `catalog` and keep every label that clears the exclusion ellipse.
    pub fn new<S: AsRef<str>>(catalog: &[S], params: OrbitParams) -> Self {
        let placements = place(catalog, &params);
        let total = placements.len();

        let (labels, offsets): (Vec<Label>, Vec<Vec2>) = placements
            .into_iter()
            .filter(|p| p.verdict == Verdict::Placed)
            .map(|p| (p.label, p.offset))
            .unzip();

        log::debug!(
            "placed {} of {} labels on {} rings",
            labels.len(),
            total,
            params.ring_count
        );

        let highlights = vec![Highlight::BASELINE; labels.len()];
        Self {
            params,
            labels,
            offsets,
            highlights,
        }
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Visible labels with their current offset and highlight.
    pub fn visible(&self) -> impl Iterator<Item = (&Label, Vec2, &Highlight)> {
        self.labels
            .iter()
            .zip(&self.offsets)
            .zip(&self.highlights)
            .filter(|((label, _), _)| label.visible)
            .map(|((label, offset), highlight)| (label, *offset, highlight))
    }

    /// Recompute every label's offset for the given rotation. Radii and base
    /// angles never change.
    pub fn reposition(&mut self, rotation: &Rotation) {
        let angle = rotation.angle();
        for (label, offset) in self.labels.iter().zip(self.offsets.iter_mut()) {
            *offset = label.offset_at(angle);
        }
    }

    /// Rescan every visible label against the pointer position.
    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        let glow_radius = self.params.glow_radius;
        for ((label, offset), highlight) in self
            .labels
            .iter()
            .zip(&self.offsets)
            .zip(self.highlights.iter_mut())
        {
            if label.visible {
                *highlight = Highlight::for_distance(pointer.distance(*offset), glow_radius);
            }
        }
    }

    /// Reset every visible label to the resting state.
    pub fn on_pointer_leave(&mut self) {
        for (label, highlight) in self.labels.iter().zip(self.highlights.iter_mut()) {
            if label.visible {
                *highlight = Highlight::BASELINE;
            }
        }
    }

    /// Hide every label whose measured box touches the padded title box.
    ///
    /// Returns how many labels were newly hidden. Hidden labels stay hidden
    /// for the lifetime of the grid.
    pub fn hide_overlapping(&mut self, title: Rect, metrics: &impl LabelMetrics) -> usize {
        let padding = self.params.title_padding;
        let zone = title.padded(padding.x, padding.y);
        let mut hidden = 0;

        for ((label, offset), highlight) in self
            .labels
            .iter_mut()
            .zip(&self.offsets)
            .zip(self.highlights.iter_mut())
        {
            if label.visible && metrics.label_box(&label.text, *offset).intersects(&zone) {
                label.visible = false;
                *highlight = Highlight::HIDDEN;
                hidden += 1;
            }
        }

        log::debug!("title overlap pass hid {hidden} labels");
        hidden
    }

    /// Index of the topmost visible label whose box contains `point`.
    pub fn label_at(&self, point: Vec2, metrics: &impl LabelMetrics) -> Option<usize> {
        self.labels
            .iter()
            .zip(&self.offsets)
            .enumerate()
            .rev()
            .find(|(_, (label, offset))| {
                label.visible && metrics.label_box(&label.text, **offset).contains(point)
            })
            .map(|(i, _)| i)
    }
}
