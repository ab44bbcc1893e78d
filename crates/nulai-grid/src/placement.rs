//! Orbit placement (pure geometry).
//!
//! The catalog is split into consecutive runs, one run per ring. Ring radii
//! grow outwards by a fixed spacing and every ring is stretched into a wide
//! oval. Labels whose starting point falls inside the exclusion ellipse around
//! the center title are rejected here and never reach the grid.

use std::f32::consts::TAU;

use nulai_core::Vec2;

/// Constants driving placement, highlighting and the title overlap pass.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitParams {
    /// Number of rings the catalog is split into.
    pub ring_count: usize,
    /// Radius of the innermost ring before stretching.
    pub base_radius: f32,
    /// Radius added per ring.
    pub ring_spacing: f32,
    /// Horizontal stretch applied to the ring radius.
    pub stretch_x: f32,
    /// Vertical stretch applied to the ring radius.
    pub stretch_y: f32,
    /// Semi-axes of the exclusion ellipse.
    pub exclusion: Vec2,
    /// Pointer distance within which labels light up.
    pub glow_radius: f32,
    /// Horizontal and vertical padding around the measured title box.
    pub title_padding: Vec2,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            ring_count: 5,
            base_radius: 350.0,
            ring_spacing: 120.0,
            stretch_x: 1.8,
            stretch_y: 0.6,
            exclusion: Vec2::new(450.0, 150.0),
            glow_radius: 200.0,
            title_padding: Vec2::new(120.0, 60.0),
        }
    }
}

impl OrbitParams {
    /// Semi-axes `(radius_x, radius_y)` of ring `ring`.
    pub fn ring_radii(&self, ring: usize) -> (f32, f32) {
        let base = self.base_radius + ring as f32 * self.ring_spacing;
        (base * self.stretch_x, base * self.stretch_y)
    }
}

/// A catalog entry with its orbit parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Position of the entry in the catalog.
    pub catalog_index: usize,
    pub ring: usize,
    /// Angle at rotation zero, in radians.
    pub base_angle: f32,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Cleared by the title overlap pass.
    pub visible: bool,
}

impl Label {
    /// Offset from the screen center at the given rotation.
    pub fn offset_at(&self, rotation: f32) -> Vec2 {
        orbit_offset(self.base_angle + rotation, self.radius_x, self.radius_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Placed,
    /// Starting point lies inside the exclusion ellipse.
    Excluded,
}

/// Result of placing one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub label: Label,
    /// Offset at rotation zero.
    pub offset: Vec2,
    pub verdict: Verdict,
}

/// Number of catalog entries per ring.
pub fn ring_capacity(len: usize, ring_count: usize) -> usize {
    len.div_ceil(ring_count.max(1))
}

/// Point on an axis-aligned ellipse with semi-axes `radius_x`, `radius_y`.
pub fn orbit_offset(angle: f32, radius_x: f32, radius_y: f32) -> Vec2 {
    Vec2::new(angle.cos() * radius_x, angle.sin() * radius_y)
}

/// Whether `offset` lies strictly inside the ellipse with semi-axes `axes`.
pub fn in_exclusion(offset: Vec2, axes: Vec2) -> bool {
    let nx = offset.x / axes.x;
    let ny = offset.y / axes.y;
    nx * nx + ny * ny < 1.0
}

/// Place every catalog entry, in catalog order.
pub fn place<S: AsRef<str>>(catalog: &[S], params: &OrbitParams) -> Vec<Placement> {
    let len = catalog.len();
    let per_ring = ring_capacity(len, params.ring_count);

    catalog
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let ring = index / per_ring;
            let index_in_ring = index % per_ring;
            let members = per_ring.min(len - ring * per_ring);

            let (radius_x, radius_y) = params.ring_radii(ring);
            let base_angle = index_in_ring as f32 / members as f32 * TAU;
            let offset = orbit_offset(base_angle, radius_x, radius_y);

            let verdict = if in_exclusion(offset, params.exclusion) {
                Verdict::Excluded
            } else {
                Verdict::Placed
            };

            Placement {
                label: Label {
                    text: text.as_ref().to_string(),
                    catalog_index: index,
                    ring,
                    base_angle,
                    radius_x,
                    radius_y,
                    visible: true,
                },
                offset,
                verdict,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AUDIENCES;

    fn catalog(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("LABEL{i}")).collect()
    }

    #[test]
    fn test_ring_capacity() {
        assert_eq!(ring_capacity(150, 5), 30);
        assert_eq!(ring_capacity(7, 5), 2);
        assert_eq!(ring_capacity(0, 5), 0);
        assert_eq!(ring_capacity(4, 0), 4);
    }

    #[test]
    fn test_full_catalog_rings() {
        let placements = place(AUDIENCES, &OrbitParams::default());
        assert_eq!(placements.len(), 150);
        for ring in 0..5 {
            let count = placements.iter().filter(|p| p.label.ring == ring).count();
            assert_eq!(count, 30);
        }
        assert!(placements.iter().all(|p| p.label.ring < 5));
    }

    #[test]
    fn test_last_ring_takes_remainder() {
        let placements = place(&catalog(7), &OrbitParams::default());
        let rings: Vec<usize> = placements.iter().map(|p| p.label.ring).collect();
        assert_eq!(rings, vec![0, 0, 1, 1, 2, 2, 3]);
        // A lone member sits at angle zero.
        assert_eq!(placements[6].label.base_angle, 0.0);
    }

    #[test]
    fn test_ring_assignment_is_deterministic() {
        let params = OrbitParams::default();
        assert_eq!(place(AUDIENCES, &params), place(AUDIENCES, &params));
    }

    #[test]
    fn test_angles_evenly_spaced_within_ring() {
        let items = catalog(23);
        let params = OrbitParams::default();
        let placements = place(&items, &params);
        let per_ring = ring_capacity(items.len(), params.ring_count);

        for ring in 0..params.ring_count {
            let mut angles: Vec<f32> = placements
                .iter()
                .filter(|p| p.label.ring == ring)
                .map(|p| p.label.base_angle)
                .collect();
            let m = per_ring.min(items.len() - ring * per_ring);
            assert_eq!(angles.len(), m);
            angles.sort_by(f32::total_cmp);
            for pair in angles.windows(2) {
                assert!((pair[1] - pair[0] - TAU / m as f32).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_stretch_ratio_constant_across_rings() {
        let params = OrbitParams::default();
        let ratio = params.stretch_x / params.stretch_y;
        for p in place(AUDIENCES, &params) {
            assert!((p.label.radius_x / p.label.radius_y - ratio).abs() < 1e-4);
            assert!(p.label.radius_x > p.label.radius_y);
        }
    }

    #[test]
    fn test_ring_radius_grows_with_index() {
        let params = OrbitParams::default();
        assert_eq!(params.ring_radii(0), (350.0 * 1.8, 350.0 * 0.6));
        assert_eq!(params.ring_radii(2), (590.0 * 1.8, 590.0 * 0.6));
    }

    #[test]
    fn test_exclusion_ellipse() {
        let axes = Vec2::new(450.0, 150.0);
        assert!(in_exclusion(Vec2::ZERO, axes));
        assert!(in_exclusion(Vec2::new(449.0, 0.0), axes));
        assert!(!in_exclusion(Vec2::new(450.0, 0.0), axes));
        assert!(!in_exclusion(Vec2::new(0.0, 151.0), axes));
        assert!(!in_exclusion(Vec2::new(400.0, 100.0), axes));
    }

    #[test]
    fn test_excluded_labels_match_ellipse_test() {
        // The innermost ring shrinks inside the exclusion zone.
        let params = OrbitParams {
            base_radius: 200.0,
            ring_spacing: 100.0,
            ..Default::default()
        };
        let placements = place(AUDIENCES, &params);
        let excluded = placements
            .iter()
            .filter(|p| p.verdict == Verdict::Excluded)
            .count();
        assert!(excluded > 0);
        assert!(excluded < placements.len());
        for p in &placements {
            let inside = in_exclusion(p.offset, params.exclusion);
            assert_eq!(p.verdict == Verdict::Excluded, inside);
        }
    }

    #[test]
    fn test_default_geometry_clears_exclusion() {
        let placements = place(AUDIENCES, &OrbitParams::default());
        assert!(placements.iter().all(|p| p.verdict == Verdict::Placed));
    }

    #[test]
    fn test_empty_catalog() {
        let empty: [&str; 0] = [];
        assert!(place(&empty, &OrbitParams::default()).is_empty());
    }

    #[test]
    fn test_offset_at_zero_matches_initial_offset() {
        for p in place(AUDIENCES, &OrbitParams::default()) {
            assert_eq!(p.label.offset_at(0.0), p.offset);
        }
    }
}
