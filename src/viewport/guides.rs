//! On-canvas alignment guides: outline box, snap grid, rulers and corner
//! markers, plus the snap/clamp math used when dragging a design around.
//!
//! Guides are plain line lists in garment-local space (origin at the
//! bounds' center); the host's guide renderer draws them as-is.

use glam::{Vec3, Vec4};

use crate::resources::BoundingBox;

use super::manager::GarmentBounds;

/// Line-list geometry: `positions` holds segment endpoints pairwise.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLines {
    pub positions: Vec<Vec3>,
    pub color: Vec4,
}

impl GuideLines {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            positions: Vec::new(),
            color,
        }
    }

    pub fn push_segment(&mut self, a: Vec3, b: Vec3) {
        self.positions.push(a);
        self.positions.push(b);
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.positions.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Vertex bytes (`Float32x3` per endpoint) for direct upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RulerTick {
    pub position: Vec3,
    /// Distance from the ruler origin, in garment units.
    pub value: f32,
    pub major: bool,
    /// Present on major ticks only.
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ruler {
    pub lines: GuideLines,
    pub ticks: Vec<RulerTick>,
}

/// Guide colors and sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideStyle {
    pub box_color: Vec4,
    pub grid_color: Vec4,
    pub ruler_color: Vec4,
    pub marker_color: Vec4,
    /// Minor ticks between two major ticks.
    pub ticks_per_major: u32,
    pub minor_tick_length: f32,
    pub major_tick_length: f32,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            box_color: Vec4::new(0.23, 0.51, 0.96, 1.0),
            grid_color: Vec4::new(0.6, 0.6, 0.6, 0.35),
            ruler_color: Vec4::new(0.2, 0.2, 0.2, 1.0),
            marker_color: Vec4::new(0.94, 0.27, 0.27, 1.0),
            ticks_per_major: 5,
            minor_tick_length: 0.25,
            major_tick_length: 0.5,
        }
    }
}

/// Upper bound on lines a single grid or ruler may produce.
const MAX_GUIDE_STEPS: usize = 1024;

#[derive(Debug, Clone, Default)]
pub struct BoundingBoxManager {
    pub style: GuideStyle,
}

impl BoundingBoxManager {
    #[must_use]
    pub fn new(style: GuideStyle) -> Self {
        Self { style }
    }

    /// 12 edges of the garment box, centered on `center`.
    #[must_use]
    pub fn alignment_box(&self, bounds: &GarmentBounds, center: Vec3) -> GuideLines {
        let corners = garment_box(bounds, center).corners();

        let mut lines = GuideLines::new(self.style.box_color);
        for (i, &corner) in corners.iter().enumerate() {
            for axis_bit in [1, 2, 4] {
                if i & axis_bit == 0 {
                    lines.push_segment(corner, corners[i | axis_bit]);
                }
            }
        }
        lines
    }

    /// Grid over the front face centered on `center`, one line per `spacing`
    /// step, both borders included. Non-positive spacing yields only the border.
    #[must_use]
    pub fn snap_grid(&self, bounds: &GarmentBounds, center: Vec3, spacing: f32) -> GuideLines {
        let BoundingBox { min, max } = garment_box(bounds, center);
        let z = max.z;

        let mut lines = GuideLines::new(self.style.grid_color);
        for x in grid_steps(min.x, max.x, spacing) {
            lines.push_segment(Vec3::new(x, min.y, z), Vec3::new(x, max.y, z));
        }
        for y in grid_steps(min.y, max.y, spacing) {
            lines.push_segment(Vec3::new(min.x, y, z), Vec3::new(max.x, y, z));
        }
        lines
    }

    /// Horizontal ruler along the bottom edge and vertical ruler along the
    /// left edge, measured from the bottom-left front corner.
    #[must_use]
    pub fn rulers(&self, bounds: &GarmentBounds, spacing: f32) -> (Ruler, Ruler) {
        let origin = Vec3::new(-bounds.width * 0.5, -bounds.height * 0.5, bounds.depth * 0.5);
        let horizontal = self.ruler(origin, Vec3::X, Vec3::NEG_Y, bounds.width, spacing);
        let vertical = self.ruler(origin, Vec3::Y, Vec3::NEG_X, bounds.height, spacing);
        (horizontal, vertical)
    }

    fn ruler(&self, origin: Vec3, axis: Vec3, tick_dir: Vec3, length: f32, spacing: f32) -> Ruler {
        let mut lines = GuideLines::new(self.style.ruler_color);
        lines.push_segment(origin, origin + axis * length);

        let mut ticks = Vec::new();
        let per_major = self.style.ticks_per_major.max(1) as usize;
        for (i, value) in grid_steps(0.0, length, spacing).enumerate() {
            // Borders may not land on a multiple of `spacing`; only exact steps get labels.
            let on_step = spacing > 0.0 && ((value / spacing) - (i as f32)).abs() < 1e-3;
            let major = on_step && i % per_major == 0;
            let tick_length = if major {
                self.style.major_tick_length
            } else {
                self.style.minor_tick_length
            };

            let position = origin + axis * value;
            lines.push_segment(position, position + tick_dir * tick_length);
            ticks.push(RulerTick {
                position,
                value,
                major,
                label: major.then(|| format_units(value)),
            });
        }

        Ruler { lines, ticks }
    }

    /// L-shaped markers at the four front-face corners, each arm `size` long.
    #[must_use]
    pub fn corner_markers(&self, bounds: &GarmentBounds, size: f32) -> GuideLines {
        let half_w = bounds.width * 0.5;
        let half_h = bounds.height * 0.5;
        let z = bounds.depth * 0.5;
        let arm = size.min(half_w).min(half_h).max(0.0);

        let mut lines = GuideLines::new(self.style.marker_color);
        for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = Vec3::new(sx * half_w, sy * half_h, z);
            lines.push_segment(corner, corner - Vec3::new(sx * arm, 0.0, 0.0));
            lines.push_segment(corner, corner - Vec3::new(0.0, sy * arm, 0.0));
        }
        lines
    }

    #[inline]
    #[must_use]
    pub fn snap_to_grid(&self, point: Vec3, spacing: f32) -> Vec3 {
        snap_to_grid(point, spacing)
    }

    #[inline]
    #[must_use]
    pub fn clamp_to_bounds(&self, point: Vec3, bounds: &GarmentBounds) -> Vec3 {
        clamp_to_bounds(point, bounds)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec3, bounds: &GarmentBounds) -> bool {
        contains(point, bounds)
    }
}

/// Rounds each axis to the nearest multiple of `spacing`.
#[must_use]
pub fn snap_to_grid(point: Vec3, spacing: f32) -> Vec3 {
    if spacing <= 0.0 || !spacing.is_finite() {
        return point;
    }
    (point / spacing).round() * spacing
}

/// Clamps each axis into `[-extent/2, extent/2]`.
#[must_use]
pub fn clamp_to_bounds(point: Vec3, bounds: &GarmentBounds) -> Vec3 {
    garment_box(bounds, Vec3::ZERO).clamp(point)
}

#[must_use]
pub fn contains(point: Vec3, bounds: &GarmentBounds) -> bool {
    garment_box(bounds, Vec3::ZERO).contains(point)
}

fn garment_box(bounds: &GarmentBounds, center: Vec3) -> BoundingBox {
    BoundingBox::centered(center, bounds.to_vec3())
}

/// `start, start + spacing, ...` up to `end`, always ending exactly on `end`.
fn grid_steps(start: f32, end: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let span = (end - start).max(0.0);
    let inner = if spacing > 0.0 && spacing.is_finite() {
        ((span / spacing).ceil() as usize).min(MAX_GUIDE_STEPS)
    } else {
        1
    };

    (0..=inner).map(move |i| {
        if i == inner {
            end
        } else {
            start + i as f32 * spacing
        }
    })
}

fn format_units(value: f32) -> String {
    if (value - value.round()).abs() < 1e-3 {
        format!("{}\"", value.round() as i32)
    } else {
        format!("{value:.1}\"")
    }
}
