use bevy::math::primitives::{Rectangle, Triangle2d};
use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use crate::session::ShapeKind;

/// Stroke width for slot outlines.
pub const OUTLINE_THICKNESS: f32 = 3.0;

const CIRCLE_SEGMENTS: usize = 32;

/// Solid mesh for a shape, centered on its bounding-box center.
pub fn fill_mesh(kind: ShapeKind, size: f32) -> Mesh {
    let half = size / 2.0;
    match kind {
        ShapeKind::Square => Mesh::from(Rectangle::new(size, size)),
        ShapeKind::Triangle => Mesh::from(Triangle2d::new(
            Vec2::new(0.0, half),
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
        )),
        ShapeKind::Star => {
            let mut builder = TriangleListBuilder::default();
            builder.fan(Vec2::ZERO, &star_ring(size));
            builder.build(size)
        }
        ShapeKind::Heart => {
            let mut builder = TriangleListBuilder::default();
            let radius = size / 4.0;
            for center in heart_lobe_centers(size) {
                builder.fan(center, &circle_ring(center, radius));
            }
            let [a, b, c] = heart_wedge(size);
            builder.triangle(a, b, c);
            builder.build(size)
        }
    }
}

/// Stroked outline of the same geometry, `thickness` wide, centered on the
/// polygon edge. Every kind yields a visually closed ring.
pub fn outline_mesh(kind: ShapeKind, size: f32, thickness: f32) -> Mesh {
    let half = size / 2.0;
    let mut builder = TriangleListBuilder::default();
    match kind {
        ShapeKind::Square => builder.stroke(
            &[
                Vec2::new(-half, half),
                Vec2::new(half, half),
                Vec2::new(half, -half),
                Vec2::new(-half, -half),
            ],
            thickness,
        ),
        ShapeKind::Triangle => builder.stroke(
            &[
                Vec2::new(0.0, half),
                Vec2::new(half, -half),
                Vec2::new(-half, -half),
            ],
            thickness,
        ),
        ShapeKind::Star => builder.stroke(&star_ring(size), thickness),
        ShapeKind::Heart => {
            let radius = size / 4.0;
            for center in heart_lobe_centers(size) {
                builder.stroke(&circle_ring(center, radius), thickness);
            }
            builder.stroke(&heart_wedge(size), thickness);
        }
    }
    builder.build(size)
}

/// Ten vertices alternating outer and inner radii, ordered clockwise from
/// the top point. The fractions are visually tuned, not derived.
fn star_ring(size: f32) -> [Vec2; 10] {
    let half = size / 2.0;
    [
        Vec2::new(0.0, half),
        Vec2::new(size / 6.0, size / 6.0),
        Vec2::new(half, size / 6.0),
        Vec2::new(size / 4.0, -size / 10.0),
        Vec2::new(size / 3.0, -half),
        Vec2::new(0.0, -size / 3.0),
        Vec2::new(-size / 3.0, -half),
        Vec2::new(-size / 4.0, -size / 10.0),
        Vec2::new(-half, size / 6.0),
        Vec2::new(-size / 6.0, size / 6.0),
    ]
}

/// Centers of the two circles forming the top of the heart.
fn heart_lobe_centers(size: f32) -> [Vec2; 2] {
    let radius = size / 4.0;
    [Vec2::new(-radius, radius), Vec2::new(radius, radius)]
}

/// Full-width triangle from the lobes' vertical midline down to the point.
fn heart_wedge(size: f32) -> [Vec2; 3] {
    let half = size / 2.0;
    let radius = size / 4.0;
    [
        Vec2::new(-half, radius),
        Vec2::new(half, radius),
        Vec2::new(0.0, -half),
    ]
}

fn circle_ring(center: Vec2, radius: f32) -> Vec<Vec2> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = core::f32::consts::TAU * i as f32 / CIRCLE_SEGMENTS as f32;
            center + radius * Vec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Accumulates 2d triangles and turns them into a `Mesh` the 2d pipeline
/// accepts. The 2d pipeline does not cull back faces, so winding is free.
#[derive(Default)]
struct TriangleListBuilder {
    positions: Vec<Vec2>,
    indices: Vec<u32>,
}

impl TriangleListBuilder {
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        let base = self.positions.len() as u32;
        self.positions.extend([a, b, c]);
        self.indices.extend([base, base + 1, base + 2]);
    }

    /// Triangle fan over a closed ring. Valid as long as the ring is
    /// star-shaped with respect to `center`, which holds for every ring in
    /// this module.
    fn fan(&mut self, center: Vec2, ring: &[Vec2]) {
        let base = self.positions.len() as u32;
        self.positions.push(center);
        self.positions.extend_from_slice(ring);
        let count = ring.len() as u32;
        for i in 0..count {
            self.indices.extend([base, base + 1 + i, base + 1 + (i + 1) % count]);
        }
    }

    /// Closed stroked ring along a polygon, with mitered joins so sharp
    /// corners stay connected. The miter is clamped to four half-widths to
    /// keep star points from spiking.
    fn stroke(&mut self, ring: &[Vec2], thickness: f32) {
        let count = ring.len();
        let base = self.positions.len() as u32;
        let half = thickness / 2.0;

        for i in 0..count {
            let prev = ring[(i + count - 1) % count];
            let here = ring[i];
            let next = ring[(i + 1) % count];

            let in_dir = (here - prev).normalize_or(Vec2::X);
            let out_dir = (next - here).normalize_or(Vec2::X);
            let in_normal = in_dir.perp();
            let miter = (in_normal + out_dir.perp()).normalize_or(in_normal);
            let offset = miter * (half / miter.dot(in_normal).max(0.25));

            self.positions.push(here - offset);
            self.positions.push(here + offset);
        }

        let count = count as u32;
        for i in 0..count {
            let inner = base + 2 * i;
            let outer = inner + 1;
            let next_inner = base + 2 * ((i + 1) % count);
            let next_outer = next_inner + 1;
            self.indices.extend([inner, outer, next_outer]);
            self.indices.extend([inner, next_outer, next_inner]);
        }
    }

    fn build(self, size: f32) -> Mesh {
        let positions: Vec<[f32; 3]> = self.positions.iter().map(|p| [p.x, p.y, 0.0]).collect();
        let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; positions.len()];
        let uvs: Vec<[f32; 2]> = self
            .positions
            .iter()
            .map(|p| [p.x / size + 0.5, 0.5 - p.y / size])
            .collect();

        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(self.indices))
    }
}
