use bevy::color::LinearRgba;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use itertools::Itertools;

/// Distance along the polyline of each vertex, normalized to [0, 1].
///
/// The flow shader moves its head through UV x at a fixed rate per frame, so UV x
/// follows arc length rather than the generator's `t`. With `t` the pulse would slow
/// down near the apex, where equal `t` steps cover less ground than on the flanks.
/// Degenerate (zero-length) lines fall back to index spacing.
pub fn arc_length_ratios(positions: &[Vec3]) -> Vec<f32> {
    let n = positions.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut ratios = Vec::with_capacity(n);
    ratios.push(0.0);
    let mut travelled = 0.0;
    for (a, b) in positions.iter().tuple_windows() {
        travelled += a.distance(*b);
        ratios.push(travelled);
    }

    if travelled <= f32::EPSILON {
        return (0..n).map(|i| i as f32 / (n - 1) as f32).collect();
    }
    for r in ratios.iter_mut() {
        *r /= travelled;
    }
    ratios
}

/// Flat strip of quads following `positions`, lying in the plane normal to `ups`.
///
/// UV x runs along the line (0 at the start, 1 at the end), UV y across it, which is
/// the `st` space the flow shader masks against.
pub fn build_ribbon(positions: &[Vec3], ups: &[Vec3], half_width: f32, colors: Option<&[LinearRgba]>) -> Mesh {
    debug_assert_eq!(positions.len(), ups.len());
    let n = positions.len();
    let along = arc_length_ratios(positions);

    let mut vertices: Vec<[f32; 3]> = Vec::with_capacity(n * 2);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(n * 2);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(n * 2);

    for i in 0..n {
        let prev = positions[i.saturating_sub(1)];
        let next = positions[(i + 1).min(n - 1)];
        let tangent = (next - prev).normalize_or_zero();
        let up = ups[i].normalize_or_zero();
        let side = tangent.cross(up).normalize_or_zero() * half_width;

        let p = positions[i];
        vertices.push((p - side).to_array());
        vertices.push((p + side).to_array());
        normals.push(up.to_array());
        normals.push(up.to_array());
        uvs.push([along[i], 0.0]);
        uvs.push([along[i], 1.0]);
    }

    let mut indices: Vec<u32> = Vec::with_capacity(n.saturating_sub(1) * 6);
    for i in 0..n.saturating_sub(1) as u32 {
        let a = i * 2;
        indices.extend_from_slice(&[a, a + 1, a + 2, a + 1, a + 3, a + 2]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vertices)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices));

    if let Some(colors) = colors {
        let per_vertex: Vec<[f32; 4]> = colors
            .iter()
            .flat_map(|c| {
                let rgba = [c.red, c.green, c.blue, c.alpha];
                [rgba, rgba]
            })
            .collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, per_vertex);
    }

    mesh
}
