//! Tube mesh swept along a flight arc.
//!
//! [`build_tube_mesh`] produces the triangle-list [`Mesh`] for one arc: a
//! ring of vertices at each curve sample, connected into quads between
//! consecutive rings. Open ends, no caps.

use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;

use geo::arc::ArcPath;

/// Build the tube geometry for one arc.
///
/// `segments` rings are placed at `segments + 1` curve samples; each ring has
/// `sides` vertices. The cross-section frame is derived from the curve
/// tangent and a fixed up reference, which is stable here because the arcs
/// never run parallel to +Y for their whole length.
pub fn build_tube_mesh(path: &ArcPath, radius: f32, segments: usize, sides: usize) -> Mesh {
    let ring_count = segments + 1;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(ring_count * sides);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(ring_count * sides);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(ring_count * sides);
    let mut indices: Vec<u32> = Vec::with_capacity(segments * sides * 6);

    for ring in 0..ring_count {
        let t = ring as f32 / segments as f32;
        let center = path.point_at(t);
        let (side_a, side_b) = cross_section_frame(path, t);

        for side in 0..sides {
            let angle = side as f32 / sides as f32 * std::f32::consts::TAU;
            let outward = side_a * angle.cos() + side_b * angle.sin();
            let p = center + outward * radius;
            positions.push([p.x, p.y, p.z]);
            normals.push([outward.x, outward.y, outward.z]);
            uvs.push([t, side as f32 / sides as f32]);
        }
    }

    // Two triangles per quad between ring r and ring r+1; the side index
    // wraps around the ring. Winding is counter-clockwise seen from outside
    // the tube so back-face culling keeps the outside visible.
    for ring in 0..segments {
        for side in 0..sides {
            let next_side = (side + 1) % sides;
            let a = (ring * sides + side) as u32;
            let b = (ring * sides + next_side) as u32;
            let c = ((ring + 1) * sides + side) as u32;
            let d = ((ring + 1) * sides + next_side) as u32;
            indices.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }

    Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

/// Two unit vectors spanning the plane perpendicular to the curve at `t`.
fn cross_section_frame(path: &ArcPath, t: f32) -> (Vec3, Vec3) {
    let tangent = path.tangent_at(t).normalize_or_zero();
    // Fall back to X as the reference when the tangent runs along Y.
    let reference = if tangent.y.abs() > 0.99 {
        Vec3::X
    } else {
        Vec3::Y
    };
    let side_a = tangent.cross(reference).normalize();
    let side_b = tangent.cross(side_a);
    (side_a, side_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;
    use geo::projection::lat_lon_to_world;

    fn test_path() -> ArcPath {
        ArcPath::new(
            lat_lon_to_world(45.4642, 9.19, 10.0),
            lat_lon_to_world(40.7128, -74.006, 10.0),
        )
    }

    fn mesh_positions(mesh: &Mesh) -> &Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(v)) => v,
            other => panic!("unexpected position attribute: {other:?}"),
        }
    }

    #[test]
    fn vertex_and_index_counts() {
        let mesh = build_tube_mesh(&test_path(), 0.05, 64, 8);
        let positions = mesh_positions(&mesh);
        assert_eq!(positions.len(), 65 * 8);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 64 * 8 * 6);
    }

    #[test]
    fn all_indices_are_in_bounds() {
        let mesh = build_tube_mesh(&test_path(), 0.05, 16, 6);
        let vertex_count = mesh_positions(&mesh).len() as u32;
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert!(indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn ring_vertices_sit_at_tube_radius() {
        let path = test_path();
        let radius = 0.05;
        let segments = 16;
        let sides = 8;
        let mesh = build_tube_mesh(&path, radius, segments, sides);
        let positions = mesh_positions(&mesh);
        for ring in 0..=segments {
            let center = path.point_at(ring as f32 / segments as f32);
            for side in 0..sides {
                let p = positions[ring * sides + side];
                let d = Vec3::from_array(p).distance(center);
                assert!(
                    (d - radius).abs() < 1e-4,
                    "ring {ring} side {side}: distance {d}"
                );
            }
        }
    }

    #[test]
    fn frame_vectors_are_orthonormal() {
        let path = test_path();
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let (a, b) = cross_section_frame(&path, t);
            assert!((a.length() - 1.0).abs() < 1e-4);
            assert!((b.length() - 1.0).abs() < 1e-4);
            assert!(a.dot(b).abs() < 1e-4);
            assert!(a.dot(path.tangent_at(t).normalize()).abs() < 1e-4);
        }
    }
}
