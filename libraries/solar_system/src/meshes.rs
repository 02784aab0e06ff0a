use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;
use std::collections::BTreeSet;

/// Line-list mesh made of the unique triangle edges of `mesh`.
///
/// Meshes without positions or without an index buffer produce an empty line list.
pub fn wireframe(mesh: &Mesh) -> Mesh {
    let positions = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) => positions.clone(),
        _ => Vec::new(),
    };
    let triangles = mesh
        .indices()
        .filter(|_| mesh.primitive_topology() == PrimitiveTopology::TriangleList)
        .map(|indices| indices.iter().map(|i| i as u32).collect::<Vec<_>>())
        .unwrap_or_default();

    let mut edges = BTreeSet::new();
    for tri in triangles.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            // Degenerate triangles at the poles of UV spheres repeat a vertex.
            if a != b {
                edges.insert((a.min(b), a.max(b)));
            }
        }
    }
    let indices = edges.into_iter().flat_map(|(a, b)| [a, b]).collect();

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_indices(Indices::U32(indices))
}

/// Unlit, alpha-blended material.
pub fn translucent(color: Color, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

/// Smallest and largest distance of any vertex from the mesh origin.
#[cfg(test)]
pub(crate) fn radial_extent(mesh: &Mesh) -> (f32, f32) {
    let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        panic!("mesh has no positions");
    };
    positions
        .iter()
        .map(|p| Vec3::from_array(*p).length())
        .fold((f32::MAX, 0.0), |(lo, hi), r| (lo.min(r), hi.max(r)))
}
