// mesh.rs      Mesh module
//
// Copyright (c) 2022-2024  Douglas Lau
//
use bevy::render::mesh::{Indices, Mesh};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use glam::Vec3;

/// Square facing outward from the origin
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    /// Center point
    center: Vec3,

    /// Half-width along "right"
    right: Vec3,

    /// Half-height along "up"
    up: Vec3,

    /// Vertex color
    color: [f32; 4],
}

/// Builder for bevy Mesh with TriangleList primitives
#[derive(Default)]
pub struct MeshBuilder {
    pos: Vec<[f32; 3]>,
    norm: Vec<[f32; 3]>,
    color: Vec<[f32; 4]>,
    indices: Vec<u16>,
}

impl Quad {
    /// Create a new quad
    ///
    /// `right` cross `up` must point outward.
    pub fn new(center: Vec3, right: Vec3, up: Vec3, color: [f32; 4]) -> Self {
        Quad {
            center,
            right,
            up,
            color,
        }
    }

    /// Get the outward normal
    fn normal(&self) -> Vec3 {
        self.right.cross(self.up).normalize()
    }
}

impl MeshBuilder {
    /// Create a new mesh builder
    pub fn new() -> Self {
        MeshBuilder::default()
    }

    /// Push one vertex
    fn push_vtx(&mut self, pos: Vec3, norm: Vec3, color: [f32; 4]) -> u16 {
        // a cubie mesh is far below u16::MAX vertices
        let idx = self.pos.len() as u16;
        self.pos.push(pos.to_array());
        self.norm.push(norm.to_array());
        self.color.push(color);
        idx
    }

    /// Push one quad (two flat-shaded triangles)
    pub fn push_quad(&mut self, quad: Quad) {
        let norm = quad.normal();
        let c = quad.center;
        let bl = self.push_vtx(c - quad.right - quad.up, norm, quad.color);
        let br = self.push_vtx(c + quad.right - quad.up, norm, quad.color);
        let tl = self.push_vtx(c - quad.right + quad.up, norm, quad.color);
        let tr = self.push_vtx(c + quad.right + quad.up, norm, quad.color);
        self.indices.extend([bl, tr, tl, bl, br, tr]);
    }

    /// Build the mesh
    pub fn build(self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.pos);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.norm);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, self.color);
        mesh.insert_indices(Indices::U16(self.indices));
        mesh
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quad_normal() {
        let quad = Quad::new(Vec3::Z, Vec3::X, Vec3::Y, [1.0; 4]);
        assert_eq!(quad.normal(), Vec3::Z);
        let quad = Quad::new(Vec3::NEG_X, Vec3::Z, Vec3::Y, [1.0; 4]);
        assert_eq!(quad.normal(), Vec3::NEG_X);
    }

    #[test]
    fn quad_vertices() {
        let mut builder = MeshBuilder::new();
        builder.push_quad(Quad::new(Vec3::Z, Vec3::X, Vec3::Y, [1.0; 4]));
        builder.push_quad(Quad::new(Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y, [0.0; 4]));
        assert_eq!(builder.pos.len(), 8);
        assert_eq!(builder.indices.len(), 12);
        assert_eq!(&builder.indices[6..], &[4, 7, 6, 4, 5, 7]);
        let mesh = builder.build();
        assert_eq!(mesh.count_vertices(), 8);
    }
}
