//! Vertex format and the indexed mesh produced by a rebuild.

use bytemuck::{Pod, Zeroable};
use rectmesh_core::Color;
use rectmesh_core::math::{Vec2, Vec3};

use crate::error::{GraphicError, GraphicResult};

/// Vertex consumed by a standard 2D mesh renderer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    /// Position in the owner's local space; z is the owner depth
    pub position: [f32; 3],
    /// Linear RGBA
    pub color: [f32; 4],
    /// Texture coordinate
    pub uv: [f32; 2],
}

impl UiVertex {
    pub fn new(position: Vec3, color: Color, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }

    fn is_finite(&self) -> bool {
        self.position
            .iter()
            .chain(self.color.iter())
            .chain(self.uv.iter())
            .all(|v| v.is_finite())
    }
}

/// What a primitive in the mesh represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// The filled area of one tracked rectangle.
    Fill,
    /// The connector between two consecutive tracked rectangles.
    Bridge,
}

/// Range of the mesh emitted for one primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveSpan {
    pub kind: PrimitiveKind,
    pub first_vertex: u32,
    pub vertex_count: u32,
    pub first_index: u32,
    pub index_count: u32,
}

impl PrimitiveSpan {
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

/// One contiguous indexed triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub(crate) vertices: Vec<UiVertex>,
    pub(crate) indices: Vec<u32>,
    pub(crate) primitives: Vec<PrimitiveSpan>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the contents but keep the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.primitives.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[UiVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn primitives(&self) -> &[PrimitiveSpan] {
        &self.primitives
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of emitted primitives of `kind`.
    pub fn count_of(&self, kind: PrimitiveKind) -> usize {
        self.primitives.iter().filter(|p| p.kind == kind).count()
    }

    /// Raw vertex bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Check that the index buffer is whole triangles referring to finite
    /// vertices.
    pub fn validate(&self) -> GraphicResult<()> {
        if self.indices.len() % 3 != 0 {
            return Err(GraphicError::IncompleteTriangle {
                index_count: self.indices.len(),
            });
        }
        if let Some(index) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(GraphicError::NonFiniteVertex { index });
        }
        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(GraphicError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Append a primitive. `indices` are relative to its first vertex.
    pub(crate) fn push_primitive(
        &mut self,
        kind: PrimitiveKind,
        vertices: &[UiVertex],
        indices: &[u32],
    ) -> u32 {
        if vertices.is_empty() || indices.is_empty() {
            return 0;
        }
        let first_vertex = self.vertices.len() as u32;
        let first_index = self.indices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        self.indices.extend(indices.iter().map(|&i| first_vertex + i));
        self.primitives.push(PrimitiveSpan {
            kind,
            first_vertex,
            vertex_count: vertices.len() as u32,
            first_index,
            index_count: indices.len() as u32,
        });
        vertices.len() as u32
    }
}
