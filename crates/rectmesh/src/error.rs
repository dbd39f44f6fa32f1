//! Error types for the rectangle graphic.

use std::fmt;

/// Errors reported by fallible construction and mesh validation.
///
/// Steady-state operations (rebuilds, hit tests, subscription changes) never
/// fail; destroyed rectangle sources are skipped instead.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicError {
    /// The owner transform cannot be inverted.
    NonInvertibleTransform {
        /// The offending per-axis scale.
        scale: [f32; 2],
    },

    /// A mesh index refers past the end of the vertex buffer.
    IndexOutOfRange {
        /// Position in the index buffer.
        position: usize,
        /// The index value.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A vertex position, color or uv is NaN or infinite.
    NonFiniteVertex {
        /// Vertex index.
        index: usize,
    },

    /// The index buffer does not describe whole triangles.
    IncompleteTriangle {
        /// Length of the index buffer.
        index_count: usize,
    },
}

impl fmt::Display for GraphicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicError::NonInvertibleTransform { scale } => {
                write!(f, "Owner transform is not invertible (scale {:?})", scale)
            }
            GraphicError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "Index {} at position {} is out of range for {} vertices",
                    index, position, vertex_count
                )
            }
            GraphicError::NonFiniteVertex { index } => {
                write!(f, "Vertex {} has a non-finite component", index)
            }
            GraphicError::IncompleteTriangle { index_count } => {
                write!(f, "Index count {} is not a multiple of 3", index_count)
            }
        }
    }
}

impl std::error::Error for GraphicError {}

/// Result type alias for graphic operations.
pub type GraphicResult<T> = Result<T, GraphicError>;
