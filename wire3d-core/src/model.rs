/// Polyhedral model primitives for wireframe rendering
use nalgebra::Point3;
use thiserror::Error;

/// A model vertex in object space
pub type Vertex = Point3<f64>;

/// Validation errors for raw model data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("model has no vertices")]
    NoVertices,
    #[error("model has no faces")]
    NoFaces,
    #[error("face {face} has {count} indices, a polygon needs at least 2")]
    FaceTooShort { face: usize, count: usize },
    #[error("face {face} references vertex {index}, but the model has only {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// A closed polygon given as an ordered list of vertex indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate the polygon's edges in order, wrapping around from the last
    /// index back to the first so the outline is closed.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }
}

/// An immutable mesh: vertex list plus polygonal face list.
///
/// A `Model` can only be built through [`Model::new`], so every face index
/// held by a live model is known to be in range.
#[derive(Debug, Clone)]
pub struct Model {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Model {
    /// Validate raw model data and build a model from it.
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Result<Self, ModelError> {
        if vertices.is_empty() {
            return Err(ModelError::NoVertices);
        }
        if faces.is_empty() {
            return Err(ModelError::NoFaces);
        }
        for (face, f) in faces.iter().enumerate() {
            if f.len() < 2 {
                return Err(ModelError::FaceTooShort {
                    face,
                    count: f.len(),
                });
            }
            for &index in f.indices() {
                if index >= vertices.len() {
                    return Err(ModelError::IndexOutOfRange {
                        face,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Create a cube with the given edge length, centered on the origin.
    pub fn cube(size: f64) -> Self {
        let h = size / 2.0;
        let vertices = vec![
            Vertex::new(-h, -h, -h),
            Vertex::new(h, -h, -h),
            Vertex::new(h, h, -h),
            Vertex::new(-h, h, -h),
            Vertex::new(-h, -h, h),
            Vertex::new(h, -h, h),
            Vertex::new(h, h, h),
            Vertex::new(-h, h, h),
        ];
        let faces = vec![
            Face::new(vec![0, 1, 2, 3]), // back
            Face::new(vec![4, 5, 6, 7]), // front
            Face::new(vec![0, 1, 5, 4]), // bottom
            Face::new(vec![3, 2, 6, 7]), // top
            Face::new(vec![1, 2, 6, 5]), // right
            Face::new(vec![0, 3, 7, 4]), // left
        ];
        Self { vertices, faces }
    }

    /// Create a regular tetrahedron inscribed in a cube of the given edge
    /// length, centered on the origin.
    pub fn tetrahedron(size: f64) -> Self {
        let h = size / 2.0;
        let vertices = vec![
            Vertex::new(h, h, h),
            Vertex::new(h, -h, -h),
            Vertex::new(-h, h, -h),
            Vertex::new(-h, -h, h),
        ];
        let faces = vec![
            Face::new(vec![0, 1, 2]),
            Face::new(vec![0, 1, 3]),
            Face::new(vec![0, 2, 3]),
            Face::new(vec![1, 2, 3]),
        ];
        Self { vertices, faces }
    }
}
