//! Triangle meshes and Wavefront OBJ loading.
//!
//! Only geometry is read: `v` records become vertices and `f` records become
//! triangles (polygons are fan-triangulated). Texture coordinates, normals,
//! groups and materials are skipped.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::geometry::ObjectPoint;

/// Read access to a triangle mesh, one face at a time.
pub trait MeshSource {
    /// Number of triangular faces.
    fn face_count(&self) -> usize;

    /// Object-space position of `corner` (0, 1 or 2) of face `face`.
    ///
    /// # Panics
    ///
    /// May panic if `face >= face_count()` or `corner > 2`.
    fn vertex(&self, face: usize, corner: usize) -> ObjectPoint;

    /// All three corners of a face, in corner order.
    fn face_corners(&self, face: usize) -> [ObjectPoint; 3] {
        [0, 1, 2].map(|corner| self.vertex(face, corner))
    }
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Vec<ObjectPoint>,
    faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Build a mesh from vertices and 0-based triangle indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FaceIndex`] if a face refers to a missing vertex. The
    /// reported `line` is the 1-based face number.
    pub fn from_parts(vertices: Vec<ObjectPoint>, faces: Vec<[usize; 3]>) -> Result<Self> {
        for (i, face) in faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&idx| idx >= vertices.len()) {
                return Err(Error::FaceIndex {
                    line: i + 1,
                    index: bad as i64,
                    vertex_count: vertices.len(),
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Parse OBJ text.
    ///
    /// Face indices are 1-based; negative indices count back from the last
    /// vertex declared so far. Each face corner may carry texture and normal
    /// indices (`v/vt`, `v/vt/vn`, `v//vn`), which are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MeshParse`] for malformed records and
    /// [`Error::FaceIndex`] for indices that are zero or out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use meshraster::mesh::{Mesh, MeshSource};
    ///
    /// let mesh = Mesh::parse("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
    /// assert_eq!(mesh.face_count(), 2);
    /// ```
    pub fn parse(src: &str) -> Result<Self> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        let mut unknown = BTreeSet::new();

        for (i, raw) in src.lines().enumerate() {
            let line = i + 1;
            let content = raw.split('#').next().unwrap_or_default();
            let mut tokens = content.split_whitespace();
            let Some(tag) = tokens.next() else {
                continue;
            };

            match tag {
                "v" => vertices.push(parse_vertex(tokens, line)?),
                "f" => {
                    let corners = tokens
                        .map(|token| resolve_index(token, line, vertices.len()))
                        .collect::<Result<Vec<_>>>()?;
                    if corners.len() < 3 {
                        return Err(Error::MeshParse {
                            line,
                            message: format!("face needs at least 3 corners, got {}", corners.len()),
                        });
                    }
                    for k in 1..corners.len() - 1 {
                        faces.push([corners[0], corners[k], corners[k + 1]]);
                    }
                }
                "vt" | "vn" | "vp" | "g" | "o" | "s" | "l" | "p" | "usemtl" | "mtllib" => {}
                other => {
                    unknown.insert(other.to_string());
                }
            }
        }

        if !unknown.is_empty() {
            warn!("ignored unsupported OBJ records: {unknown:?}");
        }
        debug!("parsed mesh: {} vertices, {} faces", vertices.len(), faces.len());

        Ok(Self { vertices, faces })
    }

    /// Read and parse an OBJ file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        let mesh = Self::parse(&src)?;
        debug!("loaded {}", path.display());
        Ok(mesh)
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[ObjectPoint] {
        &self.vertices
    }

    /// 0-based triangle indices.
    #[must_use]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True when the mesh has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl MeshSource for Mesh {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, face: usize, corner: usize) -> ObjectPoint {
        self.vertices[self.faces[face][corner]]
    }
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> Result<ObjectPoint> {
    let mut coord = |axis: &str| -> Result<f32> {
        let token = tokens.next().ok_or_else(|| Error::MeshParse {
            line,
            message: format!("vertex is missing its {axis} coordinate"),
        })?;
        match token.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(Error::MeshParse {
                line,
                message: format!("invalid {axis} coordinate '{token}'"),
            }),
        }
    };

    let x = coord("x")?;
    let y = coord("y")?;
    let z = coord("z")?;
    Ok(ObjectPoint::new(x, y, z))
}

/// Turn one face corner token into a 0-based vertex index.
fn resolve_index(token: &str, line: usize, vertex_count: usize) -> Result<usize> {
    let position = token.split('/').next().unwrap_or_default();
    let index: i64 = position.parse().map_err(|_| Error::MeshParse {
        line,
        message: format!("invalid face corner '{token}'"),
    })?;

    let resolved = match index {
        0 => None,
        i if i > 0 => Some(i - 1),
        i => Some(vertex_count as i64 + i),
    };

    match resolved {
        Some(idx) if idx >= 0 && (idx as usize) < vertex_count => Ok(idx as usize),
        _ => Err(Error::FaceIndex {
            line,
            index,
            vertex_count,
        }),
    }
}
