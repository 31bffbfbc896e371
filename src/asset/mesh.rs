//! Geometry file parsing
//!
//! Parses the `.obj` geometry format into per-face draw data. Faces resolve
//! their 1-based vertex/normal cross-references at load time, so the result
//! carries no indices: each face is an ordered list of (position, normal)
//! pairs plus a copy of the material that was active when it was parsed,
//! the shape a fixed-function renderer walks directly.

use std::fs;
use std::path::Path;

use cgmath::{Vector3, Zero};
use log::{debug, warn};

use super::material::{Material, MaterialLibrary};
use super::{LoadError, LoadOptions, UnknownMaterialPolicy};

/// One polygon (from `f`) or polyline (from `l`, normals zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Material active when this face was parsed, by copy.
    pub material: Material,
    /// Ordered (position, normal) pairs.
    pub vertices: Vec<(Vector3<f32>, Vector3<f32>)>,
}

/// An ordered list of faces loaded from one geometry file.
///
/// Every load call re-parses its file; meshes are never shared between
/// scene objects, so two objects built from the same source own two
/// independent copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    faces: Vec<Face>,
}

impl Mesh {
    /// Reads and parses a geometry file.
    ///
    /// `mtllib` references are resolved relative to the geometry file's own
    /// directory.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self, LoadError> {
        let src = fs::read_to_string(path).map_err(|source| LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&src, &path.display().to_string(), base_dir, options)
    }

    /// Parses geometry text.
    ///
    /// Directives: `mtllib`, `usemtl`, `v`, `vn`, `f`, `l`; all other lines
    /// are ignored. Indices are 1-based and must reference entries already
    /// declared above their use; a reference outside that range fails with
    /// [`LoadError::MalformedIndex`] naming the file, line, and index.
    pub fn parse(
        src: &str,
        file: &str,
        base_dir: &Path,
        options: &LoadOptions,
    ) -> Result<Self, LoadError> {
        let mut vertices: Vec<Vector3<f32>> = Vec::new();
        let mut normals: Vec<Vector3<f32>> = Vec::new();
        let mut faces: Vec<Face> = Vec::new();
        let mut library = MaterialLibrary::default();
        let mut active = Material::default();

        for (idx, raw) in src.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = raw.split_whitespace();
            let directive = match tokens.next() {
                Some(d) => d,
                None => continue,
            };

            match directive {
                "mtllib" => {
                    let rel = tokens.next().ok_or_else(|| LoadError::MalformedDirective {
                        file: file.to_string(),
                        line,
                        directive: directive.to_string(),
                    })?;
                    library = MaterialLibrary::load(&base_dir.join(rel))?;
                }
                "usemtl" => {
                    let name = tokens.next().ok_or_else(|| LoadError::MalformedDirective {
                        file: file.to_string(),
                        line,
                        directive: directive.to_string(),
                    })?;
                    active = match library.get(name) {
                        Some(material) => material.clone(),
                        None => match options.unknown_material {
                            UnknownMaterialPolicy::Error => {
                                return Err(LoadError::UnknownMaterial {
                                    file: file.to_string(),
                                    line,
                                    name: name.to_string(),
                                })
                            }
                            UnknownMaterialPolicy::DefaultBlack => {
                                warn!(
                                    "{}:{}: unknown material `{}`, substituting black",
                                    file, line, name
                                );
                                Material::default()
                            }
                        },
                    };
                }
                "v" => vertices.push(parse_vec3(&mut tokens, file, line, directive)?),
                "vn" => normals.push(parse_vec3(&mut tokens, file, line, directive)?),
                "f" => {
                    let mut face_vertices = Vec::new();
                    for token in tokens {
                        let (position, normal) =
                            resolve_face_token(token, &vertices, &normals, file, line)?;
                        face_vertices.push((position, normal));
                    }
                    faces.push(Face {
                        material: active.clone(),
                        vertices: face_vertices,
                    });
                }
                "l" => {
                    let mut line_vertices = Vec::new();
                    for token in tokens {
                        let index = parse_index(token, &vertices, file, line, directive)?;
                        line_vertices.push((vertices[index - 1], Vector3::zero()));
                    }
                    faces.push(Face {
                        material: active.clone(),
                        vertices: line_vertices,
                    });
                }
                _ => {}
            }
        }

        debug!(
            "{}: {} vertices, {} normals, {} faces",
            file,
            vertices.len(),
            normals.len(),
            faces.len()
        );
        Ok(Self { faces })
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Resolves one `f` token of the form `a`, `a/b`, `a//c`, or `a/b/c`.
///
/// The first component is a vertex index and the third a normal index; the
/// middle (texture) component is parsed and discarded. A missing or empty
/// normal component yields a zero normal.
fn resolve_face_token(
    token: &str,
    vertices: &[Vector3<f32>],
    normals: &[Vector3<f32>],
    file: &str,
    line: usize,
) -> Result<(Vector3<f32>, Vector3<f32>), LoadError> {
    let mut parts = token.split('/');

    let vertex_part = parts.next().unwrap_or("");
    let vertex_index = parse_index(vertex_part, vertices, file, line, "f")?;
    let position = vertices[vertex_index - 1];

    // Texture index, unused.
    let _ = parts.next();

    let normal = match parts.next() {
        Some("") | None => Vector3::zero(),
        Some(part) => {
            let normal_index = parse_index(part, normals, file, line, "f")?;
            normals[normal_index - 1]
        }
    };

    Ok((position, normal))
}

/// Parses a 1-based index token and checks it against the declared range.
fn parse_index(
    token: &str,
    declared: &[Vector3<f32>],
    file: &str,
    line: usize,
    directive: &str,
) -> Result<usize, LoadError> {
    let index: usize = token.parse().map_err(|_| LoadError::MalformedDirective {
        file: file.to_string(),
        line,
        directive: directive.to_string(),
    })?;
    if index == 0 || index > declared.len() {
        return Err(LoadError::MalformedIndex {
            file: file.to_string(),
            line,
            index,
            declared: declared.len(),
        });
    }
    Ok(index)
}

fn parse_vec3<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    file: &str,
    line: usize,
    directive: &str,
) -> Result<Vector3<f32>, LoadError> {
    let mut component = || {
        tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| LoadError::MalformedDirective {
                file: file.to_string(),
                line,
                directive: directive.to_string(),
            })
    };
    let x = component()?;
    let y = component()?;
    let z = component()?;
    Ok(Vector3::new(x, y, z))
}
