//! Material library parsing
//!
//! Parses the `.mtl` material-library format into named material records.
//! Materials are plain data; faces carry a copy of the one active at the
//! time they were parsed, so a loaded mesh stays self-contained.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cgmath::{Vector3, Zero};
use log::debug;

use super::LoadError;

/// Fixed-function surface properties for one named material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub shininess: f32,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub emission: Vector3<f32>,
}

impl Default for Material {
    /// An all-zero material, i.e. one that renders black.
    fn default() -> Self {
        Self {
            shininess: 0.0,
            ambient: Vector3::zero(),
            diffuse: Vector3::zero(),
            specular: Vector3::zero(),
            emission: Vector3::zero(),
        }
    }
}

/// Named materials parsed from one `.mtl` file.
///
/// Lookup is by the `newmtl` name, unique within one file; a duplicated
/// name keeps the later definition.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: HashMap<String, Material>,
}

impl MaterialLibrary {
    /// Reads and parses a material library from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let src = fs::read_to_string(path).map_err(|source| LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&src, &path.display().to_string())
    }

    /// Parses material-library text.
    ///
    /// Grammar (one directive per line, whitespace-separated tokens):
    /// - `newmtl <name>` begins a zero-initialized record
    /// - `Ns <f>` sets shininess
    /// - `Ka`/`Kd`/`Ks`/`Ke` `<r> <g> <b>` set ambient/diffuse/specular/emission
    /// - anything else is ignored
    ///
    /// A property directive before the first `newmtl` is a load error; the
    /// record it would apply to does not exist.
    pub fn parse(src: &str, file: &str) -> Result<Self, LoadError> {
        let mut materials = HashMap::new();
        let mut current: Option<String> = None;

        for (idx, raw) in src.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = raw.split_whitespace();
            let directive = match tokens.next() {
                Some(d) => d,
                None => continue,
            };

            match directive {
                "newmtl" => {
                    let name = tokens.next().ok_or_else(|| LoadError::MalformedDirective {
                        file: file.to_string(),
                        line,
                        directive: directive.to_string(),
                    })?;
                    materials.insert(name.to_string(), Material::default());
                    current = Some(name.to_string());
                }
                "Ns" | "Ka" | "Kd" | "Ks" | "Ke" => {
                    let name = current
                        .as_ref()
                        .ok_or_else(|| LoadError::PropertyBeforeNewmtl {
                            file: file.to_string(),
                            line,
                        })?;
                    // current always names an entry we just inserted
                    let material = materials.get_mut(name).unwrap();
                    match directive {
                        "Ns" => material.shininess = parse_float(&mut tokens, file, line, directive)?,
                        "Ka" => material.ambient = parse_color(&mut tokens, file, line, directive)?,
                        "Kd" => material.diffuse = parse_color(&mut tokens, file, line, directive)?,
                        "Ks" => material.specular = parse_color(&mut tokens, file, line, directive)?,
                        "Ke" => material.emission = parse_color(&mut tokens, file, line, directive)?,
                        _ => unreachable!(),
                    }
                }
                _ => {}
            }
        }

        debug!("{}: parsed {} material(s)", file, materials.len());
        Ok(Self { materials })
    }

    /// Looks up a material by name.
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Names of all materials in the library, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }
}

fn parse_float<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    file: &str,
    line: usize,
    directive: &str,
) -> Result<f32, LoadError> {
    tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| LoadError::MalformedDirective {
            file: file.to_string(),
            line,
            directive: directive.to_string(),
        })
}

fn parse_color<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    file: &str,
    line: usize,
    directive: &str,
) -> Result<Vector3<f32>, LoadError> {
    let r = parse_float(tokens, file, line, directive)?;
    let g = parse_float(tokens, file, line, directive)?;
    let b = parse_float(tokens, file, line, directive)?;
    Ok(Vector3::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_material() {
        let src = "newmtl M\nKd 1 0 0\nNs 32\n";
        let lib = MaterialLibrary::parse(src, "test.mtl").unwrap();
        let m = lib.get("M").unwrap();
        assert_eq!(m.diffuse, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(m.shininess, 32.0);
        assert_eq!(m.ambient, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_multiple_materials() {
        let src = "newmtl bark\nKa 0.1 0.05 0.0\nKd 0.4 0.2 0.1\n\
                   newmtl leaf\nKd 0.1 0.5 0.1\nKs 0.2 0.2 0.2\nKe 0.0 0.1 0.0\n";
        let lib = MaterialLibrary::parse(src, "test.mtl").unwrap();
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.get("bark").unwrap().diffuse, Vector3::new(0.4, 0.2, 0.1));
        assert_eq!(lib.get("leaf").unwrap().emission, Vector3::new(0.0, 0.1, 0.0));
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let src = "# comment\nnewmtl M\nillum 2\nd 1.0\nmap_Kd bark.png\nKd 0.5 0.5 0.5\n";
        let lib = MaterialLibrary::parse(src, "test.mtl").unwrap();
        assert_eq!(lib.get("M").unwrap().diffuse, Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_property_before_newmtl_is_error() {
        let err = MaterialLibrary::parse("Kd 1 0 0\n", "test.mtl").unwrap_err();
        assert!(matches!(
            err,
            LoadError::PropertyBeforeNewmtl { line: 1, .. }
        ));
    }

    #[test]
    fn test_malformed_color_is_error() {
        let err = MaterialLibrary::parse("newmtl M\nKd 1 0\n", "test.mtl").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedDirective { line: 2, .. }
        ));
    }

    #[test]
    fn test_duplicate_name_keeps_last() {
        let src = "newmtl M\nNs 1\nnewmtl M\nNs 2\n";
        let lib = MaterialLibrary::parse(src, "test.mtl").unwrap();
        assert_eq!(lib.get("M").unwrap().shininess, 2.0);
    }

    #[test]
    fn test_missing_file_is_recoverable() {
        let err = MaterialLibrary::load(Path::new("/nonexistent/forest.mtl")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }
}
