//! Forest builder
//!
//! Scatter-places vegetation instances over a square patch of ground. All
//! randomness comes from one seeded generator owned by the builder and
//! advanced in a fixed per-instance order, so a seed fully determines the
//! resulting layout across every scatter call made on the same builder.

use std::path::PathBuf;

use cgmath::{Deg, Vector3};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::asset::{LoadError, LoadOptions, Mesh};

use super::object::SceneObject;
use super::scene::{ObjectHandle, Scene};

/// A named category of scatter-placed mesh, backed by one or more
/// interchangeable source files.
#[derive(Debug, Clone)]
pub struct Kind {
    pub name: String,
    pub sources: Vec<PathBuf>,
}

impl Kind {
    pub fn new(name: &str, sources: Vec<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            sources,
        }
    }
}

/// Parameters for one scatter pass.
#[derive(Debug, Clone)]
pub struct Scatter {
    /// Number of instances to place.
    pub count: usize,
    /// Instances land with x and z uniform in `[-half_extent, half_extent]`.
    pub half_extent: f32,
    /// Ground level; every instance's y.
    pub ground_y: f32,
    /// Draw a uniform-random yaw in [-180°, 180°] per instance.
    pub random_yaw: bool,
    /// Draw a uniform-random uniform scale in `[min, max]` per instance.
    pub scale_range: Option<(f32, f32)>,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            count: 0,
            half_extent: 50.0,
            ground_y: 0.0,
            random_yaw: true,
            scale_range: None,
        }
    }
}

/// One planned instance before any file is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub kind: usize,
    pub source: usize,
    pub position: Vector3<f32>,
    pub yaw: Deg<f32>,
    pub scale: f32,
}

/// Deterministic scatter-placement of mesh instances.
pub struct ForestBuilder {
    rng: StdRng,
    options: LoadOptions,
}

impl ForestBuilder {
    pub fn new(seed: u64, options: LoadOptions) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            options,
        }
    }

    /// Draws placements for one scatter pass, advancing the shared generator.
    ///
    /// Per instance the draw order is fixed: kind, source within the kind,
    /// x, z, then yaw and scale when enabled. Panics if `kinds` is empty or
    /// any chosen kind has no sources; both are configuration errors.
    pub fn plan(&mut self, kinds: &[Kind], params: &Scatter) -> Vec<Placement> {
        assert!(!kinds.is_empty(), "scatter needs at least one kind");

        let mut placements = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let kind = self.rng.random_range(0..kinds.len());
            assert!(
                !kinds[kind].sources.is_empty(),
                "kind `{}` has no source files",
                kinds[kind].name
            );
            let source = self.rng.random_range(0..kinds[kind].sources.len());
            let x = self
                .rng
                .random_range(-params.half_extent..=params.half_extent);
            let z = self
                .rng
                .random_range(-params.half_extent..=params.half_extent);
            let yaw = if params.random_yaw {
                Deg(self.rng.random_range(-180.0..=180.0))
            } else {
                Deg(0.0)
            };
            let scale = match params.scale_range {
                Some((min, max)) => self.rng.random_range(min..=max),
                None => 1.0,
            };

            placements.push(Placement {
                kind,
                source,
                position: Vector3::new(x, params.ground_y, z),
                yaw,
                scale,
            });
        }
        placements
    }

    /// Plans and places instances into the scene.
    ///
    /// Each instance loads its source file independently, even when several
    /// share one; objects never share meshes. A failed load aborts the whole
    /// pass.
    pub fn scatter(
        &mut self,
        scene: &mut Scene,
        kinds: &[Kind],
        params: &Scatter,
    ) -> Result<Vec<ObjectHandle>, LoadError> {
        let placements = self.plan(kinds, params);
        let mut handles = Vec::with_capacity(placements.len());

        for placement in &placements {
            let kind = &kinds[placement.kind];
            let mesh = Mesh::load(&kind.sources[placement.source], &self.options)?;
            let name = scene.ensure_unique_name(&kind.name);
            let object = SceneObject::new(&name, mesh)
                .with_position(placement.position)
                .with_yaw(placement.yaw)
                .with_uniform_scale(placement.scale);
            handles.push(scene.add(object));
        }

        debug!("scattered {} instance(s)", handles.len());
        Ok(handles)
    }
}
