//! Contract for the external tessellation engine and the earcut backed implementation.
use earcutr::earcut;

use crate::{
    error::{RegionError, Result},
    region::Region,
};

/// Linear texture coordinate mapping: `uv = (x / size + offset_x, y / size + offset_y, layer)`
/// with `x`, `y` in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct UvLayer {
    pub size: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Texture array layer written to the third uv component.
    pub layer: f32,
}

impl UvLayer {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            offset_x: 0.0,
            offset_y: 0.0,
            layer: 0.0,
        }
    }
}

impl Default for UvLayer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Options for [Tessellator::tessellate].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MeshOptions {
    /// Vertical position of the ground plane mesh.
    pub height: f32,
    /// Grid to world scale, usually `1 / precision`.
    pub world_scale: f64,
    pub uv: UvLayer,
}

impl MeshOptions {
    pub fn new() -> Self {
        Self {
            height: 0.0,
            world_scale: 1.0,
            uv: UvLayer::default(),
        }
    }
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat triangle mesh laid out on the XZ ground plane (`[x, height, y]`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<[f32; 3]>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
    /// One uv per vertex.
    pub uvs: Vec<[f32; 3]>,
}

impl MeshBuffers {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// External tessellation engine: turns a region's contours (outside counter clockwise, holes
/// clockwise) into a triangle mesh.
pub trait Tessellator {
    fn tessellate(&self, region: &Region, options: &MeshOptions) -> Result<MeshBuffers>;
}

/// [Tessellator] using ear clipping from `earcutr`, one boundary set at a time.
#[derive(Debug, Copy, Clone, Default)]
pub struct EarcutTessellator;

impl Tessellator for EarcutTessellator {
    fn tessellate(&self, region: &Region, options: &MeshOptions) -> Result<MeshBuffers> {
        let mut mesh = MeshBuffers::default();
        let uv = &options.uv;
        if uv.size == 0.0 {
            return Err(RegionError::InvalidArgument("uv size must not be zero".into()));
        }

        for set in region.boundary_sets() {
            let base = mesh.vertices.len();
            let mut coords = Vec::with_capacity(set.vertex_count() * 2);
            let mut hole_starts = Vec::with_capacity(set.holes().len());

            for (i, c) in set.contours().iter().enumerate() {
                if i > 0 {
                    hole_starts.push(coords.len() / 2);
                }
                for p in c.points() {
                    let (x, y) = p.to_f64();
                    coords.push(x);
                    coords.push(y);
                    mesh.vertices.push([
                        (x * options.world_scale) as f32,
                        options.height,
                        (y * options.world_scale) as f32,
                    ]);
                    mesh.uvs.push([
                        (x / uv.size + uv.offset_x) as f32,
                        (y / uv.size + uv.offset_y) as f32,
                        uv.layer,
                    ]);
                }
            }

            let idx = earcut(&coords, &hole_starts, 2)
                .map_err(|e| RegionError::Tessellation(format!("{e:?}")))?;
            if idx.len() % 3 != 0 {
                return Err(RegionError::Tessellation(format!(
                    "index count {} is not a multiple of 3",
                    idx.len()
                )));
            }

            for i in idx {
                let vi = u32::try_from(base + i)
                    .map_err(|_| RegionError::Tessellation("too many vertices".into()))?;
                mesh.indices.push(vi);
            }
        }

        log::trace!(
            "tessellated {} boundary sets into {} triangles",
            region.boundary_set_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}
