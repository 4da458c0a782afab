//! Mesh rendering driver.
//!
//! Walks a mesh face by face: project the three corners, then outline or fill
//! the resulting screen triangle. Faces are drawn in mesh order with no depth
//! test, so later faces overwrite earlier ones.

use log::{debug, trace};

use crate::config::{RenderConfig, RenderMode};
use crate::error::Result;
use crate::framebuffer::{Framebuffer, PixelSink};
use crate::geometry::Triangle;
use crate::mesh::MeshSource;
use crate::projection::OrthoProjector;
use crate::render::{draw_triangle_outline, fill_triangle};

/// Counters from one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Faces visited.
    pub faces: usize,
    /// Faces that produced pixel writes.
    pub drawn: usize,
    /// Faces whose projected corners share one x coordinate.
    pub degenerate: usize,
}

impl std::fmt::Display for RenderStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} faces, {} drawn, {} degenerate",
            self.faces, self.drawn, self.degenerate
        )
    }
}

/// Renders meshes according to a [`RenderConfig`].
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    projector: OrthoProjector,
}

impl Renderer {
    /// Create a renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let projector = OrthoProjector::new(config.size)?;
        Ok(Self { config, projector })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Rasterize every face of `mesh` into `sink`.
    ///
    /// The sink is not cleared first.
    pub fn render<M, S>(&self, mesh: &M, sink: &mut S) -> RenderStats
    where
        M: MeshSource + ?Sized,
        S: PixelSink + ?Sized,
    {
        let mut stats = RenderStats::default();

        for face in 0..mesh.face_count() {
            let [a, b, c] = self.projector.project_face(mesh.face_corners(face));
            trace!("face {face}: {a} {b} {c}");

            stats.faces += 1;
            let degenerate = Triangle::new(a, b, c).is_degenerate();
            if degenerate {
                stats.degenerate += 1;
            }

            match self.config.mode {
                RenderMode::Wireframe => {
                    draw_triangle_outline(sink, a, b, c);
                    stats.drawn += 1;
                }
                RenderMode::Filled => {
                    fill_triangle(sink, a, b, c, self.config.coloring.color_for(face));
                    if !degenerate {
                        stats.drawn += 1;
                    }
                }
            }
        }

        debug!("render pass: {stats}");
        stats
    }

    /// Allocate a `size x size` framebuffer, clear it to the background and
    /// render `mesh` into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be created.
    pub fn render_to_framebuffer<M: MeshSource + ?Sized>(
        &self,
        mesh: &M,
    ) -> Result<(Framebuffer, RenderStats)> {
        let mut fb = Framebuffer::new(self.config.size, self.config.size)?;
        fb.clear(self.config.background);
        let stats = self.render(mesh, &mut fb);
        Ok((fb, stats))
    }
}
