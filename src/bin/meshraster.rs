//! meshraster - render a Wavefront OBJ model to an image.
//!
//! Run: `meshraster model.obj --mode filled -o framebuffer.tga`

#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::path::PathBuf;

use meshraster::color::Bgra;
use meshraster::config::{FaceColoring, RenderConfig, RenderMode};
use meshraster::mesh::{Mesh, MeshSource};
use meshraster::output;
use meshraster::renderer::Renderer;
use meshraster::Error;

/// meshraster: orthographic software rasterizer for triangle meshes
#[derive(Parser, Debug)]
#[command(name = "meshraster")]
#[command(version)]
#[command(about = "Render an OBJ mesh to a TGA or PNG image", long_about = None)]
struct Cli {
    /// OBJ model to render
    model: PathBuf,

    /// Output image; the extension picks the format (tga, png)
    #[arg(short, long, default_value = "framebuffer.tga")]
    output: PathBuf,

    /// Viewport side in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Render mode: wireframe or filled
    #[arg(short, long)]
    mode: Option<RenderMode>,

    /// Face color as #rrggbb[aa]; repeat to cycle a palette across faces
    #[arg(short, long = "color")]
    colors: Vec<Bgra>,

    /// Background color as #rrggbb[aa]
    #[arg(short, long)]
    background: Option<Bgra>,

    /// YAML render configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Config file (or defaults) with command-line overrides applied.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        match self.colors.as_slice() {
            [] => {}
            [color] => config.coloring = FaceColoring::Solid { color: *color },
            colors => {
                config.coloring = FaceColoring::Palette {
                    colors: colors.to_vec(),
                }
            }
        }
        if let Some(background) = self.background {
            config.background = background;
        }

        Ok(config)
    }
}

/// Log to stderr at `level`; `RUST_LOG` directives refine it per module.
fn init_logging(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("logger already installed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level())?;

    let config = cli.render_config()?;

    let mesh = Mesh::load(&cli.model)
        .with_context(|| format!("failed to load model {}", cli.model.display()))?;
    if mesh.face_count() == 0 {
        return Err(Error::EmptyMesh)
            .with_context(|| format!("nothing to render in {}", cli.model.display()));
    }
    info!("{} faces", mesh.face_count());

    let renderer = Renderer::new(config).context("invalid render configuration")?;
    let (fb, stats) = renderer.render_to_framebuffer(&mesh)?;

    output::write_image(&fb, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("{}: {stats}", cli.output.display());
    Ok(())
}
