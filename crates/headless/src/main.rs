mod scene;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{bail, WrapErr};
use sandfall::brush::{apply_brush, DEFAULT_BRUSH_RADIUS};
use sandfall::cell::Material;
use sandfall::config::{SimConfig, DEFAULT_CELL_SCALE, DEFAULT_RASTER_HEIGHT, DEFAULT_RASTER_WIDTH};
use sandfall::render::{render, render_into, upscale, BYTES_PER_PIXEL};
use sandfall::Grid;
use tracing::{debug, info};

use scene::Scene;

/// Headless falling sand run with scripted brush input
#[derive(Parser, Debug)]
#[command(name = "sandfall-headless")]
#[command(about = "Run the sand simulation without a window", long_about = None)]
struct Args {
    /// Raster width in pixels
    #[arg(long, default_value_t = DEFAULT_RASTER_WIDTH)]
    raster_width: usize,

    /// Raster height in pixels
    #[arg(long, default_value_t = DEFAULT_RASTER_HEIGHT)]
    raster_height: usize,

    /// Pixels per cell
    #[arg(short = 's', long, default_value_t = DEFAULT_CELL_SCALE)]
    cell_scale: usize,

    /// Brush half-width in cells
    #[arg(short, long, default_value_t = DEFAULT_BRUSH_RADIUS)]
    brush_radius: u32,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Scripted input to play
    #[arg(long, value_enum, default_value_t = Scene::Pile)]
    scene: Scene,

    /// Log material counts every N frames
    #[arg(short, long, default_value_t = 60)]
    report_interval: u32,

    /// Write the final frame as a binary PPM image
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn summary(grid: &Grid) -> String {
    let counts = grid.material_counts();
    Material::ALL
        .iter()
        .zip(counts)
        .map(|(m, n)| format!("{m}={n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_ppm(path: &Path, rgba: &[u8], width: usize, height: usize) -> eyre::Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write!(out, "P6\n{width} {height}\n255\n")?;
    for px in rgba.chunks_exact(BYTES_PER_PIXEL) {
        out.write_all(&px[..3])?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = SimConfig {
        raster_width: args.raster_width,
        raster_height: args.raster_height,
        cell_scale: args.cell_scale,
        brush_radius: args.brush_radius,
    };
    let mut grid = config.build_grid()?;
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    info!(width = w, height = h, scene = ?args.scene, frames = args.frames, "starting run");

    let mut frame = render(&grid);
    let report_interval = args.report_interval.max(1);

    for n in 0..args.frames {
        for stroke in args.scene.strokes(n, args.frames, w, h, config.brush_radius) {
            match apply_brush(&mut grid, stroke.x, stroke.y, stroke.material, stroke.radius) {
                Ok(_) => {}
                Err(err) if err.is_fatal() => return Err(err.into()),
                Err(err) => debug!(%err, "stroke ignored"),
            }
        }

        let before = grid.material_counts();
        let stats = grid.tick();
        if grid.material_counts() != before {
            bail!("tick {} changed material counts", grid.tick_count());
        }

        render_into(&grid, &mut frame)?;

        if n % report_interval == 0 {
            info!(frame = n, moved = stats.moved, rested = stats.rested, "{}", summary(&grid));
        }
    }

    info!(ticks = grid.tick_count(), "{}", summary(&grid));

    if let Some(path) = &args.output {
        let scale = config.cell_scale;
        let raster = upscale(&frame, grid.width(), scale);
        write_ppm(path, &raster, grid.width() * scale, grid.height() * scale)?;
        info!(path = %path.display(), "wrote final frame");
    }

    Ok(())
}
