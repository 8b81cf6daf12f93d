//! fsample: build a synthetic rectilinear grid from the command line and
//! print the field value sampled at a point. Illustrative only, not a
//! distribution format for real grid data.

use clap::Parser;
use flowsample::prelude::*;
use log::debug;

/// Sample a synthetic scalar field on a regular lon/lat grid.
#[derive(Parser, Debug)]
#[command(name = "fsample")]
struct Opt {
    /// Longitude to sample
    #[arg(long)]
    x: f32,

    /// Latitude to sample
    #[arg(long)]
    y: f32,

    /// Depth to sample (ignored for 2D grids)
    #[arg(long, default_value_t = 0.0)]
    z: f32,

    /// Time to sample
    #[arg(long, default_value_t = 0.0)]
    t: f64,

    /// Grid points along x
    #[arg(long, default_value_t = 10)]
    xdim: i32,

    /// Grid points along y
    #[arg(long, default_value_t = 10)]
    ydim: i32,

    /// Use nearest-neighbor instead of bilinear interpolation
    #[arg(long)]
    nearest: bool,
}

/// A synthetic field `f(x, y) = x + 2y` on `[0, xdim) x [0, ydim)`,
/// exercising the same shape as spec.md §8 scenario 1.
fn synthetic_grid_and_data(xdim: i32, ydim: i32) -> anyhow::Result<(Grid, Vec<f32>)> {
    let lon: Vec<f32> = (0..xdim).map(|i| i as f32).collect();
    let lat: Vec<f32> = (0..ydim).map(|i| i as f32).collect();
    let grid = Grid::rectilinear_z(xdim, ydim, 1, 1, lon, lat, vec![0.0], vec![0.0], false, false)?;

    let mut data = vec![0f32; (xdim * ydim) as usize];
    for yi in 0..ydim {
        for xi in 0..xdim {
            data[(yi * xdim + xi) as usize] = xi as f32 + 2.0 * yi as f32;
        }
    }
    Ok((grid, data))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::parse();
    debug!("{opt:?}");

    let (grid, data) = synthetic_grid_and_data(opt.xdim, opt.ydim)?;
    let field = Field::new(&grid, &data, false, false)?;
    let mut cursor = Cursor::origin();
    let method = if opt.nearest { InterpMethod::Nearest } else { InterpMethod::Linear };

    let value = temporal_interpolation(&field, opt.x, opt.y, opt.z, opt.t, &mut cursor, method)?;
    println!("{value}");
    Ok(())
}
