//! Preview tool planting big trees on a flat terrain, printing the result and
//! optionally exporting the grid.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use glam::IVec3;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use arbor::block::{self, BlockTable};
use arbor::feature::FeatureGenerator;
use arbor::feature::tree::{AutumnLeaves, BigTreeGenerator, TreePalette};
use arbor::grid::{GridError, VoxelGrid};
use arbor::util::{JavaRandom, gen_seed};

pub mod config;
pub mod render;


/// Horizontal margin kept between planted trees and the terrain border.
const BORDER_MARGIN: i32 = 10;
/// Height of the terrain surface.
const GROUND_Y: i32 = 3;


#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the terrain random generator, random if not given.
    #[arg(long)]
    seed: Option<i64>,
    /// Number of trees to try planting.
    #[arg(long, default_value_t = 1)]
    count: u32,
    /// Trunk size, 2 for a 2x2 trunk.
    #[arg(long, default_value_t = 1)]
    trunk_size: i32,
    /// Height scale factor.
    #[arg(long)]
    height_scale: Option<f64>,
    /// Width scale factor.
    #[arg(long, default_value_t = 1.0)]
    width_scale: f64,
    /// Leaf density factor.
    #[arg(long, default_value_t = 1.0)]
    density: f64,
    /// Use the natural generation preset.
    #[arg(long)]
    natural: bool,
    /// Autumn leaves color.
    #[arg(long, value_enum)]
    autumn: Option<AutumnColor>,
    /// Export the resulting grid to this path.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum AutumnColor {
    Brown,
    Orange,
    Purple,
    Yellow,
}

impl From<AutumnColor> for AutumnLeaves {
    fn from(color: AutumnColor) -> Self {
        match color {
            AutumnColor::Brown => AutumnLeaves::Brown,
            AutumnColor::Orange => AutumnLeaves::Orange,
            AutumnColor::Purple => AutumnLeaves::Purple,
            AutumnColor::Yellow => AutumnLeaves::Yellow,
        }
    }
}


pub fn main() -> ExitCode {

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }

}

fn run(args: Args) -> Result<(), CliError> {

    let palette = match args.autumn {
        None => TreePalette::oak(),
        Some(color) => TreePalette::autumn(color.into()),
    };

    let generator = if args.natural {
        BigTreeGenerator::new_natural(palette)
    } else {
        BigTreeGenerator::new(palette)
    };

    let mut generator = generator.with_trunk_size(args.trunk_size);

    if let Some(height_scale) = args.height_scale {
        generator.set_scale(height_scale, args.width_scale, args.density);
    } else {
        let params = generator.params_mut();
        params.scale_width = args.width_scale;
        params.leaf_density = args.density;
    }

    let mut grid = flat_terrain(grid_dimension(config::grid_width())?, grid_dimension(config::grid_height())?)?;

    let seed = args.seed.unwrap_or_else(gen_seed);
    let mut rand = JavaRandom::new(seed);
    info!("planting {} tree(s) with seed {seed}", args.count);

    let half_width = grid.size().x / 2;
    let spread = (half_width - BORDER_MARGIN).max(0) * 2 + 1;

    let mut planted = 0;
    for _ in 0..args.count {

        let pos = IVec3::new(
            rand.next_int_bounded(spread) - spread / 2,
            GROUND_Y + 1,
            rand.next_int_bounded(spread) - spread / 2,
        );

        if FeatureGenerator::generate(&mut generator, &mut grid, pos, &mut rand) {
            info!("planted tree at {pos}");
            planted += 1;
        } else {
            warn!("could not plant tree at {pos}");
        }

    }

    info!("planted {planted}/{} tree(s), {} {} and {} {} blocks",
        args.count,
        grid.count(palette.wood.id), block::name(palette.wood.id),
        grid.count(palette.leaf.id), block::name(palette.leaf.id));

    println!("{}", render::render_side(&grid, palette.wood.id));

    if let Some(path) = args.output {
        let file = File::create(&path)?;
        arbor::io::write_grid(BufWriter::new(file), &grid)?;
        info!("grid exported to {}", path.display());
    }

    Ok(())

}

/// Create a terrain of stone covered by dirt and grass, the grid is centered on the
/// origin horizontally.
fn flat_terrain(width: i32, height: i32) -> Result<VoxelGrid, GridError> {

    let origin = IVec3::new(-width / 2, 0, -width / 2);
    let size = IVec3::new(width, height, width);
    let mut grid = VoxelGrid::new(origin, size, BlockTable::classic())?;

    grid.fill(origin, IVec3::new(width, GROUND_Y - 1, width), block::STONE, 0);
    grid.fill(origin.with_y(GROUND_Y - 1), IVec3::new(width, 1, width), block::DIRT, 0);
    grid.fill(origin.with_y(GROUND_Y), IVec3::new(width, 1, width), block::GRASS, 0);

    Ok(grid)

}

fn grid_dimension(value: usize) -> Result<i32, CliError> {
    i32::try_from(value).map_err(|_| CliError::GridTooLarge(value))
}


/// Errors of the preview tool.
#[derive(Error, Debug)]
enum CliError {
    #[error("grid: {0}")]
    Grid(#[from] GridError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("grid dimension too large: {0}")]
    GridTooLarge(usize),
}
