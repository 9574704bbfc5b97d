use clap::Parser;
use log::{error, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tower_grid::config::Config;
use tower_grid::generator::GridGenerator;
use tower_grid::report::{format_path, format_towers, NetworkReport};
use tower_grid::{place_towers_optimized, Result, TowerNetwork};

/// Place wireless towers over a random city grid and trace a hop path
#[derive(Parser, Debug)]
#[command(name = "tower_grid", version)]
struct Args {
    /// Configuration file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the grid RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the tower range
    #[arg(long)]
    range: Option<usize>,

    /// Print the JSON report instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config_found = args.config.exists();
    let mut config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(seed) = args.seed {
        config.grid.seed = Some(seed);
    }
    if let Some(range) = args.range {
        config.network.tower_range = range;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .format(|buf, record| writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args()))
        .init();

    if config_found {
        info!("Loaded configuration from {}", args.config.display());
    } else {
        warn!("No {} found, using default configuration", args.config.display());
    }

    match run(&config, args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, json: bool) -> Result<()> {
    config.validate()?;

    let range = config.network.tower_range;
    let mut generator = GridGenerator::new(config.grid.obstructed_prob, config.grid.seed)?;
    info!(
        "Generating {}x{} grid (obstructed_prob {}, seed {:?})",
        config.grid.rows,
        config.grid.cols,
        generator.obstructed_prob(),
        config.grid.seed
    );
    let mut grid = generator.generate(config.grid.rows, config.grid.cols)?;
    info!("City grid:\n{}", grid);

    let towers = place_towers_optimized(&mut grid, range);
    info!("Grid with tower coverage:\n{}", grid);

    let network = TowerNetwork::new(&grid, range);
    let path = network.find_reliable_path(config.network.start, config.network.end)?;

    if json {
        let report = NetworkReport::new(&grid, &towers, range, path.as_deref());
        println!("{}", report.to_json()?);
    } else {
        println!("Towers placed at: {}", format_towers(&towers));
        match &path {
            Some(path) => println!("Most reliable path: {}", format_path(path)),
            None => println!(
                "No path between {} and {}",
                config.network.start, config.network.end
            ),
        }
    }

    Ok(())
}
