use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use euler_projectile::config::{AppConfig, SimulationConfig};
use euler_projectile::core::{Comparison, ConvergenceStudy, DEFAULT_CONVERGENCE_STEPS_S};
use euler_projectile::logging::init_tracing;
use euler_projectile::{plot, report};
use tracing::info;

#[derive(Parser)]
#[command(name = "euler-projectile")]
#[command(version)]
#[command(about = "Explicit Euler projectile integration vs the analytic trajectory", long_about = None)]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags shared by every subcommand; they override the config file.
#[derive(Args)]
struct LaunchArgs {
    /// TOML config file
    #[arg(short, long, global = true, env = "EULER_PROJECTILE_CONFIG")]
    config: Option<PathBuf>,

    /// Initial speed (m/s)
    #[arg(short = 'v', long, global = true)]
    speed: Option<f64>,

    /// Launch angle (degrees, 0-90)
    #[arg(short = 'a', long, global = true)]
    angle_deg: Option<f64>,

    /// Gravitational acceleration (m/s^2)
    #[arg(short, long, global = true)]
    gravity: Option<f64>,

    /// Integration step h (s)
    #[arg(short = 's', long, global = true)]
    step: Option<f64>,

    /// Simulation time cap (s)
    #[arg(short = 't', long, global = true)]
    max_time: Option<f64>,

    /// Relative error (%) above which a smaller step is recommended
    #[arg(long, global = true)]
    threshold_pct: Option<f64>,
}

impl LaunchArgs {
    fn apply(&self, simulation: &mut SimulationConfig) {
        if let Some(speed) = self.speed {
            simulation.speed_mps = speed;
        }
        if let Some(angle_deg) = self.angle_deg {
            simulation.angle_deg = angle_deg;
        }
        if let Some(gravity) = self.gravity {
            simulation.gravity_mps2 = gravity;
        }
        if let Some(step) = self.step {
            simulation.step_s = step;
        }
        if let Some(max_time) = self.max_time {
            simulation.max_time_s = max_time;
        }
        if let Some(threshold_pct) = self.threshold_pct {
            simulation.threshold_pct = threshold_pct;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate once, print the report and write the plot (default)
    Run(RunArgs),

    /// Repeat the launch at several step sizes and tabulate the error
    Convergence {
        /// Step sizes (s), comma separated
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_CONVERGENCE_STEPS_S)]
        steps: Vec<f64>,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Plot file (.png or .svg); defaults to a timestamped PNG
    #[arg(short, long)]
    plot: Option<PathBuf>,

    /// Skip writing the plot
    #[arg(long, conflicts_with = "plot")]
    no_plot: bool,

    /// Plot width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Plot height in pixels
    #[arg(long)]
    height: Option<u32>,
}

fn run_comparison(config: &AppConfig, args: RunArgs) -> anyhow::Result<()> {
    let params = config.simulation.to_parameters()?;
    let comparison = Comparison::with_threshold(params, config.simulation.threshold_pct)?;

    println!("{}", report::render_run(&comparison));

    if args.no_plot {
        return Ok(());
    }

    let path = args
        .plot
        .or_else(|| config.plot.output.clone())
        .unwrap_or_else(plot::default_plot_path);
    let size = (
        args.width.unwrap_or(config.plot.width),
        args.height.unwrap_or(config.plot.height),
    );
    plot::render_comparison(&comparison, &path, size)
        .with_context(|| format!("could not write plot to '{}'", path.display()))?;
    println!("\nPlot written to {}", path.display());
    Ok(())
}

fn run_convergence(config: &AppConfig, steps: &[f64]) -> anyhow::Result<()> {
    let params = config.simulation.to_parameters()?;
    let study = ConvergenceStudy::run(params, steps)?;
    println!("{}", report::convergence_table(&study));
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.launch.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.launch.apply(&mut config.simulation);
    info!(simulation = ?config.simulation, "resolved parameters");

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_comparison(&config, args),
        Commands::Convergence { steps } => run_convergence(&config, &steps),
    }
}

fn main() {
    init_tracing("warn");

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
