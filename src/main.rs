use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use free_throw::core::chart::{timestamped_chart_path, write_svg};
use free_throw::core::court::Court;
use free_throw::core::error::FreeThrowError;
use free_throw::core::free_throw::{ShotParameters, TrajectorySolution, solve};
use free_throw::core::gauges::gauges;

const FEET_RANGE: RangeInclusive<u32> = 4..=7;
const INCHES_RANGE: RangeInclusive<u32> = 0..=12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "free_throw", version)]
#[command(about = "Release angle and velocity for a perfect basketball free throw")]
struct Cli {
    /// Your height in feet (4-7); prompts when omitted
    #[arg(value_parser = clap::value_parser!(u32).range(4..=7))]
    feet: Option<u32>,

    /// Extra inches on top of the feet (0-12)
    #[arg(value_parser = clap::value_parser!(u32).range(0..=12))]
    inches: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Court geometry JSON (gravity_fps2, rim_height_ft, distance_ft, path_samples)
    #[arg(long)]
    court: Option<PathBuf>,

    /// Write the trajectory chart to this SVG file
    #[arg(long, conflicts_with = "chart_dir")]
    chart: Option<PathBuf>,

    /// Write a timestamped trajectory chart into this directory
    #[arg(long)]
    chart_dir: Option<PathBuf>,
}

fn read_in_range(prompt: &str, range: &RangeInclusive<u32>) -> Result<u32, FreeThrowError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended unexpectedly (EOF)",
            )
            .into());
        }

        match line.trim().parse::<u32>() {
            Ok(v) if range.contains(&v) => return Ok(v),
            _ => eprintln!(
                "Please enter a whole number from {} to {}.",
                range.start(),
                range.end()
            ),
        }
    }
}

fn shot_from_cli(cli: &Cli) -> Result<ShotParameters, FreeThrowError> {
    let (feet, inches) = match (cli.feet, cli.inches) {
        (Some(feet), inches) => (feet, inches.unwrap_or(0)),
        (None, _) => (
            read_in_range("Your height in feet (4-7): ", &FEET_RANGE)?,
            read_in_range("Your height in inches (0-12): ", &INCHES_RANGE)?,
        ),
    };
    Ok(ShotParameters::from_feet_inches(feet, inches))
}

fn format_table(solution: &TrajectorySolution) -> String {
    let mut out = format!("Release height: {:.3} ft\n\n", solution.shooter_height_ft);
    for gauge in gauges(solution) {
        out.push_str(&format!(
            "{:<34} {:>8.3}  (dial max {})\n",
            gauge.title, gauge.value, gauge.max
        ));
    }
    out.push_str(&format!(
        "{:<34} {:>8.3}\n",
        "Apex above floor (feet)",
        solution.apex_height_ft()
    ));
    out.push_str("\nHorizontal Distance (ft)  Height (ft)\n");
    for point in &solution.path {
        out.push_str(&format!("{:>24.3}  {:>11.3}\n", point.distance_ft, point.height_ft));
    }
    out
}

fn run(cli: Cli) -> Result<(), FreeThrowError> {
    let court = match &cli.court {
        Some(path) => Court::load(path)?,
        None => Court::default(),
    };

    let shot = shot_from_cli(&cli)?;
    let solution = solve(shot, &court)?;

    match cli.format {
        OutputFormat::Table => print!("{}", format_table(&solution)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
    }

    let chart_path = match (&cli.chart, &cli.chart_dir) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(dir)) => Some(timestamped_chart_path(dir, chrono::Local::now())),
        (None, None) => None,
    };
    if let Some(path) = chart_path {
        write_svg(&solution, &court, &path)?;
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::warn!("free throw calculation failed: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
