use blackhole_calc::input::mass_errors::MassError;
use blackhole_calc::{parse_mass, BlackHoleReport, PhysicalConstants};
use env_logger::Env;
use log::{debug, info};
use std::env;
use std::io::{self, Write};
use std::process;

const PROMPT: &str =
    "Enter the mass of the black hole (In grams, kilograms, metric tons, Earths or Suns): ";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), MassError> {
    let mass_input = read_mass_input()?;
    let mass = parse_mass(&mass_input)?;
    info!("Computing black hole properties for {} kg", mass.kg());

    let report = BlackHoleReport::new(mass, &PhysicalConstants::default());
    print!("{}", report);

    Ok(())
}

/// Takes the mass from the command line when given, otherwise prompts once.
fn read_mass_input() -> Result<String, MassError> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        debug!("Using mass from command line arguments");
        return Ok(args.join(" "));
    }

    let mut stdout = io::stdout();
    stdout.write_all(PROMPT.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
