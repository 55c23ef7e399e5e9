use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_alloc::generator::PassengerGenerator;
use flight_alloc::report::Report;
use flight_alloc::{flatten_units, form_units, select_optimal, Seats};

#[derive(Parser)]
#[command(name = "flight-alloc")]
#[command(about = "Fill a flight with the passengers and families that maximise ticket revenue.", long_about = None)]
struct Args {
    /// Number of passengers to generate per run.
    #[clap(short, long, default_value_t = 250)]
    passengers: usize,

    /// Seats available on the flight. Negative values mean no seats.
    #[clap(short, long, default_value_t = 200, allow_negative_numbers = true)]
    seats: i64,

    /// Seed for the passenger generator. Random when omitted.
    #[clap(long)]
    seed: Option<u64>,

    /// How many times to regenerate passengers and optimise.
    #[clap(short, long, default_value_t = 1)]
    runs: usize,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    enable_tracing();
    match execute(Args::parse()) {
        Ok(()) => std::process::exit(exitcode::OK),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn execute(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let capacity = Seats::try_from(args.seats.max(0))?;
    let mut generator = match args.seed {
        Some(seed) => PassengerGenerator::from_seed(seed),
        None => PassengerGenerator::from_entropy(),
    };

    for run in 1..=args.runs {
        let (passengers, families) = generator.generate(args.passengers)?;
        let units = form_units(&passengers, &families)?;
        let selection = select_optimal(&units, capacity);
        info!(
            run,
            revenue = selection.total_cost(),
            seats = selection.total_seats(),
            capacity,
            "optimised flight"
        );

        let selected = flatten_units(&selection.units);
        println!("{}", Report::new(&selected, capacity));
        if run < args.runs {
            println!();
        }
    }
    Ok(())
}
