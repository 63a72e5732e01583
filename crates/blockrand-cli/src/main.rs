//! CLI for blockrand — balanced multi-factorial randomization lists for REDCap.

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use blockrand_core::FactorialDesign;

#[derive(Parser)]
#[command(name = "blockrand")]
#[command(about = "Generate balanced multi-factorial randomization lists, one CSV per factor")]
#[command(version = blockrand_core::VERSION)]
struct Cli {
    /// Minimum list length; rounded up to a whole number of blocks
    list_length: usize,

    /// Number of independent binary factors (1-16)
    factor_count: u32,

    /// Base name for output files: <FILE_PREFIX>_01.csv, <FILE_PREFIX>_02.csv, ...
    file_prefix: String,

    /// Seed the random generator for reproducible output (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    init_logger();

    // Usage errors exit 1, not clap's default 2. --help and --version also
    // land in the Err arm and must still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let design = match FactorialDesign::new(cli.list_length, cli.factor_count) {
        Ok(design) => design,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let table = design.generate(&mut rng);
    info!("{table}");

    if let Err(err) = blockrand_core::write_factor_files(&table, &cli.file_prefix) {
        eprintln!("Failed to write output: {err}");
        std::process::exit(1);
    }
}

/// Message-only format on stderr, debug level and up by default.
fn init_logger() {
    use std::io::Write;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
