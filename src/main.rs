use std::path::PathBuf;
use std::process;

use clap::Parser;

use pbench::{generate_directory, generate_queries, load_directory, load_queries, run_benchmark};

#[derive(Parser)]
#[command(name = "pbench")]
#[command(about = "Benchmark search strategies over an in-memory directory", long_about = None)]
struct Cli {
    /// Directory file with one `<phone> <name>` pair per line
    #[arg(short, long, requires = "queries")]
    directory: Option<PathBuf>,

    /// Query file with one lookup name per line
    #[arg(short, long, requires = "directory")]
    queries: Option<PathBuf>,

    /// Generate a synthetic directory of this many entries instead of
    /// reading files
    #[arg(short, long, conflicts_with_all = ["directory", "queries"])]
    generate: Option<usize>,

    /// Number of synthetic queries to generate
    #[arg(long, default_value = "500")]
    query_count: usize,

    /// RNG seed for synthetic data
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();

    let (entries, queries) = match (&cli.directory, &cli.queries, cli.generate) {
        (Some(directory), Some(queries), _) => {
            let entries = load_directory(directory).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            });
            let lookups = load_queries(queries).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            });
            (entries, lookups)
        }
        (_, _, Some(count)) => {
            println!("Generating {} synthetic entries...", count);
            let entries = generate_directory(count, cli.seed);
            let lookups = generate_queries(&entries, cli.query_count, cli.seed);
            (entries, lookups)
        }
        _ => {
            eprintln!("Error: pass --directory and --queries, or --generate <count>");
            process::exit(1);
        }
    };

    println!(
        "Benchmarking {} entries against {} queries\n",
        entries.len(),
        queries.len()
    );

    if let Err(e) = run_benchmark(&entries, &queries) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
