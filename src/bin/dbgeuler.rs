use clap::{Parser, Subcommand};
use dbgeuler::{
    assemble::assemble_with_params,
    common::sequence_to_string,
    dbg::DeBruijnGraph,
    error::AssemblyError,
    params::AssemblyParams,
    random_seq,
    utils::timer,
    validate::{validate_kmer_size, validate_sequence},
};
use log::info;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Break a sequence into k-mers and reassemble it with a de Bruijn graph
    Assemble {
        /// DNA sequence (A/C/G/T, case-insensitive)
        sequence: String,
        /// k of the k-mers (nodes of de Bruijn graph)
        kmer_size: usize,
        /// Seed of the random edge order
        #[clap(short, long)]
        seed: Option<u64>,
        /// Maximum number of attempts of the Eulerian trail search
        #[clap(short = 'n', long)]
        max_attempts: Option<usize>,
        /// Retry the Eulerian trail search until it succeeds
        #[clap(long, conflicts_with = "max_attempts")]
        unbounded: bool,
        /// Maximum length of the input sequence
        #[clap(short = 'L', long)]
        max_length: Option<usize>,
        /// Params json file. Options given in command line take precedence.
        #[clap(short, long)]
        config: Option<std::path::PathBuf>,
        /// Output the de Bruijn graph in dot format
        #[clap(short, long)]
        dot: Option<std::path::PathBuf>,
    },
    /// Generate a random sequence in fasta
    Generate {
        /// Length of the sequence
        length: usize,
        /// Seed of the random generator
        #[clap(short, long, default_value_t = 0)]
        seed: u64,
    },
}

fn run(opts: Opts) -> Result<(), AssemblyError> {
    match opts.command {
        Commands::Assemble {
            sequence,
            kmer_size,
            seed,
            max_attempts,
            unbounded,
            max_length,
            config,
            dot,
        } => {
            let mut params = match config {
                Some(path) => AssemblyParams::from_json_file(path)?,
                None => AssemblyParams::default(),
            };
            if seed.is_some() {
                params.seed = seed;
            }
            if max_attempts.is_some() {
                params.max_attempts = max_attempts;
            }
            if unbounded {
                params.max_attempts = None;
            }
            if let Some(max_length) = max_length {
                params.max_seq_len = max_length;
            }
            info!("params {}", params);

            let seq = validate_sequence(&sequence, params.max_seq_len)?;
            let k = validate_kmer_size(kmer_size, seq.len())?;

            if let Some(path) = dot {
                let dbg = DeBruijnGraph::from_seq(&seq, k);
                std::fs::write(&path, dbg.as_dot())?;
                info!("dot written to {}", path.display());
            }

            let (assembly, elapsed) = timer(|| assemble_with_params(&seq, k, &params));
            let assembly = assembly?;
            info!("attempts={} elapsed={}ms", assembly.attempts, elapsed);
            println!("{}", sequence_to_string(&assembly.sequence));
            println!("Assembled sequence: {}", assembly.verdict);
        }
        Commands::Generate { length, seed } => {
            let seq = random_seq::generate(length, seed);
            println!(">randseq");
            println!("{}", sequence_to_string(&seq));
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts: Opts = Opts::parse();
    info!("started_at={}", chrono::Local::now());
    info!("opts={:?}", opts);
    let result = run(opts);
    info!("finished_at={}", chrono::Local::now());
    if let Err(e) = result {
        eprintln!("dbgeuler: error: {}", e);
        std::process::exit(1);
    }
}
