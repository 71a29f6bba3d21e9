use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use fastbin_harness::case::Comparison;
use fastbin_harness::config::{
    self, DEFAULT_BENCH_ITERS, ENV_VAR_BENCH_ITERS, ENV_VAR_CHUNK_SIZE, ENV_VAR_CONTAINER_LIMIT,
    ENV_VAR_STRING_LIMIT,
};
use fastbin_harness::{bench, corpus};
use fastbin_types::transport::DEFAULT_CHUNK_SIZE;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fastbin_harness", version, about = "Reference vs accelerated codec checks")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbosity: u8,

    /// Reject strings longer than this on read
    #[arg(long, env = ENV_VAR_STRING_LIMIT, global = true)]
    string_limit: Option<usize>,

    /// Reject containers with more elements than this on read
    #[arg(long, env = ENV_VAR_CONTAINER_LIMIT, global = true)]
    container_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the equivalence suite
    Check {
        /// Bytes per refill of the buffered transport
        #[arg(long, env = ENV_VAR_CHUNK_SIZE, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Time encoding under both codecs
    Bench {
        #[arg(long, env = ENV_VAR_BENCH_ITERS, default_value_t = DEFAULT_BENCH_ITERS)]
        iters: u32,
    },
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    let codec_config = config::codec_config(cli.string_limit, cli.container_limit);

    match cli.command {
        Command::Check { chunk_size } => {
            let cmp = Comparison::new(codec_config, chunk_size);
            let report = corpus::run_suite(&cmp);
            for case in report.failures() {
                eprintln!("{case}");
            }
            println!("{report}");
            if report.all_passed() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Command::Bench { iters } => {
            println!("Starting Benchmarks");
            for res in bench::run_benchmarks(iters)? {
                println!("{res}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
