use std::{fs, io};

use clap::Parser;
use lipi::{config::Config, parse_source, run_source};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// lipi runs small programs written with Devanagari keywords and numerals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lipi to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Print numbers with ASCII digits instead of Devanagari ones.
    #[arg(short, long, env = "LIPI_ASCII_OUTPUT")]
    ascii_output: bool,

    /// Print the parsed program instead of running it.
    #[arg(long)]
    dump_ast: bool,

    contents: String,
}

/// Installs a stderr logger, but only when `RUST_LOG` asks for one.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.dump_ast {
        match parse_source(&script) {
            Ok(program) => println!("{program:#?}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let config = Config::default().with_devanagari_output(!args.ascii_output);

    if let Err(e) = run_source(&script, config, io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
