use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use huffman_table::error::Result;
use huffman_table::input::read_symbols_from_path;
use huffman_table::render::{write_console, write_csv_to_path};
use huffman_table::{build_tree, count_frequencies, extract_codes};

/// Build the Huffman code table of a text file
#[derive(Parser, Debug)]
#[command(name = "huffman-table")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file whose characters are coded
    #[arg(default_value = "entrada.txt")]
    input: PathBuf,

    /// Where to write the Symbol,Frequency,Code table
    #[arg(short, long, default_value = "saida.csv")]
    output: PathBuf,

    /// Do not print the table to stdout
    #[arg(long)]
    no_console: bool,

    /// Print the tree structure to stdout
    #[arg(long)]
    tree: bool,

    /// Debug level, repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let symbols = read_symbols_from_path(&cli.input)?;
    let frequencies = count_frequencies(symbols);
    let tree = build_tree(&frequencies)?;
    let records = extract_codes(tree.as_ref());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.tree {
        if let Some(tree) = &tree {
            tree.write_structure(&mut out)?;
        }
    }
    if !cli.no_console {
        write_console(&records, &mut out)?;
    }
    out.flush()?;

    write_csv_to_path(&records, &cli.output)?;
    tracing::info!(rows = records.len(), output = %cli.output.display(), "wrote code table");
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
