use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};

use encoding_techniques_rs::encoding::{
    Polarity, Scheme, bits_to_string, encode, parse_bits, sanitize_bits,
};
use encoding_techniques_rs::ui;
use encoding_techniques_rs::ui::chart;
use encoding_techniques_rs::utils::consts::DEFAULT_BIT_STRING;
use encoding_techniques_rs::utils::dump::WaveformDump;
use encoding_techniques_rs::utils::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Binary input to encode; omit to start the interactive session
    #[arg(short, long)]
    bits: Option<String>,

    /// Initial signal level: high/+1 or low/-1
    #[arg(short, long, default_value = "high")]
    initial: String,

    /// Comma-separated schemes to draw (default: all six)
    #[arg(short, long)]
    schemes: Option<String>,

    /// Emit the run as JSON instead of drawing the chart
    #[arg(long)]
    json: bool,

    /// JSON destination path ("-" = stdout)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    let initial = match Polarity::from_arg(&cli.initial) {
        Some(polarity) => polarity,
        None => {
            eprintln!(
                "invalid --initial '{}': expected high/+1 or low/-1",
                cli.initial
            );
            std::process::exit(1);
        }
    };

    let schemes = match cli.schemes.as_deref() {
        Some(list) => match parse_schemes(list) {
            Ok(schemes) => schemes,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        },
        None => Scheme::ALL.to_vec(),
    };

    match cli.bits {
        Some(input) => run_once(&input, initial, &schemes, cli.json, cli.output.as_deref()),
        None => run_interactive(initial, schemes),
    }
}

fn parse_schemes(list: &str) -> Result<Vec<Scheme>, String> {
    list.split(',')
        .map(|name| {
            Scheme::from_name(name).ok_or_else(|| format!("unknown scheme '{}'", name.trim()))
        })
        .collect()
}

fn run_once(
    input: &str,
    initial: Polarity,
    schemes: &[Scheme],
    json: bool,
    output: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let bits = match parse_bits(input) {
        Ok(bits) => bits,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let points = encode(&bits, initial);
    tracing::info!(
        "encoded {} bit(s) into {} sample point(s)",
        bits.len(),
        points.len()
    );

    if json {
        let dump = WaveformDump::new(&bits, initial, points);
        write_dump(&dump, output)?;
    } else {
        print!("{}", chart::render(&points, schemes));
    }
    Ok(())
}

fn run_interactive(
    mut initial: Polarity,
    mut visible: Vec<Scheme>,
) -> Result<(), Box<dyn Error>> {
    ui::print_banner();
    let theme = ColorfulTheme::default();
    let mut bits = sanitize_bits(DEFAULT_BIT_STRING);

    loop {
        // Recompute the full run after every change.
        let points = encode(&bits, initial);

        println!();
        println!(
            "bits: {}   initial signal: {}",
            bits_to_string(&bits),
            initial.label()
        );
        println!();
        print!("{}", chart::render(&points, &visible));
        println!();

        let actions = [
            "Edit binary input",
            "Flip initial signal",
            "Select schemes",
            "Export JSON",
            "Quit",
        ];
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let entered: String = Input::with_theme(&theme)
                    .with_prompt("Binary input")
                    .with_initial_text(bits_to_string(&bits))
                    .allow_empty(true)
                    .interact_text()?;
                bits = sanitize_bits(&entered);
            }
            1 => initial = initial.flip(),
            2 => {
                let names: Vec<&str> = Scheme::ALL.iter().map(|scheme| scheme.name()).collect();
                let defaults = Scheme::ALL.map(|scheme| visible.contains(&scheme));
                let picked = MultiSelect::with_theme(&theme)
                    .with_prompt("Visible schemes")
                    .items(&names)
                    .defaults(&defaults)
                    .interact()?;
                visible = picked.into_iter().map(|i| Scheme::ALL[i]).collect();
            }
            3 => {
                let path: String = Input::with_theme(&theme)
                    .with_prompt("Output path (- for stdout)")
                    .with_initial_text("waveform.json")
                    .interact_text()?;
                let dump = WaveformDump::new(&bits, initial, points);
                write_dump(&dump, Some(&path))?;
                tracing::info!("exported {} point(s) to {}", dump.points.len(), path);
            }
            _ => break,
        }
    }
    Ok(())
}

fn write_dump(dump: &WaveformDump, output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut dst: Box<dyn Write> = match output {
        Some(path) if path == "-" => Box::new(io::stdout()),
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };
    serde_json::to_writer_pretty(&mut dst, dump)?;
    dst.write_all(b"\n")?;
    dst.flush()?;
    Ok(())
}
