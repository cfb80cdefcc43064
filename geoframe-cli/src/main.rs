use anyhow::Context;
use clap::{Parser, Subcommand};
use geoframe::{report, table, ParameterStore, TransformEngine, CENTRAL_FRAME};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geoframe")]
#[command(about = "Convert point coordinates between geodetic reference frames")]
#[command(version)]
struct Cli {
    /// JSON parameter table to use instead of the bundled one
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered reference frames and the central frame
    Frames,
    /// Convert a CSV file of X,Y,Z points between two frames
    Convert {
        /// Input CSV file with required columns X, Y, Z
        input: PathBuf,

        /// Source reference frame
        #[arg(long)]
        from: String,

        /// Target reference frame
        #[arg(long, default_value = CENTRAL_FRAME)]
        to: String,

        /// Output CSV file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write a plain-text report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store = match &cli.params {
        Some(path) => ParameterStore::from_file(path)
            .with_context(|| format!("cannot load parameter table {}", path.display()))?,
        None => ParameterStore::bundled(),
    };
    let engine = TransformEngine::new(store);

    match cli.command {
        Commands::Frames => {
            println!("Central frame: {}", CENTRAL_FRAME);
            println!("Registered frames:");
            for frame in engine.store().frames() {
                println!("  {}", frame);
            }
        }
        Commands::Convert {
            input,
            from,
            to,
            output,
            report: report_path,
        } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("cannot read {}", input.display()))?;
            let points = table::parse_points(&text)?;
            let converted = engine.convert(&points, &from, &to)?;

            let csv = table::render_csv(&converted);
            match &output {
                Some(path) => {
                    std::fs::write(path, &csv)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    eprintln!("Wrote {} rows to {}", converted.len(), path.display());
                }
                None => print!("{}", csv),
            }

            if let Some(path) = &report_path {
                let text = report::conversion_report(&from, &to, &converted);
                std::fs::write(path, text)
                    .with_context(|| format!("cannot write {}", path.display()))?;
            }
        }
    }

    Ok(())
}
