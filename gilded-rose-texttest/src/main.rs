mod items;
mod report;
mod simulation;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use report::{ReportFormat, generate_report};
use simulation::total_days;

#[derive(Debug, Parser)]
#[command(name = "gilded-rose-texttest", version)]
#[command(about = "Prints Gilded Rose item states day by day for approval testing")]
struct Args {
    /// Extra days to simulate after day 0 (default: 1)
    #[arg(allow_negative_numbers = true)]
    days: Option<i64>,

    /// JSON item set to start from instead of the built-in fixture items
    #[arg(long)]
    items: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print a run summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let mut shop = items::load_registry(args.items.as_deref())?;
    let days = total_days(args.days);

    if args.verbose {
        announce_banner(shop.len(), days);
    }

    let mut output_target = OutputTarget::new(args.output.clone())?;
    generate_report(&mut output_target, args.report, &mut shop, days)?;
    output_target.flush_inner()?;
    Ok(())
}

fn announce_banner(item_count: usize, days: u32) {
    eprintln!("{}", "🏰 Gilded Rose Texttest".bright_cyan().bold());
    eprintln!("{}", "=======================".cyan());
    eprintln!("Items: {item_count}  Days: {days}");
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
