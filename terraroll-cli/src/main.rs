mod report;
mod source;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use report::{ReportFormat, RunRecord, write_report};
use source::FileSource;
use terraroll_core::{ActiveFlags, Category, ConfigStore, SelectionEngine};

#[derive(Debug, Parser)]
#[command(name = "terraroll", version)]
#[command(about = "Draws random Terraria world, difficulty and class setups from a config file")]
struct Args {
    /// Path to the configuration document
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Number of randomizations to run
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Categories to switch off for this invocation (comma-separated keys)
    #[arg(long, default_value = "")]
    disable: String,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// List categories with their configured state and exit
    #[arg(long)]
    list_categories: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = FileSource::new(&args.config);
    let store = ConfigStore::load(&source).with_context(|| {
        format!(
            "failed to load configuration from {}",
            source.path().display()
        )
    })?;

    let mut output_target = OutputTarget::new(args.output.clone())?;

    if args.list_categories {
        list_categories(&store, output_target.writer())?;
        output_target.flush_inner()?;
        return Ok(());
    }

    let flags = resolve_flags(&store, &args.disable)?;
    log::debug!("active flags: {flags:?}");

    if matches!(args.report, ReportFormat::Console) && args.output.is_none() {
        announce_banner();
    }

    let runs = run_randomizations(store, &flags, args.runs)?;
    write_report(output_target.writer(), args.report, &runs)?;
    output_target.flush_inner()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner() {
    println!("{}", "🎲 Terraroll Randomizer".bright_cyan().bold());
    println!("{}", "=======================".cyan());
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Start from the configured `enabled` state, then switch off what the user asked for.
fn resolve_flags(store: &ConfigStore, disable: &str) -> Result<ActiveFlags> {
    let mut flags = ActiveFlags::from_store(store);
    for key in split_csv(disable) {
        let Some(category) = Category::from_key(&key) else {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
            bail!("unknown category `{key}` (expected one of: {})", known.join(", "));
        };
        flags.set(category, false);
    }
    Ok(flags)
}

fn run_randomizations(
    store: ConfigStore,
    flags: &ActiveFlags,
    runs: usize,
) -> Result<Vec<RunRecord>> {
    let mut engine = SelectionEngine::new(store);
    let mut rng = rand::thread_rng();
    (1..=runs)
        .map(|run| {
            let bundle = engine
                .randomize(flags, &mut rng)
                .with_context(|| format!("randomization run {run} failed"))?;
            Ok(RunRecord { run, bundle })
        })
        .collect()
}

fn list_categories(store: &ConfigStore, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available categories:")?;
    for category in Category::ALL {
        let state = if store.section(category).is_err() {
            "missing"
        } else if store.is_enabled(category) {
            "enabled"
        } else {
            "disabled"
        };
        writeln!(
            out,
            "  {:20} - {} ({state})",
            category.key(),
            category.label()
        )?;
    }
    Ok(())
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
