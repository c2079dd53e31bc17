//! Appraise: manual quality evaluator CLI

use anyhow::{Context, Result};
use appraise::analyzer::ScoreAnalyzer;
use appraise::catalog::{self, Catalog};
use appraise::reporter::{ConsoleReporter, JsonReporter};
use appraise::session::{Command, Phase, Session};
use appraise::{AnalysisReport, Tier};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Appraise: manual quality evaluator for AI background-removal results
#[derive(Parser, Debug)]
#[command(name = "appraise")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output the report as JSON
    #[arg(long, short, global = true)]
    json: bool,

    /// Minimum average score (exit 1 if the evaluation ends below it)
    #[arg(long, short, global = true)]
    threshold: Option<f64>,

    /// Quiet mode (single-line result)
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to catalog file (default: search .appraiserc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a list of ratings directly, skipping the interactive flow
    Analyze {
        /// Comma-separated ratings in item order, e.g. 5,4,5,3,5
        #[arg(long, value_name = "SCORES")]
        scores: String,
    },

    /// Create .appraiserc.json with the default catalogue
    Init {
        /// Directory in which to create the file (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Init { ref dir, force }) => run_init(dir.as_deref(), force, args.quiet),
        Some(Commands::Analyze { ref scores }) => {
            let catalog = load_catalog(&args)?;
            let scores = parse_scores(scores)?;
            let report = ScoreAnalyzer::analyze(&scores, scores.len())
                .context("No scores to analyze")?;
            render_report(&args, &catalog, &report);
            Ok(threshold_exit(&args, &catalog, &report))
        }
        None => {
            let catalog = load_catalog(&args)?;
            run_interactive(&args, &catalog)
        }
    }
}

fn load_catalog(args: &Args) -> Result<Catalog> {
    let work_dir = std::env::current_dir().context("Failed to determine working directory")?;
    catalog::load_catalog(&work_dir, args.config.as_deref())
}

fn run_init(dir: Option<&std::path::Path>, force: bool, quiet: bool) -> Result<ExitCode> {
    let target = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };
    let path = catalog::write_default_config(&target, force)?;
    if !quiet {
        eprintln!("{}: Wrote {}", "Info".blue(), path.display());
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse `5,4,3` style input into tiers, rejecting anything off the scale
fn parse_scores(input: &str) -> Result<Vec<Tier>> {
    let mut scores = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let value: u8 = part
            .parse()
            .with_context(|| format!("Invalid rating '{}'", part))?;
        scores.push(Tier::from_value(value)?);
    }
    if scores.is_empty() {
        anyhow::bail!("No scores provided");
    }
    Ok(scores)
}

fn render_report(args: &Args, catalog: &Catalog, report: &AnalysisReport) {
    let console = console_reporter(args);
    if args.json {
        println!("{}", JsonReporter::new().pretty().report(report));
    } else if args.quiet {
        console.report_quiet(report);
    } else {
        console.dashboard(report, catalog);
    }
}

/// Exit 1 when a threshold (CLI flag or catalog) is set and the average
/// falls below it; otherwise success.
fn threshold_exit(args: &Args, catalog: &Catalog, report: &AnalysisReport) -> ExitCode {
    let threshold = args.threshold.or(catalog.threshold);
    if let Some(threshold) = threshold {
        if report.average < threshold {
            if !args.quiet {
                eprintln!(
                    "{}: Average {:.2} is below threshold {:.2}",
                    "Warning".yellow(),
                    report.average,
                    threshold
                );
            }
            return ExitCode::from(1);
        }
    }
    ExitCode::SUCCESS
}

fn console_reporter(args: &Args) -> ConsoleReporter {
    if args.no_color {
        ConsoleReporter::new().without_colors()
    } else {
        ConsoleReporter::new()
    }
}

fn run_interactive(args: &Args, catalog: &Catalog) -> Result<ExitCode> {
    if catalog.items.is_empty() {
        anyhow::bail!("Catalog has no items to rate");
    }

    let console = console_reporter(args);
    let mut session = Session::new(catalog.items.len());

    if !args.quiet {
        println!(
            "{}",
            "Assess AI-generated background removal results for production readiness.".bold()
        );
        println!("Rate each image from 1 to 5, then submit to see the dashboard.");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render_phase(args, catalog, &console, &session);
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break; // EOF ends the session
        };
        let line = line.context("Failed to read input")?;

        let Some(command) = Command::parse(&line) else {
            eprintln!(
                "{}: Unrecognized input '{}' (h for help)",
                "Warning".yellow(),
                line.trim()
            );
            continue;
        };

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                print_help();
                continue;
            }
            Command::Rate(tier) => session.rate(tier),
            Command::Next => session.advance(),
            Command::Previous => session.previous(),
            Command::ViewAnalysis => session.view_analysis(),
            Command::Reset => session.reset(),
        };

        if let Err(e) = result {
            eprintln!("{}: {}", "Warning".yellow(), e);
        }
    }

    // Gate the exit code on the final report once the evaluation was submitted
    match session.phase() {
        Phase::Rating => Ok(ExitCode::SUCCESS),
        Phase::Complete | Phase::Analysis => match session.report() {
            Some(report) => Ok(threshold_exit(args, catalog, &report)),
            None => Ok(ExitCode::SUCCESS),
        },
    }
}

fn render_phase(args: &Args, catalog: &Catalog, console: &ConsoleReporter, session: &Session) {
    match session.phase() {
        Phase::Rating => {
            let index = session.current_index();
            let item = &catalog.items[index];
            console.progress(index, session.total(), &item.name);
            console.item_view(item, session.current_rating(), catalog);
            if session.on_last_item() {
                println!("[1-5] rate  [p] previous  [n] submit  [q] quit");
            } else {
                println!("[1-5] rate  [p] previous  [n] next  [q] quit");
            }
        }
        Phase::Complete => {
            console.completion_banner();
            println!("[a] view analysis  [r] start over  [q] quit");
        }
        Phase::Analysis => {
            if let Some(report) = session.report() {
                render_report(args, catalog, &report);
            }
            println!("[r] start over  [q] quit");
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  1-5        rate the current image");
    println!("  n, next    advance (submit on the last image)");
    println!("  p, prev    go back one image");
    println!("  a          view the analysis dashboard (after submitting)");
    println!("  r, reset   discard ratings and start over (after submitting)");
    println!("  q, quit    exit");
}
