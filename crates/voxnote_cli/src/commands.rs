//! CLI command definitions and routing.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use log::info;
use voxnote_core::{
    core_version, default_log_level, init_classifier, load_corpus_file, seed_corpus,
    CaptureError, CaptureService, Category, ClassificationResult, Classifier, EvaluationReport,
    Evaluator, InMemoryCaptureSink, PatternGroup,
};

/// VoxNote: sort spoken notes into tasks, calendar events and notes.
#[derive(Parser)]
#[command(name = "voxnote", version, long_about = None)]
pub(crate) struct Cli {
    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "VOXNOTE_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "VOXNOTE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Classify one utterance.
    Classify {
        /// Utterance words; joined with single spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Classify stdin line by line and print the stored capture records.
    Capture,

    /// Evaluate the ruleset against the seed corpus or a JSON corpus file.
    Eval {
        /// JSON corpus: array of {"text", "expected", "tag"?}.
        #[arg(long)]
        corpus: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List the rules of the built-in library.
    Patterns {
        /// Only list one group, e.g. `action_verb`.
        #[arg(long)]
        group: Option<PatternGroup>,
    },

    /// Print crate and ruleset versions.
    Version,
}

pub(crate) fn init_logging(cli: &Cli) -> Result<()> {
    let Some(log_dir) = &cli.log_dir else {
        return Ok(());
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| eyre!("log dir is not valid UTF-8: {}", log_dir.display()))?;
    voxnote_core::init_logging(level, log_dir).map_err(|err| eyre!(err))
}

pub(crate) fn run(cli: Cli) -> Result<()> {
    let library = init_classifier();
    info!(
        "event=cli_start module=cli status=ok ruleset={} patterns={}",
        library.version(),
        library.len()
    );

    match cli.command {
        Command::Classify { text, format } => run_classify(&text.join(" "), format),
        Command::Capture => run_capture(),
        Command::Eval { corpus, format } => run_eval(corpus, format),
        Command::Patterns { group } => run_patterns(group),
        Command::Version => {
            println!("voxnote_core {}", core_version());
            println!("ruleset {}", library.version());
            Ok(())
        }
    }
}

fn run_classify(text: &str, format: OutputFormat) -> Result<()> {
    let result = Classifier::builtin().classify(text);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
        OutputFormat::Text => println!("{}", describe(&result)),
    }
    Ok(())
}

fn run_capture() -> Result<()> {
    let mut service = CaptureService::new(Classifier::builtin(), InMemoryCaptureSink::new());
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match service.capture(&line?) {
            Ok(_) | Err(CaptureError::EmptyInput) => {}
            Err(err) => return Err(err.into()),
        }
    }

    let mut stdout = std::io::stdout().lock();
    for record in service.sink().records() {
        writeln!(stdout, "{}", serde_json::to_string(record)?)?;
    }
    Ok(())
}

fn run_eval(corpus: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let entries = match &corpus {
        Some(path) => load_corpus_file(path)?,
        None => seed_corpus(),
    };
    let report = Evaluator::builtin().evaluate(&entries);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }

    let failed = report.total() - report.passed();
    if failed > 0 {
        return Err(eyre!("{failed} of {} corpus entries failed", report.total()));
    }
    Ok(())
}

fn run_patterns(group: Option<PatternGroup>) -> Result<()> {
    let library = init_classifier();
    for pattern in library
        .patterns()
        .filter(|pattern| group.map_or(true, |wanted| pattern.group() == wanted))
    {
        println!("{:<14} {:<28} {}", pattern.group(), pattern.id(), pattern.source());
    }
    if group.is_none() {
        for hedge in library.hedges() {
            println!("{:<14} {:<28} {}", "hedge", hedge.id(), hedge.source());
        }
        for anchor in library.intent_time_anchors() {
            println!("{:<14} {:<28} {}", "anchor", anchor.id(), anchor.source());
        }
    }
    Ok(())
}

fn print_report(report: &EvaluationReport) {
    for outcome in report.failures() {
        println!(
            "FAIL #{:<3} expected={:<8} got={:<30} {:?}",
            outcome.index,
            outcome.expected,
            describe(&outcome.result),
            outcome.text
        );
    }

    println!();
    println!("confusion (expected -> actual):");
    let confusion = report.confusion();
    for expected in Category::ALL {
        let row: Vec<String> = Category::ALL
            .iter()
            .map(|actual| {
                let count = confusion
                    .get(&(expected, *actual))
                    .copied()
                    .unwrap_or(0);
                format!("{actual}={count}")
            })
            .collect();
        println!("  {expected:<8} {}", row.join(" "));
    }

    println!();
    println!(
        "ruleset {}: {}/{} passed ({:.1}%)",
        report.ruleset_version,
        report.passed(),
        report.total(),
        report.accuracy() * 100.0
    );
}

fn describe(result: &ClassificationResult) -> String {
    match &result.matched_pattern_id {
        Some(pattern_id) => format!("{} ({pattern_id})", result.category),
        None => format!("{} (default)", result.category),
    }
}
