mod cities;
mod classify;
mod config;
mod loader;
mod sql;
mod table;
mod translit;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use time::macros::format_description;
use time::Date;
use tracing_subscriber::EnvFilter;

use classify::{classify, Classification, Task, Translator};
use config::Config;
use sql::SqlOptions;
use table::CollisionPolicy;

#[derive(Parser, Debug)]
#[command(name = "citysql", version)]
#[command(about = "Generate SQL that translates city names between Chinese and English")]
struct Cli {
    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a `name_en` column and fill it from Chinese names
    NameEn(GenerateArgs),
    /// Rename Latin-script city names to Chinese
    ToChinese(GenerateArgs),
    /// Look up a single name in the built-in tables
    Lookup(LookupArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// JSON array of {"name", "country", ...} objects
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the script (defaults to a fixed name in `output_dir`)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Generation date for the header, YYYY-MM-DD. Omitted when not given.
    #[arg(long)]
    date: Option<String>,

    /// How to resolve table entries that share a key
    #[arg(long, value_enum)]
    policy: Option<CollisionPolicy>,
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// City name to translate, matched exactly
    name: String,

    /// Table to search
    #[arg(long, value_enum, default_value_t = LookupTable::ChineseToEnglish)]
    table: LookupTable,

    /// Search the derived reverse table instead
    #[arg(long, default_value_t = false)]
    reverse: bool,

    /// How to resolve table entries that share a key
    #[arg(long, value_enum)]
    policy: Option<CollisionPolicy>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LookupTable {
    ChineseToEnglish,
    EnglishToChinese,
}

impl LookupTable {
    fn task(self) -> Task {
        match self {
            LookupTable::ChineseToEnglish => Task::NameEn,
            LookupTable::EnglishToChinese => Task::ToChinese,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load(cli.config.as_deref())?;
    match &config.config_path {
        Some(path) => tracing::info!("loaded configuration from {}", path.display()),
        None => tracing::info!("using default configuration"),
    }

    match cli.command {
        Command::NameEn(args) => handle_generate(Task::NameEn, args, &config),
        Command::ToChinese(args) => handle_generate(Task::ToChinese, args, &config),
        Command::Lookup(args) => handle_lookup(args, &config),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_date(raw: &str) -> Result<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("--date must look like YYYY-MM-DD, got `{}`", raw))
}

fn handle_generate(task: Task, args: GenerateArgs, config: &Config) -> Result<()> {
    let generated_on = args.date.as_deref().map(parse_date).transpose()?;
    let policy = args.policy.unwrap_or(config.collision_policy);

    let records = loader::load_records(&args.input)?;
    let translator = Translator::for_task(task, policy)
        .with_context(|| format!("failed to build translation table ({policy})"))?;
    let classification = classify(task, records, &translator);

    let options = SqlOptions {
        table: config.table.clone(),
        name_en_type: config.name_en_type.clone(),
        generated_on,
        source: args
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        select_limit: config.select_limit,
    };
    let document = sql::build_document(&classification, &options);
    tracing::debug!("rendered {} lines", document.lines().len());

    let output = args
        .output
        .unwrap_or_else(|| config.output_dir.join(task.default_file_name()));
    document.write_to(&output)?;

    print_summary(&classification, &output, config.preview_limit);
    Ok(())
}

fn print_summary(classification: &Classification, output: &Path, preview_limit: usize) {
    println!("SQL script written to {}", output.display());
    println!();
    println!("  total records:             {}", classification.total());
    println!(
        "  needing translation:       {}",
        classification.needing_translation()
    );
    println!(
        "  translations found:        {}",
        classification.resolved_count()
    );
    println!(
        "  translations missing:      {}",
        classification.unresolved_count()
    );
    println!(
        "  already in target script:  {} ({} listed in the table)",
        classification.unchanged_count(),
        classification.known_unchanged_count()
    );

    let resolved = classification.resolved_count();
    if resolved > 0 && preview_limit > 0 {
        println!();
        println!("Translated (first {}):", preview_limit.min(resolved));
        for rename in classification.resolved().take(preview_limit) {
            println!(
                "  {} -> {} ({})",
                rename.old_name, rename.new_name, rename.country
            );
        }
        if resolved > preview_limit {
            println!("  ... and {} more", resolved - preview_limit);
        }
    }

    let missing = classification.unresolved_count();
    if missing > 0 {
        println!();
        println!("No translation found for {} record(s):", missing);
        for record in classification.unresolved().take(preview_limit) {
            match translit::describe(&record.name) {
                Some(note) => println!("  - {} ({}) [{}]", record.name, record.country, note),
                None => println!("  - {} ({})", record.name, record.country),
            }
        }
        if missing > preview_limit {
            println!(
                "  ... and {} more, see the end of the script",
                missing - preview_limit
            );
        }
    }
}

fn handle_lookup(args: LookupArgs, config: &Config) -> Result<()> {
    let policy = args.policy.unwrap_or(config.collision_policy);
    let translator = Translator::for_task(args.table.task(), policy)
        .with_context(|| format!("failed to build translation table ({policy})"))?;
    let table = if args.reverse {
        &translator.reverse
    } else {
        &translator.forward
    };

    match table.translate(&args.name) {
        Some(translated) => println!("{} -> {}", args.name, translated),
        None => println!("No translation for \"{}\"", args.name),
    }
    Ok(())
}
