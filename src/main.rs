//! Command-line front end: translate keys, switch the persisted language,
//! render JSON-described documents and check language packs.

use std::fs;
use std::io::{
    self,
    Write,
};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{
    Context,
    bail,
};
use city_i18n::binder::{
    MemoryDocument,
    ReadyState,
};
use city_i18n::config::ConfigManager;
use city_i18n::diagnostics::check_catalog;
use city_i18n::format::format_price;
use city_i18n::lifecycle::{
    BootState,
    Bootstrap,
};
use city_i18n::locale::{
    FixedLocale,
    LocaleSource,
    SystemLocale,
};
use city_i18n::storage::FileStore;
use city_i18n::{
    Catalog,
    LanguageCode,
    Localizer,
    ParamSet,
    Translator,
};
use clap::{
    Parser,
    Subcommand,
};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "city-i18n", version, about = "Korean/English localization for the city builder")]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Workspace root holding `.city-i18n.json` and the language packs.
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Locale used for detection instead of the operating system's (e.g. `ko-KR`).
    #[arg(long)]
    locale: Option<String>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a key.
    Translate {
        /// The translation key, e.g. `hud.budget`.
        key: String,
        /// Language to translate into; detected when omitted.
        #[arg(short, long)]
        lang: Option<String>,
        /// Template parameter as `name=value`. Repeatable.
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Print the detected language.
    GetLang,
    /// Persist the active language.
    SetLang {
        /// `ko` or `en`.
        lang: String,
    },
    /// Render a JSON document's marked elements.
    Render {
        /// Document to render.
        document: PathBuf,
        /// Where to write the result; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Format an amount of money.
    Money {
        /// The amount; the fractional part is dropped.
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Language whose conventions to use; detected when omitted.
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Check the tables for missing keys and mismatched placeholders.
    Check,
}

/// Splits `name=value`.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

/// The explicitly requested language, or the detected one.
fn resolve_language(
    localizer: &mut Localizer<FileStore>,
    requested: Option<&str>,
) -> anyhow::Result<LanguageCode> {
    match requested {
        Some(lang) => Ok(lang.parse()?),
        None => Ok(localizer.detect_language()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (writer, _guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .init();

    run(cli, &mut io::stdout().lock())
}

/// Loads the workspace and executes one command, writing results to `out`.
fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config_manager = ConfigManager::new();
    config_manager
        .load_settings(Some(cli.workspace.clone()))
        .context("Failed to load configuration")?;
    let settings = config_manager.get_settings().clone();

    let catalog = Arc::new(Catalog::load(&settings, &cli.workspace)?);
    let store = FileStore::new(config_manager.preference_path());
    let locale = FixedLocale(cli.locale.clone().or_else(|| SystemLocale.locale()));
    let mut localizer = Localizer::from_settings(&settings, Arc::clone(&catalog), store, locale);

    match cli.command {
        Commands::Translate { key, lang, params } => {
            let language = resolve_language(&mut localizer, lang.as_deref())?;
            let params: ParamSet = params.into_iter().collect();
            writeln!(out, "{}", Translator::new(&catalog, language).t_with(&key, &params))?;
        }
        Commands::GetLang => {
            writeln!(out, "{}", localizer.detect_language())?;
        }
        Commands::SetLang { lang } => {
            if !localizer.set_lang(&lang, &mut MemoryDocument::new()) {
                bail!("Unsupported language '{lang}' (expected one of: ko, en)");
            }
            writeln!(out, "{}", localizer.lang())?;
        }
        Commands::Render { document, output } => {
            let content = fs::read_to_string(&document)
                .with_context(|| format!("Failed to read {}", document.display()))?;
            let mut page: MemoryDocument = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", document.display()))?;

            let mut bootstrap = Bootstrap::new();
            if bootstrap.load(&mut localizer, &mut page) == BootState::Deferred {
                page.set_ready_state(ReadyState::Complete);
                bootstrap.document_ready(&mut localizer, &mut page);
            }

            let rendered = serde_json::to_string_pretty(&page)?;
            match output {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => writeln!(out, "{rendered}")?,
            }
        }
        Commands::Money { amount, lang } => {
            let language = resolve_language(&mut localizer, lang.as_deref())?;
            writeln!(out, "{}", format_price(amount, language))?;
        }
        Commands::Check => {
            let diagnostics = check_catalog(&catalog);
            for diagnostic in &diagnostics {
                writeln!(out, "{diagnostic}")?;
            }
            if !diagnostics.is_empty() {
                bail!("{} problem(s) found", diagnostics.len());
            }
        }
    }

    Ok(())
}
