mod cli;
mod config;
mod input;

use clap::Parser;
use cli::Cli;
use config::Config;
use fanyi_sdk::Locale;
use fanyi_sdk::credentials::StaticCredentialsProvider;
use fanyi_sdk::language::LanguageCatalog;
use fanyi_sdk::translate::Client;
use input::Prepared;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?.with_env(|k| std::env::var(k).ok());
    let locale = cli
        .locale
        .map(Locale::from)
        .or(config.locale)
        .unwrap_or_default();

    let catalog = LanguageCatalog::global();
    if cli.list_languages {
        print_languages(catalog, locale);
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    let (text, from, to) = match input::prepare(&cli, catalog, stdin, is_terminal)? {
        Prepared::Translate { text, from, to } => (text, from, to),
        Prepared::EmptyInput => {
            eprintln!("{}", input::empty_input_message(locale));
            return Ok(ExitCode::from(input::EMPTY_INPUT_STATUS));
        }
    };

    let creds = config.credentials();
    let client = Client::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(
            creds.app_id,
            creds.app_key,
        )))
        .maybe_endpoint(config.endpoint.clone())
        .maybe_timeout(config.timeout())
        .locale(locale)
        .build();

    eprintln!(
        "{}",
        match locale {
            Locale::Zh => "翻译中，请稍候...",
            Locale::En => "Translating, please wait...",
        }
    );
    let res = client.translate_outcome(&text, from, to).await;
    println!("{res}");

    Ok(if res.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "fanyi=debug,fanyi_sdk=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_languages(catalog: &LanguageCatalog, locale: Locale) {
    for l in catalog.languages() {
        let (primary, secondary) = match locale {
            Locale::Zh => (l.name_zh, l.name_en),
            Locale::En => (l.name_en, l.name_zh),
        };
        println!("{:<8}{primary} / {secondary}", l.code);
    }
}
