use clap::{Parser, ValueEnum};
use fanyi_sdk::Locale;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fanyi", version, about = "Translate text with the Baidu translation API")]
pub struct Cli {
    /// Text to translate, read from stdin when omitted
    pub text: Vec<String>,

    /// Source language, a code (`en`) or a display name (`英语`, `English`)
    #[arg(short, long, default_value = "auto")]
    pub from: String,

    /// Target language, a code or a display name
    #[arg(short, long, default_value = "zh")]
    pub to: String,

    /// Language of status and error messages, overrides the config file
    #[arg(long, value_enum)]
    pub locale: Option<UiLocale>,

    /// Config file, defaults to `fanyi.toml` in the working directory if present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the supported languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Log requests to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLocale {
    Zh,
    En,
}

impl From<UiLocale> for Locale {
    fn from(l: UiLocale) -> Self {
        match l {
            UiLocale::Zh => Locale::Zh,
            UiLocale::En => Locale::En,
        }
    }
}
