use crate::cli::Cli;
use anyhow::Context;
use fanyi_sdk::Locale;
use fanyi_sdk::language::LanguageCatalog;
use std::io::Read;
use tracing::warn;

/// 没有输入文本时的退出码
pub const EMPTY_INPUT_STATUS: u8 = 2;

#[derive(Debug, PartialEq, Eq)]
pub enum Prepared {
    Translate {
        text: String,
        from: &'static str,
        to: &'static str,
    },
    /// 不发送请求
    EmptyInput,
}

pub fn empty_input_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "输入错误：请输入需要翻译的文本！",
        Locale::En => "Input error: please enter the text to translate!",
    }
}

/// 读取待翻译文本并把语言参数转换为代码
///
/// 参数为空时从`input`读取，`input`是终端时不等待输入
pub fn prepare(
    cli: &Cli,
    catalog: &LanguageCatalog,
    input: impl Read,
    input_is_terminal: bool,
) -> anyhow::Result<Prepared> {
    let text = read_text(&cli.text, input, input_is_terminal)?;
    if text.is_empty() {
        return Ok(Prepared::EmptyInput);
    }

    let from = catalog.resolve_source(&cli.from);
    if catalog.lookup(&cli.from).is_none() {
        warn!(input = %cli.from, "unknown source language, falling back to {from}");
    }
    let to = catalog.resolve_target(&cli.to);
    if catalog.lookup(&cli.to).is_none() {
        warn!(input = %cli.to, "unknown target language, falling back to {to}");
    }

    Ok(Prepared::Translate { text, from, to })
}

fn read_text(
    args: &[String],
    mut input: impl Read,
    input_is_terminal: bool,
) -> anyhow::Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" ").trim().to_owned());
    }
    if input_is_terminal {
        return Ok(String::new());
    }
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf.trim().to_owned())
}
