//! Banner message configuration
//!
//! A configuration file holds directives, one per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! SuddenDeathMessage "突然の\n死"
//! SuddenDeathFile /etc/suddendeath/message.txt
//! ```
//!
//! Directive names are case-insensitive. Arguments are either a bare word or a
//! double-quoted string supporting `\n`, `\t`, `\"` and `\\` escapes. When a
//! directive appears more than once the last one wins.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use winnow::ascii::{space0, space1, Caseless};
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::token::{any, none_of, take_while};
use winnow::PResult;
use winnow::Parser;

use crate::banner::DEFAULT_MESSAGE;
use crate::error::SuddenDeathError;

/// Where the banner message comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// Text given directly
    Inline(String),
    /// Text read from a file when the message is needed
    File(PathBuf),
}

impl MessageSource {
    /// Materialize the message bytes
    pub fn load(&self) -> Result<Cow<'_, [u8]>, SuddenDeathError> {
        match self {
            MessageSource::Inline(text) => Ok(Cow::Borrowed(text.as_bytes())),
            MessageSource::File(path) => {
                let bytes =
                    std::fs::read(path).map_err(|err| SuddenDeathError::io(path, &err))?;
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded message file");
                Ok(Cow::Owned(bytes))
            }
        }
    }
}

/// Parsed configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub source: Option<MessageSource>,
}

/// A single directive line
#[derive(Debug, PartialEq, Eq)]
enum Directive {
    Message(String),
    File(String),
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        other => other,
    }
}

/// One character inside a quoted argument
fn quoted_char(input: &mut &str) -> PResult<char> {
    alt((preceded('\\', any).map(unescape), none_of(['"', '\\']))).parse_next(input)
}

/// Parse a quoted string: "..."
fn quoted_argument(input: &mut &str) -> PResult<String> {
    delimited('"', repeat(0.., quoted_char), '"').parse_next(input)
}

/// Parse a bare argument: a run of characters other than whitespace and quotes
fn bare_argument(input: &mut &str) -> PResult<String> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '"')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

fn argument(input: &mut &str) -> PResult<String> {
    alt((quoted_argument, bare_argument)).parse_next(input)
}

/// Parse `SuddenDeathMessage <arg>` or `SuddenDeathFile <arg>`
fn directive(input: &mut &str) -> PResult<Directive> {
    alt((
        preceded((Caseless("SuddenDeathMessage"), space1), argument).map(Directive::Message),
        preceded((Caseless("SuddenDeathFile"), space1), argument).map(Directive::File),
    ))
    .parse_next(input)
}

fn parse_directive_line(line: &str, line_num: usize) -> Result<Directive, SuddenDeathError> {
    let mut input = line;
    let parsed = (directive, space0).parse_next(&mut input);
    match parsed {
        Ok((d, _)) if input.is_empty() => Ok(d),
        Ok(_) => Err(SuddenDeathError::ParseError {
            line: line_num,
            message: format!("Unexpected text after argument: '{}'", input.trim()),
            suggestion: Some("Quote arguments that contain spaces".to_string()),
        }),
        Err(_) => Err(SuddenDeathError::ParseError {
            line: line_num,
            message: format!("Unknown or incomplete directive: '{}'", line),
            suggestion: Some(
                "Use 'SuddenDeathMessage \"text\"' or 'SuddenDeathFile path'".to_string(),
            ),
        }),
    }
}

impl Config {
    /// Parse configuration text
    pub fn parse(input: &str) -> Result<Config, SuddenDeathError> {
        let mut config = Config::default();

        for (i, line) in input.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            config.source = Some(match parse_directive_line(line, i + 1)? {
                Directive::Message(text) => MessageSource::Inline(text),
                Directive::File(path) => MessageSource::File(PathBuf::from(path)),
            });
        }

        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Config, SuddenDeathError> {
        let text =
            std::fs::read_to_string(path).map_err(|err| SuddenDeathError::io(path, &err))?;
        let config = Config::parse(&text)?;
        tracing::debug!(path = %path.display(), source = ?config.source, "loaded configuration");
        Ok(config)
    }

    /// The configured message, or the default one
    pub fn message(&self) -> Result<Cow<'_, [u8]>, SuddenDeathError> {
        match &self.source {
            Some(source) => source.load(),
            None => Ok(Cow::Borrowed(DEFAULT_MESSAGE.as_bytes())),
        }
    }
}
