use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use suddendeath::{
    line_widths, render_banner_bytes, BannerOptions, Config, MessageSource, SuddenDeathError,
};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "suddendeath")]
#[command(about = "Frame a message in a 突然の死 banner")]
#[command(version)]
struct Cli {
    /// Message text (defaults to 突然の死)
    message: Option<String>,

    /// Read the message from a file
    #[arg(long, short = 'f', conflicts_with = "message")]
    file: Option<PathBuf>,

    /// Configuration file with SuddenDeathMessage / SuddenDeathFile directives
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Draw the frame with ASCII characters
    #[arg(long)]
    ascii: bool,

    /// Print the maximum width and the width of every line instead of a banner
    #[arg(long)]
    widths: bool,
}

impl Cli {
    fn message_config(&self) -> Result<Config, SuddenDeathError> {
        if let Some(text) = &self.message {
            return Ok(Config {
                source: Some(MessageSource::Inline(text.clone())),
            });
        }
        if let Some(path) = &self.file {
            return Ok(Config {
                source: Some(MessageSource::File(path.clone())),
            });
        }
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<u8>, SuddenDeathError> {
    let config = cli.message_config()?;
    let message = config.message()?;

    if cli.widths {
        let measured = line_widths(&message);
        let mut out = format!("{}\n", measured.max_width);
        for width in measured.widths() {
            out.push_str(&format!("{}\n", width));
        }
        return Ok(out.into_bytes());
    }

    let options = BannerOptions { ascii: cli.ascii };
    Ok(render_banner_bytes(&message, &options))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SUDDENDEATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            if let Err(err) = std::io::stdout().write_all(&output) {
                tracing::error!(%err, "failed to write output");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("suddendeath: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suddendeath::DEFAULT_MESSAGE;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_widths_output() {
        let output = run(&cli(&["suddendeath", "A\nBB", "--widths"])).unwrap();
        assert_eq!(output, b"2\n1\n2\n");
    }

    #[test]
    fn test_no_arguments_renders_default_banner() {
        let output = run(&cli(&["suddendeath"])).unwrap();
        assert_eq!(
            output,
            render_banner_bytes(DEFAULT_MESSAGE.as_bytes(), &BannerOptions::default())
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "＿人人人人＿\n＞突然の死＜\n￣Y^Y^Y^Y^￣\n"
        );
    }

    #[test]
    fn test_message_overrides_config() {
        let config_path = std::env::temp_dir().join(format!(
            "suddendeath-cli-{}-override.conf",
            std::process::id()
        ));
        std::fs::write(&config_path, "SuddenDeathMessage \"from config\"\n").unwrap();
        let config_arg = config_path.to_string_lossy().into_owned();

        let from_config = run(&cli(&["suddendeath", "--config", &config_arg, "--widths"])).unwrap();
        assert_eq!(from_config, b"11\n11\n");

        let overridden = run(&cli(&["suddendeath", "abc", "--config", &config_arg, "--widths"]));
        assert_eq!(overridden.unwrap(), b"3\n3\n");

        std::fs::remove_file(&config_path).unwrap();
    }

    #[test]
    fn test_message_conflicts_with_file() {
        let result = Cli::try_parse_from(["suddendeath", "abc", "--file", "message.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_message_file_is_an_error() {
        let result = run(&cli(&["suddendeath", "--file", "/nonexistent/suddendeath/message"]));
        assert!(matches!(result, Err(SuddenDeathError::Io { .. })));
    }
}
