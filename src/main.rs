//! station-frontend - headless front-end for the 4K6AG station site
//!
//! Entry point for the application. Handles CLI argument parsing,
//! logging initialization, and rendering the requested sections.

use station_frontend::config::Config;
use station_frontend::state::{AppState, MountedSection, Section};
use station_frontend::ui;

/// Application name for logging and `--version`
const APP_NAME: &str = "station-frontend";

/// Options for a normal run
#[derive(Debug, Default, PartialEq)]
struct Flags {
    /// Language code from `--lang`
    lang: Option<String>,

    /// Backend URL from `--backend-url`
    backend_url: Option<String>,

    /// Sections to render; empty means all
    sections: Vec<Section>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Run(Flags),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let flags = match parse_args(&args) {
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Command::Version) => {
            print_version();
            return Ok(());
        }
        Ok(Command::Run(flags)) => flags,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    log::info!("Starting {}", APP_NAME);
    run(flags).await
}

/// Initialize the logging system
fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,station_frontend=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

async fn run(flags: Flags) -> anyhow::Result<()> {
    let mut config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default().with_env_overrides()
    });
    if let Some(url) = flags.backend_url {
        config.backend_url = url;
    }
    config.validate()?;
    log::debug!("Backend: {}", config.backend_url);

    let mut state = AppState::new(config)?;
    state.initialize_locale(flags.lang.as_deref());

    let sections = if flags.sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        flags.sections
    };

    // Mount everything up front so the fetches run concurrently
    let mounted: Vec<MountedSection> = sections
        .iter()
        .map(|&section| MountedSection::mount(section, &state))
        .collect();

    println!("{}\n", ui::header(&state.locale));
    for section in &mounted {
        println!("{}\n", ui::render_section(&state.locale, section).await);
    }
    println!("{}", ui::footer(&state.locale));

    Ok(())
}

/// Parse command line arguments (without the program name)
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut flags = Flags::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-l" | "--lang" => {
                i += 1;
                let code = args.get(i).ok_or("--lang requires a language code")?;
                flags.lang = Some(code.clone());
            }
            "-u" | "--backend-url" => {
                i += 1;
                let url = args.get(i).ok_or("--backend-url requires a URL")?;
                flags.backend_url = Some(url.clone());
            }
            arg if arg.starts_with('-') => return Err(format!("Unknown option: {}", arg)),
            name => {
                let section =
                    Section::from_name(name).ok_or_else(|| format!("Unknown section: {}", name))?;
                if !flags.sections.contains(&section) {
                    flags.sections.push(section);
                }
            }
        }
        i += 1;
    }

    Ok(Command::Run(flags))
}

/// Print help message
fn print_help() {
    println!(
        r#"station-frontend - 4K6AG amateur radio station

USAGE:
    station-frontend [OPTIONS] [SECTIONS...]

OPTIONS:
    -h, --help              Show this help message
    -v, --version           Show version information
    -l, --lang <CODE>       Interface language: az, ru, en
    -u, --backend-url <URL> Backend base URL (overrides config and STATION_BACKEND_URL)

SECTIONS:
    station, equipment, qsl, achievements, news, gallery, guestbook
    (all sections when none are given)

EXAMPLES:
    station-frontend                        Render the whole site
    station-frontend -l ru news guestbook   News and guestbook in Russian
    station-frontend -u https://api.4k6ag.az station
"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_renders_everything() {
        assert_eq!(parse_args(&[]), Ok(Command::Run(Flags::default())));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&args(&["--help"])), Ok(Command::Help));
        assert_eq!(parse_args(&args(&["news", "-v"])), Ok(Command::Version));
    }

    #[test]
    fn test_options_and_sections() {
        let parsed = parse_args(&args(&["-l", "az", "--backend-url", "http://radio:8001", "qsl", "news", "qsl"]));
        assert_eq!(
            parsed,
            Ok(Command::Run(Flags {
                lang: Some("az".to_string()),
                backend_url: Some("http://radio:8001".to_string()),
                sections: vec![Section::Qsl, Section::News],
            }))
        );
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(&args(&["--lang"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
        assert_eq!(
            parse_args(&args(&["technical"])),
            Err("Unknown section: technical".to_string())
        );
    }
}
