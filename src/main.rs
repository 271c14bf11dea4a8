use anyhow::{Context, Result};

use clap::{CommandFactory, Parser};
use cli::*;
use log::{debug, LevelFilter};

mod cli;
mod domain;
mod provider;
mod service;

pub(crate) use provider::{ConfigProvider, Lookup};

fn main() -> Result<()> {
    let args = Cli::parse();

    // `config init` must work before a config file exists
    let mut config = match args.command {
        Some(Commands::Config { .. }) => domain::Config::default(),
        _ => domain::Config::load(args.config.as_deref())?,
    };
    if args.no_color {
        config.disable_color();
    }
    init_logging(raise_level(config.log_level(), args.verbose));
    colored::control::set_override(config.color());
    debug!("Using config: {:?}", config.path());

    match args.command {
        None | Some(Commands::Shell) => {
            let stdin = std::io::stdin();
            service::Service::new(stdin.lock()).run();
        }
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
        Some(Commands::Config { command }) => {
            let path = match args.config {
                Some(path) => path,
                None => domain::Config::default_path()?,
            };
            match command.unwrap_or(ConfigCommands::Path) {
                ConfigCommands::Path => println!("{}", path.display()),
                ConfigCommands::Init => {
                    domain::Config::create_default_config_file(&path)
                        .with_context(|| format!("Failed to initialize '{}'", path.display()))?;
                    println!("Created config file at: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level: LevelFilter) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
    )
    .format_timestamp(None)
    .init();
}

fn raise_level(level: LevelFilter, steps: u8) -> LevelFilter {
    LevelFilter::iter()
        .skip_while(|it| *it != level)
        .nth(steps as usize)
        .unwrap_or(LevelFilter::Trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(raise_level(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(raise_level(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(raise_level(LevelFilter::Off, 2), LevelFilter::Warn);
        assert_eq!(raise_level(LevelFilter::Debug, 9), LevelFilter::Trace);
    }
}
