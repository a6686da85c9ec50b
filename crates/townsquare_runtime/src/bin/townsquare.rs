//! Townsquare CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use townsquare_engine::ExitStyle;
use townsquare_runtime::config::SAVE_DIR_ENV;
use townsquare_runtime::{Clock, GameConfig, Identity, Repl, Session, StatusBoard};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    identity: Vec<String>,
    show_help: bool,
    show_version: bool,
    seed: Option<u64>,
    save_dir: Option<PathBuf>,
    god_mode: bool,
    brief_exits: bool,
    tick_ms: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--god" => config.god_mode = true,
            "--brief-exits" => config.brief_exits = true,
            "--seed" => {
                i += 1;
                let raw = value(args, i, "--seed")?;
                config.seed = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --seed value: {raw}"))?,
                );
            }
            "--tick-ms" => {
                i += 1;
                let raw = value(args, i, "--tick-ms")?;
                config.tick_ms = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --tick-ms value: {raw}"))?,
                );
            }
            "--save-dir" => {
                i += 1;
                config.save_dir = Some(PathBuf::from(value(args, i, "--save-dir")?));
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            positional => config.identity.push(positional.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn game_config(cli: &CliConfig) -> GameConfig {
    let mut config = GameConfig::default()
        .with_invulnerable(cli.god_mode)
        .with_exit_style(if cli.brief_exits {
            ExitStyle::Brief
        } else {
            ExitStyle::Full
        });

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = cli.tick_ms {
        config = config.with_tick_interval(Duration::from_millis(ms.max(1)));
    }
    if let Some(dir) = cli
        .save_dir
        .clone()
        .or_else(|| env::var_os(SAVE_DIR_ENV).map(PathBuf::from))
    {
        config = config.with_save_dir(dir);
    }
    config
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(&args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("townsquare {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = game_config(&cli);
    let identity = Identity::from_args(&cli.identity);

    let status = StatusBoard::shared();
    let session = Session::start(&config, identity)?.with_status(Arc::clone(&status));
    let mut clock = Clock::start(status, config.tick_interval)?;

    let mut repl = Repl::new(session)?;
    let outcome = repl.run();
    clock.stop();

    outcome?;
    Ok(())
}

fn print_help() {
    println!(
        "Townsquare - a small text adventure

USAGE:
    townsquare [OPTIONS] [NAME NODE ADDRESS]

ARGUMENTS:
    NAME NODE ADDRESS   Who is playing. All three or none; when absent the
                        player is \"Unknown User\" on node 0 from 127.0.0.1

OPTIONS:
    -h, --help          Print help information
    -V, --version       Print version information
    --seed N            Seed the dice for a reproducible game
    --save-dir PATH     Where saves and the guestbook live
                        (default: ${SAVE_DIR_ENV}, else ./saves)
    --god               Start with god mode enabled
    --brief-exits       List exits on one line
    --tick-ms N         Status clock interval in milliseconds (default 1000)

ENVIRONMENT:
    RUST_LOG            Log filter for stderr (default: warn)
    {SAVE_DIR_ENV}    Save directory when --save-dir is absent

Type \"help\" in the game for a list of commands."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("townsquare")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_flags_and_identity() {
        let cli = parse_args(&args(&["--seed", "42", "--god", "Ada", "5", "10.0.0.2"])).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert!(cli.god_mode);
        assert_eq!(cli.identity, vec!["Ada", "5", "10.0.0.2"]);

        let config = game_config(&cli);
        assert!(config.invulnerable);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "many"])).is_err());
    }

    #[test]
    fn save_dir_flag_wins() {
        let cli = parse_args(&args(&["--save-dir", "/tmp/elsewhere"])).unwrap();
        assert_eq!(game_config(&cli).save_dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn brief_exits_and_tick() {
        let cli = parse_args(&args(&["--brief-exits", "--tick-ms", "250"])).unwrap();
        let config = game_config(&cli);
        assert_eq!(config.exit_style, ExitStyle::Brief);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
    }
}
