use std::process;

use clap::{Arg, ArgMatches, Command};
use colored::*;

use devcircle::config::{config_path, load_config, save_config, Config};
use devcircle::constants::{APP_NAME, TAGLINE};
use devcircle::error::DevCircleResult;
use devcircle::formatting::{print_config, print_routes};
use devcircle::interactive::handlers::run_interactive_mode;
use devcircle::logging::{get_log_file_path, init_logging, log_error, log_info};
use devcircle::router::Route;

async fn handle_open(matches: Option<&ArgMatches>) -> DevCircleResult<()> {
    let path = matches
        .and_then(|m| m.get_one::<String>("path"))
        .map(String::as_str)
        .unwrap_or("/");
    let route = Route::parse(path);
    let config = load_config()?;
    run_interactive_mode(config, route).await
}

fn handle_routes() -> DevCircleResult<()> {
    let config = load_config()?;
    print_routes(&config);
    Ok(())
}

fn handle_config(matches: &ArgMatches) -> DevCircleResult<()> {
    if matches.get_flag("reset") {
        let path = save_config(&Config::default())?;
        println!("{} {}", "✓ Configuration reset:".green(), path.display());
        return Ok(());
    }

    if matches.get_flag("init") {
        let path = config_path()?;
        if path.exists() {
            println!("{} {}", "Configuration already exists:".yellow(), path.display());
            return Ok(());
        }
        let path = save_config(&Config::default())?;
        println!("{} {}", "✓ Configuration written:".green(), path.display());
        return Ok(());
    }

    let config = load_config()?;
    print_config(&config, &config_path()?);
    if let Some(log) = get_log_file_path() {
        println!("  {:<20} {}", "log file".dimmed(), log.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{} {}", "Warning: logging disabled:".yellow(), e);
    }

    let app = Command::new(APP_NAME)
        .about(TAGLINE)
        .version("1.0.0")
        .subcommand(
            Command::new("open")
                .about("Launch the terminal client on a route")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .help("Route to open, e.g. /auth or /hackathon/hack2024/team")
                        .default_value("/")
                        .index(1)
                )
        )
        .subcommand(
            Command::new("routes")
                .about("List the routes the client understands")
        )
        .subcommand(
            Command::new("config")
                .about("Show or initialize the configuration file")
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the effective configuration (default)")
                        .action(clap::ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("init")
                        .long("init")
                        .help("Write a default configuration file if none exists")
                        .action(clap::ArgAction::SetTrue)
                        .conflicts_with("reset")
                )
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .help("Overwrite the configuration file with defaults")
                        .action(clap::ArgAction::SetTrue)
                )
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("open", sub_matches)) => handle_open(Some(sub_matches)).await,
        Some(("routes", _)) => handle_routes(),
        Some(("config", sub_matches)) => handle_config(sub_matches),
        None => handle_open(None).await,
        Some((other, _)) => {
            eprintln!("Unknown command '{}'. Use '{} --help' for available commands.", other, APP_NAME);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&format!("Exiting with error: {}", e));
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
    log_info("Exited cleanly");
}
