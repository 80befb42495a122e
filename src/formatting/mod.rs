use std::path::Path;

use colored::*;

use crate::config::Config;
use crate::router::ROUTE_TABLE;

pub fn print_routes(config: &Config) {
    println!("{}", "Routes".bold());
    println!("{}", "─".repeat(60).dimmed());
    for (pattern, description) in ROUTE_TABLE.iter() {
        println!("  {:<24} {}", pattern.cyan(), description);
    }
    println!();
    println!(
        "  {} {}",
        "Team page for the default hackathon:".dimmed(),
        config.team_path().green()
    );
}

/// Pretty-print the effective configuration. `path` is where it would be
/// saved, whether or not the file exists yet.
pub fn print_config(config: &Config, path: &Path) {
    let exists = path.exists();
    println!("{}", "Configuration".bold());
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  {:<20} {} {}",
        "file".dimmed(),
        path.display(),
        if exists { "".normal() } else { "(not created, using defaults)".yellow() }
    );
    println!("  {:<20} {}", "invite_origin".dimmed(), config.invite_origin.cyan());
    println!("  {:<20} {} ms", "load_delay_ms".dimmed(), config.load_delay_ms);
    println!("  {:<20} {} ms", "submit_delay_ms".dimmed(), config.submit_delay_ms);
    println!("  {:<20} {} ms", "signup_redirect_ms".dimmed(), config.signup_redirect_ms);
    println!("  {:<20} {} s", "notification_secs".dimmed(), config.notification_secs);
    println!(
        "  {:<20} {}",
        "mock_team".dimmed(),
        if config.mock_team { "true".green() } else { "false".red() }
    );
    println!("  {:<20} {}", "default_hackathon".dimmed(), config.default_hackathon);
}
