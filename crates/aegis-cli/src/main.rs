//! Aegis CLI - interactive front end for the intrusion detection core

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use aegis_core::{Aegis, CoreConfig, InMemoryDirectory, VerificationAnswer};

#[derive(Parser)]
#[command(name = "aegis")]
#[command(about = "Aegis - Intrusion detection and alerting simulator")]
struct Cli {
    /// Configuration file path (JSON); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the interactive menu
    Menu,
    /// Run a scripted demonstration of the detection paths
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw).context("parsing config")?
        }
        None => CoreConfig::default(),
    };

    match cli.command {
        Some(Commands::Demo) => demo(config),
        Some(Commands::Menu) | None => menu(config),
    }
}

fn menu(config: CoreConfig) -> anyhow::Result<()> {
    let mut core = Aegis::with_config(config, InMemoryDirectory::new());

    loop {
        println!();
        println!("=== AEGIS MENU ===");
        println!("1. Register user");
        println!("2. Login attack (up to 5 guesses)");
        println!("3. Access user data");
        println!("4. User inbox (messages + pending verifications)");
        println!("5. Process alerts");
        println!("0. Exit");

        match prompt("Choice: ")?.as_str() {
            "1" => {
                let name = prompt("Username: ")?;
                let password = prompt(&format!("Password for {}: ", name))?;
                if core.directory_mut().register(name.clone(), password) {
                    println!("User '{}' registered.", name);
                } else {
                    println!("User '{}' already exists.", name);
                }
            }
            "2" => {
                let target = prompt("Username to login as: ")?;
                let mut guesses = Vec::new();
                for attempt in 1..=5 {
                    let guess = prompt(&format!("Attempt {} password (blank to stop): ", attempt))?;
                    if guess.is_empty() {
                        break;
                    }
                    guesses.push(guess);
                }
                let guesses: Vec<&str> = guesses.iter().map(String::as_str).collect();
                println!("{}", core.attempt_login(&target, &guesses));
            }
            "3" => {
                let target = prompt("Username whose data to access: ")?;
                println!("{}", core.evaluate_access(&target));
            }
            "4" => {
                let name = prompt("Your username: ")?;
                let password = prompt("Your password: ")?;
                let result = core.resolve_inbox(&name, &password, |event| {
                    println!();
                    println!("Login event {}:", event.id);
                    println!("Someone used your correct password to attempt a login.");
                    match prompt("Was this login you? (yes/no): ") {
                        Ok(answer) if answer == "yes" => VerificationAnswer::Approve,
                        _ => VerificationAnswer::Deny,
                    }
                });
                match result {
                    Ok(report) => {
                        println!();
                        println!("Messages for {}:", name);
                        if report.messages.is_empty() {
                            println!("No messages.");
                        }
                        for (index, message) in report.messages.iter().enumerate() {
                            println!();
                            println!("Message {}:", index + 1);
                            println!("Type   : {}", message.category);
                            println!("Details: {}", message.details);
                        }
                        if report.resolutions.is_empty() {
                            println!("No pending login events for you.");
                        }
                        for resolution in &report.resolutions {
                            println!("{}", resolution.outcome);
                        }
                    }
                    Err(err) => println!("{}", err),
                }
            }
            "5" => {
                let alerts = core.drain_alerts();
                println!();
                println!("--- Alert Log ---");
                if alerts.is_empty() {
                    println!("No alerts.");
                }
                for alert in alerts {
                    println!();
                    println!("Alert ID : {}", alert.id);
                    println!("Type     : {}", alert.signature);
                    println!("Severity : {}", alert.severity);
                    println!("Attacker : {}", alert.attacker);
                    println!("Target   : {}", alert.target);
                    println!("Message  : {}", alert.message);
                }
            }
            "0" => return Ok(()),
            _ => println!("Invalid choice."),
        }
    }
}

fn demo(config: CoreConfig) -> anyhow::Result<()> {
    let mut directory = InMemoryDirectory::new();
    directory.register("alice", "hunter2");
    directory.register("bob", "swordfish");
    let mut core = Aegis::with_config(config, directory);

    println!("-- Brute force against bob --");
    println!("{}", core.attempt_login("bob", &["a", "b", "c", "d", "e"]));

    println!();
    println!("-- Correct password for alice, denied by the owner --");
    println!("{}", core.attempt_login("alice", &["hunter2"]));
    let report = core.resolve_inbox("alice", "hunter2", |_| VerificationAnswer::Deny)?;
    for resolution in &report.resolutions {
        println!("{}", resolution.outcome);
    }

    println!();
    println!("-- Correct password for alice, confirmed by the owner --");
    println!("{}", core.attempt_login("alice", &["hunter2"]));
    let report = core.resolve_inbox("alice", "hunter2", |_| VerificationAnswer::Approve)?;
    for resolution in &report.resolutions {
        println!("{}", resolution.outcome);
    }

    println!();
    println!("-- Alice reads her own data, then pokes at bob's --");
    println!("{}", core.evaluate_access("alice"));
    println!("{}", core.evaluate_access("bob"));

    println!();
    println!("-- Triage --");
    for alert in core.drain_alerts() {
        println!("{}", alert);
    }

    Ok(())
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    anyhow::ensure!(read > 0, "input closed");

    Ok(line.trim().to_string())
}
