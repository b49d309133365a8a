//! lamport CLI: Lamport logical clock simulator

use clap::{Parser, Subcommand};
use lamport_core::{
    clamp_count, ProcessSet, SendOutcome, SendRequest, Session, EVENTS_PER_PROCESS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Lamport logical clock simulator with TUI
#[derive(Parser)]
#[command(name = "lamport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Generate a fresh set of process timelines
    Generate {
        /// Number of processes (clamped to 1-10)
        #[arg(long, default_value = "5")]
        count: usize,

        /// Seed for reproducible timelines
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate sending a message between two events
    Send {
        /// Sending process index
        #[arg(long)]
        sender: usize,

        /// Event index the message departs from
        #[arg(long)]
        sender_time: usize,

        /// Receiving process index
        #[arg(long)]
        receiver: usize,

        /// Event index the message arrives at
        #[arg(long)]
        receiver_time: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current session's timelines
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const LAMPORT_DIR: &str = ".lamport";

fn session_path() -> PathBuf {
    Path::new(LAMPORT_DIR).join("session.json")
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            if let Err(e) = lamport_tui::run_tui() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Generate { count, seed, json }) => {
            init_tracing();
            cmd_generate(count, seed, json);
        }
        Some(Commands::Send {
            sender,
            sender_time,
            receiver,
            receiver_time,
            json,
        }) => {
            init_tracing();
            let request = SendRequest {
                sender,
                sender_time,
                receiver,
                receiver_time,
            };
            cmd_send(&request, json);
        }
        Some(Commands::Show { json }) => {
            cmd_show(json);
        }
    }
}

/// Env-filtered logging to stderr for the non-interactive commands
/// (e.g. `RUST_LOG=lamport_core=debug lamport send ...`).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_generate(count: usize, seed: Option<u64>, json: bool) {
    let count = clamp_count(count);
    let set = match seed {
        Some(seed) => ProcessSet::generate(count, &mut StdRng::seed_from_u64(seed)),
        None => ProcessSet::generate_with_entropy(count),
    };

    let session = Session { set };
    if let Err(e) = session.save(&session_path()) {
        eprintln!("Failed to save session: {e}");
        std::process::exit(1);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&session.set).expect("failed to serialize")
        );
        return;
    }

    println!("Generated {count} processes\n");
    print_grid(&session.set);
}

fn cmd_send(request: &SendRequest, json: bool) {
    let path = session_path();
    if !path.exists() {
        eprintln!("Error: no session found. Run `lamport generate` first.");
        std::process::exit(1);
    }

    let mut session = match Session::load(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading session: {e}");
            std::process::exit(1);
        }
    };

    let outcome = match session.set.send(request) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Invalid send: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = session.save(&path) {
        eprintln!("Failed to save session: {e}");
        std::process::exit(1);
    }

    if json {
        let outcome_json = match outcome {
            SendOutcome::Adjusted {
                first_event,
                new_base,
            } => serde_json::json!({
                "outcome": "adjusted",
                "receiver": request.receiver,
                "first_event": first_event,
                "new_base": new_base,
            }),
            SendOutcome::AlreadyOrdered => serde_json::json!({ "outcome": "already_ordered" }),
        };
        let output = serde_json::json!({
            "send": outcome_json,
            "set": session.set,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    match outcome {
        SendOutcome::Adjusted {
            first_event,
            new_base,
        } => println!(
            "P{} jumped to {new_base} at event {first_event}\n",
            request.receiver
        ),
        SendOutcome::AlreadyOrdered => println!("Already ordered - no adjustment\n"),
    }
    print_grid(&session.set);
}

fn cmd_show(json: bool) {
    let path = session_path();
    if !path.exists() {
        eprintln!("Error: no session found. Run `lamport generate` first.");
        std::process::exit(1);
    }

    let session = match Session::load(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading session: {e}");
            std::process::exit(1);
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&session.set).expect("failed to serialize")
        );
        return;
    }

    print_grid(&session.set);
}

/// Print the N-column, 10-row grid: cell (row r, column c) is
/// `set[c].events[r]`, matching the TUI's table.
fn print_grid(set: &ProcessSet) {
    const CELL: usize = 6;

    let header: String = (0..set.len())
        .map(|c| format!("{:>CELL$}", format!("P{c}")))
        .collect();
    println!("{header}");

    for row in 0..EVENTS_PER_PROCESS {
        let line: String = set
            .processes
            .iter()
            .map(|p| format!("{:>CELL$}", p.events[row]))
            .collect();
        println!("{line}");
    }
}
