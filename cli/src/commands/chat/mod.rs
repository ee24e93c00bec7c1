//! # InfraPulse Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! `infrapulse chat` runs the site's assistant in the terminal: a
//! line-oriented REPL over the same intent responder the chat widget calls
//! through `/api/chat`. Useful for trying the rule table without starting
//! the server.
//!
//! Lines are read until EOF or `bye`. Every line gets a reply; the
//! responder is total, so even an empty line yields the default answer.
//!
use crate::core::error::Result;
use crate::core::responder;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Display name the REPL answers under.
const ASSISTANT_NAME: &str = "Pulse";

/// # Chat Command Arguments (`ChatArgs`)
///
/// Command-line arguments accepted by `infrapulse chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Print replies without the HH:MM clock prefix.
    #[arg(long)]
    pub no_timestamps: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs the REPL loop on stdin/stdout. Blocking reads are fine here since
/// nothing else runs concurrently with the prompt.
///
/// ## Arguments
///
/// * `args`: The parsed `ChatArgs`.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` on `bye` or end of input; an `Err` only when
///   stdin/stdout themselves fail.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Chat with {}! Ask about skills, projects, experience, or how to get in touch. Type 'bye' to quit.", ASSISTANT_NAME);

    loop {
        print!("You: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read from stdin")?,
            None => {
                // EOF: piped input ran out or the terminal closed.
                println!();
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("bye") {
            println!("{}: Goodbye!", ASSISTANT_NAME);
            break;
        }

        let reply = responder::respond(trimmed);
        if args.no_timestamps {
            println!("{}: {}", ASSISTANT_NAME, reply);
        } else {
            let stamp = chrono::Local::now().format("%H:%M");
            println!("[{}] {}: {}", stamp, ASSISTANT_NAME, reply);
        }
    }

    Ok(())
}
