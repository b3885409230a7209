//! Interactive chat command: a line-oriented REPL over the chat engine.

use anyhow::Result;
use carebot_core::{CareError, ChatEngine, VisualCue};
use std::io::{self, BufRead, Write};

/// Opening assistant turn shown before the user has typed anything.
const OPENING_GREETING: &str = "Hello. I am Baymax, your personal healthcare companion. I have completed my system diagnostics and I am ready to assist you. How are you feeling today?";

pub fn run(session: Option<String>) -> Result<()> {
    let session_id = session.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let engine = ChatEngine::default();
    engine.seed_assistant(&session_id, OPENING_GREETING, Some(VisualCue::Wave));

    tracing::info!(session = %session_id, "chat session started");
    print_reply(OPENING_GREETING, Some(VisualCue::Wave));
    println!("(type 'exit' to quit)\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input == "exit" {
            break;
        }

        match engine.respond(&session_id, input) {
            Ok(reply) => print_reply(&reply.text, reply.visual),
            Err(CareError::EmptyInput) => continue,
            Err(err) => {
                tracing::warn!(error = %err, "turn rejected");
                println!("({err})");
            }
        }
    }

    Ok(())
}

fn print_reply(text: &str, visual: Option<VisualCue>) {
    println!("\ncarebot: {text}");
    if let Some(cue) = visual {
        println!("         [{}]", cue.asset_path());
    }
    println!();
}
