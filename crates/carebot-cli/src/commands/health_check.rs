//! Health-check command: profile intake, AI recommendations, follow-ups.

use anyhow::{Context, Result};
use carebot_core::UniformSelector;
use carebot_interaction::{GeminiClient, HealthCheckService, HealthProfile};
use std::io::{self, BufRead, Write};

pub fn run(name: String, age: u32, sleep_hours: f32, stress_level: u8) -> Result<()> {
    let profile = HealthProfile::new(name, age, sleep_hours, stress_level)
        .context("invalid health-check profile")?;

    let client = GeminiClient::try_from_config().context(
        "Gemini configuration missing; set CAREBOT_GEMINI_API_KEY or ~/.config/carebot/secret.json",
    )?;
    let service = HealthCheckService::new(client, Box::new(UniformSelector));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        println!(
            "Hello {}, here are your personalized health recommendations based on your profile:\n",
            profile.name
        );
        let recommendations = service.recommendations(&profile).await;
        println!("{recommendations}\n");
        println!("Ask a follow-up question about your health (or 'exit'):\n");

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            if question == "exit" {
                break;
            }

            let answer = service.ask(&profile, question).await;
            println!("\n{answer}\n");
        }

        Ok(())
    })
}
