use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    format_clipboard_text, GenerateError, GenerationClient, GenerationOutcome, GenerationService,
};
use shared::{
    domain::{Tone, POPULAR_FANDOMS, TONE_OPTIONS},
    protocol::{GenerationRequest, ShipGenerationRequest},
};

#[derive(Parser, Debug)]
#[command(about = "Generate character headcanons from the command line")]
struct Args {
    #[arg(long, env = "HEADCANON_SERVER_URL", default_value = "http://127.0.0.1:8000")]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate headcanons for a single character.
    Generate {
        #[arg(long)]
        character: String,
        #[arg(long, default_value = "")]
        fandom: String,
        #[arg(long, default_value = "random")]
        tone: String,
    },
    /// Generate headcanons for a pairing.
    Ship {
        #[arg(long)]
        first: String,
        #[arg(long)]
        second: String,
        #[arg(long, default_value = "random")]
        tone: String,
    },
    Tones,
    Fandoms,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    match args.command {
        Command::Generate {
            character,
            fandom,
            tone,
        } => {
            let character = character.trim().to_string();
            anyhow::ensure!(!character.is_empty(), "character name is required");
            let client = GenerationClient::new(&args.server_url)?;
            let request = GenerationRequest::new(character, fandom.trim(), Tone::new(tone));
            let reply = client.generate(&request).await;
            print_outcome(GenerationOutcome::resolve(&request, reply))?;
        }
        Command::Ship {
            first,
            second,
            tone,
        } => {
            let client = GenerationClient::new(&args.server_url)?;
            let request = ShipGenerationRequest {
                character1: first.trim().to_string(),
                character2: second.trim().to_string(),
                tone: Tone::new(tone),
            };
            let pairing = GenerationRequest::new(
                format!("{} & {}", request.character1, request.character2),
                "",
                request.tone.clone(),
            );
            let reply = client.generate_ship(&request).await;
            print_outcome(GenerationOutcome::resolve(&pairing, reply))?;
        }
        Command::Tones => {
            for option in TONE_OPTIONS {
                println!(
                    "{} {:<10} {}",
                    option.emoji, option.value, option.description
                );
            }
        }
        Command::Fandoms => {
            for fandom in POPULAR_FANDOMS {
                println!("{fandom}");
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: GenerationOutcome) -> Result<()> {
    match outcome {
        GenerationOutcome::Generated {
            character,
            headcanons,
        } => {
            println!("{}", format_clipboard_text(&character, &headcanons));
            Ok(())
        }
        GenerationOutcome::Rejected(err) => Err(GenerateError::from(err).into()),
        GenerationOutcome::TransportFailed(detail) => {
            Err(anyhow::anyhow!(detail)).context(client_core::NETWORK_FAILURE_MESSAGE)
        }
    }
}
