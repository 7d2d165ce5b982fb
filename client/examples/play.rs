use std::io::{self, Write};

use anyhow::Result;
use tallgrass_client::{
    ApiClient, Entry, LOCAL_SERVER_URL, LineStyle, Phase, START_ERROR_ALERT, Session,
    SetupOutcome, Starter,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

fn print_entries(entries: &[Entry]) {
    for entry in entries {
        match entry {
            Entry::Line { text, style } => match style {
                LineStyle::Normal => println!("{text}"),
                LineStyle::Command => println!("\x1b[36m{text}\x1b[0m"),
                LineStyle::Error => println!("\x1b[31m{text}\x1b[0m"),
            },
            Entry::Sprite { url } => println!("[sprite] {url}"),
        }
    }
}

/// Read one trimmed line, or `None` once stdin reaches end of input
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| LOCAL_SERVER_URL.to_string());

    println!("Tallgrass");
    println!("=========");
    println!("Server: {base_url}\n");

    let mut session = Session::new(ApiClient::new(&base_url));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while session.phase() == Phase::Setup {
        let Some(trainer_name) = prompt(&mut lines, "Trainer name: ").await? else {
            return Ok(());
        };

        println!("Choose your starter:");
        for starter in Starter::ALL {
            println!("  - {}", starter.as_str());
        }
        let Some(choice) = prompt(&mut lines, "Starter: ").await? else {
            return Ok(());
        };

        match session
            .submit_setup(&trainer_name, Starter::parse(&choice))
            .await
        {
            SetupOutcome::Started => {}
            SetupOutcome::MissingStarter => {
                println!("Pick one of the three starters to begin.\n");
            }
            SetupOutcome::Rejected(message) => println!("{message}\n"),
            SetupOutcome::Failed => println!("{START_ERROR_ALERT}\n"),
        }
    }

    print_entries(session.terminal_mut().drain_new());
    println!("\nType commands like /hunt, /battle or /mypokemon. /quit exits.");

    while let Ok(Some(line)) = lines.next_line().await {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "/quit" || command == "/exit" {
            break;
        }

        session.run_command(command).await;
        print_entries(session.terminal_mut().drain_new());
    }

    Ok(())
}
