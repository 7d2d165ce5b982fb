use tallgrass_protocol::{CommandKind, CommandResponse, PokemonPayload, PokemonSummary};

use crate::line::LineStyle;
use crate::terminal::Terminal;

/// Fixed line rendered when a response body fails to decode
pub const INVALID_RESPONSE_LINE: &str =
    "Error: Server returned an invalid response. Please try again.";

/// Fixed line rendered when a command request fails at the network level
pub const COMMAND_ERROR_LINE: &str = "An error occurred while processing the command";

/// Prompt appended while the battle waits on the player
pub const MOVE_PROMPT: &str = "Choose your move (type /move <number>)";

/// Render a decoded command response into the log.
///
/// Dispatch is a closed match over the command classification and which
/// payloads the response carries. Combinations not listed fall through
/// to rendering the message field only.
///
/// Returns the sprite URL that was appended, if any, so the caller can
/// verify the asset loads.
pub fn render_command_response(
    terminal: &mut Terminal,
    command: CommandKind,
    response: &CommandResponse,
) -> Option<String> {
    if !response.status.is_success() {
        let message = response.message.as_deref().unwrap_or("Unknown error");
        terminal.print(&format!("Error: {message}"), LineStyle::Error);
        return None;
    }

    // Sprites render first, whatever the command was.
    if let Some(url) = &response.sprite_url {
        terminal.push_sprite(url);
    }

    match (command, response) {
        (
            CommandKind::MyPokemon,
            CommandResponse {
                pokemon: Some(PokemonPayload::Roster(roster)),
                ..
            },
        ) => {
            for pokemon in roster {
                terminal.print(&roster_line(pokemon), LineStyle::Normal);
            }
        }
        (
            CommandKind::MyStats,
            CommandResponse {
                stats: Some(stats), ..
            },
        ) => {
            terminal.print(&format!("Trainer: {}", stats.name), LineStyle::Normal);
            terminal.print(
                &format!("PokéDollars: {}", stats.pokedollars),
                LineStyle::Normal,
            );
            terminal.print(
                &format!("Pokémon: {}", stats.pokemon_count),
                LineStyle::Normal,
            );
        }
        (
            CommandKind::Hunt,
            CommandResponse {
                pokemon: Some(_), ..
            },
        ) => {
            print_message(terminal, response);
        }
        (
            CommandKind::Battle,
            CommandResponse {
                battle_state: Some(state),
                ..
            },
        ) => {
            print_message(terminal, response);
            if state.is_player_turn() {
                terminal.print(&format!("\n{MOVE_PROMPT}"), LineStyle::Normal);
            }
        }
        (
            CommandKind::Move,
            CommandResponse {
                battle_state: Some(state),
                ..
            },
        ) => {
            print_message(terminal, response);
            if !response.battle_ended && state.is_player_turn() {
                terminal.print(&format!("\n{MOVE_PROMPT}"), LineStyle::Normal);
            }
        }
        _ => print_message(terminal, response),
    }

    response.sprite_url.clone()
}

fn print_message(terminal: &mut Terminal, response: &CommandResponse) {
    if let Some(message) = &response.message {
        terminal.print(message, LineStyle::Normal);
    }
}

/// `NAME (Lv. N) - NATURE`, with the move list appended when non-empty
fn roster_line(pokemon: &PokemonSummary) -> String {
    let mut line = format!(
        "{} (Lv. {}) - {}",
        pokemon.name.to_uppercase(),
        pokemon.level,
        pokemon.nature
    );
    if let Some(moves) = &pokemon.moves
        && !moves.is_empty()
    {
        line.push_str(&format!("  Moves: {}", moves.join(", ")));
    }
    line
}
