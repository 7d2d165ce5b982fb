mod tests;

use crate::DecodeError;
use serde::Deserialize;

/// Outcome tag carried by every API response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    Success,
    ExistingUser,
    /// Any other status value; treated as an application-level failure
    Other(String),
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => Self::Success,
            "existing_user" => Self::ExistingUser,
            _ => Self::Other(value),
        }
    }
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Response body of `POST /api/start-game`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StartGameResponse {
    pub status: Status,

    #[serde(default)]
    pub message: Option<String>,

    /// Present when the server recognized a returning trainer
    #[serde(default)]
    pub trainer_name: Option<String>,
}

/// Response body of `POST /api/command`
///
/// Which optional payloads are present depends on the command that was
/// issued; the renderer dispatches on that combination.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandResponse {
    pub status: Status,

    #[serde(default)]
    pub message: Option<String>,

    /// Sprite to display before any other rendering
    #[serde(default)]
    pub sprite_url: Option<String>,

    #[serde(default)]
    pub pokemon: Option<PokemonPayload>,

    #[serde(default)]
    pub stats: Option<TrainerStats>,

    #[serde(default)]
    pub battle_state: Option<BattleState>,

    #[serde(default)]
    pub battle_ended: bool,
}

/// The `pokemon` field is shape-polymorphic: `/mypokemon` returns the
/// trainer's roster as a list, `/hunt` returns a single wild encounter
/// object whose exact shape only the server cares about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PokemonPayload {
    Roster(Vec<PokemonSummary>),
    Wild(serde_json::Value),
}

/// One owned pokemon as listed by `/mypokemon`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub level: u32,
    pub nature: String,

    #[serde(default)]
    pub moves: Option<Vec<String>>,
}

/// Trainer stats as reported by `/mystats`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainerStats {
    pub name: String,
    pub pokedollars: i64,
    pub pokemon_count: u32,
}

/// Battle snapshot attached to `/battle` and `/move` responses.
///
/// The server sends the full battle state; the client only needs whose
/// turn it is, unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattleState {
    pub turn: Turn,
}

impl BattleState {
    pub fn is_player_turn(&self) -> bool {
        self.turn == Turn::Player
    }
}

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Turn {
    Player,
    Opponent,
}

impl From<String> for Turn {
    fn from(value: String) -> Self {
        if value == "player" {
            Self::Player
        } else {
            Self::Opponent
        }
    }
}

/// Decode a `POST /api/start-game` response body.
///
/// The body is untrusted text; a non-JSON body is a handled error, not
/// a panic.
pub fn decode_start_game_response(body: &str) -> Result<StartGameResponse, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a `POST /api/command` response body
pub fn decode_command_response(body: &str) -> Result<CommandResponse, DecodeError> {
    Ok(serde_json::from_str(body)?)
}
