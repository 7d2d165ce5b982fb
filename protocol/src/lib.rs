use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{CommandKind, CommandRequest, StartGameRequest, Starter};
pub use server::{
    BattleState, CommandResponse, PokemonPayload, PokemonSummary, StartGameResponse, Status,
    TrainerStats, Turn, decode_command_response, decode_start_game_response,
};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
