use tallgrass_protocol::{
    CommandRequest, CommandResponse, DecodeError, StartGameRequest, StartGameResponse,
    decode_command_response, decode_start_game_response,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// HTTP client for the game server's two endpoints.
///
/// Response bodies are read as untrusted text and decoded separately,
/// so a non-JSON body surfaces as `ApiError::Decode` rather than a
/// deserialization panic somewhere downstream.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `POST /api/start-game`
    pub async fn start_game(
        &self,
        request: &StartGameRequest,
    ) -> Result<StartGameResponse, ApiError> {
        let body = self
            .http
            .post(format!("{}/api/start-game", self.base_url))
            .json(request)
            .send()
            .await?
            .text()
            .await?;

        Ok(decode_start_game_response(&body)?)
    }

    /// `POST /api/command`; the command string goes over verbatim
    pub async fn run_command(&self, command: &str) -> Result<CommandResponse, ApiError> {
        let request = CommandRequest {
            command: command.to_string(),
        };
        let body = self
            .http
            .post(format!("{}/api/command", self.base_url))
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        Ok(decode_command_response(&body)?)
    }

    /// Fetch a sprite asset, verifying it actually loads
    pub async fn fetch_sprite(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
