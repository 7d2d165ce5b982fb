use tallgrass_protocol::{
    CommandKind, CommandResponse, StartGameRequest, StartGameResponse, Starter, Status,
};
use tallgrass_terminal::{
    COMMAND_ERROR_LINE, INVALID_RESPONSE_LINE, LineStyle, Terminal, render_command_response,
};

use crate::api::{ApiClient, ApiError};
use crate::state::Phase;

/// Generic alert shown when setup fails before the server could answer
pub const START_ERROR_ALERT: &str = "Error starting game. Please try again.";

/// Outcome of a setup submission.
///
/// Everything except `Started` is a blocking alert for the frontend to
/// surface; the view stays on the setup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The game view is active and the welcome message is in the log
    Started,
    /// No starter was selected; nothing was sent to the server
    MissingStarter,
    /// The server rejected the submission
    Rejected(String),
    /// Network or decode failure; detail went to the trace log
    Failed,
}

/// Token for an in-flight command, held by the stale-response guard
#[derive(Debug)]
pub struct PendingCommand {
    seq: u64,
    kind: CommandKind,
}

/// One player's client session: the terminal log, the view phase, and
/// the request/response loop against the game server.
pub struct Session {
    api: ApiClient,
    terminal: Terminal,
    phase: Phase,
    seq: u64,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            terminal: Terminal::new(),
            phase: Phase::Setup,
            seq: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    /// Submit the setup form.
    ///
    /// A missing starter blocks submission client-side: no request is
    /// sent and the outcome names the missing field. On success or a
    /// recognized returning trainer the session transitions to
    /// `Phase::Playing` and the welcome message lands in the log.
    pub async fn submit_setup(
        &mut self,
        trainer_name: &str,
        starter: Option<Starter>,
    ) -> SetupOutcome {
        let Some(starter) = starter else {
            return SetupOutcome::MissingStarter;
        };

        let request = StartGameRequest {
            trainer_name: trainer_name.to_string(),
            starter_choice: starter.as_str().to_string(),
        };

        match self.api.start_game(&request).await {
            Ok(response) => self.apply_start_response(trainer_name, response),
            Err(e) => {
                tracing::error!(error = %e, "Failed to start game");
                SetupOutcome::Failed
            }
        }
    }

    fn apply_start_response(
        &mut self,
        submitted_name: &str,
        response: StartGameResponse,
    ) -> SetupOutcome {
        match response.status {
            Status::Success => {
                if let Some(message) = &response.message {
                    self.terminal.print(message, LineStyle::Normal);
                }
                self.phase = Phase::Playing;
                SetupOutcome::Started
            }
            Status::ExistingUser => {
                let name = response.trainer_name.as_deref().unwrap_or(submitted_name);
                self.terminal.print(
                    &format!("Welcome back, {name}! Your team has been loaded."),
                    LineStyle::Normal,
                );
                self.phase = Phase::Playing;
                SetupOutcome::Started
            }
            Status::Other(_) => SetupOutcome::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ),
        }
    }

    /// Echo a command into the log and reserve its sequence number
    pub fn begin_command(&mut self, command: &str) -> PendingCommand {
        self.terminal
            .print(&format!("> {command}"), LineStyle::Command);
        self.seq += 1;
        PendingCommand {
            seq: self.seq,
            kind: CommandKind::classify(command),
        }
    }

    /// Render the result of a command.
    ///
    /// A result whose command has been superseded by a later
    /// `begin_command` is dropped without rendering. Returns the sprite
    /// URL that was rendered, if any, so the caller can verify the
    /// asset loads.
    pub fn finish_command(
        &mut self,
        pending: PendingCommand,
        result: Result<CommandResponse, ApiError>,
    ) -> Option<String> {
        if pending.seq != self.seq {
            tracing::warn!(
                seq = pending.seq,
                latest = self.seq,
                "Dropping stale command response"
            );
            return None;
        }

        match result {
            Ok(response) => render_command_response(&mut self.terminal, pending.kind, &response),
            Err(ApiError::Decode(e)) => {
                tracing::error!(error = %e, "Invalid response body");
                self.terminal.print(INVALID_RESPONSE_LINE, LineStyle::Error);
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Command request failed");
                self.terminal.print(COMMAND_ERROR_LINE, LineStyle::Error);
                None
            }
        }
    }

    /// Fire a command, await its response, render it, and verify any
    /// sprite it referenced
    pub async fn run_command(&mut self, command: &str) {
        let pending = self.begin_command(command);
        let result = self.api.run_command(command).await;

        if let Some(sprite_url) = self.finish_command(pending, result)
            && self.api.fetch_sprite(&sprite_url).await.is_err()
        {
            self.terminal.sprite_failed(&sprite_url);
        }
    }
}
