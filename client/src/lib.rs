mod api;
mod session;
mod state;

pub use api::{ApiClient, ApiError};
pub use session::{PendingCommand, START_ERROR_ALERT, Session, SetupOutcome};
pub use state::Phase;

pub use tallgrass_protocol::{CommandKind, CommandResponse, StartGameResponse, Starter, Status};
pub use tallgrass_terminal::{Entry, LineStyle, Terminal};

/// Default address of a locally running game server
pub const LOCAL_SERVER_URL: &str = "http://127.0.0.1:5000";
