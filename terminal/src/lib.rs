mod dispatch;
mod line;
mod terminal;

pub use dispatch::{
    COMMAND_ERROR_LINE, INVALID_RESPONSE_LINE, MOVE_PROMPT, render_command_response,
};
pub use line::{Entry, LineStyle};
pub use terminal::{SPRITE_ERROR_LINE, Terminal};
