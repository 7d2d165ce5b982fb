use serde::Serialize;

/// Body of `POST /api/start-game`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartGameRequest {
    pub trainer_name: String,
    pub starter_choice: String,
}

/// Body of `POST /api/command`
///
/// The command string is sent verbatim, including its leading slash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRequest {
    pub command: String,
}

/// The starter choices the server accepts at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Starter {
    Charmander,
    Squirtle,
    Bulbasaur,
}

impl Starter {
    pub const ALL: [Starter; 3] = [Starter::Charmander, Starter::Squirtle, Starter::Bulbasaur];

    /// Parse a starter name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "charmander" => Some(Self::Charmander),
            "squirtle" => Some(Self::Squirtle),
            "bulbasaur" => Some(Self::Bulbasaur),
            _ => None,
        }
    }

    /// The wire value for `starter_choice`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Charmander => "charmander",
            Self::Squirtle => "squirtle",
            Self::Bulbasaur => "bulbasaur",
        }
    }
}

/// Classification of a typed command for response dispatch.
///
/// The dispatch table is closed: recognizing a new command means adding
/// a variant here and a row to the renderer's match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MyPokemon,
    MyStats,
    Hunt,
    Battle,
    Move,
    Other,
}

impl CommandKind {
    /// Classify a raw command string.
    ///
    /// `/move` matches by prefix since it carries a move number;
    /// the rest match exactly. Unrecognized commands (including
    /// `/catch` and `/evyield`, which are message-only) are `Other`.
    pub fn classify(command: &str) -> Self {
        match command {
            "/mypokemon" => Self::MyPokemon,
            "/mystats" => Self::MyStats,
            "/hunt" => Self::Hunt,
            "/battle" => Self::Battle,
            _ if command.starts_with("/move") => Self::Move,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_commands() {
        assert_eq!(CommandKind::classify("/mypokemon"), CommandKind::MyPokemon);
        assert_eq!(CommandKind::classify("/mystats"), CommandKind::MyStats);
        assert_eq!(CommandKind::classify("/hunt"), CommandKind::Hunt);
        assert_eq!(CommandKind::classify("/battle"), CommandKind::Battle);
    }

    #[test]
    fn test_classify_move_prefix() {
        assert_eq!(CommandKind::classify("/move 1"), CommandKind::Move);
        assert_eq!(CommandKind::classify("/move"), CommandKind::Move);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(CommandKind::classify("/catch"), CommandKind::Other);
        assert_eq!(CommandKind::classify("/evyield"), CommandKind::Other);
        assert_eq!(CommandKind::classify("hello"), CommandKind::Other);
    }

    #[test]
    fn test_starter_parse() {
        assert_eq!(Starter::parse("Charmander"), Some(Starter::Charmander));
        assert_eq!(Starter::parse(" squirtle "), Some(Starter::Squirtle));
        assert_eq!(Starter::parse("pikachu"), None);
    }

    #[test]
    fn test_start_game_request_serializes() {
        let request = StartGameRequest {
            trainer_name: "Ash".to_string(),
            starter_choice: Starter::Bulbasaur.as_str().to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["trainer_name"], "Ash");
        assert_eq!(json["starter_choice"], "bulbasaur");
    }
}
