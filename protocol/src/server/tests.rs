#[cfg(test)]
mod tests {
    use crate::server::{
        PokemonPayload, Status, Turn, decode_command_response, decode_start_game_response,
    };

    #[test]
    fn test_decode_start_game_success() {
        let body = r#"{"status":"success","message":"Welcome, Trainer Ash! Type /hunt to start catching Pokémon!"}"#;
        let response = decode_start_game_response(body).unwrap();

        assert_eq!(response.status, Status::Success);
        assert!(response.message.unwrap().starts_with("Welcome, Trainer Ash"));
        assert_eq!(response.trainer_name, None);
    }

    #[test]
    fn test_decode_start_game_existing_user() {
        let body = r#"{"status":"existing_user","trainer_name":"Ash"}"#;
        let response = decode_start_game_response(body).unwrap();

        assert_eq!(response.status, Status::ExistingUser);
        assert_eq!(response.trainer_name.as_deref(), Some("Ash"));
    }

    #[test]
    fn test_decode_unknown_status() {
        let body = r#"{"status":"error","message":"No active session"}"#;
        let response = decode_command_response(body).unwrap();

        assert_eq!(response.status, Status::Other("error".to_string()));
        assert!(!response.status.is_success());
    }

    #[test]
    fn test_decode_invalid_json() {
        let result = decode_command_response("<html>Internal Server Error</html>");

        assert!(result.is_err());
    }

    #[test]
    fn test_decode_roster_payload() {
        let body = r#"{
            "status": "success",
            "pokemon": [
                {"name": "pikachu", "level": 12, "nature": "Jolly", "moves": ["thundershock", "growl"]},
                {"name": "eevee", "level": 7, "nature": "Timid"}
            ]
        }"#;
        let response = decode_command_response(body).unwrap();

        let Some(PokemonPayload::Roster(roster)) = response.pokemon else {
            panic!("expected roster payload");
        };
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "pikachu");
        assert_eq!(roster[0].level, 12);
        assert_eq!(roster[0].moves.as_ref().unwrap().len(), 2);
        assert_eq!(roster[1].moves, None);
    }

    #[test]
    fn test_decode_wild_payload() {
        let body = r#"{
            "status": "success",
            "message": "A wild Rattata appeared!",
            "sprite_url": "https://sprites.example/19.png",
            "pokemon": {"name": "rattata", "id": 19, "base_experience": 51}
        }"#;
        let response = decode_command_response(body).unwrap();

        assert!(matches!(response.pokemon, Some(PokemonPayload::Wild(_))));
        assert_eq!(
            response.sprite_url.as_deref(),
            Some("https://sprites.example/19.png")
        );
    }

    #[test]
    fn test_decode_battle_state_ignores_extra_fields() {
        let body = r#"{
            "status": "success",
            "message": "Battle started!",
            "battle_state": {
                "turn": "player",
                "player_pokemon": {"name": "charmander", "current_hp": 20},
                "wild_pokemon": {"name": "pidgey", "current_hp": 18}
            }
        }"#;
        let response = decode_command_response(body).unwrap();

        let state = response.battle_state.unwrap();
        assert_eq!(state.turn, Turn::Player);
        assert!(state.is_player_turn());
        assert!(!response.battle_ended);
    }

    #[test]
    fn test_decode_opponent_turn() {
        let body = r#"{"status":"success","battle_state":{"turn":"wild"},"battle_ended":true}"#;
        let response = decode_command_response(body).unwrap();

        assert_eq!(response.battle_state.unwrap().turn, Turn::Opponent);
        assert!(response.battle_ended);
    }

    #[test]
    fn test_decode_missing_status_is_error() {
        let result = decode_command_response(r#"{"message":"hello"}"#);

        assert!(result.is_err());
    }
}
