//! Serialization of the game model.

use tictactoe_engine::{Game, Player, Position};

#[test]
fn test_game_state_survives_json() {
    let mut game = Game::new();
    game.click(Position::Center);
    game.click(Position::TopLeft);

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, game);
    assert_eq!(restored.to_move(), Player::X);
}
