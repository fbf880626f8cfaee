use bevy::prelude::*;

use crate::{game_loop::GameLoop, state::Direction};

pub fn direction_for(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Direction::Right),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Direction::Up),
        _ => None,
    }
}

/// At most one turn per frame; simultaneous presses resolve left, right, down, up.
pub fn snake_movement_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut game: ResMut<GameLoop>) {
    let pressed = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ]
    .into_iter()
    .find(|dir| {
        keyboard_input
            .get_just_pressed()
            .any(|key| direction_for(*key) == Some(*dir))
    });

    if let Some(dir) = pressed {
        game.on_key(dir);
    }
}
