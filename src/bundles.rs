use bevy::prelude::*;

use crate::{
    constants::{BOARD_HEIGHT, BOARD_WIDTH, DOT_SIZE, FONT_SIZE, TEXT_COLOR},
    state::Segment,
};

/// Anything drawn on the board; cleared when the game ends.
#[derive(Component, Default)]
pub struct BoardPiece;

/// Body dot at this index of the segment list.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyDot(pub usize);

#[derive(Component)]
pub struct SnakeHead;

#[derive(Component)]
pub struct Apple;

#[derive(Component)]
pub struct ScoreLabel;

pub const DOT_Z: f32 = 1.;
pub const HEAD_Z: f32 = 2.;
pub const APPLE_Z: f32 = 0.;
pub const TEXT_Z: f32 = 3.;

/// Board space has its origin top-left with y down; world space is centred with y up.
pub fn board_point(x: f32, y: f32) -> Vec2 {
    Vec2::new(
        x - BOARD_WIDTH as f32 / 2.,
        BOARD_HEIGHT as f32 / 2. - y,
    )
}

pub fn cell_translation(cell: Segment, z: f32) -> Vec3 {
    let half = DOT_SIZE as f32 / 2.;
    board_point(cell.x as f32 + half, cell.y as f32 + half).extend(z)
}

#[derive(Bundle)]
pub struct PieceBundle {
    sprite: Sprite,
    transform: Transform,
    marker: BoardPiece,
}

impl PieceBundle {
    pub fn new(image: Handle<Image>, cell: Segment, z: f32) -> Self {
        PieceBundle {
            sprite: Sprite {
                image,
                custom_size: Some(Vec2::splat(DOT_SIZE as f32)),
                ..default()
            },
            transform: Transform::from_translation(cell_translation(cell, z)),
            marker: BoardPiece,
        }
    }
}

pub fn label(text: String, at: Vec2) -> impl Bundle {
    (
        Text2d::new(text),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Transform::from_translation(at.extend(TEXT_Z)),
    )
}
