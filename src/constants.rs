use std::time::Duration;

use bevy::prelude::Color;

use crate::state::Segment;

pub const BOARD_WIDTH: i32 = 300;
pub const BOARD_HEIGHT: i32 = 300;
pub const DOT_SIZE: i32 = 10;
/// Largest cell index an apple may be placed on, in both axes.
pub const MAX_RAND_POS: i32 = 27;

pub const TICK_DELAY: Duration = Duration::from_millis(100);

pub const INITIAL_BODY: [Segment; 3] = [
    Segment::new(30, 50),
    Segment::new(40, 50),
    Segment::new(50, 50),
];
pub const INITIAL_APPLE: Segment = Segment::new(100, 190);

pub const DOT_IMAGE: &str = "dot.png";
pub const HEAD_IMAGE: &str = "head.png";
pub const APPLE_IMAGE: &str = "apple.png";
pub const ASSET_DIR: &str = "assets";

pub const WINDOW_TITLE: &str = "Snake";
pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const SCORE_LABEL_POS: (f32, f32) = (30., 10.);
pub const FONT_SIZE: f32 = 12.;
