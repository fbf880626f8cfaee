use bevy::prelude::*;

use crate::{
    assets::SnakeImages,
    bundles::{
        APPLE_Z, Apple, BoardPiece, BodyDot, DOT_Z, HEAD_Z, PieceBundle, ScoreLabel, SnakeHead,
        board_point, cell_translation, label,
    },
    constants::{BOARD_HEIGHT, BOARD_WIDTH, SCORE_LABEL_POS},
    game_loop::GameLoop,
};

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn game_over_text(score: u32) -> String {
    format!("Game Over with score {score}")
}

pub fn spawn_score_label(mut commands: Commands) {
    let (x, y) = SCORE_LABEL_POS;
    commands.spawn((label(score_text(0), board_point(x, y)), ScoreLabel, BoardPiece));
}

pub fn render_score(game: Res<GameLoop>, mut labels: Query<&mut Text2d, With<ScoreLabel>>) {
    for mut text in labels.iter_mut() {
        **text = score_text(game.frame().score);
    }
}

/// Moves sprites onto the current frame, spawning the ones that don't exist yet.
pub fn render_board(
    mut commands: Commands,
    game: Res<GameLoop>,
    images: Res<SnakeImages>,
    mut dots: Query<(&BodyDot, &mut Transform), (Without<SnakeHead>, Without<Apple>)>,
    mut heads: Query<&mut Transform, (With<SnakeHead>, Without<BodyDot>, Without<Apple>)>,
    mut apples: Query<&mut Transform, (With<Apple>, Without<BodyDot>, Without<SnakeHead>)>,
) {
    let frame = game.frame();
    if !frame.alive {
        return;
    }
    let Some((head, body)) = frame.segments.split_last() else {
        return;
    };

    let mut drawn = 0;
    for (dot, mut transform) in dots.iter_mut() {
        if let Some(cell) = body.get(dot.0) {
            transform.translation = cell_translation(*cell, DOT_Z);
        }
        drawn += 1;
    }
    for (i, cell) in body.iter().enumerate().skip(drawn) {
        commands.spawn((PieceBundle::new(images.dot.clone(), *cell, DOT_Z), BodyDot(i)));
    }

    match heads.single_mut() {
        Ok(mut transform) => transform.translation = cell_translation(*head, HEAD_Z),
        Err(_) => {
            commands.spawn((PieceBundle::new(images.head.clone(), *head, HEAD_Z), SnakeHead));
        }
    }

    match apples.single_mut() {
        Ok(mut transform) => transform.translation = cell_translation(frame.apple, APPLE_Z),
        Err(_) => {
            commands.spawn((PieceBundle::new(images.apple.clone(), frame.apple, APPLE_Z), Apple));
        }
    }
}

pub fn show_game_over(
    mut commands: Commands,
    game: Res<GameLoop>,
    pieces: Query<Entity, With<BoardPiece>>,
) {
    for ent in pieces.iter() {
        commands.entity(ent).despawn();
    }

    let centre = board_point(BOARD_WIDTH as f32 / 2., BOARD_HEIGHT as f32 / 2.);
    commands.spawn(label(game_over_text(game.frame().score), centre));
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::state::{Direction, GameState, Segment, Snake};

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(GameLoop::with_rng(StdRng::seed_from_u64(0)));
        world.insert_resource(SnakeImages {
            dot: Handle::default(),
            head: Handle::default(),
            apple: Handle::default(),
        });
        world
    }

    fn dot_cells(world: &mut World) -> Vec<(usize, Vec3)> {
        let mut cells = world
            .query::<(&BodyDot, &Transform)>()
            .iter(world)
            .map(|(dot, t)| (dot.0, t.translation))
            .collect::<Vec<_>>();
        cells.sort_by_key(|(i, _)| *i);
        cells
    }

    fn translation_of<C: Component>(world: &mut World) -> Vec3 {
        world
            .query_filtered::<&Transform, With<C>>()
            .single(world)
            .map(|t| t.translation)
            .unwrap()
    }

    #[test]
    fn first_render_spawns_every_piece() {
        let mut world = world();
        world.run_system_once(render_board).unwrap();

        let dots = dot_cells(&mut world);
        assert_eq!(
            dots,
            vec![
                (0, cell_translation(Segment::new(30, 50), DOT_Z)),
                (1, cell_translation(Segment::new(40, 50), DOT_Z)),
            ]
        );
        assert_eq!(
            translation_of::<SnakeHead>(&mut world),
            cell_translation(Segment::new(50, 50), HEAD_Z)
        );
        assert_eq!(
            translation_of::<Apple>(&mut world),
            cell_translation(Segment::new(100, 190), APPLE_Z)
        );
    }

    #[test]
    fn later_renders_move_existing_sprites() {
        let mut world = world();
        world.run_system_once(render_board).unwrap();
        world.resource_mut::<GameLoop>().tick();
        world.run_system_once(render_board).unwrap();

        assert_eq!(world.query::<&BoardPiece>().iter(&world).count(), 4);
        assert_eq!(
            translation_of::<SnakeHead>(&mut world),
            cell_translation(Segment::new(60, 50), HEAD_Z)
        );
        assert_eq!(dot_cells(&mut world)[0].1, cell_translation(Segment::new(40, 50), DOT_Z));
    }

    #[test]
    fn dead_snake_is_not_redrawn() {
        let mut world = world();
        world.run_system_once(render_board).unwrap();

        let snake = Snake::new(
            vec![Segment::new(0, 50), Segment::new(-10, 50)],
            Direction::Left,
        );
        let mut game = GameLoop::from_state(
            GameState::from_parts(snake, Segment::new(0, 0)),
            StdRng::seed_from_u64(0),
        );
        game.tick();
        world.insert_resource(game);
        world.run_system_once(render_board).unwrap();

        assert_eq!(
            translation_of::<SnakeHead>(&mut world),
            cell_translation(Segment::new(50, 50), HEAD_Z)
        );
        assert_eq!(world.query::<&BodyDot>().iter(&world).count(), 2);
    }

    #[test]
    fn score_label_tracks_score() {
        let mut world = world();
        world.run_system_once(spawn_score_label).unwrap();
        world.run_system_once(render_score).unwrap();

        let text = world
            .query_filtered::<&Text2d, With<ScoreLabel>>()
            .single(&world)
            .map(|text| text.0.clone())
            .unwrap();
        assert_eq!(text, "Score: 0");
    }

    #[test]
    fn game_over_clears_the_board() {
        let mut world = world();
        world.run_system_once(spawn_score_label).unwrap();
        world.run_system_once(render_board).unwrap();
        world.run_system_once(show_game_over).unwrap();

        assert_eq!(world.query::<&BoardPiece>().iter(&world).count(), 0);
        let texts = world
            .query::<&Text2d>()
            .iter(&world)
            .map(|t| t.0.clone())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["Game Over with score 0".to_string()]);
    }
}
