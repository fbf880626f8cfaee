use bevy::log::{debug, info};
use rand::Rng;

use crate::constants::{
    BOARD_HEIGHT, BOARD_WIDTH, DOT_SIZE, INITIAL_APPLE, INITIAL_BODY, MAX_RAND_POS,
};

/// Top-left corner of one grid cell, in board units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
}

impl Segment {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn bounding_box(self) -> BoundingBox {
        BoundingBox {
            left: self.x,
            top: self.y,
            right: self.x + DOT_SIZE,
            bottom: self.y + DOT_SIZE,
        }
    }

    fn shifted(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Uniformly random cell in `0..=MAX_RAND_POS` on both axes.
    pub fn random_cell(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0..=MAX_RAND_POS) * DOT_SIZE,
            y: rng.random_range(0..=MAX_RAND_POS) * DOT_SIZE,
        }
    }
}

/// Half-open axis-aligned box; boxes that only share an edge do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Displacement of one move, in board units. Board y grows downwards.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Left => (-DOT_SIZE, 0),
            Direction::Up => (0, -DOT_SIZE),
            Direction::Right => (DOT_SIZE, 0),
            Direction::Down => (0, DOT_SIZE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Tail first, head last.
    segments: Vec<Segment>,
    /// Applied on the next advance.
    direction: Direction,
    /// Applied on the last advance.
    heading: Direction,
}

impl Snake {
    pub fn new(segments: Vec<Segment>, direction: Direction) -> Self {
        assert!(segments.len() >= 2, "a snake needs a head and a body");
        Self {
            segments,
            direction,
            heading: direction,
        }
    }

    pub fn head(&self) -> Segment {
        self.segments[self.segments.len() - 1]
    }

    pub fn body(&self) -> &[Segment] {
        &self.segments[..self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns false when `dir` would send the snake back along its own axis.
    fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.heading.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }

    fn advance(&mut self) {
        for i in 0..self.segments.len() - 1 {
            self.segments[i] = self.segments[i + 1];
        }
        let last = self.segments.len() - 1;
        self.segments[last] = self.segments[last].shifted(self.direction.step());
        self.heading = self.direction;
    }

    /// The new segment trails directly behind the head.
    fn grow(&mut self, at: Segment) {
        let head = self.segments.len() - 1;
        self.segments.insert(head, at);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Body,
    Wall,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    snake: Snake,
    apple: Segment,
    score: u32,
    alive: bool,
    collision: Option<Collision>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_parts(Snake::new(INITIAL_BODY.to_vec(), Direction::Right), INITIAL_APPLE)
    }

    pub fn from_parts(snake: Snake, apple: Segment) -> Self {
        Self {
            snake,
            apple,
            score: 0,
            alive: true,
            collision: None,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Segment {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn set_direction(&mut self, dir: Direction) {
        if self.snake.steer(dir) {
            debug!(?dir, "direction changed");
        }
    }

    pub fn advance(&mut self) {
        self.snake.advance();
    }

    pub fn relocate_apple(&mut self, rng: &mut impl Rng) {
        self.apple = Segment::random_cell(rng);
    }

    pub fn check_apple_collision(&mut self, rng: &mut impl Rng) {
        let head = self.snake.head().bounding_box();
        if !head.overlaps(&self.apple.bounding_box()) {
            return;
        }

        self.score += 1;
        self.snake.grow(self.apple);
        self.relocate_apple(rng);
        info!(score = self.score, apple = ?self.apple, "apple eaten");
    }

    pub fn check_collisions(&mut self) {
        let head = self.snake.head();
        let head_box = head.bounding_box();

        if self
            .snake
            .body()
            .iter()
            .any(|seg| seg.bounding_box().overlaps(&head_box))
        {
            self.die(Collision::Body);
        }

        if head.x < 0
            || head.y < 0
            || head.x > BOARD_WIDTH - DOT_SIZE
            || head.y > BOARD_HEIGHT - DOT_SIZE
        {
            self.die(Collision::Wall);
        }
    }

    fn die(&mut self, cause: Collision) {
        if self.alive {
            self.alive = false;
            self.collision = Some(cause);
        }
    }
}
