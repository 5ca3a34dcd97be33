use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head position and direction, with the
    /// body laid out in a straight line behind the head
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if a position lies on any body segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Cosmetic food variant, rotated on every successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodFlavor {
    Pig,
    Elephant,
    Lion,
}

impl FoodFlavor {
    /// Next flavor in the fixed rotation
    pub fn next(self) -> Self {
        match self {
            FoodFlavor::Pig => FoodFlavor::Elephant,
            FoodFlavor::Elephant => FoodFlavor::Lion,
            FoodFlavor::Lion => FoodFlavor::Pig,
        }
    }

    /// Glyph drawn for this flavor
    pub fn glyph(self) -> &'static str {
        match self {
            FoodFlavor::Pig => "🐷",
            FoodFlavor::Elephant => "🐘",
            FoodFlavor::Lion => "🦁",
        }
    }
}

/// Difficulty mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Food stays where it spawned
    Normal,
    /// Food wanders the grid on its own slower timer
    Hard,
}

/// Complete state of one game, mutated once per tick by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction the food drifts in while in hard mode
    pub food_direction: Direction,
    pub food_flavor: FoodFlavor,
    pub grid_size: usize,
    pub score: u32,
    /// Current snake tick interval in milliseconds; shrinks as the score rises
    pub tick_ms: u64,
    pub difficulty: Difficulty,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state with the given snake and food placement
    pub fn new(
        snake: Snake,
        food: Position,
        grid_size: usize,
        tick_ms: u64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            snake,
            food,
            food_direction: Direction::Right,
            food_flavor: FoodFlavor::Pig,
            grid_size,
            score: 0,
            tick_ms,
            difficulty,
            is_alive: true,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_size as i32
            && pos.y >= 0
            && pos.y < self.grid_size as i32
    }
}
