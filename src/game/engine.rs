use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionType, Difficulty, GameState, Position, Snake},
};
use rand::Rng;

/// How many uniform samples to try before falling back to a linear scan
/// when placing food
const MAX_FOOD_SAMPLE_ATTEMPTS: usize = 1000;

/// Information about a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the tick interval shrank this step; the caller must
    /// reschedule its timer when set
    pub speed_changed: bool,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the game has ended
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all simulation logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game state: a three-segment snake on the left half of
    /// the middle row heading right, food sampled off-snake, score zero and
    /// the tick interval back at its default
    pub fn reset(&mut self, difficulty: Difficulty) -> GameState {
        let grid = self.config.grid_size as i32;
        let head = Position::new(grid / 4, grid / 2);
        let snake = Snake::new(head, Direction::Right, self.config.initial_snake_length);

        let mut state = GameState::new(
            snake,
            head, // placeholder until the first placement below
            self.config.grid_size,
            self.config.initial_tick_ms,
            difficulty,
        );
        self.place_food(&mut state);

        state
    }

    /// Execute one tick of the snake's movement
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
            };
        }

        // Update direction, ignoring 180-degree reversals
        if let Action::Move(new_direction) = action {
            if !state.snake.direction.is_opposite(new_direction) {
                state.snake.direction = new_direction;
            }
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);
        state.snake.body.insert(0, new_head);

        // The collision scan runs on the extended body, before any tail pop,
        // so the cell the tail is about to vacate still counts as occupied
        // this tick.
        let collision = if !state.is_in_bounds(new_head) {
            Some(CollisionType::Wall)
        } else if state.snake.body[1..].contains(&new_head) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        };

        if let Some(collision_type) = collision {
            state.is_alive = false;
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision_type),
                    speed_changed: false,
                },
            };
        }

        let ate_food = new_head == state.food;
        let mut speed_changed = false;

        if ate_food {
            state.score += 1;
            self.place_food(state);

            // Every second food speeds the game up by one step, down to the
            // configured floor
            if state.score % 2 == 0 && state.tick_ms > self.config.min_tick_ms {
                state.tick_ms = state
                    .tick_ms
                    .saturating_sub(self.config.speed_step_ms)
                    .max(self.config.min_tick_ms);
                speed_changed = true;
            }
        } else {
            state.snake.body.pop();
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
                speed_changed,
            },
        }
    }

    /// Execute one tick of the hard-mode food drift
    pub fn food_step(&mut self, state: &mut GameState) {
        if state.difficulty != Difficulty::Hard || !state.is_alive {
            return;
        }

        // Occasionally wander off in a new direction
        if self.rng.gen_bool(self.config.food_turn_chance) {
            let pick = self.rng.gen_range(0..Direction::ALL.len());
            state.food_direction = Direction::ALL[pick];
        }

        Self::advance_food(state);
    }

    /// Deterministic part of the food drift: apply the current food
    /// direction, refusing to enter the snake and bouncing off grid edges
    fn advance_food(state: &mut GameState) {
        let candidate = state.food.moved_in_direction(state.food_direction);

        if state.snake.occupies(candidate) {
            state.food_direction = state.food_direction.opposite();
            return;
        }

        let max = state.grid_size as i32 - 1;
        let mut next = candidate;
        if next.x < 0 || next.x > max {
            next.x = next.x.clamp(0, max);
            state.food_direction = state.food_direction.opposite();
        }
        if next.y < 0 || next.y > max {
            next.y = next.y.clamp(0, max);
            state.food_direction = state.food_direction.opposite();
        }

        state.food = next;
    }

    /// Place food on a random cell not occupied by the snake and advance the
    /// flavor rotation.
    ///
    /// Sampling is bounded; if the snake has grown to the point where random
    /// probing keeps colliding, the first free cell in scan order is used
    /// instead. A completely full grid leaves the food where it was.
    fn place_food(&mut self, state: &mut GameState) {
        let size = state.grid_size as i32;

        for _ in 0..MAX_FOOD_SAMPLE_ATTEMPTS {
            let pos = Position::new(
                self.rng.gen_range(0..size),
                self.rng.gen_range(0..size),
            );
            if !state.snake.occupies(pos) {
                state.food = pos;
                state.food_flavor = state.food_flavor.next();
                return;
            }
        }

        if let Some(pos) = Self::first_free_cell(state) {
            state.food = pos;
            state.food_flavor = state.food_flavor.next();
        }
    }

    fn first_free_cell(state: &GameState) -> Option<Position> {
        let size = state.grid_size as i32;
        for y in 0..size {
            for x in 0..size {
                let pos = Position::new(x, y);
                if !state.snake.occupies(pos) {
                    return Some(pos);
                }
            }
        }
        None
    }
}
