use log::info;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::models::GameMode;

// Playfield in abstract pixels; the UI scales this onto terminal cells.
pub const FIELD_W: f32 = 600.0;
pub const FIELD_H: f32 = 200.0;

pub const ACTOR_X: f32 = 50.0;
pub const ACTOR_W: f32 = 20.0;
pub const ACTOR_H: f32 = 30.0;

// Per-frame physics, deliberately frame-rate-coupled: the loop runs at a
// fixed target rate and these are increments per frame, not per second.
pub const GRAVITY: f32 = 0.6;
pub const JUMP_VELOCITY: f32 = -10.0;

pub const MIN_OBSTACLE_DIM: f32 = 15.0;
pub const MAX_OBSTACLE_DIM: f32 = 40.0;
pub const MIN_SPAWN_INTERVAL_MS: u64 = 500;
pub const SPEED_STEP: f32 = 0.1;

/// Fixed per-difficulty tuning.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub initial_interval_ms: u64,
    pub interval_decrease_ms: u64,
    pub obstacle_speed: f32,
}

impl GameMode {
    pub fn tuning(self) -> Tuning {
        match self {
            GameMode::Easy => Tuning {
                initial_interval_ms: 1500,
                interval_decrease_ms: 25,
                obstacle_speed: 5.0,
            },
            GameMode::Hard => Tuning {
                initial_interval_ms: 900,
                interval_decrease_ms: 40,
                obstacle_speed: 6.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Ended,
}

#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
    pub is_jumping: bool,
}

impl Actor {
    fn grounded() -> Self {
        Actor {
            x: ACTOR_X,
            y: FIELD_H - ACTOR_H,
            width: ACTOR_W,
            height: ACTOR_H,
            velocity_y: 0.0,
            is_jumping: false,
        }
    }

    fn overlaps(&self, o: &Obstacle) -> bool {
        self.x < o.x + o.width
            && self.x + self.width > o.x
            && self.y < o.y + o.height
            && self.y + self.height > o.y
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One game session. Created on start, dropped when the player returns to
/// the board; there is no carry-over between sessions.
pub struct Game {
    pub mode: GameMode,
    pub phase: GamePhase,
    pub score: u32,
    pub spawn_interval: Duration,
    pub obstacle_speed: f32,
    pub actor: Actor,
    pub obstacles: Vec<Obstacle>,
    pub background_light: bool,
    pub actor_light: bool,
    /// Next wall-clock moment a spawn is due. Checked every loop pass,
    /// independently of the frame update.
    pub spawn_deadline: Instant,
    last_interval_step: u32,
    last_speed_step: u32,
}

impl Game {
    pub fn start(mode: GameMode, now: Instant) -> Self {
        let tuning = mode.tuning();
        info!("game started in {} mode", mode.label());
        Game {
            mode,
            phase: GamePhase::Running,
            score: 0,
            spawn_interval: Duration::from_millis(tuning.initial_interval_ms),
            obstacle_speed: tuning.obstacle_speed,
            actor: Actor::grounded(),
            obstacles: Vec::new(),
            background_light: true,
            actor_light: false,
            spawn_deadline: now + Duration::from_millis(tuning.initial_interval_ms),
            last_interval_step: 0,
            last_speed_step: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Jump only takes effect from the ground; mid-air presses are ignored.
    pub fn jump(&mut self) {
        if self.is_running() && !self.actor.is_jumping {
            self.actor.is_jumping = true;
            self.actor.velocity_y = JUMP_VELOCITY;
        }
    }

    /// One frame: integrate the jump, advance obstacles, score the ones
    /// that left the field, then test for the fatal collision.
    pub fn update(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }

        if self.actor.is_jumping {
            self.actor.y += self.actor.velocity_y;
            self.actor.velocity_y += GRAVITY;
            let ground = FIELD_H - self.actor.height;
            if self.actor.y >= ground {
                self.actor.y = ground;
                self.actor.is_jumping = false;
                self.actor.velocity_y = 0.0;
            }
        }

        for o in &mut self.obstacles {
            o.x -= self.obstacle_speed;
        }

        // Scan-remove rather than assuming the leftmost obstacle exits
        // first; each removal is worth exactly one point.
        let mut i = 0;
        while i < self.obstacles.len() {
            if self.obstacles[i].x + self.obstacles[i].width < 0.0 {
                self.obstacles.remove(i);
                self.score += 1;
                self.escalate(now);
            } else {
                i += 1;
            }
        }

        let actor = self.actor;
        if self.obstacles.iter().any(|o| actor.overlaps(o)) {
            self.end();
        }
    }

    /// Difficulty steps, evaluated once per point. The `last_*` guards keep
    /// a step from applying twice for the same score value.
    fn escalate(&mut self, now: Instant) {
        let tuning = self.mode.tuning();

        if self.score % 5 == 0 && self.score != self.last_interval_step {
            let floor = Duration::from_millis(MIN_SPAWN_INTERVAL_MS);
            let decrement = Duration::from_millis(tuning.interval_decrease_ms);
            self.spawn_interval = self.spawn_interval.saturating_sub(decrement).max(floor);
            // Restart the spawn cadence at the new interval.
            self.spawn_deadline = now + self.spawn_interval;
            self.last_interval_step = self.score;
        }

        if self.mode == GameMode::Hard
            && self.score % 10 == 0
            && self.score != self.last_speed_step
        {
            self.obstacle_speed += SPEED_STEP;
            self.last_speed_step = self.score;
        }

        if self.score % 50 == 0 {
            self.background_light = !self.background_light;
            self.actor_light = !self.actor_light;
        }
    }

    /// Timer-driven spawner: appends one obstacle at the right edge, seated
    /// on the ground line, when the deadline has passed.
    pub fn maybe_spawn(&mut self, now: Instant, rng: &mut impl Rng) {
        if !self.is_running() || now < self.spawn_deadline {
            return;
        }
        let width = rng.gen_range(MIN_OBSTACLE_DIM..MAX_OBSTACLE_DIM);
        let height = rng.gen_range(MIN_OBSTACLE_DIM..MAX_OBSTACLE_DIM);
        self.obstacles.push(Obstacle {
            x: FIELD_W,
            y: FIELD_H - height,
            width,
            height,
        });
        self.spawn_deadline = now + self.spawn_interval;
    }

    fn end(&mut self) {
        self.phase = GamePhase::Ended;
        info!("game over at {} point(s)", self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    fn exited_obstacle() -> Obstacle {
        Obstacle {
            x: -100.0,
            y: FIELD_H - 20.0,
            width: 20.0,
            height: 20.0,
        }
    }

    /// Drive the score up one point at a time by feeding already-exited
    /// obstacles through the frame update.
    fn score_points(game: &mut Game, points: u32) {
        for _ in 0..points {
            game.obstacles.push(exited_obstacle());
            game.update(Instant::now());
        }
    }

    #[test]
    fn each_exit_scores_exactly_one_point() {
        let mut game = Game::start(GameMode::Easy, Instant::now());
        game.obstacles.push(exited_obstacle());
        game.obstacles.push(exited_obstacle());
        game.update(Instant::now());
        assert_eq!(game.score, 2);
        assert!(game.obstacles.is_empty());

        // A visible obstacle scores nothing.
        game.obstacles.push(Obstacle {
            x: FIELD_W - 1.0,
            y: FIELD_H - 20.0,
            width: 20.0,
            height: 20.0,
        });
        game.update(Instant::now());
        assert_eq!(game.score, 2);
        assert_eq!(game.obstacles.len(), 1);
    }

    #[test]
    fn spawn_interval_steps_down_every_five_points() {
        let mut game = Game::start(GameMode::Hard, Instant::now());
        let tuning = GameMode::Hard.tuning();
        let initial = game.spawn_interval;

        score_points(&mut game, 4);
        assert_eq!(game.spawn_interval, initial);

        score_points(&mut game, 1);
        assert_eq!(
            game.spawn_interval,
            initial - Duration::from_millis(tuning.interval_decrease_ms)
        );

        score_points(&mut game, 5);
        assert_eq!(
            game.spawn_interval,
            initial - Duration::from_millis(2 * tuning.interval_decrease_ms)
        );
    }

    #[test]
    fn spawn_interval_never_drops_below_floor() {
        let mut game = Game::start(GameMode::Hard, Instant::now());
        score_points(&mut game, 300);
        assert_eq!(
            game.spawn_interval,
            Duration::from_millis(MIN_SPAWN_INTERVAL_MS)
        );
    }

    #[test]
    fn hard_mode_speeds_up_every_ten_points() {
        let mut game = Game::start(GameMode::Hard, Instant::now());
        let base = GameMode::Hard.tuning().obstacle_speed;

        score_points(&mut game, 9);
        assert!((game.obstacle_speed - base).abs() < f32::EPSILON);

        score_points(&mut game, 1);
        assert!((game.obstacle_speed - (base + SPEED_STEP)).abs() < 1e-4);

        score_points(&mut game, 10);
        assert!((game.obstacle_speed - (base + 2.0 * SPEED_STEP)).abs() < 1e-4);
    }

    #[test]
    fn easy_mode_speed_never_changes() {
        let mut game = Game::start(GameMode::Easy, Instant::now());
        let base = GameMode::Easy.tuning().obstacle_speed;
        score_points(&mut game, 120);
        assert!((game.obstacle_speed - base).abs() < f32::EPSILON);
    }

    #[test]
    fn palette_toggles_every_fifty_points() {
        let mut game = Game::start(GameMode::Easy, Instant::now());
        assert!(game.background_light);
        assert!(!game.actor_light);

        score_points(&mut game, 50);
        assert!(!game.background_light);
        assert!(game.actor_light);

        score_points(&mut game, 50);
        assert!(game.background_light);
        assert!(!game.actor_light);
    }

    #[test]
    fn collision_ends_the_game_and_everything_goes_inert() {
        let mut game = Game::start(GameMode::Easy, Instant::now());
        game.obstacles.push(Obstacle {
            x: ACTOR_X,
            y: FIELD_H - 30.0,
            width: 30.0,
            height: 30.0,
        });
        game.update(Instant::now());
        assert_eq!(game.phase, GamePhase::Ended);

        let score = game.score;
        let count = game.obstacles.len();

        // Neither the frame path nor the spawn path may touch state now.
        game.spawn_deadline = Instant::now();
        game.maybe_spawn(Instant::now(), &mut thread_rng());
        game.obstacles.push(exited_obstacle());
        game.update(Instant::now());
        game.jump();

        assert_eq!(game.phase, GamePhase::Ended);
        assert_eq!(game.score, score);
        assert_eq!(game.obstacles.len(), count + 1);
        assert!(!game.actor.is_jumping);
    }

    #[test]
    fn jump_only_from_the_ground() {
        let mut game = Game::start(GameMode::Easy, Instant::now());
        game.jump();
        assert!(game.actor.is_jumping);
        let v = game.actor.velocity_y;
        game.jump();
        assert_eq!(game.actor.velocity_y, v);

        // Gravity brings the actor back down and re-grounds it.
        for _ in 0..200 {
            game.update(Instant::now());
        }
        assert!(!game.actor.is_jumping);
        assert_eq!(game.actor.y, FIELD_H - ACTOR_H);
        assert_eq!(game.actor.velocity_y, 0.0);
    }

    #[test]
    fn spawner_waits_for_its_deadline() {
        let now = Instant::now();
        let mut game = Game::start(GameMode::Easy, now);
        let mut rng = thread_rng();

        game.maybe_spawn(now, &mut rng);
        assert!(game.obstacles.is_empty());

        let due = game.spawn_deadline;
        game.maybe_spawn(due, &mut rng);
        assert_eq!(game.obstacles.len(), 1);
        let o = &game.obstacles[0];
        assert_eq!(o.x, FIELD_W);
        assert_eq!(o.y, FIELD_H - o.height);
        assert!((MIN_OBSTACLE_DIM..MAX_OBSTACLE_DIM).contains(&o.width));
        assert!((MIN_OBSTACLE_DIM..MAX_OBSTACLE_DIM).contains(&o.height));
        assert_eq!(game.spawn_deadline, due + game.spawn_interval);
    }

    #[test]
    fn restart_resets_the_whole_session() {
        let mut game = Game::start(GameMode::Hard, Instant::now());
        score_points(&mut game, 55);
        game.jump();

        let fresh = Game::start(GameMode::Hard, Instant::now());
        assert_eq!(fresh.score, 0);
        assert!(fresh.obstacles.is_empty());
        assert!(!fresh.actor.is_jumping);
        assert_eq!(fresh.actor.y, FIELD_H - ACTOR_H);
        assert!(fresh.background_light);
        assert_eq!(
            fresh.spawn_interval,
            Duration::from_millis(GameMode::Hard.tuning().initial_interval_ms)
        );
    }
}
