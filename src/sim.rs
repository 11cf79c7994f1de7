//! Simulation core: player physics, obstacle lifecycle, and the run/game-over
//! state machine.
//!
//! This module is pure Rust with no browser dependencies. Time enters only
//! through the explicit `now_ms` parameter of [`Game::tick`] (the rAF
//! timestamp in the browser, any monotonic millisecond value in tests), which
//! keeps every run deterministic for a given tick sequence. Gravity and speeds
//! are per-tick quantities, not scaled by a frame delta; see the config docs.

use crate::config::GameConfig;
use crate::geom::Rect;

// --- Entities ----------------------------------------------------------------

/// The player-controlled rectangle. `x`, `w` and `h` never change after
/// construction; `y` and `vy` are owned by the physics step and the jump
/// operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub vy: f64,
    /// True only while resting on the ground line; gates the jump.
    pub on_ground: bool,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// One obstacle. Speed is fixed at spawn time from the survival-time ramp, so
/// later spawns are faster while obstacles already on screen keep their pace.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub speed: f64,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

// --- State machine -----------------------------------------------------------

/// Run phase. `GameOver` is terminal except for [`Game::restart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Authoritative game state, exclusively owned by whoever drives the tick
/// loop. Renderers read it, input adapters poke it through the guarded
/// operations, and nothing else mutates it.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    pub player: Player,
    /// Insertion order is spawn order; the collision scan only iterates.
    pub obstacles: Vec<Obstacle>,
    /// Whole seconds survived; frozen once the phase leaves `Running`.
    pub score: u32,
    phase: Phase,
    started_at_ms: f64,
    last_spawn_ms: f64,
    /// Input intent flag: while true, each tick attempts a jump. Set and
    /// cleared by the input adapter on key down/up; deliberately not reset by
    /// `restart` since a key can stay physically held across runs.
    jump_held: bool,
}

impl Game {
    pub fn new(config: GameConfig, now_ms: f64) -> Self {
        config.debug_validate();
        let mut game = Self {
            player: Player {
                x: config.player_x,
                y: 0.0,
                w: config.player_w,
                h: config.player_h,
                vy: 0.0,
                on_ground: true,
            },
            obstacles: Vec::new(),
            score: 0,
            phase: Phase::Running,
            started_at_ms: now_ms,
            last_spawn_ms: now_ms,
            jump_held: false,
            config,
        };
        game.restart(now_ms);
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Reset everything to a fresh run. Valid in any phase; the user restart
    /// intent is unconditional.
    pub fn restart(&mut self, now_ms: f64) {
        let ground_y = self.config.ground_y();
        self.player.y = ground_y - self.player.h;
        self.player.vy = 0.0;
        self.player.on_ground = true;
        self.obstacles.clear();
        self.score = 0;
        self.phase = Phase::Running;
        self.started_at_ms = now_ms;
        self.last_spawn_ms = now_ms;
    }

    /// Jump if grounded and the run is live; otherwise a silent no-op, so
    /// input adapters may call this at any time without checking state.
    pub fn try_jump(&mut self) {
        if self.player.on_ground && self.phase == Phase::Running {
            self.player.vy = self.config.jump_velocity;
            self.player.on_ground = false;
        }
    }

    /// Edge-triggering happens through the `on_ground` guard in `try_jump`,
    /// so holding the key simply re-jumps on the first grounded tick.
    pub fn set_jump_held(&mut self, held: bool) {
        self.jump_held = held;
    }

    /// Advance the simulation by one frame. No-op once the run is over, which
    /// is also what freezes the score and the field of obstacles.
    pub fn tick(&mut self, now_ms: f64) {
        if self.phase != Phase::Running {
            return;
        }

        if self.jump_held {
            self.try_jump();
        }

        // Player physics: asymmetric gravity, then integrate.
        if self.player.vy < 0.0 {
            self.player.vy += self.config.gravity_up;
        } else {
            self.player.vy += self.config.gravity_down;
        }
        self.player.y += self.player.vy;

        // Inelastic ground clamp.
        let ground_y = self.config.ground_y();
        if self.player.y + self.player.h >= ground_y {
            self.player.y = ground_y - self.player.h;
            self.player.vy = 0.0;
            self.player.on_ground = true;
        }

        // At most one spawn per tick.
        if now_ms - self.last_spawn_ms > self.config.spawn_interval_ms {
            self.spawn_obstacle(now_ms);
            self.last_spawn_ms = now_ms;
        }

        // Advance obstacles (including one spawned this tick) and cull those
        // fully past the off-screen margin.
        for o in &mut self.obstacles {
            o.x -= o.speed;
        }
        let cull_x = -self.config.cull_margin;
        self.obstacles.retain(|o| o.x + o.w >= cull_x);

        self.score = self.elapsed_secs(now_ms) as u32;

        // Loss condition: any overlap ends the run. First hit short-circuits.
        let player_rect = self.player.rect();
        if self.obstacles.iter().any(|o| player_rect.overlaps(&o.rect())) {
            self.phase = Phase::GameOver;
        }
    }

    fn elapsed_secs(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_at_ms) / 1000.0).max(0.0)
    }

    fn spawn_obstacle(&mut self, now_ms: f64) {
        let c = &self.config;
        let speed = c
            .max_speed
            .min(c.base_speed + self.elapsed_secs(now_ms) * c.speed_ramp_per_sec);
        self.obstacles.push(Obstacle {
            x: c.canvas_width + c.obstacle_w,
            y: c.ground_y() - c.obstacle_h,
            w: c.obstacle_w,
            h: c.obstacle_h,
            speed,
        });
    }
}
