//! Immutable gameplay tuning.
//!
//! Everything the simulation needs to know about the display and the game feel
//! lives here and is passed into [`Game::new`](crate::sim::Game::new) once,
//! instead of floating around as module-level constants. The defaults are the
//! shipped tuning; embedders with a differently sized canvas override the
//! display fields before constructing the game.

/// Display dimensions plus physics / obstacle tuning for one game instance.
///
/// All coordinates are canvas pixels with y growing downward, so the jump
/// velocity is negative. Speeds are pixels per tick, not per second: the
/// integration is deliberately per-frame to preserve the original game feel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Gap between the ground line and the bottom canvas edge.
    pub ground_padding: f64,
    /// Gravity applied while the player is rising (vy < 0).
    pub gravity_up: f64,
    /// Gravity applied while the player is falling. Larger than `gravity_up`
    /// on purpose: the asymmetry gives the arc a floaty apex and a snappy drop.
    pub gravity_down: f64,
    /// Initial vertical velocity of a jump; negative (upward).
    pub jump_velocity: f64,
    pub player_x: f64,
    pub player_w: f64,
    pub player_h: f64,
    pub obstacle_w: f64,
    pub obstacle_h: f64,
    /// Obstacle speed at survival time zero, pixels per tick.
    pub base_speed: f64,
    /// Hard cap on obstacle speed regardless of survival time.
    pub max_speed: f64,
    /// Speed gained per second survived; applied once at spawn time.
    pub speed_ramp_per_sec: f64,
    /// Minimum time between obstacle spawns.
    pub spawn_interval_ms: f64,
    /// How far past the left edge an obstacle may travel before it is culled.
    pub cull_margin: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 640.0,
            canvas_height: 240.0,
            ground_padding: 4.0,
            gravity_up: 0.18,
            gravity_down: 0.6,
            jump_velocity: -10.0,
            player_x: 40.0,
            player_w: 30.0,
            player_h: 24.0,
            obstacle_w: 28.0,
            obstacle_h: 36.0,
            base_speed: 2.0,
            max_speed: 7.0,
            speed_ramp_per_sec: 0.05,
            spawn_interval_ms: 1400.0,
            cull_margin: 50.0,
        }
    }
}

impl GameConfig {
    /// Fixed vertical coordinate of the floor; entities resting on it satisfy
    /// `y + h == ground_y()`.
    pub fn ground_y(&self) -> f64 {
        self.canvas_height - self.ground_padding
    }

    /// Sanity-check the tuning. All config values are internally generated, so
    /// a bad one is a programmer error and only worth a debug assertion.
    pub(crate) fn debug_validate(&self) {
        debug_assert!(self.canvas_width > 0.0 && self.canvas_height > 0.0, "empty canvas");
        debug_assert!(self.player_w > 0.0 && self.player_h > 0.0, "degenerate player size");
        debug_assert!(self.obstacle_w > 0.0 && self.obstacle_h > 0.0, "degenerate obstacle size");
        debug_assert!(self.ground_padding >= 0.0 && self.ground_padding < self.canvas_height);
        debug_assert!(self.jump_velocity < 0.0, "jump velocity must point upward (negative)");
        debug_assert!(self.gravity_up > 0.0 && self.gravity_down > 0.0);
        debug_assert!(self.base_speed >= 0.0 && self.max_speed >= self.base_speed);
        debug_assert!(self.speed_ramp_per_sec >= 0.0);
        debug_assert!(self.spawn_interval_ms > 0.0);
        debug_assert!(self.cull_margin >= 0.0);
    }
}
