// Integration tests (native) for the `dino-dash` crate.
// These tests avoid wasm-specific functionality and exercise the pure
// simulation core so they can run under `cargo test` on the host. Time is
// driven through the explicit `now_ms` tick parameter.

use dino_dash::config::GameConfig;
use dino_dash::geom::Rect;
use dino_dash::sim::{Game, Obstacle, Phase};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn ground_y() -> f64 {
    GameConfig::default().ground_y()
}

// --- Rect overlap -------------------------------------------------------------

#[test]
fn rect_overlap_basic_and_containment() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    // Containment counts as overlap in both directions.
    assert!(a.overlaps(&Rect::new(2.0, 2.0, 3.0, 3.0)));
    assert!(Rect::new(2.0, 2.0, 3.0, 3.0).overlaps(&a));
}

#[test]
fn rect_overlap_is_non_strict_on_touching_edges() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    // Right edge of `a` exactly on the left edge of `b`.
    assert!(a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
    // Bottom edge of `a` exactly on the top edge of `b`.
    assert!(a.overlaps(&Rect::new(0.0, 10.0, 5.0, 5.0)));
}

#[test]
fn rect_overlap_rejects_separated_rects() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.5, 0.0, 5.0, 5.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.5, 5.0, 5.0)));
    assert!(!Rect::new(200.0, 0.0, 5.0, 5.0).overlaps(&a));
}

// --- Player physics -----------------------------------------------------------

#[test]
fn new_game_starts_running_and_grounded() {
    let game = Game::new(GameConfig::default(), 0.0);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.score, 0);
    assert!(game.obstacles.is_empty());
    assert!(game.player.on_ground);
    assert_eq!(game.player.y + game.player.h, ground_y());
    assert_eq!(game.player.vy, 0.0);
}

#[test]
fn rising_player_gets_the_lighter_gravity() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.try_jump();
    assert!(approx(game.player.vy, -10.0));
    let y0 = game.player.y;
    game.tick(16.0);
    // Rising (vy < 0): gravity_up applies, then position integrates.
    assert!(approx(game.player.vy, -10.0 + 0.18));
    assert!(approx(game.player.y, y0 + (-10.0 + 0.18)));
    assert!(!game.player.on_ground);
}

#[test]
fn falling_player_gets_the_heavier_gravity() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    // Put the player mid-air moving downward, well above the ground.
    game.player.y = 50.0;
    game.player.vy = 5.0;
    game.player.on_ground = false;
    game.tick(16.0);
    assert!(approx(game.player.vy, 5.6));
    assert!(approx(game.player.y, 55.6));
    assert!(!game.player.on_ground);
}

#[test]
fn ground_clamp_holds_over_repeated_jump_arcs() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.set_jump_held(true);
    for i in 1..=200 {
        game.tick(i as f64 * 16.0);
        if game.player.on_ground {
            // Resting exactly on the ground line, never below it.
            assert_eq!(game.player.y + game.player.h, ground_y());
            assert_eq!(game.player.vy, 0.0);
        }
    }
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn landing_is_inelastic() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    // Dropping fast from just above the ground overshoots the line this tick.
    game.player.y = ground_y() - game.player.h - 1.0;
    game.player.vy = 8.0;
    game.player.on_ground = false;
    game.tick(16.0);
    assert_eq!(game.player.y + game.player.h, ground_y());
    assert_eq!(game.player.vy, 0.0);
    assert!(game.player.on_ground);
}

#[test]
fn jump_while_airborne_is_a_noop() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.try_jump();
    game.tick(16.0);
    let vy = game.player.vy;
    let y = game.player.y;
    game.try_jump();
    assert_eq!(game.player.vy, vy);
    assert_eq!(game.player.y, y);
    assert!(!game.player.on_ground);
}

#[test]
fn held_jump_flag_triggers_jump_on_tick() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.set_jump_held(true);
    game.tick(16.0);
    assert!(!game.player.on_ground);
    assert!(game.player.vy < 0.0);
}

// --- Collision & state machine ------------------------------------------------

#[test]
fn overlapping_obstacle_ends_the_run() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    // Overlapping x and y ranges with the grounded player at x=40.
    game.obstacles.push(Obstacle {
        x: 50.0,
        y: ground_y() - 36.0,
        w: 28.0,
        h: 36.0,
        speed: 0.0,
    });
    game.tick(100.0);
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn distant_obstacle_keeps_the_run_alive() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.obstacles.push(Obstacle {
        x: 200.0,
        y: ground_y() - 36.0,
        w: 28.0,
        h: 36.0,
        speed: 0.0,
    });
    game.tick(100.0);
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn game_over_freezes_score_and_obstacles() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.obstacles.push(Obstacle {
        x: 50.0,
        y: ground_y() - 36.0,
        w: 28.0,
        h: 36.0,
        speed: 0.0,
    });
    game.tick(100.0);
    assert_eq!(game.phase(), Phase::GameOver);
    let score = game.score;
    let obstacles = game.obstacles.clone();
    let player = game.player.clone();
    // Much later ticks must not advance a finished run.
    game.tick(50_000.0);
    game.tick(90_000.0);
    assert_eq!(game.score, score);
    assert_eq!(game.obstacles, obstacles);
    assert_eq!(game.player, player);
}

#[test]
fn jump_is_ignored_after_game_over() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.obstacles.push(Obstacle {
        x: 50.0,
        y: ground_y() - 36.0,
        w: 28.0,
        h: 36.0,
        speed: 0.0,
    });
    game.tick(100.0);
    assert_eq!(game.phase(), Phase::GameOver);
    game.try_jump();
    assert_eq!(game.player.vy, 0.0);
    assert!(game.player.on_ground);
}

// --- Restart ------------------------------------------------------------------

#[test]
fn restart_mid_run_resets_everything() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.try_jump();
    game.tick(1500.0);
    game.tick(3000.0);
    assert!(!game.obstacles.is_empty());
    assert_eq!(game.score, 3);

    game.restart(5000.0);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.score, 0);
    assert!(game.obstacles.is_empty());
    assert!(game.player.on_ground);
    assert_eq!(game.player.y + game.player.h, ground_y());
    assert_eq!(game.player.vy, 0.0);

    // Timestamps moved to "now": no immediate spawn, score counts from zero.
    game.tick(5500.0);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.score, 0);
}

#[test]
fn restart_recovers_from_game_over() {
    let mut game = Game::new(GameConfig::default(), 0.0);
    game.obstacles.push(Obstacle {
        x: 50.0,
        y: ground_y() - 36.0,
        w: 28.0,
        h: 36.0,
        speed: 0.0,
    });
    game.tick(100.0);
    assert_eq!(game.phase(), Phase::GameOver);

    game.restart(200.0);
    assert_eq!(game.phase(), Phase::Running);
    assert!(game.obstacles.is_empty());
    game.try_jump();
    assert!(!game.player.on_ground);
}

// --- Score --------------------------------------------------------------------

#[test]
fn score_is_floor_of_elapsed_seconds() {
    let mut game = Game::new(GameConfig::default(), 1000.0);
    game.tick(4500.0);
    assert_eq!(game.score, 3);
}

#[test]
fn score_stays_zero_if_clock_runs_backwards() {
    // Corrupt-looking timestamps must not produce a negative score.
    let mut game = Game::new(GameConfig::default(), 1000.0);
    game.tick(500.0);
    assert_eq!(game.score, 0);
    assert_eq!(game.phase(), Phase::Running);
}
