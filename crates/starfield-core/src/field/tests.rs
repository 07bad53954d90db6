use super::*;
use crate::canvas::FrameRecorder;
use starfield_config::ProjectionMode;

const EPS: f32 = 1e-5;

fn settings(star_count: usize) -> FieldSettings {
    FieldSettings {
        star_count,
        seed: Some(42),
        ..FieldSettings::default()
    }
}

fn projector(mode: ProjectionMode) -> PerspectiveProjector {
    let settings = ProjectorSettings {
        mode,
        ..ProjectorSettings::default()
    };
    PerspectiveProjector::new(settings, 1.0)
}

fn field(star_count: usize) -> Starfield {
    Starfield::new(&settings(star_count), projector(ProjectionMode::Gpu))
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn spawns_requested_star_count_with_stable_slots() {
    let field = field(64);
    assert_eq!(field.len(), 64);
    assert!(!field.is_empty());
    for (i, star) in field.stars().iter().enumerate() {
        assert_eq!(star.slot(), i);
    }
}

#[test]
fn same_seed_same_field() {
    let a = field(32);
    let b = field(32);
    assert_eq!(a.seed(), 42);
    for (sa, sb) in a.stars().iter().zip(b.stars()) {
        assert_eq!(sa.center(), sb.center());
        assert_eq!(sa.color(), sb.color());
    }
}

#[test]
fn from_config_uses_window_aspect() {
    let mut config = StarfieldConfig::default();
    config.window.width = 800;
    config.window.height = 400;
    config.field.star_count = 3;
    config.field.seed = Some(1);
    let field = Starfield::from_config(&config);
    assert_eq!(field.len(), 3);
    assert!((field.projector().aspect() - 2.0).abs() < EPS);
}

#[test]
fn initial_state_is_cruising_with_given_velocity() {
    let mut s = settings(1);
    s.initial_velocity = Position::point(0.0, 0.0, -0.05);
    let field = Starfield::new(&s, projector(ProjectionMode::Gpu));
    assert_eq!(field.state(), DriveState::Cruising);
    assert!((field.velocity().z + 0.05).abs() < EPS);
}

// =============================================================================
// Deceleration
// =============================================================================

#[test]
fn deceleration_decays_geometrically_then_stops() {
    let mut field = field(0);
    field.set_velocity(Position::point(3.0, 0.0, 4.0));
    field.begin_deceleration();
    assert_eq!(field.state(), DriveState::Decelerating);

    let mut expected = 5.0_f32;
    let mut steps = 0;
    while field.state() == DriveState::Decelerating {
        field.advance_drive();
        steps += 1;
        if field.state() == DriveState::Decelerating {
            expected *= 0.9;
            assert!((field.speed() - expected).abs() < 1e-3 * expected.max(1e-2));
        }
        assert!(steps < 1000, "deceleration never finished");
    }

    assert_eq!(field.velocity(), Position::point(0.0, 0.0, 0.0));
    assert!(expected < 0.01);
    // 5 · 0.9^k first drops below 0.01 at k = 59
    assert_eq!(steps, 60);
}

#[test]
fn begin_deceleration_is_idempotent() {
    let mut field = field(0);
    field.set_velocity(Position::point(0.0, 0.0, 1.0));
    field.begin_deceleration();
    field.advance_drive();
    field.begin_deceleration();
    assert_eq!(field.state(), DriveState::Decelerating);
    assert!((field.speed() - 0.9).abs() < EPS);
}

#[test]
fn cruising_leaves_velocity_alone() {
    let mut field = field(0);
    field.set_velocity(Position::point(0.01, 0.0, -0.02));
    field.advance_drive();
    assert_eq!(field.velocity(), Position::point(0.01, 0.0, -0.02));
}

#[test]
fn decelerating_from_rest_stops_immediately() {
    let mut field = field(0);
    field.begin_deceleration();
    field.advance_drive();
    assert_eq!(field.state(), DriveState::Cruising);
}

// =============================================================================
// Tick
// =============================================================================

#[test]
fn tick_draws_every_star_in_gpu_mode() {
    let mut field = field(50);
    let mut canvas = FrameRecorder::new();
    let stats = field.tick(1.0, &mut canvas);
    assert_eq!(stats.drawn, 50);
    assert_eq!(stats.culled, 0);
    assert_eq!(canvas.draws().len(), 50);
}

#[test]
fn tick_culls_behind_camera_in_cpu_mode() {
    let mut field = Starfield::new(&settings(200), projector(ProjectionMode::Cpu));
    let behind = field
        .stars()
        .iter()
        .filter(|s| s.center().z < field.projector().near())
        .count();

    let mut canvas = FrameRecorder::new();
    let stats = field.tick(1.0, &mut canvas);
    assert_eq!(stats.drawn + stats.culled, 200);
    assert_eq!(stats.culled, behind);
    assert_eq!(canvas.draws().len(), stats.drawn);
}

#[test]
fn stars_stay_in_bounds_over_many_ticks() {
    let mut field = field(100);
    field.set_velocity(Position::point(0.05, -0.05, -0.1));
    let mut canvas = FrameRecorder::new();
    let drift = field.speed();

    let mut total = FrameStats::default();
    for _ in 0..500 {
        canvas.clear();
        let stats = field.tick(1.0, &mut canvas);
        total.accumulate(&stats);
        for star in field.stars() {
            let c = star.center();
            assert!(c.x.abs() <= 2.5 + drift);
            assert!(c.y.abs() <= 2.5 + drift);
            assert!(c.z.abs() <= 5.0 + drift);
        }
    }
    assert!(total.recycled > 0);
}

#[test]
fn fov_follows_speed() {
    let mut field = field(1);
    let mut canvas = FrameRecorder::new();
    field.tick(1.0, &mut canvas);
    assert!((field.projector().fov() - 45.0).abs() < EPS);

    field.set_velocity(Position::point(0.0, 0.0, -0.1));
    field.tick(1.0, &mut canvas);
    assert!(field.projector().fov() > 45.0);
}

// =============================================================================
// Rotation and resize
// =============================================================================

#[test]
fn zero_rotations_are_identities() {
    let mut field = field(16);
    let before: Vec<_> = field.stars().iter().map(|s| s.center()).collect();
    field.rotate_around_x(0.0);
    field.rotate_around_y(0.0);
    field.rotate_around_z(0.0);
    for (star, c) in field.stars().iter().zip(&before) {
        assert!(star.center().approx_eq(c, EPS));
    }
}

#[test]
fn full_turn_returns_home() {
    let mut field = field(8);
    let before: Vec<_> = field.stars().iter().map(|s| s.center()).collect();
    for _ in 0..4 {
        field.rotate_around_y(90.0);
    }
    for (star, c) in field.stars().iter().zip(&before) {
        assert!(star.center().approx_eq(c, 1e-4));
    }
}

#[test]
fn resize_all_counts_accepting_stars() {
    let mut field = field(10);
    assert_eq!(field.resize_all(0.0005), 10);
    assert_eq!(field.resize_all(-1.0), 0);
    assert_eq!(field.resize_all(-0.0005), 10);
    for star in field.stars() {
        assert!((star.radius() - 0.01).abs() < EPS);
    }
}

#[test]
fn set_viewport_updates_projector() {
    let mut field = field(0);
    field.set_viewport(1920, 1080);
    assert!((field.projector().aspect() - 1920.0 / 1080.0).abs() < EPS);
}
