// Host-side integration tests for the shared simulation engine.

mod common;

use common::{assert_bucket_invariant, DrawCommand, RecordingSurface};
use glam::DVec2;
use squares_core::*;

const FRAME_MS: f64 = 16.0;

fn sim(variant: Variant, seed: u64, width: f64, height: f64) -> Simulation {
    let mut s = Simulation::new(variant.config(), seed).expect("preset validates");
    s.rebuild(width, height);
    s
}

#[test]
fn drift_population_follows_canvas_area() {
    let mut s = sim(Variant::Gravity, 1, 800.0, 600.0);
    assert_eq!(s.particle_count(), 80);
    s.rebuild(1600.0, 1200.0);
    assert_eq!(s.particle_count(), 320);
    assert_bucket_invariant(&s);
}

#[test]
fn buckets_stay_consistent_across_many_ticks() {
    for variant in Variant::ALL {
        let mut s = sim(variant, 42, 640.0, 480.0);
        for frame in 0..600 {
            // Sweep the cursor across the canvas, lifting it now and then
            let cursor = (frame % 120 < 90).then(|| DVec2::new(frame as f64, 240.0));
            s.tick(FRAME_MS, cursor);
            assert_bucket_invariant(&s);
        }
    }
}

#[test]
fn drift_alpha_never_leaves_its_bounds() {
    let mut s = sim(Variant::Gravity, 9, 800.0, 600.0);
    let (min, max) = s.config().intensity_range();
    for _ in 0..2000 {
        s.tick(FRAME_MS, None);
        for p in s.particles() {
            assert!(p.intensity >= min && p.intensity <= max, "alpha {}", p.intensity);
        }
    }
}

#[test]
fn drifters_stay_within_wrap_margin() {
    let mut s = sim(Variant::Drift, 4, 300.0, 200.0);
    for _ in 0..3000 {
        s.tick(FRAME_MS, None);
        for p in s.particles() {
            assert!(p.position.x >= -p.size && p.position.x <= 300.0);
            assert!(p.position.y >= -p.size && p.position.y <= 200.0);
        }
    }
}

#[test]
fn absent_cursor_never_attracts() {
    // Large enough that a fixed far-off sentinel point would fall inside the radius
    let mut gravity = sim(Variant::Gravity, 17, 30_000.0, 30_000.0);
    let mut plain = sim(Variant::Drift, 17, 30_000.0, 30_000.0);
    gravity.tick(FRAME_MS, None);
    plain.tick(FRAME_MS, None);
    for p in gravity.particles() {
        let relaxed = p.origin_velocity * FRICTION;
        assert!((p.velocity - relaxed).length() < 1e-15);
    }
    assert_eq!(gravity.particles(), plain.particles());
}

#[test]
fn cursor_bends_nearby_drifters() {
    let mut with_cursor = sim(Variant::Gravity, 23, 800.0, 600.0);
    let mut without = sim(Variant::Gravity, 23, 800.0, 600.0);
    let cursor = DVec2::new(400.0, 300.0);
    with_cursor.tick(FRAME_MS, Some(cursor));
    without.tick(FRAME_MS, None);
    let moved = with_cursor
        .particles()
        .iter()
        .zip(without.particles())
        .filter(|(a, b)| a.velocity != b.velocity)
        .count();
    assert!(moved > 0, "some squares should sit within the action radius");
}

#[test]
fn flicker_grid_fills_cells_from_size_sequence() {
    let s = sim(Variant::Flicker, 2, 240.0, 240.0);
    // 10 x 10 cells of pitch 24; about half of the weighted sizes are skips
    assert!(s.particle_count() <= 100);
    assert_eq!(s.size_sequence().position(), 100);
    for p in s.particles() {
        assert!(p.size > 0.0 && p.size <= FLICKER_MAX_SIZE);
        let center = p.center();
        assert_eq!((center.x - 12.0) % 24.0, 0.0);
        assert_eq!((center.y - 12.0) % 24.0, 0.0);
    }
}

#[test]
fn size_sequence_continues_across_rebuilds() {
    let mut s = sim(Variant::Flicker, 2, 240.0, 240.0);
    let after_first = s.size_sequence().position();
    s.rebuild(240.0, 240.0);
    let total = s.size_sequence().len();
    assert_eq!(s.size_sequence().position(), (after_first + 100) % total);
}

#[test]
fn forced_dark_flicker_stays_dark() {
    let mut config = Variant::Flicker.config();
    config.flicker.chance_low_brightness = 1.0;
    let mut s = Simulation::new(config, 5).expect("valid");
    s.rebuild(480.0, 480.0);
    for _ in 0..500 {
        s.tick(FRAME_MS, None);
    }
    for p in s.particles() {
        assert_eq!(p.intensity, 0.0);
        assert_eq!(p.intensity_speed, 0.0);
        assert_eq!(p.bucket, 0);
    }
}

#[test]
fn flicker_brightness_turns_at_both_ends() {
    let mut config = Variant::Flicker.config();
    config.flicker.chance_low_brightness = 0.0;
    let mut s = Simulation::new(config, 8).expect("valid");
    s.rebuild(240.0, 240.0);
    let mut saw_rising = false;
    let mut saw_falling = false;
    for _ in 0..400 {
        s.tick(50.0, None);
        for p in s.particles() {
            saw_rising |= p.intensity_speed > 0.0;
            saw_falling |= p.intensity_speed < 0.0;
            assert!(p.bucket < INTENSITY_STEPS);
        }
    }
    assert!(saw_rising && saw_falling);
}

#[test]
fn renderer_switches_fill_once_per_bucket() {
    let s = sim(Variant::Gravity, 31, 800.0, 600.0);
    let mut surface = RecordingSurface::default();
    s.render(&mut surface);

    assert_eq!(
        surface.commands.first(),
        Some(&DrawCommand::Clear {
            width: 800.0,
            height: 600.0
        })
    );
    let buckets = s.buckets().expect("bucketed");
    assert_eq!(surface.fill_changes(), buckets.iter_non_empty().count());
    let rects = surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Rect { .. }))
        .count();
    assert_eq!(rects, s.particle_count());
}

#[test]
fn bucketed_and_direct_paint_the_same_pixels() {
    let bucketed_cfg = Variant::Gravity.config();
    let mut direct_cfg = bucketed_cfg.clone();
    direct_cfg.features.bucketed_rendering_enabled = false;

    let mut a = Simulation::new(bucketed_cfg, 77).expect("valid");
    let mut b = Simulation::new(direct_cfg, 77).expect("valid");
    a.rebuild(640.0, 480.0);
    b.rebuild(640.0, 480.0);
    for _ in 0..30 {
        a.tick(FRAME_MS, Some(DVec2::new(320.0, 240.0)));
        b.tick(FRAME_MS, Some(DVec2::new(320.0, 240.0)));
    }

    let mut sa = RecordingSurface::default();
    let mut sb = RecordingSurface::default();
    a.render(&mut sa);
    b.render(&mut sb);
    assert_eq!(sa.painted(), sb.painted());
    assert!(sa.fill_changes() <= sb.fill_changes());
}

#[test]
fn plain_drift_batches_fills_by_bucket() {
    let mut s = sim(Variant::Drift, 12, 800.0, 600.0);
    let mut surface = RecordingSurface::default();
    s.step(FRAME_MS, None, &mut surface);
    let buckets = s.buckets().expect("plain drift renders through buckets");
    assert_eq!(surface.fill_changes(), buckets.iter_non_empty().count());
    assert_bucket_invariant(&s);
}

#[test]
fn direct_draw_sets_fill_per_square() {
    let mut config = Variant::Drift.config();
    config.features.bucketed_rendering_enabled = false;
    let mut s = Simulation::new(config, 12).expect("valid");
    s.rebuild(800.0, 600.0);
    assert!(s.buckets().is_none());
    let mut surface = RecordingSurface::default();
    s.step(FRAME_MS, None, &mut surface);
    assert_eq!(surface.fill_changes(), s.particle_count());
}

#[test]
fn invalid_config_is_rejected_before_building() {
    let mut config = Variant::CursorFlicker.config();
    config.features.grid_placement_enabled = false;
    assert!(matches!(
        Simulation::new(config, 0),
        Err(ConfigError::FeatureConflict { .. })
    ));
}

#[test]
fn empty_canvas_has_no_squares() {
    let mut s = sim(Variant::Gravity, 3, 0.0, 0.0);
    assert_eq!(s.particle_count(), 0);
    s.tick(FRAME_MS, Some(DVec2::ZERO));
    let mut surface = RecordingSurface::default();
    s.render(&mut surface);
    assert_eq!(surface.commands.len(), 1);
}
