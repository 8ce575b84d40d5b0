use approx::assert_relative_eq;
use arc_flow::materials::flow_model::{draw_light, evaluate_flow, head_position, FlowMaterialParams, SPEED_STEP};
use arc_flow::ArcError;
use bevy::color::LinearRgba;
use bevy::math::Vec2;

#[test]
fn defaults_match_documented_values() {
    let p = FlowMaterialParams::default();
    assert_eq!(p.color, LinearRgba::new(0.0, 1.0, 0.0, 0.5));
    assert_eq!(p.speed, 2.0);
    assert_eq!(p.headsize, 0.05);
    assert_eq!(p.tailsize, 0.5);
    assert_eq!(p.widthoffset, 0.1);
    assert_eq!(p.coresize, 0.05);
    assert!(p.validate().is_ok());
}

#[test]
fn head_stays_bounded_for_many_frames() {
    let p = FlowMaterialParams::default();
    for frame in 0..100_000u32 {
        let x = head_position(frame as f32, &p);
        assert!(x.is_finite());
        assert!(x >= -p.tailsize - 1e-4, "frame {} head {}", frame, x);
        assert!(x <= 2.0 - p.tailsize + 1e-4, "frame {} head {}", frame, x);
    }
}

#[test]
fn head_repeats_after_one_period() {
    for speed in [0.5f32, 1.0, 2.0, 3.0] {
        let p = FlowMaterialParams { speed, ..Default::default() };
        let period = p.period_frames();
        assert_relative_eq!(period, std::f32::consts::TAU / (SPEED_STEP * speed));
        for frame in [1.0f32, 17.0, 40.5, 90.0] {
            let a = head_position(frame, &p);
            let b = head_position(frame + period, &p);
            assert!((a - b).abs() < 1e-3, "speed {} frame {}: {} vs {}", speed, frame, a, b);
        }
    }
}

#[test]
fn head_starts_behind_the_line_and_sweeps_forward() {
    let p = FlowMaterialParams::default();
    assert_relative_eq!(head_position(0.0, &p), -p.tailsize);
    let quarter = p.period_frames() / 4.0;
    assert_relative_eq!(head_position(quarter, &p), 1.0 - p.tailsize, epsilon = 1e-4);
    assert!(head_position(quarter * 0.5, &p) < head_position(quarter * 1.5, &p));
}

#[test]
fn light_vanishes_outside_its_window() {
    let p = FlowMaterialParams::default();
    // Ahead of the head
    assert_eq!(draw_light(0.3, Vec2::new(0.3 + p.headsize + 0.01, 0.5), p.headsize, p.tailsize, p.widthoffset), 0.0);
    // Behind the tail
    assert_eq!(draw_light(0.8, Vec2::new(0.8 - p.tailsize - 0.01, 0.5), p.headsize, p.tailsize, p.widthoffset), 0.0);
    // Outside the width band
    assert_eq!(draw_light(0.5, Vec2::new(0.5, 0.05), p.headsize, p.tailsize, p.widthoffset), 0.0);
    assert_eq!(draw_light(0.5, Vec2::new(0.5, 0.95), p.headsize, p.tailsize, p.widthoffset), 0.0);
}

#[test]
fn light_values_stay_in_unit_range() {
    let p = FlowMaterialParams::default();
    for xi in 0..=20 {
        for yi in 0..=20 {
            let st = Vec2::new(xi as f32 / 20.0, yi as f32 / 20.0);
            let v = draw_light(0.4, st, p.headsize, p.tailsize, p.widthoffset);
            assert!((0.0..=1.0 + 1e-6).contains(&v), "st {:?} -> {}", st, v);
        }
    }
}

#[test]
fn pixel_at_head_is_opaque_and_highlighted() {
    let p = FlowMaterialParams::default();
    let frame = p.period_frames() / 4.0;
    let sample = evaluate_flow(frame, Vec2::new(1.0 - p.tailsize, 0.5), &p);
    assert_relative_eq!(sample.alpha, 1.0, epsilon = 1e-3);
    // Base green plus the full core highlight on every channel
    assert_relative_eq!(sample.rgb.x, 0.8, epsilon = 1e-3);
    assert_relative_eq!(sample.rgb.y, 1.8, epsilon = 1e-3);
}

#[test]
fn evaluation_is_a_pure_function_of_frame_and_params() {
    let p = FlowMaterialParams::default();
    let st = Vec2::new(0.3, 0.45);
    assert_eq!(evaluate_flow(1234.0, st, &p), evaluate_flow(1234.0, st, &p));
}

#[test]
fn invalid_params_are_rejected() {
    let cases = [
        FlowMaterialParams { headsize: 0.0, ..Default::default() },
        FlowMaterialParams { tailsize: 1.5, ..Default::default() },
        FlowMaterialParams { coresize: f32::NAN, ..Default::default() },
        FlowMaterialParams { widthoffset: 0.3, ..Default::default() },
        FlowMaterialParams { speed: f32::INFINITY, ..Default::default() },
    ];
    for p in cases {
        assert!(matches!(p.validate(), Err(ArcError::InvalidArgument(_))), "{:?}", p);
    }
}
