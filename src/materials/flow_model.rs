use std::f32::consts::TAU;
use bevy::color::LinearRgba;
use bevy::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use crate::core::arc_error::ArcError;

// Must match `SPEED_STEP` in assets/shaders/flow_line.wgsl.
pub const SPEED_STEP: f32 = 0.01;
// Weight of the core highlight added on top of the base colour.
pub const CORE_INTENSITY: f32 = 0.8;

/// Tunables of the flowing-light material. Sizes are fractions of the line
/// length (head/tail/core) or width (widthoffset).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FlowMaterialParams {
    pub color: LinearRgba,
    pub speed: f32,
    pub headsize: f32,
    pub tailsize: f32,
    pub widthoffset: f32,
    pub coresize: f32,
}

impl Default for FlowMaterialParams {
    fn default() -> Self {
        FlowMaterialParams {
            color: LinearRgba::new(0.0, 1.0, 0.0, 0.5),
            speed: 2.0,
            headsize: 0.05,
            tailsize: 0.5,
            widthoffset: 0.1,
            coresize: 0.05,
        }
    }
}

impl FlowMaterialParams {
    pub fn validate(&self) -> Result<(), ArcError> {
        let c = self.color;
        if [c.red, c.green, c.blue, c.alpha, self.speed].iter().any(|v| !v.is_finite()) {
            return Err(ArcError::invalid("flow colour and speed must be finite"));
        }
        for (name, value) in [("headsize", self.headsize), ("tailsize", self.tailsize), ("coresize", self.coresize)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ArcError::invalid(format!("{} must be in (0, 1], got {}", name, value)));
            }
        }
        // The core pass doubles the width offset; both bands must stay below the centre line.
        if !(self.widthoffset >= 0.0 && self.widthoffset < 0.25) {
            return Err(ArcError::invalid(format!(
                "widthoffset must be in [0, 0.25), got {}",
                self.widthoffset
            )));
        }
        Ok(())
    }

    /// Frames needed for the phase to complete one full turn.
    pub fn period_frames(&self) -> f32 {
        TAU / (SPEED_STEP * self.speed)
    }
}

/// Hermite smoothstep. Unlike the WGSL builtin it is well defined for `edge0 > edge1`,
/// which the falling edges of the light window rely on.
pub fn window_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Where the light head sits along the line (0 = start, 1 = end) at `frame`.
pub fn head_position(frame: f32, params: &FlowMaterialParams) -> f32 {
    let phase = frame * SPEED_STEP * params.speed;
    if phase.sin() < 0.0 {
        phase.cos() + 1.0 - params.tailsize
    } else {
        -phase.cos() + 1.0 - params.tailsize
    }
}

/// Visibility of the light at line coordinate `st` (x along the line, y across it).
pub fn draw_light(x_pos: f32, st: Vec2, head_offset: f32, tail_offset: f32, width_offset: f32) -> f32 {
    let along = window_step(x_pos + head_offset, x_pos, st.x) - window_step(x_pos, x_pos - tail_offset, st.x);
    let across = window_step(width_offset, 0.5, st.y) - window_step(0.5, 1.0 - width_offset, st.y);
    along * across
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSample {
    pub head: f32,
    pub rgb: Vec3,
    pub alpha: f32,
}

/// CPU mirror of the fragment shader, one pixel at a time.
pub fn evaluate_flow(frame: f32, st: Vec2, params: &FlowMaterialParams) -> FlowSample {
    let head = head_position(frame, params);
    let glow = draw_light(head, st, params.headsize, params.tailsize, params.widthoffset);
    let core = draw_light(head, st, params.coresize, params.coresize * 2.0, params.widthoffset * 2.0);

    let base = Vec3::new(params.color.red, params.color.green, params.color.blue);
    FlowSample {
        head,
        rgb: base + Vec3::splat(core * core * CORE_INTENSITY),
        alpha: glow * glow * glow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_step_handles_reversed_edges() {
        assert_eq!(window_step(1.0, 0.0, 1.5), 0.0);
        assert_eq!(window_step(1.0, 0.0, -0.5), 1.0);
        assert!((window_step(1.0, 0.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn light_is_brightest_at_head_centre() {
        let p = FlowMaterialParams::default();
        let v = draw_light(0.5, Vec2::new(0.5, 0.5), p.headsize, p.tailsize, p.widthoffset);
        assert!((v - 1.0).abs() < 1e-6);
    }
}
