use bevy::color::LinearRgba;
use crate::core::path_generator::normalized_ratio;

/// Component-wise interpolation between two colours, `t` in [0, 1].
pub fn lerp_color(from: LinearRgba, to: LinearRgba, t: f32) -> LinearRgba {
    LinearRgba::new(
        from.red + t * (to.red - from.red),
        from.green + t * (to.green - from.green),
        from.blue + t * (to.blue - from.blue),
        from.alpha + t * (to.alpha - from.alpha),
    )
}

/// One colour per vertex, using the same ratio as path generation so that the
/// colour and the height of a vertex describe the same position on the arc.
pub fn gradient_colors(from: LinearRgba, to: LinearRgba, count: usize) -> Vec<LinearRgba> {
    match count {
        0 => Vec::new(),
        1 => vec![from],
        _ => (0..count)
            .map(|i| lerp_color(from, to, normalized_ratio(i, count) as f32))
            .collect(),
    }
}
