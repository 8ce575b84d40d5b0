use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::arc_error::ArcError;
use crate::core::geo_point::GeoPoint;
use crate::core::geodesy::{ecef_to_world, geodetic_to_ecef, local_frame};

/// Camera destination and orientation. Angles are degrees: heading clockwise from
/// north, pitch negative looking down, roll about the view direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CameraFlight {
    pub destination: GeoPoint,
    pub height: f64,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    // Seconds; zero jumps straight to the destination
    pub duration: f32,
}

impl Default for CameraFlight {
    fn default() -> Self {
        CameraFlight {
            destination: GeoPoint::new(112.0, 20.8),
            height: 300_000.0,
            heading: 30.0,
            pitch: -45.0,
            roll: 0.0,
            duration: 2.0,
        }
    }
}

impl CameraFlight {
    pub fn validate(&self) -> Result<(), ArcError> {
        self.destination.ensure_finite("camera destination")?;
        if ![self.height, self.heading, self.pitch, self.roll].iter().all(|v| v.is_finite()) {
            return Err(ArcError::invalid("camera height and angles must be finite"));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ArcError::invalid(format!("flight duration must be >= 0, got {}", self.duration)));
        }
        Ok(())
    }

    pub fn target_transform(&self, units_per_meter: f64) -> Transform {
        let GeoPoint { lon, lat } = self.destination;
        let frame = local_frame(lon, lat);
        let position = ecef_to_world(geodetic_to_ecef(lon, lat, self.height), units_per_meter);

        let (sin_h, cos_h) = (self.heading.to_radians() as f32).sin_cos();
        let (sin_p, cos_p) = (self.pitch.to_radians() as f32).sin_cos();
        let horizontal = frame.north * cos_h + frame.east * sin_h;
        let forward = (horizontal * cos_p + frame.up * sin_p).normalize();
        let camera_up = (frame.up * cos_p - horizontal * sin_p).normalize();

        let mut transform = Transform::from_translation(position).looking_to(forward, camera_up);
        transform.rotation = Quat::from_axis_angle(forward, self.roll.to_radians() as f32) * transform.rotation;
        transform
    }
}

/// In-progress camera flight, advanced by `advance_camera_flights`.
#[derive(Component, Debug, Clone)]
pub struct ActiveFlight {
    pub from: Transform,
    pub to: Transform,
    pub elapsed: f32,
    pub duration: f32,
}

impl ActiveFlight {
    pub fn new(from: Transform, to: Transform, duration: f32) -> Self {
        ActiveFlight { from, to, elapsed: 0.0, duration }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self) -> Transform {
        let s = self.progress();
        let eased = s * s * (3.0 - 2.0 * s);
        Transform {
            translation: self.from.translation.lerp(self.to.translation, eased),
            rotation: self.from.rotation.slerp(self.to.rotation, eased),
            scale: self.to.scale,
        }
    }
}

pub fn advance_camera_flights(
    mut commands: Commands,
    time: Res<Time>,
    mut flights: Query<(Entity, &mut Transform, &mut ActiveFlight)>,
) {
    for (entity, mut transform, mut flight) in flights.iter_mut() {
        flight.elapsed += time.delta_secs();
        *transform = flight.sample();

        if flight.progress() >= 1.0 {
            commands.entity(entity).remove::<ActiveFlight>();
            debug!("[Camera] flight finished at {:?}", transform.translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_down_looks_at_the_ground() {
        let flight = CameraFlight { pitch: -90.0, heading: 0.0, ..default() };
        let t = flight.target_transform(0.001);
        let toward_centre = -t.translation.normalize();
        assert!(t.forward().dot(toward_centre) > 0.99);
    }

    #[test]
    fn finished_flight_lands_on_target() {
        let to = Transform::from_xyz(1.0, 2.0, 3.0);
        let mut f = ActiveFlight::new(Transform::IDENTITY, to, 2.0);
        f.elapsed = 5.0;
        assert_eq!(f.sample().translation, to.translation);
    }
}
