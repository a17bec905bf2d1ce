//! Orbit camera around the globe center.
//!
//! Input systems write the desired state to [`CameraTarget`]; each frame
//! [`smooth_camera_to_target`] lerps [`OrbitCamera`] toward it using
//! frame-rate independent exponential interpolation:
//!
//!   `value += (target - value) * (1 - exp(-speed * dt))`
//!
//! which gives the damped drag-to-orbit feel without any drift or frame-rate
//! dependency. [`apply_orbit_camera`] then writes the actual transform.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

const START_DISTANCE: f32 = 30.0;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 12.0;
const MAX_DISTANCE: f32 = 80.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // keep away from the poles
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Smoothing speed (higher = snappier). 8.0 gives ~0.125 per frame at 60fps.
const SMOOTHING_SPEED: f32 = 8.0;

/// Orbital camera model: the camera orbits the globe center at the origin.
#[derive(Resource, Clone, Copy)]
pub struct OrbitCamera {
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped to ±MAX_PITCH)
    pub pitch: f32,
    /// Distance from the origin
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: START_DISTANCE,
        }
    }
}

/// The desired camera state that input systems write to. `OrbitCamera` is
/// the actual state applied to the camera transform; the smoothing system
/// bridges the gap each frame.
#[derive(Resource, Clone, Copy)]
pub struct CameraTarget {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for CameraTarget {
    fn default() -> Self {
        let orbit = OrbitCamera::default();
        Self {
            yaw: orbit.yaw,
            pitch: orbit.pitch,
            distance: orbit.distance,
        }
    }
}

#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(orbit_position(&orbit)).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(orbit);
    commands.init_resource::<CameraTarget>();
    commands.init_resource::<CameraDrag>();
}

/// Spherical to cartesian: where the camera sits for a given orbit state.
fn orbit_position(orbit: &OrbitCamera) -> Vec3 {
    Vec3::new(
        orbit.distance * orbit.pitch.cos() * orbit.yaw.sin(),
        orbit.distance * orbit.pitch.sin(),
        orbit.distance * orbit.pitch.cos() * orbit.yaw.cos(),
    )
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraDrag>,
    mut target: ResMut<CameraTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            target.yaw -= delta.x * ORBIT_SENSITIVITY;
            target.pitch = (target.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(mut scroll_evts: EventReader<MouseWheel>, mut target: ResMut<CameraTarget>) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        target.distance = zoomed_distance(target.distance, dy);
    }
}

fn zoomed_distance(current: f32, scroll_y: f32) -> f32 {
    let factor = 1.0 - scroll_y * ZOOM_SPEED;
    (current * factor).clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Exponential interpolation factor for a given speed and delta time.
#[inline]
fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

/// System: move `OrbitCamera` toward `CameraTarget` (the damping).
pub fn smooth_camera_to_target(
    time: Res<Time>,
    target: Res<CameraTarget>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let k = exp_lerp_factor(SMOOTHING_SPEED, time.delta_secs());
    orbit.yaw += (target.yaw - orbit.yaw) * k;
    orbit.pitch += (target.pitch - orbit.pitch) * k;
    orbit.distance += (target.distance - orbit.distance) * k;
}

/// System: apply `OrbitCamera` state to the actual camera transform.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform =
        Transform::from_translation(orbit_position(&orbit)).looking_at(Vec3::ZERO, Vec3::Y);
}
