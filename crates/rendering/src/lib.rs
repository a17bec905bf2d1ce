use bevy::prelude::*;

pub mod camera;
pub mod globe;
pub mod routes;
pub mod tube;

use routes::FlightRoutes;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlightRoutes>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    globe::spawn_globe,
                    routes::spawn_routes,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::smooth_camera_to_target
                        .after(camera::camera_orbit_drag)
                        .after(camera::camera_zoom),
                    camera::apply_orbit_camera.after(camera::smooth_camera_to_target),
                    globe::rotate_globe,
                    routes::animate_bullets,
                ),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination (mid grey)
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.53, 0.53, 0.53),
        brightness: 300.0,
    });

    // Directional light angled from the upper front-right
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_at(-Vec3::new(5.0, 3.0, 5.0), Vec3::Y),
    ));
}
