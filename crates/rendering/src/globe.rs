//! The textured Earth sphere and its slow self-rotation.

use bevy::prelude::*;

use geo::projection::GLOBE_RADIUS;

/// Y rotation added every frame. A per-frame constant, not time-scaled:
/// the globe drifts slightly faster on high-refresh displays, which is
/// imperceptible at this magnitude.
const GLOBE_SPIN_PER_FRAME: f32 = 0.0005;

/// Equirectangular Earth texture, loaded asynchronously by the asset server.
/// If the file is missing the sphere renders untextured and the asset server
/// logs the error; nothing else handles it.
const EARTH_TEXTURE_PATH: &str = "textures/earth_atmos_2048.jpg";

/// Marker component for the rotating Earth mesh.
#[derive(Component)]
pub struct Globe;

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let earth_texture = asset_server.load(EARTH_TEXTURE_PATH);
    commands.spawn((
        // 64x64 UV sphere, fine enough that the texture seam sits cleanly
        Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS).mesh().uv(64, 64))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(earth_texture),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
        Globe,
    ));
}

/// System: advance the globe's self-rotation each frame.
pub fn rotate_globe(mut query: Query<&mut Transform, With<Globe>>) {
    for mut transform in query.iter_mut() {
        transform.rotate_y(GLOBE_SPIN_PER_FRAME);
    }
}
