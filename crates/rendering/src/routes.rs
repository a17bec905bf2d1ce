//! Flight routes: city markers, arc tubes, and the animated bullets.
//!
//! All arcs live in the [`FlightRoutes`] resource as a flat list built once
//! at startup; the per-frame animation iterates that list directly instead
//! of scanning the scene graph for tagged entities.

use bevy::prelude::*;

use geo::arc::{loop_phase, ArcPath, ARC_PHASE_SPEED};
use geo::cities::{DESTINATIONS, HUB};
use geo::projection::{lat_lon_to_world, GLOBE_RADIUS};

use crate::tube::build_tube_mesh;

const HUB_MARKER_RADIUS: f32 = 0.3;
const DESTINATION_MARKER_RADIUS: f32 = 0.2;
const BULLET_RADIUS: f32 = 0.1;
const TUBE_RADIUS: f32 = 0.05;
const TUBE_SEGMENTS: usize = 64;
const TUBE_SIDES: usize = 8;

const HUB_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const DESTINATION_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const TUBE_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const BULLET_COLOR: Color = Color::WHITE;

/// One hub-to-destination connection: the path plus the entity whose
/// transform is rewritten every frame.
pub struct RouteArc {
    pub path: ArcPath,
    pub bullet: Entity,
}

/// The fixed set of arcs, owned by the animation driver.
#[derive(Resource, Default)]
pub struct FlightRoutes {
    pub arcs: Vec<RouteArc>,
}

/// Startup: project every city onto the globe, spawn the static markers and
/// tubes, and one bullet per destination.
pub fn spawn_routes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut routes: ResMut<FlightRoutes>,
) {
    // Markers and tubes are unlit so they read clearly against the globe.
    let hub_material = materials.add(unlit(HUB_COLOR));
    let destination_material = materials.add(unlit(DESTINATION_COLOR));
    let tube_material = materials.add(unlit(TUBE_COLOR));
    let bullet_material = materials.add(unlit(BULLET_COLOR));

    let destination_mesh = meshes.add(Sphere::new(DESTINATION_MARKER_RADIUS).mesh().uv(12, 12));
    let bullet_mesh = meshes.add(Sphere::new(BULLET_RADIUS).mesh().uv(8, 8));

    let hub_pos = lat_lon_to_world(HUB.lat, HUB.lon, GLOBE_RADIUS);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(HUB_MARKER_RADIUS).mesh().uv(12, 12))),
        MeshMaterial3d(hub_material),
        Transform::from_translation(hub_pos),
    ));

    for city in DESTINATIONS {
        let target_pos = lat_lon_to_world(city.lat, city.lon, GLOBE_RADIUS);
        commands.spawn((
            Mesh3d(destination_mesh.clone()),
            MeshMaterial3d(destination_material.clone()),
            Transform::from_translation(target_pos),
        ));

        let path = ArcPath::new(hub_pos, target_pos);
        commands.spawn((
            Mesh3d(meshes.add(build_tube_mesh(&path, TUBE_RADIUS, TUBE_SEGMENTS, TUBE_SIDES))),
            MeshMaterial3d(tube_material.clone()),
            Transform::default(),
        ));

        let bullet = commands
            .spawn((
                Mesh3d(bullet_mesh.clone()),
                MeshMaterial3d(bullet_material.clone()),
                Transform::from_translation(path.point_at(0.0)),
            ))
            .id();

        routes.arcs.push(RouteArc { path, bullet });
    }

    info!("spawned {} flight routes from {}", routes.arcs.len(), HUB.name);
}

fn unlit(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        unlit: true,
        ..default()
    }
}

/// System: place every bullet at the current loop phase along its arc.
///
/// All bullets share one phase, so the fleet departs and arrives in lockstep
/// regardless of arc length. A bullet whose entity has gone away is skipped.
pub fn animate_bullets(
    time: Res<Time>,
    routes: Res<FlightRoutes>,
    mut transforms: Query<&mut Transform>,
) {
    let phase = loop_phase(time.elapsed_secs(), ARC_PHASE_SPEED);
    for arc in &routes.arcs {
        let Ok(mut transform) = transforms.get_mut(arc.bullet) else {
            continue;
        };
        transform.translation = arc.path.point_at(phase);
    }
}
