//! Startup system: generate the world and spawn the viewer and lights.
use bevy::prelude::*;
use voxland::player::{Player, PlayerLook};
use voxland::settings::Settings;
use voxland::terrain::{TerrainGenerator, TerrainParams};
use voxland::world::WorldStore;

/// Clearance between the origin column's surface and the spawn eye height.
const SPAWN_CLEARANCE: f32 = 4.0;

/// Fill the world from the configured seed, then place the viewer above
/// the origin column looking down -Z.
///
/// # Arguments
/// - `commands`: Commands used to spawn the camera and lights.
/// - `world`: The empty world store; generation queues an `Added` change per block,
///   which the render sync turns into cube entities on the first update.
/// - `settings`: Source of the seed and region size.
#[allow(clippy::needless_pass_by_value, clippy::cast_precision_loss)]
pub fn setup(mut commands: Commands, mut world: ResMut<WorldStore>, settings: Res<Settings>) {
    let generator = TerrainGenerator::new(TerrainParams {
        region_half_width: settings.world.region_half_width,
        max_height: settings.world.max_height,
    });
    let columns = generator.generate_seeded(settings.world.seed, &mut world);
    let trees = columns.iter().filter(|c| c.trunk_height.is_some()).count();
    info!(
        "generated {} blocks in {} columns ({} trees) from seed {}",
        world.len(),
        columns.len(),
        trees,
        settings.world.seed
    );

    let surface = columns
        .iter()
        .find(|c| c.x == 0 && c.z == 0)
        .map_or(settings.world.max_height, |c| c.height);
    let spawn_y = surface as f32 + SPAWN_CLEARANCE;

    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.5, spawn_y, 0.5),
            ..default()
        },
        Player,
        PlayerLook::default(),
    ));

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            shadows_enabled: false,
            illuminance: 8000.0,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 10.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
}
