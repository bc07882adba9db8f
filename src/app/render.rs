//! Render collaborator: one cube entity per stored block plus a single
//! highlight outline.
//!
//! Nothing here is consulted for world logic. Visuals follow the
//! `BlockChanged` events and the `HighlightTarget` slot.
use bevy::prelude::*;
use std::collections::HashMap;
use voxland::block::BlockType;
use voxland::interaction::HighlightTarget;
use voxland::world::{BlockChange, BlockChanged, Coordinate};

/// Shared cube mesh, one material per block type, and the entity drawn for
/// each occupied coordinate.
#[derive(Resource)]
pub struct BlockVisuals {
    mesh: Handle<Mesh>,
    materials: Vec<Handle<StandardMaterial>>,
    entities: HashMap<Coordinate, Entity>,
}

/// Build the cube mesh and the per-type materials.
#[allow(clippy::needless_pass_by_value)]
pub fn setup_block_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let materials = BlockType::ALL
        .iter()
        .map(|block| {
            let props = block.properties();
            materials.add(StandardMaterial {
                base_color: props.base_color(),
                alpha_mode: if props.translucent { AlphaMode::Blend } else { AlphaMode::Opaque },
                perceptual_roughness: 0.9,
                ..default()
            })
        })
        .collect();

    commands.insert_resource(BlockVisuals {
        mesh,
        materials,
        entities: HashMap::new(),
    });
}

/// Spawn or despawn cube entities to mirror world mutations.
pub fn sync_block_visuals(
    mut commands: Commands,
    mut events: EventReader<BlockChanged>,
    mut visuals: ResMut<BlockVisuals>,
) {
    for BlockChanged(change) in events.read() {
        match *change {
            BlockChange::Added(coord, block) => {
                let entity = commands
                    .spawn(PbrBundle {
                        mesh: visuals.mesh.clone(),
                        material: visuals.materials[block.index()].clone(),
                        transform: Transform::from_translation(coord.as_vec3() + Vec3::splat(0.5)),
                        ..default()
                    })
                    .id();
                if let Some(stale) = visuals.entities.insert(coord, entity) {
                    commands.entity(stale).despawn();
                }
            }
            BlockChange::Removed(coord) => {
                if let Some(entity) = visuals.entities.remove(&coord) {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}

/// Outline the targeted block, if any.
#[allow(clippy::needless_pass_by_value)]
pub fn draw_highlight(mut gizmos: Gizmos, highlight: Res<HighlightTarget>) {
    let Some(coord) = highlight.0 else { return };
    gizmos.cuboid(
        Transform::from_translation(coord.as_vec3() + Vec3::splat(0.5)).with_scale(Vec3::splat(1.01)),
        Color::BLACK,
    );
}
