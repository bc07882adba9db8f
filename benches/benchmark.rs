use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bevy::math::{IVec3, Vec2, Vec3};
use voxland::block::BlockType;
use voxland::interaction::{raycast, InteractionController, TickInput};
use voxland::player::PlayerLook;
use voxland::settings::ControlsSettings;
use voxland::snapshot::write_snapshot;
use voxland::terrain::{TerrainGenerator, TerrainParams};
use voxland::world::WorldStore;

const SEED: u64 = 101;

fn generated_world() -> WorldStore {
    let mut world = WorldStore::new();
    TerrainGenerator::new(TerrainParams::default()).generate_seeded(SEED, &mut world);
    world.drain_changes();
    world
}

/// Full startup generation of the default region
fn bench_terrain_generate(c: &mut Criterion) {
    let generator = TerrainGenerator::new(TerrainParams::default());
    c.bench_function("terrain_generate_default", |b| {
        b.iter(|| {
            let mut world = WorldStore::new();
            let columns = generator.generate_seeded(black_box(SEED), &mut world);
            black_box((columns.len(), world.len()));
        })
    });
}

/// Rays fanned out from above the origin column, hitting and missing terrain
fn bench_raycast_terrain(c: &mut Criterion) {
    let world = generated_world();
    let origin = Vec3::new(0.5, 14.5, 0.5);
    let directions: Vec<Vec3> = (0..64)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / 64.0;
            Vec3::new(angle.cos(), -0.8, angle.sin())
        })
        .collect();

    c.bench_function("raycast_terrain_fan", |b| {
        b.iter(|| {
            let hits = directions
                .iter()
                .filter_map(|d| raycast(&world, black_box(origin), *d, 8.0))
                .count();
            black_box(hits);
        })
    });
}

/// Alternating place/remove ticks against a flat floor
fn bench_interaction_tick(c: &mut Criterion) {
    c.bench_function("interaction_tick_place_remove", |b| {
        b.iter(|| {
            let mut world = WorldStore::new();
            for x in -4..=4 {
                for z in -4..=4 {
                    world.set_block(IVec3::new(x, 0, z), BlockType::Stone);
                }
            }
            let mut controller = InteractionController::new(8.0, 0.0);
            for i in 0..200u16 {
                let input = TickInput {
                    origin: Vec3::new(0.5, 4.5, 0.5),
                    forward: Vec3::NEG_Y,
                    remove: i % 2 == 1,
                    place: i % 2 == 0,
                    now: f64::from(i) * 0.01,
                };
                black_box(controller.tick(&mut world, BlockType::Dirt, &input));
            }
        })
    });
}

/// Serialising the default world into memory
fn bench_snapshot_write(c: &mut Criterion) {
    let world = generated_world();
    c.bench_function("snapshot_write_default", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(world.len() * 16);
            let count = write_snapshot(&world, &mut buf).unwrap_or(0);
            black_box((count, buf.len()));
        })
    });
}

/// Many small mouse deltas through the pitch clamp
fn bench_camera_look_clamp(c: &mut Criterion) {
    let controls = ControlsSettings::default();
    c.bench_function("camera_look_clamp", |b| {
        b.iter(|| {
            let mut look = PlayerLook::default();
            for i in 0..1_000usize {
                let dx = ((i * 13) % 17) as f32 * 0.1;
                let dy = ((i * 7) % 23) as f32 * 0.2 - 5.0;
                look.apply_delta(black_box(Vec2::new(dx, dy)), &controls);
            }
            black_box((look.yaw, look.pitch));
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets =
        bench_terrain_generate,
        bench_raycast_terrain,
        bench_interaction_tick,
        bench_snapshot_write,
        bench_camera_look_clamp,
}

criterion_main!(benches);
