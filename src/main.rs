use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use voxland::interaction::{block_interaction, sync_interaction_settings, HighlightTarget, InteractionController};
use voxland::player::{camera_look, camera_movement, cursor_grab};
use voxland::selection::{hotbar_input, Hotbar};
use voxland::settings::loader as settings_loader;
use voxland::snapshot::save_on_key;
use voxland::world::{forward_block_changes, BlockChanged, WorldStore};

mod app;
use app::{draw_highlight, setup, setup_block_visuals, spawn_hud, sync_block_visuals, update_hotbar_label};

fn main() {
    let settings = settings_loader::load_settings_from_dir(settings_loader::SETTINGS_DIR);
    let settings_watcher = settings_loader::setup_settings_watcher(settings_loader::SETTINGS_DIR)
        .unwrap_or_else(|_| settings_loader::SettingsWatcher::stub());

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "voxland".to_string(),
                position: WindowPosition::Centered(MonitorSelection::Primary),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(LogDiagnosticsPlugin::default());

    app.insert_resource(ClearColor(Color::srgb(0.53, 0.75, 0.93)));
    app.insert_resource(WorldStore::new());
    app.insert_resource(Hotbar::default());
    app.insert_resource(InteractionController::from_settings(&settings.interaction));
    app.insert_resource(HighlightTarget::default());
    app.add_event::<BlockChanged>();

    app.insert_resource(settings);
    app.insert_resource(settings_watcher);

    app.add_systems(Startup, (setup, setup_block_visuals, spawn_hud));

    app.add_systems(
        Update,
        (settings_loader::check_settings_changes, sync_interaction_settings).chain(),
    );
    // One interaction tick per frame: sample input, move, raycast and act,
    // then hand the results to the renderer.
    app.add_systems(
        Update,
        (
            camera_look,
            camera_movement,
            hotbar_input,
            block_interaction,
            cursor_grab,
            save_on_key,
            forward_block_changes,
            sync_block_visuals,
            draw_highlight,
            update_hotbar_label,
        )
            .chain()
            .after(sync_interaction_settings),
    );

    app.run();
}
