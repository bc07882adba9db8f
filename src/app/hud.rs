//! Crosshair and the selected-block label.
use bevy::prelude::*;
use voxland::selection::Hotbar;

#[derive(Component)]
pub struct HotbarLabel;

/// Spawn the centred crosshair and the hotbar label.
pub fn spawn_hud(mut commands: Commands, hotbar: Res<Hotbar>) {
    commands
        .spawn(NodeBundle {
            style: Style {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ..default()
        })
        .with_children(|p| {
            for (width, height) in [(20.0, 2.0), (2.0, 20.0)] {
                p.spawn(NodeBundle {
                    style: Style {
                        position_type: PositionType::Absolute,
                        width: Val::Px(width),
                        height: Val::Px(height),
                        ..default()
                    },
                    background_color: Color::WHITE.into(),
                    ..default()
                });
            }
        });

    commands.spawn((
        TextBundle::from_section(
            label_text(&hotbar),
            TextStyle {
                font_size: 22.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        }),
        HotbarLabel,
    ));
}

/// Refresh the label when the selection changes.
#[allow(clippy::needless_pass_by_value)]
pub fn update_hotbar_label(hotbar: Res<Hotbar>, mut labels: Query<&mut Text, With<HotbarLabel>>) {
    if !hotbar.is_changed() {
        return;
    }
    for mut text in &mut labels {
        if let Some(section) = text.sections.first_mut() {
            section.value = label_text(&hotbar);
        }
    }
}

fn label_text(hotbar: &Hotbar) -> String {
    format!("[{}] {}", hotbar.index() + 1, hotbar.current().properties().label)
}
