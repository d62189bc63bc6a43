//! Selector domain: the compass panel and its icon painting.

use bevy::prelude::*;

use crate::abilities::{AbilityKind, Progression};
use crate::selector::resources::{SelectorSession, SelectorTuning};

/// Marker for the overlay panel root.
#[derive(Component, Debug)]
pub struct SelectorPanel;

/// One compass icon, tagged with the slot it represents.
#[derive(Component, Debug)]
pub struct SlotIcon(pub AbilityKind);

const ICON_SIZE: f32 = 72.0;

/// The 3x3 compass layout, row by row from the top. `None` is the empty
/// center cell.
const COMPASS_GRID: [Option<AbilityKind>; 9] = [
    Some(AbilityKind::Puff),
    Some(AbilityKind::RoundAbout),
    Some(AbilityKind::Bounce),
    Some(AbilityKind::Glide),
    None,
    Some(AbilityKind::Nibble),
    Some(AbilityKind::CatchNChuck),
    Some(AbilityKind::ZapLine),
    Some(AbilityKind::Spiral),
];

pub(crate) fn spawn_panel(mut commands: Commands) {
    let panel_color = Color::srgba(0.08, 0.08, 0.14, 0.9);

    commands
        .spawn((
            SelectorPanel,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Hidden,
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        display: Display::Grid,
                        grid_template_columns: RepeatedGridTrack::px(3, ICON_SIZE + 8.0),
                        grid_template_rows: RepeatedGridTrack::px(3, ICON_SIZE + 8.0),
                        padding: UiRect::all(Val::Px(12.0)),
                        row_gap: Val::Px(6.0),
                        column_gap: Val::Px(6.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(panel_color),
                    BorderColor::all(Color::srgb(0.4, 0.4, 0.55)),
                ))
                .with_children(|grid| {
                    for cell in COMPASS_GRID {
                        match cell {
                            Some(kind) => spawn_icon(grid, kind),
                            None => {
                                grid.spawn(Node {
                                    width: Val::Px(ICON_SIZE),
                                    height: Val::Px(ICON_SIZE),
                                    ..default()
                                });
                            }
                        }
                    }
                });
        });
}

fn spawn_icon(parent: &mut ChildSpawnerCommands, kind: AbilityKind) {
    parent
        .spawn((
            SlotIcon(kind),
            Node {
                width: Val::Px(ICON_SIZE),
                height: Val::Px(ICON_SIZE),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.6, 0.6, 0.6)),
            BorderColor::all(Color::srgb(0.2, 0.2, 0.3)),
        ))
        .with_child((
            Text::new(kind.name()),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::srgb(0.05, 0.05, 0.1)),
        ));
}

/// Repaints every icon while the overlay is open: the pending selection at
/// full brightness, selectable slots dimmed, slots beyond the ceiling
/// darker still.
pub(crate) fn paint_icons(
    session: Res<SelectorSession>,
    tuning: Res<SelectorTuning>,
    progression: Res<Progression>,
    mut icons: Query<(&SlotIcon, &mut BackgroundColor)>,
) {
    if !session.open {
        return;
    }

    for (icon, mut color) in &mut icons {
        let brightness = if icon.0 == session.selected {
            1.0
        } else if progression.allows(icon.0) {
            tuning.not_selected_brightness
        } else {
            tuning.disabled_brightness
        };

        color.0 = Color::srgb(brightness, brightness, brightness);
    }
}
