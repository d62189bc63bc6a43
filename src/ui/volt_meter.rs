//! UI domain: the on-screen voltage counter. A presentational store kept in
//! sync with the controller's charge by the mirror system; the two never
//! share storage.

use bevy::prelude::*;

use crate::abilities::VoltCharge;
use crate::character::Player;
use crate::content::HudConfig;

/// The meter always renders this many slots.
pub const VOLT_METER_CAPACITY: u32 = 10;

const ICON_SIZE: f32 = 18.0;
const METER_PADDING: f32 = 16.0;

/// The display-side counter, bounded to the meter capacity independently of
/// the controller's charge bounds.
#[derive(Resource, Debug, Default)]
pub struct DisplayedVoltage {
    count: u32,
}

impl DisplayedVoltage {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set(&mut self, count: u32) {
        self.count = count.min(VOLT_METER_CAPACITY);
    }
}

/// Marker for one meter slot, tagged with its position.
#[derive(Component, Debug)]
pub struct VoltIcon(pub u32);

pub(crate) fn spawn_volt_meter(mut commands: Commands, hud: Res<HudConfig>) {
    // The icon row is validated against the meter capacity before any of
    // this runs; a mismatch aborts setup during tuning validation.
    let icon_count = hud.volt_icon_count;

    commands
        .spawn((Node {
            position_type: PositionType::Absolute,
            left: Val::Px(METER_PADDING),
            top: Val::Px(METER_PADDING),
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(4.0),
            ..default()
        },))
        .with_children(|parent| {
            for slot in 0..icon_count {
                parent.spawn((
                    VoltIcon(slot),
                    Node {
                        width: Val::Px(ICON_SIZE),
                        height: Val::Px(ICON_SIZE),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.15, 0.15, 0.2, 0.8)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.3)),
                ));
            }
        });
}

/// Glue keeping the presentational counter in sync with the controller's
/// charge.
pub(crate) fn mirror_charge(
    mut displayed: ResMut<DisplayedVoltage>,
    query: Query<&VoltCharge, With<Player>>,
) {
    let Ok(charge) = query.single() else {
        return;
    };

    if displayed.count() != charge.current() {
        displayed.set(charge.current());
    }
}

pub(crate) fn paint_volt_icons(
    displayed: Res<DisplayedVoltage>,
    mut icons: Query<(&VoltIcon, &mut BackgroundColor)>,
) {
    for (icon, mut color) in &mut icons {
        color.0 = if icon.0 < displayed.count() {
            Color::srgb(0.95, 0.9, 0.3)
        } else {
            Color::srgba(0.15, 0.15, 0.2, 0.8)
        };
    }
}
