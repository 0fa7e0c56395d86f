//! Host input: клавиатура/мышь → события симуляции
//!
//! - WASD → PlayerInputEvent::MoveAxes (только при изменении)
//! - ЛКМ → FirePressed / FireReleased
//! - Курсор → CursorRay (луч из камеры через viewport)
//! - H / J → HealthDelta по игроку (отладка урона и лечения)

use bevy::input::InputSystem;
use bevy::math::Ray3d;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tindalos_simulation::input::apply_player_input;
use tindalos_simulation::{CursorRay, HealthDelta, Player, PlayerInputEvent};

use crate::camera::FollowCamera;

/// Шаг отладочного урона/лечения
const DEBUG_HEALTH_STEP: i32 = 3;

pub struct PlayerControlsPlugin;

impl Plugin for PlayerControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            (read_move_keys, read_fire_button, update_cursor_ray, debug_health_keys)
                .after(InputSystem)
                .before(apply_player_input),
        );
    }
}

fn axis(keys: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f32 {
    let mut value = 0.0;
    if keys.pressed(positive) {
        value += 1.0;
    }
    if keys.pressed(negative) {
        value -= 1.0;
    }
    value
}

/// WASD → оси движения (event только если оси изменились)
fn read_move_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut last_axes: Local<(f32, f32)>,
    mut input_events: EventWriter<PlayerInputEvent>,
) {
    let forward = axis(&keys, KeyCode::KeyW, KeyCode::KeyS);
    let right = axis(&keys, KeyCode::KeyD, KeyCode::KeyA);

    if (forward, right) != *last_axes {
        *last_axes = (forward, right);
        input_events.write(PlayerInputEvent::MoveAxes { forward, right });
    }
}

fn read_fire_button(mouse: Res<ButtonInput<MouseButton>>, mut input_events: EventWriter<PlayerInputEvent>) {
    if mouse.just_pressed(MouseButton::Left) {
        input_events.write(PlayerInputEvent::FirePressed);
    }
    if mouse.just_released(MouseButton::Left) {
        input_events.write(PlayerInputEvent::FireReleased);
    }
}

/// Луч из камеры под курсором (None = курсор вне окна или нет камеры)
fn cursor_ray(window: &Window, camera: &Camera, camera_transform: &GlobalTransform) -> Option<Ray3d> {
    let cursor_position = window.cursor_position()?;
    camera.viewport_to_world(camera_transform, cursor_position).ok()
}

fn update_cursor_ray(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<FollowCamera>>,
    mut cursor: ResMut<CursorRay>,
) {
    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), cameras.single()) else {
        cursor.ray = None;
        return;
    };

    cursor.ray = cursor_ray(window, camera, camera_transform);
}

fn debug_health_keys(
    keys: Res<ButtonInput<KeyCode>>,
    players: Query<Entity, With<Player>>,
    mut health_events: EventWriter<HealthDelta>,
) {
    let delta = if keys.just_pressed(KeyCode::KeyH) {
        -DEBUG_HEALTH_STEP
    } else if keys.just_pressed(KeyCode::KeyJ) {
        DEBUG_HEALTH_STEP
    } else {
        return;
    };

    for target in players.iter() {
        health_events.write(HealthDelta { target, delta });
    }
}
