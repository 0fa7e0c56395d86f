use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use tindalos_simulation::{CameraOffset, Player};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (zoom_camera, follow_player).chain());
    }
}

/// Top-down камера над игроком, смещённая к курсору через CameraOffset
#[derive(Component)]
pub struct FollowCamera {
    pub height: f32,
    /// Отступ назад (+Z), чтобы камера смотрела под углом
    pub back: f32,
    /// Скорость догоняния (1/с)
    pub smoothing: f32,
    pub zoom_speed: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            height: 18.0,
            back: 9.0,
            smoothing: 8.0,
            zoom_speed: 1.0,
        }
    }
}

/// Mouse wheel: высота камеры
fn zoom_camera(mut query: Query<&mut FollowCamera>, mut mouse_wheel: EventReader<MouseWheel>) {
    let Ok(mut camera) = query.single_mut() else {
        mouse_wheel.clear();
        return;
    };

    for wheel in mouse_wheel.read() {
        camera.height -= wheel.y * camera.zoom_speed;
        camera.height = camera.height.clamp(6.0, 40.0);
        camera.back = camera.height * 0.5;
    }
}

fn follow_player(
    time: Res<Time>,
    players: Query<(&Transform, &CameraOffset), (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok((player_transform, offset)) = players.single() else {
        return;
    };

    let focus = Vec3::new(player_transform.translation.x, 0.0, player_transform.translation.z) + offset.0;

    for (camera, mut transform) in cameras.iter_mut() {
        let desired = focus + Vec3::new(0.0, camera.height, camera.back);
        let blend = (camera.smoothing * time.delta_secs()).clamp(0.0, 1.0);

        transform.translation = transform.translation.lerp(desired, blend);
        let eye = transform.translation;
        transform.look_at(eye - Vec3::new(0.0, camera.height, camera.back), Vec3::Y);
    }
}
