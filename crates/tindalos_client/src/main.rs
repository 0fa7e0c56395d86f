use bevy::prelude::*;
use tindalos_simulation::hero::HERO_SPAWN_HEIGHT;
use tindalos_simulation::{spawn_arena, spawn_hero, HeroConfig, SimulationPlugin};

mod camera;
mod controls;
mod rendering;

use camera::CameraPlugin;
use controls::PlayerControlsPlugin;
use rendering::RenderingSyncPlugin;

/// Половина стороны арены (метры)
const ARENA_HALF_SIZE: f32 = 12.0;

fn main() {
    tindalos_simulation::init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tindalos - Twin Stick".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // Host input: keyboard/mouse → PlayerInputEvent, cursor → CursorRay
        .add_plugins(PlayerControlsPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Top-down follow camera
        .add_plugins(CameraPlugin)
        // Setup scene
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn ground plane, lights, camera, arena walls and the hero
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground plane (пол арены, y = 0 совпадает с ArenaGround)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(ARENA_HALF_SIZE)))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.27, 0.3))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_3)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 18.0, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
        camera::FollowCamera::default(),
    ));

    // Simulation entities (визуал добавит RenderingSyncPlugin)
    spawn_arena(&mut commands, ARENA_HALF_SIZE);
    spawn_hero(
        &mut commands,
        Vec3::new(0.0, HERO_SPAWN_HEIGHT, 0.0),
        HeroConfig::hero_character(),
    );
}
