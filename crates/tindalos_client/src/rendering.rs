use bevy::prelude::*;
use tindalos_simulation::{Dead, Health, Hero, HeroConfig, Obstacle, PlaySoundRequest, ProjectileSpawnRequest};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_hero_visuals,
                spawn_obstacle_visuals,
                sync_transforms,
                tint_dead_heroes,
                draw_health_bars,
                spawn_tracers,
                expire_tracers,
                log_sound_requests,
            )
                .chain(),
        );
    }
}

/// Link: visual entity → simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Link: simulation entity → visual entity
#[derive(Component)]
pub struct HasVisual(pub Entity);

/// Короткоживущая метка выстрела (полёт projectile: забота хоста, здесь только вспышка)
#[derive(Component)]
pub struct Tracer {
    pub expires_at: f32,
}

/// Время жизни метки выстрела (секунды)
const TRACER_LIFETIME: f32 = 0.08;

const HERO_COLOR: Color = Color::srgb(0.2, 0.4, 0.9);
const DEAD_COLOR: Color = Color::srgb(0.35, 0.35, 0.35);

/// Spawn visual representation (capsule mesh) for new heroes
fn spawn_hero_visuals(
    mut commands: Commands,
    query: Query<(Entity, &Transform), Added<Hero>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (sim_entity, sim_transform) in query.iter() {
        let visual_entity = commands
            .spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: HERO_COLOR,
                    ..default()
                })),
                *sim_transform,
                VisualOf(sim_entity),
            ))
            .id();

        // "Нос" героя: показывает facing (local -Z)
        let nose = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(0.15, 0.15, 0.5))),
                MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.2))),
                Transform::from_xyz(0.0, 0.4, -0.45),
            ))
            .id();

        commands.entity(visual_entity).add_child(nose);
        commands.entity(sim_entity).insert(HasVisual(visual_entity));
    }
}

/// Box mesh для стен арены (статичны, sync не нужен)
fn spawn_obstacle_visuals(
    mut commands: Commands,
    query: Query<(&Obstacle, &Transform), Added<Obstacle>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (obstacle, transform) in query.iter() {
        let size = obstacle.half_extents * 2.0;
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(Color::srgb(0.45, 0.4, 0.35))),
            Transform::from_translation(transform.translation),
        ));
    }
}

/// Sync simulation transforms → visual transforms
fn sync_transforms(
    sim_query: Query<(&Transform, &HasVisual), Changed<Transform>>,
    mut visual_query: Query<&mut Transform, (With<VisualOf>, Without<HasVisual>)>,
) {
    for (sim_transform, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            *visual_transform = *sim_transform;
        }
    }
}

/// Мёртвый герой: серый, revive возвращает цвет
fn tint_dead_heroes(
    died: Query<&HasVisual, Added<Dead>>,
    mut revived: RemovedComponents<Dead>,
    visuals: Query<&HasVisual>,
    handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut recolor = |visual: Entity, color: Color| {
        if let Ok(handle) = handles.get(visual) {
            if let Some(material) = materials.get_mut(&handle.0) {
                material.base_color = color;
            }
        }
    };

    for has_visual in died.iter() {
        recolor(has_visual.0, DEAD_COLOR);
    }

    for entity in revived.read() {
        if let Ok(has_visual) = visuals.get(entity) {
            recolor(has_visual.0, HERO_COLOR);
        }
    }
}

/// Health bar над головой (gizmos, без UI)
fn draw_health_bars(query: Query<(&Health, &HeroConfig, &Transform), With<HasVisual>>, mut gizmos: Gizmos) {
    let bar_width = 1.0;
    let bar_height = 0.1;

    for (health, config, transform) in query.iter() {
        if health.is_dead() || config.initial_health <= 0 {
            continue;
        }

        let health_percent = (health.current as f32 / config.initial_health as f32).clamp(0.0, 1.0);
        let world_pos = transform.translation + Vec3::Y * 1.3;
        let facing_camera = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);

        // Background (red)
        gizmos.rect(
            bevy::math::Isometry3d::new(world_pos, facing_camera),
            Vec2::new(bar_width, bar_height),
            Color::srgb(0.8, 0.2, 0.2),
        );

        // Foreground (green, scaled by health)
        let fg_pos = world_pos - Vec3::X * (bar_width * (1.0 - health_percent) * 0.5);
        gizmos.rect(
            bevy::math::Isometry3d::new(fg_pos, facing_camera),
            Vec2::new(bar_width * health_percent, bar_height),
            Color::srgb(0.2, 0.8, 0.2),
        );
    }
}

fn spawn_tracers(
    mut commands: Commands,
    time: Res<Time>,
    mut requests: EventReader<ProjectileSpawnRequest>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for request in requests.read() {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(0.08))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 0.8, 0.3),
                unlit: true,
                ..default()
            })),
            Transform::from_translation(request.location).with_rotation(request.rotation),
            Tracer {
                expires_at: time.elapsed_secs() + TRACER_LIFETIME,
            },
        ));
    }
}

fn expire_tracers(mut commands: Commands, time: Res<Time>, tracers: Query<(Entity, &Tracer)>) {
    let now = time.elapsed_secs();
    for (entity, tracer) in tracers.iter() {
        if now >= tracer.expires_at {
            commands.entity(entity).despawn();
        }
    }
}

/// Звук не проигрываем (нет ассетов), только логируем запрос
fn log_sound_requests(mut requests: EventReader<PlaySoundRequest>) {
    for request in requests.read() {
        tindalos_simulation::log(&format!(
            "🔊 {} at ({:.1}, {:.1}) from {:?}",
            request.sound, request.location.x, request.location.z, request.source
        ));
    }
}
