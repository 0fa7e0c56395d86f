//! Hero integration test
//!
//! Headless App с SimulationPlugin, один update = один FixedUpdate tick (64Hz).
//!
//! Проверяем:
//! - Темп стрельбы при зажатом огне (cooldown на fixed clock)
//! - Смерть от HealthDelta → Dead, EntityDied, больше ни одного выстрела
//! - Герой, заспавненный с health <= 0, сразу получает Dead
//! - Нет курсора → нет стрельбы, но движение работает
//! - Стена блокирует движение, диагональ скользит вдоль стены

use bevy::prelude::*;
use tindalos_simulation::hero::{hero_bundle, HERO_SPAWN_HEIGHT};
use tindalos_simulation::*;

/// Все ProjectileSpawnRequest, которые увидел хост
#[derive(Resource, Default)]
struct CollectedShots(Vec<ProjectileSpawnRequest>);

#[derive(Resource, Default)]
struct CollectedDeaths(Vec<EntityDied>);

#[derive(Resource, Default)]
struct CollectedSounds(Vec<PlaySoundRequest>);

fn collect_events(
    mut shots: EventReader<ProjectileSpawnRequest>,
    mut deaths: EventReader<EntityDied>,
    mut sounds: EventReader<PlaySoundRequest>,
    mut shot_log: ResMut<CollectedShots>,
    mut death_log: ResMut<CollectedDeaths>,
    mut sound_log: ResMut<CollectedSounds>,
) {
    shot_log.0.extend(shots.read().cloned());
    death_log.0.extend(deaths.read().copied());
    sound_log.0.extend(sounds.read().cloned());
}

/// Helper: App с симуляцией и сборщиком events
fn create_hero_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .init_resource::<CollectedShots>()
        .init_resource::<CollectedDeaths>()
        .init_resource::<CollectedSounds>()
        .add_systems(FixedPostUpdate, collect_events);

    // Первый update: delta = 0, FixedUpdate ещё не тикает
    app.update();
    app
}

fn spawn_test_hero(app: &mut App, config: HeroConfig) -> Entity {
    app.world_mut()
        .spawn(hero_bundle(Vec3::new(0.0, HERO_SPAWN_HEIGHT, 0.0), config))
        .id()
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

fn shot_count(app: &App) -> usize {
    app.world().resource::<CollectedShots>().0.len()
}

#[test]
fn test_held_fire_shoots_every_eight_ticks() {
    let mut app = create_hero_app(42);
    let hero = spawn_test_hero(&mut app, HeroConfig::hero_character());

    app.insert_resource(CursorRay::looking_down_at(Vec3::new(0.0, 0.0, -10.0)));
    app.world_mut().send_event(PlayerInputEvent::FirePressed);

    run_ticks(&mut app, 64);

    // fire_rate 0.12s, tick 15.625ms → выстрел раз в 8 tick'ов
    assert_eq!(shot_count(&app), 8);
    assert_eq!(app.world().get::<FireController>(hero).unwrap().shots_fired, 8);

    let shots = &app.world().resource::<CollectedShots>().0;
    assert!(shots.iter().all(|shot| shot.shooter == hero));
    assert_eq!(shots[0].kind, "hero_projectile");

    // Смотрим в -Z: gun offset не поворачивается
    let expected = Vec3::new(0.15, HERO_SPAWN_HEIGHT + 0.5, -1.2);
    assert!((shots[0].location - expected).length() < 1e-5, "{:?}", shots[0].location);

    let fire_sounds = app
        .world()
        .resource::<CollectedSounds>()
        .0
        .iter()
        .filter(|sound| sound.sound == "audio/m4a1_single.ogg")
        .count();
    assert_eq!(fire_sounds, 8);
}

#[test]
fn test_release_stops_fire() {
    let mut app = create_hero_app(42);
    spawn_test_hero(&mut app, HeroConfig::hero_character());

    app.insert_resource(CursorRay::looking_down_at(Vec3::new(5.0, 0.0, 0.0)));
    app.world_mut().send_event(PlayerInputEvent::FirePressed);
    run_ticks(&mut app, 1);
    assert_eq!(shot_count(&app), 1);

    app.world_mut().send_event(PlayerInputEvent::FireReleased);
    run_ticks(&mut app, 64);

    assert_eq!(shot_count(&app), 1);
}

#[test]
fn test_lethal_damage_kills_and_stops_fire() {
    let mut app = create_hero_app(7);
    let hero = spawn_test_hero(&mut app, HeroConfig::hero_character());

    app.insert_resource(CursorRay::looking_down_at(Vec3::new(3.0, 0.0, -3.0)));
    app.world_mut().send_event(PlayerInputEvent::FirePressed);
    run_ticks(&mut app, 10);
    assert!(shot_count(&app) > 0);

    app.world_mut().send_event(HealthDelta { target: hero, delta: -10 });
    run_ticks(&mut app, 1);

    let world = app.world();
    assert_eq!(world.get::<Health>(hero).unwrap().current, 0);
    assert!(world.get::<Health>(hero).unwrap().is_dead());
    assert!(world.get::<Dead>(hero).is_some());
    assert!(world.get::<AnimationParams>(hero).unwrap().is_dead);

    let deaths = &world.resource::<CollectedDeaths>().0;
    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[0].entity, hero);

    let shots_at_death = shot_count(&app);
    let position_at_death = app.world().get::<Transform>(hero).unwrap().translation;

    app.world_mut().send_event(PlayerInputEvent::MoveAxes { forward: 1.0, right: 0.0 });
    run_ticks(&mut app, 64);

    assert_eq!(shot_count(&app), shots_at_death, "мертвый герой не стреляет");
    assert_eq!(app.world().get::<Transform>(hero).unwrap().translation, position_at_death);
}

#[test]
fn test_no_cursor_means_no_shots_but_movement() {
    let mut app = create_hero_app(1);
    let hero = spawn_test_hero(&mut app, HeroConfig::hero_character());

    app.world_mut().send_event(PlayerInputEvent::FirePressed);
    app.world_mut().send_event(PlayerInputEvent::MoveAxes { forward: 1.0, right: 0.0 });
    run_ticks(&mut app, 64);

    assert_eq!(shot_count(&app), 0);

    // 5 м/с × 1с вперёд (-Z)
    let position = app.world().get::<Transform>(hero).unwrap().translation;
    assert!((position.z - -5.0).abs() < 1e-3, "{:?}", position);
    assert!(position.x.abs() < 1e-5);
}

#[test]
fn test_wall_blocks_forward_movement() {
    let mut app = create_hero_app(3);
    let hero = spawn_test_hero(&mut app, HeroConfig::hero_character());

    // Стена поперёк пути: z ∈ [-3.5, -2.5]
    app.world_mut().spawn((
        Obstacle::wall(Vec3::new(20.0, 1.0, 0.5)),
        Transform::from_xyz(0.0, 1.0, -3.0),
    ));

    app.world_mut().send_event(PlayerInputEvent::MoveAxes { forward: 1.0, right: 0.0 });
    run_ticks(&mut app, 128);

    // Радиус 0.4 → останавливаемся у z = -2.1
    let position = app.world().get::<Transform>(hero).unwrap().translation;
    assert!(position.z >= -2.1 - 1e-4, "{:?}", position);
    assert!(position.z < -2.05, "{:?}", position);
}

#[test]
fn test_diagonal_slides_along_wall() {
    let mut app = create_hero_app(3);
    let hero = spawn_test_hero(&mut app, HeroConfig::hero_character());

    app.world_mut().spawn((
        Obstacle::wall(Vec3::new(20.0, 1.0, 0.5)),
        Transform::from_xyz(0.0, 1.0, -3.0),
    ));

    app.world_mut().send_event(PlayerInputEvent::MoveAxes { forward: 1.0, right: 1.0 });
    run_ticks(&mut app, 64);

    // По X не теряем скорость: ~5/√2 м за секунду
    let position = app.world().get::<Transform>(hero).unwrap().translation;
    assert!(position.z >= -2.1 - 1e-4, "{:?}", position);
    assert!(position.x > 3.0, "{:?}", position);
}

#[test]
fn test_heal_after_death_revives_but_keeps_animation_latch() {
    let mut app = create_hero_app(11);
    let hero = spawn_test_hero(&mut app, HeroConfig::hero_character());

    app.world_mut().send_event(HealthDelta { target: hero, delta: -12 });
    run_ticks(&mut app, 1);
    assert!(app.world().get::<Dead>(hero).is_some());

    app.world_mut().send_event(HealthDelta { target: hero, delta: 5 });
    run_ticks(&mut app, 1);

    let world = app.world();
    assert_eq!(world.get::<Health>(hero).unwrap().current, 3);
    assert!(world.get::<Dead>(hero).is_none());
    assert!(world.get::<AnimationParams>(hero).unwrap().is_dead);
}

#[test]
fn test_hero_spawned_without_health_is_dead() {
    let mut app = create_hero_app(5);
    let hero = spawn_test_hero(
        &mut app,
        HeroConfig {
            initial_health: 0,
            ..HeroConfig::hero_character()
        },
    );

    app.insert_resource(CursorRay::looking_down_at(Vec3::new(0.0, 0.0, -10.0)));
    app.world_mut().send_event(PlayerInputEvent::FirePressed);
    run_ticks(&mut app, 10);

    let world = app.world();
    assert!(world.get::<Health>(hero).unwrap().is_dead());
    assert!(world.get::<Dead>(hero).is_some());
    assert!(world.get::<AnimationParams>(hero).unwrap().is_dead);

    // EntityDied ровно один раз, несмотря на 10 tick'ов
    let deaths = &world.resource::<CollectedDeaths>().0;
    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[0].entity, hero);
    assert_eq!(deaths[0].health, 0);
    assert_eq!(shot_count(&app), 0);
}
