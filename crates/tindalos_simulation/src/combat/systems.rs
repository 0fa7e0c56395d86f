//! Combat systems (FixedUpdate)

use bevy::prelude::*;

use super::{apply_health_delta, EntityDied, EntityRevived, HealthDelta};
use crate::components::{AnimationParams, Dead, Health, HeroConfig};
use crate::host::{PlaySoundRequest, SoundCue};

/// Система: применить все HealthDelta за этот tick
///
/// - Dead marker вешается при смерти и снимается при revive
/// - AnimationParams.is_dead: one-way latch, revive его НЕ сбрасывает
/// - Неизвестный target → warning, event пропускается
pub fn apply_health_deltas(
    mut commands: Commands,
    mut deltas: EventReader<HealthDelta>,
    mut heroes: Query<(&mut Health, &mut AnimationParams, &HeroConfig, &Transform)>,
    mut died_events: EventWriter<EntityDied>,
    mut revived_events: EventWriter<EntityRevived>,
    mut sound_events: EventWriter<PlaySoundRequest>,
) {
    for event in deltas.read() {
        let Ok((mut health, mut anim, config, transform)) = heroes.get_mut(event.target) else {
            crate::logger::log_warning(&format!(
                "HealthDelta для {:?} пропущен: нет Health/HeroConfig",
                event.target
            ));
            continue;
        };

        let mut sounds: Vec<SoundCue> = Vec::new();
        let change = apply_health_delta(
            &mut health,
            event.delta,
            transform.translation,
            config.hit_sound.as_deref(),
            &mut sounds,
        );

        for cue in sounds {
            sound_events.write(PlaySoundRequest {
                source: event.target,
                sound: cue.sound,
                location: cue.location,
            });
        }

        if change.is_dead {
            anim.latch_dead();
        }

        if change.died() {
            commands.entity(event.target).insert(Dead);
            died_events.write(EntityDied {
                entity: event.target,
                health: change.current,
            });
            crate::logger::log(&format!(
                "💀 {:?} died (health {} → {})",
                event.target, change.previous, change.current
            ));
        } else if change.revived() {
            commands.entity(event.target).remove::<Dead>();
            revived_events.write(EntityRevived {
                entity: event.target,
                health: change.current,
            });
            crate::logger::log(&format!(
                "{:?} revived (health {} → {})",
                event.target, change.previous, change.current
            ));
        }
    }
}

/// Система: Dead marker для героев, мёртвых без HealthDelta
///
/// Покрывает спавн с `initial_health <= 0`: Health уже <= 0,
/// а события смерти не было. Идёт первой в FixedUpdate chain.
pub fn sync_dead_markers(
    mut commands: Commands,
    mut heroes: Query<(Entity, &Health, &mut AnimationParams), Without<Dead>>,
    mut died_events: EventWriter<EntityDied>,
) {
    for (entity, health, mut anim) in heroes.iter_mut() {
        if !health.is_dead() {
            continue;
        }

        anim.latch_dead();
        commands.entity(entity).insert(Dead);
        died_events.write(EntityDied {
            entity,
            health: health.current,
        });
        crate::logger::log(&format!("💀 {:?} dead on arrival (health {})", entity, health.current));
    }
}
