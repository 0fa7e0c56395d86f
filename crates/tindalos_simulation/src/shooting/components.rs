//! Fire controller: два состояния: Ready / CoolingDown
//!
//! Cooldown не callback таймер, а timestamp на детерминированных часах:
//! - выстрел: Ready → CoolingDown { ready_at = now + fire_rate }
//! - `refresh(now)`: CoolingDown → Ready, когда now >= ready_at
//! Других путей обратно в Ready нет.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub enum FireState {
    #[default]
    Ready,
    CoolingDown {
        /// Время симуляции (секунды), когда можно стрелять снова
        ready_at: f64,
    },
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct FireController {
    pub state: FireState,
    /// Счётчик выстрелов (статистика/тесты)
    pub shots_fired: u32,
    /// Время последнего выстрела
    pub last_shot_at: Option<f64>,
}

impl FireController {
    pub fn is_ready(&self) -> bool {
        matches!(self.state, FireState::Ready)
    }

    /// Истечение cooldown. Возвращает true, если именно сейчас стали Ready.
    pub fn refresh(&mut self, now: f64) -> bool {
        match self.state {
            FireState::CoolingDown { ready_at } if now >= ready_at => {
                self.state = FireState::Ready;
                true
            }
            _ => false,
        }
    }

    /// Переход Ready → CoolingDown, если выстрел разрешён
    ///
    /// Условия: Ready && fire_held && fire_direction != 0.
    /// Возвращает true, если выстрел состоялся (спавн делает вызывающий).
    pub fn try_fire(&mut self, fire_held: bool, fire_direction: Vec3, now: f64, fire_rate: f32) -> bool {
        if !self.is_ready() || !fire_held || fire_direction.length_squared() <= 0.0 {
            return false;
        }

        self.state = FireState::CoolingDown {
            ready_at: now + f64::from(fire_rate.max(0.0)),
        };
        self.shots_fired += 1;
        self.last_shot_at = Some(now);
        true
    }
}
