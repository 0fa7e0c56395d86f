//! Combat module: здоровье, урон/лечение, смерть
//!
//! ECS ответственность:
//! - Health (signed, без пола), Dead marker
//! - HealthDelta → hit звук, EntityDied / EntityRevived
//!
//! Host ответственность:
//! - Полёт projectile и detection попаданий
//! - Перевод попадания в HealthDelta

pub mod events;
pub mod health;
pub mod systems;


pub use events::*;
pub use health::*;
pub use systems::*;
