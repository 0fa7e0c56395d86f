//! ECS Components для героя и арены
//!
//! Организация по доменам:
//! - actor: здоровье и смерть (Health, Dead)
//! - hero: marker + конфигурация (Hero, HeroConfig, FacingMode)
//! - input: latched input (HeroInput)
//! - animation: выходы для хоста (AnimationParams, CameraOffset)
//! - player: player control marker (Player)
//! - world: геометрия арены (Obstacle, CollisionChannel, ArenaGround)

pub mod actor;
pub mod animation;
pub mod hero;
pub mod input;
pub mod player;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use hero::*;
pub use input::*;
pub use player::*;
pub use world::*;
