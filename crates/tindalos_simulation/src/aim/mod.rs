//! Aim domain: направление огня, locomotion blend, facing, камера
//!
//! Содержит:
//! - aim_blend (signed angle между огнём и движением → forward/slide)
//! - fire_direction / facing_rotation (курсор → горизонтальное направление)
//! - camera_offset (смещение камеры к курсору)

pub mod blend;
pub mod cursor;

pub use blend::*;
pub use cursor::*;
