//! Movement domain: оси input → displacement → sweep + wall-slide
//!
//! Содержит:
//! - movement_direction (оси → clamped направление в горизонтальной плоскости)
//! - resolve_move (sweep move + одна deflection поправка)
//! - wall_slide (проекция остатка на плоскость стены)

pub mod resolver;

pub use resolver::*;
