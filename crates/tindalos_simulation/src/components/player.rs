//! Player control marker component
//!
//! Отмечает героя, которым управляет игрок через input хоста.

use bevy::prelude::Component;

/// Marker component для player-controlled героя
///
/// `apply_player_input` пишет `PlayerInputEvent` только в героев с этим маркером.
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
