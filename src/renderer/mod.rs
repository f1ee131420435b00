//! Rendering seam
//!
//! The core never draws. A host implements `Surface` for its canvas and calls
//! `draw_frame` after each tick. The world is already sized in canvas pixels,
//! so positions and sizes go to the surface unchanged. The resolution's render
//! scale only sizes text metrics.

use glam::Vec2;

use crate::sim::{Aabb, EntityId, EntityKind, GameState, SpriteId};

/// Colors the core asks for; the surface decides what they look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Background,
    Placeholder,
    Text,
}

/// A drawing target
pub trait Surface {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    fn draw_sprite(&mut self, sprite: SpriteId, min: Vec2, size: Vec2);
    fn draw_text(&mut self, text: &str, at: Vec2, color: Color);
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub id: EntityId,
    pub kind: EntityKind,
    pub bounds: Aabb,
    pub sprite: Option<SpriteId>,
}

/// Entities to draw this frame: those with a box that touches the world
pub fn snapshot(state: &GameState) -> Vec<Drawable> {
    state
        .entities
        .iter()
        .filter_map(|entity| {
            let bounds = entity.bounds()?;
            state.world.contains(&bounds).then_some(Drawable {
                id: entity.id,
                kind: entity.kind,
                bounds,
                sprite: entity.sprite,
            })
        })
        .collect()
}

/// Draw entities and HUD for the current state.
///
/// `scale` is the resolution's render scale, applied to the id label offset.
pub fn draw_frame(surface: &mut impl Surface, state: &GameState, scale: f32) {
    let world = state.world;
    surface.fill_rect(Vec2::ZERO, Vec2::new(world.width, world.height), Color::Background);

    for drawable in snapshot(state) {
        let min = drawable.bounds.min;
        let size = drawable.bounds.max - drawable.bounds.min;
        match drawable.sprite {
            Some(sprite) => surface.draw_sprite(sprite, min, size),
            // No sprite: gray box labelled with the entity id
            None => {
                surface.fill_rect(min, size, Color::Placeholder);
                surface.draw_text(
                    &drawable.id.to_string(),
                    min + Vec2::new(0.0, 16.0 * scale),
                    Color::Text,
                );
            }
        }
    }

    let hud = state.hud();
    surface.draw_text(&format!("Tick: {}", hud.tick), Vec2::new(10.0, 20.0), Color::Text);
    surface.draw_text(
        &format!("Score: {}", hud.score),
        Vec2::new(world.width - 100.0, 20.0),
        Color::Text,
    );
    surface.draw_text(
        &format!("Lives: {}", hud.lives),
        Vec2::new(world.width - 220.0, 20.0),
        Color::Text,
    );
}
