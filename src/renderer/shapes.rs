//! Shape generation for 2D primitives
//!
//! All positions are playfield pixels; `RenderState` maps them to NDC.

use glam::Vec2;

use super::vertex::{Palette, Vertex};
use crate::sim::{GameState, Rect, pipe_rects};
use crate::tuning::Tuning;

/// Thickness of the dark outline around pillars and the player
const OUTLINE: f32 = 4.0;
/// Height of the lip drawn where a pillar meets the gap
const CAP_HEIGHT: f32 = 40.0;
/// Side of the square eye in the middle of the player
const EYE_SIZE: f32 = 16.0;

/// Two triangles covering `rect`, with separate top and bottom colors
pub fn gradient_quad(rect: &Rect, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let (min, max) = (rect.min, rect.max);
    [
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]
}

pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    gradient_quad(rect, color, color)
}

/// Quad of `size` centered on `center`, rotated clockwise by `degrees`
/// (clockwise on screen, since y points down)
pub fn rotated_quad(center: Vec2, size: Vec2, degrees: f32, color: [f32; 4]) -> [Vertex; 6] {
    let rotation = Vec2::from_angle(degrees.to_radians());
    let half = size * 0.5;
    let corner = |x: f32, y: f32| {
        let p = center + rotation.rotate(Vec2::new(x, y));
        Vertex::new(p.x, p.y, color)
    };
    let (tl, tr) = (corner(-half.x, -half.y), corner(half.x, -half.y));
    let (bl, br) = (corner(-half.x, half.y), corner(half.x, half.y));
    [tl, tr, bl, bl, tr, br]
}

/// Filled rectangle with a dark border
pub fn outlined_quad(rect: &Rect, fill: [f32; 4], outline: [f32; 4]) -> Vec<Vertex> {
    let inner = Rect::new(rect.min + Vec2::splat(OUTLINE), rect.max - Vec2::splat(OUTLINE));
    let mut vertices = Vec::with_capacity(12);
    vertices.extend(quad(rect, outline));
    if inner.size().min_element() > 0.0 {
        vertices.extend(quad(&inner, fill));
    }
    vertices
}

/// Build every vertex for one frame
///
/// Draw order: pillars, lava, player.
pub fn scene(state: &GameState, tuning: &Tuning, palette: &Palette, tilt_degrees: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(state.pipes.len() * 36 + 48);

    for pipe in &state.pipes {
        let (top, bottom) = pipe_rects(pipe, tuning);
        vertices.extend(outlined_quad(&top, palette.pillar, palette.outline));
        vertices.extend(outlined_quad(&bottom, palette.pillar, palette.outline));

        let top_cap = Rect::new(
            Vec2::new(top.min.x, (top.max.y - CAP_HEIGHT).max(0.0)),
            top.max,
        );
        let bottom_cap = Rect::new(
            bottom.min,
            Vec2::new(bottom.max.x, (bottom.min.y + CAP_HEIGHT).min(bottom.max.y)),
        );
        vertices.extend(outlined_quad(&top_cap, palette.pillar_cap, palette.outline));
        vertices.extend(outlined_quad(&bottom_cap, palette.pillar_cap, palette.outline));
    }

    // Lava band with a darker crust on top
    let lava = Rect::new(
        Vec2::new(0.0, tuning.ground_line()),
        Vec2::new(tuning.playfield_width, tuning.playfield_height),
    );
    vertices.extend(gradient_quad(&lava, palette.lava_top, palette.lava_bottom));
    let crust = Rect::new(lava.min, Vec2::new(lava.max.x, lava.min.y + OUTLINE));
    vertices.extend(quad(&crust, palette.lava_bottom));

    // Player, tilted around its center
    let body = Rect::from_xywh(
        tuning.player_x,
        state.player.y,
        tuning.player_width,
        tuning.player_height,
    );
    let center = body.center();
    let size = body.size();
    vertices.extend(rotated_quad(center, size, tilt_degrees, palette.outline));
    vertices.extend(rotated_quad(
        center,
        size - Vec2::splat(OUTLINE),
        tilt_degrees,
        palette.player,
    ));
    vertices.extend(rotated_quad(
        center,
        Vec2::splat(EYE_SIZE),
        tilt_degrees,
        palette.player_eye,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Pipe;

    fn close(a: [f32; 2], b: [f32; 2]) -> bool {
        (Vec2::from(a) - Vec2::from(b)).length() < 1e-3
    }

    #[test]
    fn test_quad_covers_rect() {
        let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        let vertices = quad(&rect, [1.0; 4]);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_rotated_quad_without_tilt_is_axis_aligned() {
        let vertices = rotated_quad(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0), 0.0, [1.0; 4]);
        assert!(close(vertices[0].position, [40.0, 45.0]));
        assert!(close(vertices[5].position, [60.0, 55.0]));
    }

    #[test]
    fn test_rotated_quad_quarter_turn() {
        let vertices = rotated_quad(Vec2::ZERO, Vec2::new(20.0, 10.0), 90.0, [1.0; 4]);
        // Top-left corner (-10, -5) turns clockwise on screen to (5, -10)
        assert!(close(vertices[0].position, [5.0, -10.0]));
    }

    #[test]
    fn test_scene_vertex_count() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let palette = Palette::STANDARD;

        // Lava (2 quads) + player (3 quads)
        let empty = scene(&state, &tuning, &palette, 0.0);
        assert_eq!(empty.len(), 5 * 6);

        // Each pipe: two pillars and two caps, each outline + fill
        state.pipes.push(Pipe::new(200.0, 300.0));
        let one = scene(&state, &tuning, &palette, 0.0);
        assert_eq!(one.len(), 5 * 6 + 8 * 6);
    }

    #[test]
    fn test_high_contrast_palette_is_used() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);
        let settings = crate::Settings {
            high_contrast: true,
            ..Default::default()
        };
        let palette = Palette::for_settings(&settings);
        let vertices = scene(&state, &tuning, &palette, 0.0);
        assert!(vertices.iter().any(|v| v.color == Palette::HIGH_CONTRAST.player));
    }
}
