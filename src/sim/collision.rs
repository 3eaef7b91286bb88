//! Axis-aligned collision tests
//!
//! Every comparison is strict: rectangles that only share an edge do not
//! overlap, and a player resting exactly on the ground line survives.

use glam::Vec2;

use super::state::{Pipe, Player};
use crate::tuning::Tuning;

/// Axis-aligned rectangle in playfield pixels (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Horizontal spans strictly overlap
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }

    /// Vertical spans strictly overlap
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}

/// Bounding box of the player
pub fn player_rect(player: &Player, tuning: &Tuning) -> Rect {
    Rect::from_xywh(
        tuning.player_x,
        player.y,
        tuning.player_width,
        tuning.player_height,
    )
}

/// Top and bottom solids of a pipe
pub fn pipe_rects(pipe: &Pipe, tuning: &Tuning) -> (Rect, Rect) {
    let top = Rect::new(
        Vec2::new(pipe.x, 0.0),
        Vec2::new(pipe.right(tuning), pipe.gap_top(tuning)),
    );
    let bottom = Rect::new(
        Vec2::new(pipe.x, pipe.gap_bottom(tuning)),
        Vec2::new(pipe.right(tuning), tuning.playfield_height),
    );
    (top, bottom)
}

/// Player box intersects either solid of the pipe
///
/// Outside the playfield vertically still counts as solid, so a player
/// above the screen cannot slip over a pipe.
pub fn hits_pipe(player: &Rect, pipe: &Pipe, tuning: &Tuning) -> bool {
    let (top, bottom) = pipe_rects(pipe, tuning);
    if !player.overlaps_x(&top) {
        return false;
    }
    player.min.y < top.max.y || player.max.y > bottom.min.y
}

/// Bottom edge has crossed into the ground band
pub fn hits_ground(player: &Rect, tuning: &Tuning) -> bool {
    player.max.y > tuning.ground_line()
}

/// Top edge has left the playfield
pub fn above_ceiling(player: &Rect) -> bool {
    player.min.y < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::from_xywh(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
        let d = Rect::from_xywh(9.0, 9.0, 10.0, 10.0);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_pipe_rects_frame_the_gap() {
        let t = tuning();
        let (top, bottom) = pipe_rects(&Pipe::new(200.0, 400.0), &t);
        assert_eq!(top.max.y, 290.0);
        assert_eq!(bottom.min.y, 510.0);
        assert_eq!(bottom.max.y, t.playfield_height);
        assert_eq!(top.size().x, t.pipe_width);
    }

    #[test]
    fn test_player_inside_gap_is_safe() {
        let t = tuning();
        let pipe = Pipe::new(t.player_x, 400.0);
        let player = player_rect(&Player::new(380.0), &t);
        assert!(!hits_pipe(&player, &pipe, &t));
    }

    #[test]
    fn test_player_touching_gap_edges_is_safe() {
        let t = tuning();
        let pipe = Pipe::new(t.player_x, 400.0);
        // Top edge exactly on the top solid
        let player = player_rect(&Player::new(290.0), &t);
        assert!(!hits_pipe(&player, &pipe, &t));
        // Bottom edge exactly on the bottom solid
        let player = player_rect(&Player::new(510.0 - t.player_height), &t);
        assert!(!hits_pipe(&player, &pipe, &t));
    }

    #[test]
    fn test_player_crossing_gap_edges_hits() {
        let t = tuning();
        let pipe = Pipe::new(t.player_x, 400.0);
        let player = player_rect(&Player::new(289.9), &t);
        assert!(hits_pipe(&player, &pipe, &t));
        let player = player_rect(&Player::new(470.1), &t);
        assert!(hits_pipe(&player, &pipe, &t));
    }

    #[test]
    fn test_horizontal_touch_is_not_a_hit() {
        let t = tuning();
        let player = player_rect(&Player::new(0.0), &t);
        // Pipe starts exactly at the player's right edge
        let pipe = Pipe::new(t.player_x + t.player_width, 400.0);
        assert!(!hits_pipe(&player, &pipe, &t));
        // Pipe ends exactly at the player's left edge
        let pipe = Pipe::new(t.player_x - t.pipe_width, 400.0);
        assert!(!hits_pipe(&player, &pipe, &t));
    }

    #[test]
    fn test_ground_line_is_strict() {
        let t = tuning();
        let resting = player_rect(&Player::new(t.ground_line() - t.player_height), &t);
        assert!(!hits_ground(&resting, &t));
        let sunk = player_rect(&Player::new(t.ground_line() - t.player_height + 0.5), &t);
        assert!(hits_ground(&sunk, &t));
    }

    #[test]
    fn test_ceiling() {
        let t = tuning();
        assert!(!above_ceiling(&player_rect(&Player::new(0.0), &t)));
        assert!(above_ceiling(&player_rect(&Player::new(-0.1), &t)));
    }
}
