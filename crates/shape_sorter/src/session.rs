use bevy::color::palettes::css::{BLUE, GREEN, RED, YELLOW};
use bevy::prelude::*;
use sorter_helpers::restart::Restartable;
use sorter_helpers::WINDOW_HEIGHT;
use strum::EnumIter;

/// Bounding-box side length shared by every piece and slot.
pub const SHAPE_SIZE: f32 = 80.0;

/// How many frames the "CORRECT!" banner stays up after a good placement.
pub const FEEDBACK_FRAMES: u32 = 60;

const TRAY_Y: f32 = WINDOW_HEIGHT - SHAPE_SIZE - 30.0;
const SLOT_Y: f32 = 100.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter)]
pub enum ShapeKind {
    Square,
    Triangle,
    Heart,
    Star,
}

/// Drag lifecycle of a piece. The grab offset (piece origin minus pointer)
/// only exists while the pointer holds the piece.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        grab: Vec2,
    },
}

/// A draggable shape. `pos` is the top-left corner of its bounding box in
/// layout space (top-left origin, y down, same as the window).
#[derive(Clone, Debug)]
pub struct ShapePiece {
    pub kind: ShapeKind,
    pub color: Color,
    pub pos: Vec2,
    pub target: usize,
    pub phase: DragPhase,
}

impl ShapePiece {
    fn new(kind: ShapeKind, color: impl Into<Color>, x: f32, target: usize) -> Self {
        Self {
            kind,
            color: color.into(),
            pos: Vec2::new(x, TRAY_Y),
            target,
            phase: DragPhase::Idle,
        }
    }

    /// Recomputed from the current position, so it is never stale.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.pos, self.pos + Vec2::splat(SHAPE_SIZE))
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }
}

/// An outlined cutout a matching piece snaps into.
#[derive(Clone, Debug)]
pub struct Slot {
    pub kind: ShapeKind,
    pub index: usize,
    pub pos: Vec2,
    pub filled: bool,
    pub fill_color: Option<Color>,
}

impl Slot {
    fn new(kind: ShapeKind, index: usize, x: f32) -> Self {
        Self {
            kind,
            index,
            pos: Vec2::new(x, SLOT_Y),
            filled: false,
            fill_color: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.pos, self.pos + Vec2::splat(SHAPE_SIZE))
    }
}

/// All mutable game state: the pieces in play, the slots they belong to and
/// the banner countdown. Collection order is stable; slot `index` matches a
/// unique piece `target`.
#[derive(Resource, Clone, Debug)]
pub struct Session {
    pub pieces: Vec<ShapePiece>,
    pub slots: Vec<Slot>,
    pub feedback_frames: u32,
}

impl Session {
    /// Deterministic starting layout: a tray row of colored pieces at the
    /// bottom, matching outlined slots across the top. Piece i's kind always
    /// equals slot i's kind.
    pub fn new() -> Self {
        Self {
            pieces: vec![
                ShapePiece::new(ShapeKind::Square, RED, 100.0, 0),
                ShapePiece::new(ShapeKind::Triangle, BLUE, 220.0, 1),
                ShapePiece::new(ShapeKind::Heart, GREEN, 340.0, 2),
                ShapePiece::new(ShapeKind::Star, YELLOW, 460.0, 3),
            ],
            slots: vec![
                Slot::new(ShapeKind::Square, 0, 100.0),
                Slot::new(ShapeKind::Triangle, 1, 250.0),
                Slot::new(ShapeKind::Heart, 2, 400.0),
                Slot::new(ShapeKind::Star, 3, 550.0),
            ],
            feedback_frames: 0,
        }
    }

    /// Replaces everything with a fresh layout, discarding any in-progress
    /// drag and cancelling the banner.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advances the banner countdown by one rendered frame and reports
    /// whether the banner shows this frame. The countdown only ever moves
    /// down, one frame at a time, and stops at zero.
    pub fn tick_feedback(&mut self) -> bool {
        if self.feedback_frames == 0 {
            return false;
        }
        self.feedback_frames -= 1;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Restartable for Session {
    fn restart(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn pieces_and_slots_pair_up() {
        let session = Session::new();

        assert_eq!(session.pieces.len(), session.slots.len());
        for (i, piece) in session.pieces.iter().enumerate() {
            assert_eq!(piece.target, i);
            assert_eq!(session.slots[i].index, i);
            assert_eq!(piece.kind, session.slots[i].kind);
        }
    }

    #[test]
    fn every_kind_appears_exactly_once() {
        let session = Session::new();

        for kind in ShapeKind::iter() {
            assert_eq!(
                session.pieces.iter().filter(|p| p.kind == kind).count(),
                1,
                "kind {kind:?} should have exactly one piece"
            );
        }
    }

    #[test]
    fn fresh_session_is_unfilled_and_quiet() {
        let session = Session::new();

        assert!(session.slots.iter().all(|s| !s.filled));
        assert!(session.slots.iter().all(|s| s.fill_color.is_none()));
        assert!(session.pieces.iter().all(|p| !p.is_dragging()));
        assert_eq!(session.feedback_frames, 0);
    }

    #[test]
    fn reset_restores_initial_layout() {
        let mut session = Session::new();
        let initial = session.clone();

        session.pieces[0].pos = Vec2::new(5.0, 5.0);
        session.pieces[1].phase = DragPhase::Dragging { grab: Vec2::ZERO };
        session.slots[2].filled = true;
        session.slots[2].fill_color = Some(session.pieces[2].color);
        session.feedback_frames = 42;

        session.reset();

        assert_eq!(session.feedback_frames, 0);
        for (slot, fresh) in session.slots.iter().zip(&initial.slots) {
            assert!(!slot.filled);
            assert!(slot.fill_color.is_none());
            assert_eq!(slot.pos, fresh.pos);
        }
        for (piece, fresh) in session.pieces.iter().zip(&initial.pieces) {
            assert_eq!(piece.pos, fresh.pos);
            assert!(!piece.is_dragging());
        }
    }

    #[test]
    fn feedback_countdown_loses_one_frame_per_tick_and_floors_at_zero() {
        let mut session = Session::new();
        session.feedback_frames = FEEDBACK_FRAMES;

        for expected in (0..FEEDBACK_FRAMES).rev() {
            assert!(session.tick_feedback(), "banner should show at {expected}");
            assert_eq!(session.feedback_frames, expected);
        }

        assert_eq!(session.feedback_frames, 0);
        assert!(!session.tick_feedback());
        assert_eq!(session.feedback_frames, 0, "countdown must not go negative");
    }

    #[test]
    fn bounds_track_position() {
        let mut session = Session::new();
        session.pieces[0].pos = Vec2::new(10.0, 20.0);

        let bounds = session.pieces[0].bounds();
        assert_eq!(bounds.min, Vec2::new(10.0, 20.0));
        assert_eq!(bounds.max, Vec2::new(10.0 + SHAPE_SIZE, 20.0 + SHAPE_SIZE));
    }
}
