use bevy::prelude::*;

use crate::session::{DragPhase, Session, FEEDBACK_FRAMES};

/// A discrete pointer event in layout space, already merged from mouse and
/// touch by the input glue.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

/// Advances the drag state machine by one event. Unmatched positions are
/// no-ops; nothing here can fail.
pub fn handle_pointer(session: &mut Session, event: PointerEvent) {
    match event {
        PointerEvent::Down(position) => press(session, position),
        PointerEvent::Move(position) => drag(session, position),
        PointerEvent::Up(_) => release(session),
    }
}

/// The first piece under the pointer captures it; pieces later in the
/// collection cannot grab the same press.
fn press(session: &mut Session, position: Vec2) {
    for piece in &mut session.pieces {
        if piece.bounds().contains(position) {
            piece.phase = DragPhase::Dragging {
                grab: piece.pos - position,
            };
            break;
        }
    }
}

/// The held piece follows the pointer, offset by the grab vector so it does
/// not jump corner-to-cursor.
fn drag(session: &mut Session, position: Vec2) {
    for piece in &mut session.pieces {
        if let DragPhase::Dragging { grab } = piece.phase {
            piece.pos = position + grab;
        }
    }
}

/// The held piece is dropped unconditionally, then placement is evaluated:
/// only a slot that overlaps the piece AND carries the piece's target index
/// accepts it. A wrong slot leaves the piece exactly where it was dropped.
fn release(session: &mut Session) {
    for piece in &mut session.pieces {
        if !piece.is_dragging() {
            continue;
        }
        piece.phase = DragPhase::Idle;

        let bounds = piece.bounds();
        for slot in &mut session.slots {
            if slot.index != piece.target || slot.bounds().intersect(bounds).is_empty() {
                continue;
            }
            slot.filled = true;
            slot.fill_color = Some(piece.color);
            // Snap onto the slot so the fill lines up exactly.
            piece.pos = slot.pos;
            session.feedback_frames = FEEDBACK_FRAMES;
        }
    }
}
