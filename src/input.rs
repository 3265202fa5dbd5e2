use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct PointerPlugin;
impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_systems(Update, track_cursor_pos);
    }
}

/// Latest pointer position in window coordinates (origin top-left, matching
/// canvas rows). `None` until the first pointer event of the session.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorPos(pub Option<Vec2>);

/// Record the freshest pointer coordinate; last write wins. The garden reads
/// the cell at most once per tick, so event-rate writes need no throttling.
fn track_cursor_pos(
    mut cursor_moved: MessageReader<CursorMoved>,
    mut touch_events: MessageReader<TouchInput>,
    mut pos: ResMut<CursorPos>,
) {
    for e in cursor_moved.read() {
        pos.0 = Some(e.position);
    }
    for e in touch_events.read() {
        if matches!(e.phase, TouchPhase::Started | TouchPhase::Moved) {
            pos.0 = Some(e.position);
        }
    }
}
