//! ECS bridge: save/load the editing session in response to events (SAVE-02).
//!
//! The editor UI fires `SaveSessionEvent`/`LoadSessionEvent` with a target
//! path; the systems here do the blocking file work inside the frame (session
//! files are a few kilobytes) and log the outcome. A failed load keeps the
//! current session untouched.

use bevy::prelude::*;

use editor::action_history::ActionHistory;
use editor::cell_layout::CellLayout;

use crate::session_io;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Write the current session to `path`.
#[derive(Event)]
pub struct SaveSessionEvent {
    pub path: String,
}

/// Replace the current session with the one stored at `path`.
#[derive(Event)]
pub struct LoadSessionEvent {
    pub path: String,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn handle_save_events(
    mut events: EventReader<SaveSessionEvent>,
    history: Res<ActionHistory>,
    layout: Res<CellLayout>,
) {
    for event in events.read() {
        match session_io::save_session(&event.path, &history, &layout) {
            Ok(()) => info!("session saved to {}", event.path),
            Err(e) => warn!("failed to save session to {}: {e}", event.path),
        }
    }
}

/// Exclusive system: a successful load swaps both resources at once, so no
/// other system can ever observe a half-restored session.
fn handle_load_events(world: &mut World) {
    let paths: Vec<String> = world
        .resource_mut::<Events<LoadSessionEvent>>()
        .drain()
        .map(|event| event.path)
        .collect();

    for path in paths {
        match session_io::load_session(&path) {
            Ok(restored) => {
                world.insert_resource(restored.history);
                world.insert_resource(restored.layout);
                info!("session loaded from {path}");
            }
            Err(e) => warn!("failed to load session from {path}: {e} (keeping current session)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SaveSessionEvent>()
            .add_event::<LoadSessionEvent>()
            .add_systems(Update, (handle_save_events, handle_load_events).chain());
    }
}
