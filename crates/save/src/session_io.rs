//! Encode, decode, save, and load whole editing sessions (SAVE-02).
//!
//! The wire shape is header ++ lz4(bitcode(SessionData)). Restoring replays
//! every recorded action from the recorded starting layout and then undoes
//! back to the saved cursor, so a loaded session satisfies exactly the same
//! invariants as the live one it was recorded from — including a populated
//! redo tail.

use editor::action_history::ActionHistory;
use editor::cell_layout::CellLayout;

use crate::atomic_write::atomic_write;
use crate::file_header::{self, FLAG_COMPRESSED};
use crate::save_error::SaveError;
use crate::session_codec;
use crate::session_types::{SessionData, CURRENT_SESSION_VERSION};

/// A session rebuilt from disk.
#[derive(Debug)]
pub struct RestoredSession {
    pub history: ActionHistory,
    pub layout: CellLayout,
}

/// Serialize a live session to file bytes.
///
/// The session's starting layout is recovered by undoing a clone of the
/// history against a clone of the live layout; the originals are untouched.
pub fn encode_session(history: &ActionHistory, layout: &CellLayout) -> Vec<u8> {
    let mut rewound_history = history.clone();
    let mut starting_layout = layout.clone();
    while rewound_history.undo(&mut starting_layout) {}

    let data = session_codec::record_session(history, &starting_layout);
    let encoded = bitcode::encode(&data);
    let compressed = lz4_flex::compress_prepend_size(&encoded);
    file_header::wrap_with_header(&compressed, FLAG_COMPRESSED)
}

/// Rebuild a session from file bytes.
///
/// Fails without side effects on any structural, checksum, or version
/// problem; a session is never partially restored.
pub fn decode_session(bytes: &[u8]) -> Result<RestoredSession, SaveError> {
    let (header, payload) = file_header::unwrap_header(bytes)?;

    let encoded = if header.flags & FLAG_COMPRESSED != 0 {
        lz4_flex::decompress_size_prepended(payload)
            .map_err(|e| SaveError::Decode(e.to_string()))?
    } else {
        payload.to_vec()
    };

    let data: SessionData = bitcode::decode(&encoded)?;

    if data.version > CURRENT_SESSION_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: CURRENT_SESSION_VERSION,
            found: data.version,
        });
    }
    if data.version == 0 {
        return Err(SaveError::Decode(
            "session data carries no version".to_string(),
        ));
    }
    let cursor = data.cursor as usize;
    if cursor > data.actions.len() {
        return Err(SaveError::Corrupted(format!(
            "cursor {cursor} past action count {}",
            data.actions.len()
        )));
    }

    // Validate and convert everything before touching history state, so a
    // bad action in the middle cannot leave a half-replayed session behind.
    let mut layout = session_codec::layout_from_recorded(&data.starting_layout)?;
    let actions = data
        .actions
        .iter()
        .map(session_codec::action_from_recorded)
        .collect::<Result<Vec<_>, _>>()?;

    let mut history = ActionHistory::default();
    for action in actions {
        history.add_action(action, &mut layout);
    }
    for _ in cursor..history.len() {
        let undone = history.undo(&mut layout);
        debug_assert!(undone, "rewind past recorded cursor");
    }

    if let Some(max_id) = session_codec::session_max_id(&data) {
        layout.raise_organelle_id_floor(max_id + 1);
    }

    Ok(RestoredSession { history, layout })
}

/// Atomically write the session to `path`.
pub fn save_session(
    path: &str,
    history: &ActionHistory,
    layout: &CellLayout,
) -> Result<(), SaveError> {
    let bytes = encode_session(history, layout);
    atomic_write(path, &bytes)?;
    Ok(())
}

/// Read and rebuild the session stored at `path`.
pub fn load_session(path: &str) -> Result<RestoredSession, SaveError> {
    let bytes = std::fs::read(path)?;
    decode_session(&bytes)
}
