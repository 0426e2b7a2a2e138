//! Interference folding: net mutation point cost of an edit window (ED-033).
//!
//! Naively summing every performed edit's face value would punish
//! experimenting: place, remove, place elsewhere must cost what the final
//! placement costs, nothing more. The resolver folds the performed edit
//! sequence (optionally extended with one pending candidate) down to its
//! minimal net form and sums that.
//!
//! Resolution order is oldest-acts-first: when an earlier and a later edit
//! interfere, the later one is allowed to replace, cancel, or absorb the
//! earlier one — never the reverse. What the player did most recently wins.

use crate::edit_data::{EditData, Interference};

/// Reduce `window` to its minimal net form.
///
/// The most recent history-resetting edit partitions the window: everything
/// before it is dropped, the resetting edit itself stays (contributing its
/// own cost, zero for every current resetting kind). The remaining entries
/// are reduced pairwise until a full pass finds no interference.
pub fn fold(mut window: Vec<EditData>) -> Vec<EditData> {
    if let Some(cut) = window.iter().rposition(|edit| edit.resets_history()) {
        window.drain(..cut);
    }

    // Every reduction removes one entry, so the fixed point arrives after
    // at most `len` restarts. A merged entry lands in the later slot and is
    // re-checked against everything on the next pass, since merging can
    // create interference the unmerged parts did not have.
    'reduce: loop {
        for earlier in 0..window.len() {
            for later in earlier + 1..window.len() {
                match window[earlier].interference_with(&window[later]) {
                    Interference::NoInterference => {}
                    Interference::ReplacesOther => {
                        window.remove(earlier);
                        continue 'reduce;
                    }
                    Interference::CancelsOut => {
                        window.remove(later);
                        window.remove(earlier);
                        continue 'reduce;
                    }
                    Interference::Combinable => {
                        let merged = window[earlier].combine(&window[later]);
                        window[later] = merged;
                        window.remove(earlier);
                        continue 'reduce;
                    }
                }
            }
        }
        break;
    }
    window
}

/// Net mutation point cost of the performed edits, optionally previewing a
/// pending candidate as if it were committed on top of them.
///
/// This is the entry point the UI budget display uses: pass
/// `history.performed_data()` and, while the player hovers a tool, the
/// candidate edit, and compare the result against the budget.
pub fn calculate_cost<'a, I>(performed: I, pending: Option<&EditData>) -> f64
where
    I: IntoIterator<Item = &'a EditData>,
{
    let mut window: Vec<EditData> = performed.into_iter().cloned().collect();
    if let Some(candidate) = pending {
        window.push(candidate.clone());
    }
    fold(window).iter().map(EditData::cost).sum()
}
