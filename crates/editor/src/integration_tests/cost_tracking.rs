use crate::config::{ORGANELLE_MOVE_COST, ORGANELLE_REMOVE_COST};
use crate::cost_resolver;
use crate::edit_data::EditData;
use crate::hex::Hex;
use crate::membrane::MembraneKind;
use crate::organelles::OrganelleKind;
use crate::test_harness::TestEditor;

// ====================================================================
// Budget / cost resolver integration tests (ED-033, ED-034)
// ====================================================================

#[test]
fn test_budget_tracks_folded_cost_not_face_value() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Chloroplast, Hex::new(1, 0));
    assert_eq!(editor.net_cost(), 6.0);

    editor.remove_at(Hex::new(1, 0));
    // Face value would be 6 + removal fee; the fold nets the pair to zero.
    assert_eq!(editor.net_cost(), 0.0);
}

#[test]
fn test_place_then_move_costs_single_placement() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Chloroplast, Hex::new(1, 0));
    editor.move_organelle(Hex::new(1, 0), Hex::new(2, 0));
    assert_eq!(
        editor.net_cost(),
        OrganelleKind::Chloroplast.cost(),
        "moving a fresh placement must not cost extra"
    );
}

#[test]
fn test_moving_an_old_organelle_costs_one_move_fee() {
    let mut editor =
        TestEditor::new().with_preexisting_organelle(OrganelleKind::Vacuole, Hex::ORIGIN);
    assert_eq!(editor.net_cost(), 0.0);

    editor.move_organelle(Hex::ORIGIN, Hex::new(1, 0));
    editor.move_organelle(Hex::new(1, 0), Hex::new(1, 1));
    // Two drags, one net move.
    assert_eq!(editor.net_cost(), ORGANELLE_MOVE_COST);

    editor.move_organelle(Hex::new(1, 1), Hex::ORIGIN);
    // Back where it started: the whole excursion is free.
    assert_eq!(editor.net_cost(), 0.0);
}

#[test]
fn test_undo_refunds_and_redo_recharges() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Mitochondrion, Hex::new(1, 0));
    assert_eq!(editor.net_cost(), 12.0);

    editor.undo();
    assert_eq!(editor.net_cost(), 0.0, "undone edits cost nothing");

    editor.redo();
    assert_eq!(editor.net_cost(), 12.0);
}

#[test]
fn test_experimenting_costs_as_if_done_directly() {
    // Place, remove, place elsewhere: only the final placement is paid.
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Chloroplast, Hex::new(1, 0));
    editor.remove_at(Hex::new(1, 0));
    editor.place(OrganelleKind::Chloroplast, Hex::new(3, 0));
    assert_eq!(editor.net_cost(), OrganelleKind::Chloroplast.cost());
}

#[test]
fn test_removing_an_old_organelle_costs_the_fee() {
    let mut editor =
        TestEditor::new().with_preexisting_organelle(OrganelleKind::Flagellum, Hex::ORIGIN);
    editor.remove_at(Hex::ORIGIN);
    assert_eq!(editor.net_cost(), ORGANELLE_REMOVE_COST);
}

#[test]
fn test_new_cell_zeroes_the_bill() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Nitrogenase, Hex::new(0, 0));
    editor.change_membrane(MembraneKind::Chitin);
    assert!(editor.net_cost() > 0.0);

    editor.new_cell();
    assert_eq!(
        editor.net_cost(),
        0.0,
        "nothing before a layout reset contributes cost"
    );

    editor.place(OrganelleKind::Cytoplasm, Hex::ORIGIN);
    assert_eq!(editor.net_cost(), OrganelleKind::Cytoplasm.cost());
}

#[test]
fn test_pending_candidate_preview_matches_commit() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Chloroplast, Hex::new(1, 0));

    // Preview the removal the way the UI would, without committing.
    let candidate = {
        let org = editor.layout().organelle_at(Hex::new(1, 0)).unwrap();
        EditData::RemoveOrganelle {
            id: org.id,
            kind: org.kind,
            hex: Hex::new(1, 0),
        }
    };
    let previewed = cost_resolver::calculate_cost(
        editor.history().performed_data(),
        Some(&candidate),
    );

    editor.remove_at(Hex::new(1, 0));
    assert_eq!(
        previewed,
        editor.net_cost(),
        "previewed cost must equal the cost after committing"
    );
}

#[test]
fn test_rigidity_drag_bills_net_delta() {
    let mut editor = TestEditor::new();
    editor.change_rigidity(0.25);
    editor.change_rigidity(0.5);
    editor.change_rigidity(0.75);
    // Three drag steps, one net adjustment of 0.75.
    assert_eq!(editor.net_cost(), 15.0);

    editor.change_rigidity(0.0);
    assert_eq!(editor.net_cost(), 0.0);
}
