use crate::hex::Hex;
use crate::membrane::MembraneKind;
use crate::organelles::OrganelleKind;
use crate::test_harness::TestEditor;

// ====================================================================
// Undo/Redo integration tests (ED-030)
// ====================================================================

#[test]
fn test_undo_restores_layout_exactly() {
    let mut editor = TestEditor::new();
    let before = editor.layout().clone();

    editor.place(OrganelleKind::Mitochondrion, Hex::new(1, 0));
    assert_eq!(editor.layout().organelle_count(), 1);

    editor.undo();
    assert_eq!(
        editor.layout(),
        &before,
        "layout should be restored field-for-field after undo"
    );
    assert!(!editor.history().can_undo());
    assert!(editor.history().can_redo());
}

#[test]
fn test_redo_reapplies_edit() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Vacuole, Hex::new(0, 1));
    let after_place = editor.layout().clone();

    editor.undo();
    editor.redo();
    assert_eq!(editor.layout(), &after_place);
    assert!(editor.history().can_undo());
    assert!(!editor.history().can_redo());
}

#[test]
fn test_undo_at_bottom_is_a_safe_no_op() {
    let mut editor = TestEditor::new();
    editor.undo();
    editor.undo();
    assert!(editor.history().is_empty());
    assert_eq!(editor.layout().organelle_count(), 0);
}

#[test]
fn test_redo_at_top_is_a_safe_no_op() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Cytoplasm, Hex::ORIGIN);
    editor.redo();
    assert_eq!(editor.history().action_index(), 1);
    assert_eq!(editor.layout().organelle_count(), 1);
}

#[test]
fn test_new_edit_discards_redo_branch() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Cytoplasm, Hex::new(0, 0));
    editor.place(OrganelleKind::Chloroplast, Hex::new(1, 0));
    editor.place(OrganelleKind::Vacuole, Hex::new(2, 0));
    assert_eq!(editor.history().action_index(), 3);

    editor.undo();
    editor.undo();
    assert_eq!(editor.history().action_index(), 1);

    editor.place(OrganelleKind::Flagellum, Hex::new(1, 1));
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.history().action_index(), 2);
    assert!(!editor.history().can_redo());

    // The discarded placements are really gone from the layout.
    assert!(editor.layout().organelle_at(Hex::new(1, 0)).is_none());
    assert!(editor.layout().organelle_at(Hex::new(2, 0)).is_none());
}

#[test]
fn test_undo_chain_walks_back_through_mixed_edits() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Cytoplasm, Hex::ORIGIN);
    editor.change_membrane(MembraneKind::Cellulose);
    editor.change_rigidity(0.5);
    editor.move_organelle(Hex::ORIGIN, Hex::new(1, 0));

    editor.undo(); // move back
    assert!(editor.layout().organelle_at(Hex::ORIGIN).is_some());
    editor.undo(); // rigidity back
    assert_eq!(editor.layout().rigidity(), 0.0);
    editor.undo(); // membrane back
    assert_eq!(editor.layout().membrane(), MembraneKind::Single);
    editor.undo(); // placement back
    assert_eq!(editor.layout().organelle_count(), 0);
    assert!(!editor.history().can_undo());
}

#[test]
fn test_undo_restores_buried_occupant() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Cytoplasm, Hex::ORIGIN);
    editor.place(OrganelleKind::Nucleus, Hex::ORIGIN);
    assert_eq!(
        editor.layout().organelle_at(Hex::ORIGIN).unwrap().kind,
        OrganelleKind::Nucleus
    );

    editor.undo();
    assert_eq!(
        editor.layout().organelle_at(Hex::ORIGIN).unwrap().kind,
        OrganelleKind::Cytoplasm,
        "undoing the replacement should resurrect the buried organelle"
    );
}

#[test]
fn test_new_cell_undo_restores_whole_layout() {
    let mut editor = TestEditor::new();
    editor.place(OrganelleKind::Mitochondrion, Hex::new(0, 0));
    editor.place(OrganelleKind::Flagellum, Hex::new(1, 0));
    editor.change_membrane(MembraneKind::Double);
    let populated = editor.layout().clone();

    editor.new_cell();
    assert_eq!(editor.layout().organelle_count(), 0);
    assert_eq!(editor.layout().membrane(), MembraneKind::Single);

    editor.undo();
    assert_eq!(editor.layout(), &populated);
}
