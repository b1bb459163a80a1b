use roster_core::{
    sample_roster, DeleteDialog, EditorDialog, EditorMode, EmployeeId, FormError, FormField,
    Submission,
};

fn fill_ann(dialog: &mut EditorDialog) {
    let values = [
        (FormField::FirstName, "Ann"),
        (FormField::LastName, "Lee"),
        (FormField::Email, "ann.lee@company.com"),
        (FormField::Phone, "+1 (555) 000-1111"),
        (FormField::Position, "Designer"),
        (FormField::Department, "Product"),
        (FormField::Salary, "72000"),
        (FormField::HireDate, "2024-03-01"),
    ];
    for (field, value) in values {
        dialog.set_field(field, value).unwrap();
    }
}

#[test]
fn create_mode_starts_blank_and_submits_add() {
    let mut dialog = EditorDialog::default();
    assert!(!dialog.is_open());

    dialog.open_create();
    assert_eq!(dialog.mode(), Some(&EditorMode::Create));
    let form = dialog.form().unwrap();
    assert!(FormField::ALL.iter().all(|field| form.get(*field).is_empty()));

    fill_ann(&mut dialog);
    let submission = dialog.submit().unwrap();

    let Submission::Add(draft) = submission else {
        panic!("create mode must emit an add");
    };
    assert_eq!(draft.first_name, "Ann");
    assert_eq!(draft.salary, 72_000.0);
    assert!(!dialog.is_open());
}

#[test]
fn edit_mode_prepopulates_and_keeps_original_id() {
    let john = sample_roster().remove(0);
    let mut dialog = EditorDialog::default();
    dialog.open_edit(&john);

    let form = dialog.form().unwrap();
    assert_eq!(form.first_name, "John");
    assert_eq!(form.salary, "85000");
    assert_eq!(form.hire_date, "2023-01-15");
    assert_eq!(dialog.mode().unwrap().title(), "Edit Employee");

    dialog.set_field(FormField::Position, "Staff Engineer").unwrap();
    let Submission::Update(updated) = dialog.submit().unwrap() else {
        panic!("edit mode must emit an update");
    };
    assert_eq!(updated.id, john.id);
    assert_eq!(updated.position, "Staff Engineer");
    assert_eq!(updated.last_name, john.last_name);
}

#[test]
fn rejected_submit_keeps_dialog_open_with_input() {
    let mut dialog = EditorDialog::default();
    dialog.open_create();
    fill_ann(&mut dialog);
    dialog.set_field(FormField::Salary, "lots").unwrap();

    let err = dialog.submit().unwrap_err();
    assert_eq!(err, FormError::InvalidSalary("lots".to_string()));
    assert!(dialog.is_open());
    assert_eq!(dialog.form().unwrap().first_name, "Ann");

    dialog.set_field(FormField::Salary, "72000").unwrap();
    assert!(dialog.submit().is_ok());
    assert!(!dialog.is_open());
}

#[test]
fn closed_editor_rejects_input_and_submit() {
    let mut dialog = EditorDialog::default();
    assert_eq!(
        dialog.set_field(FormField::Email, "x@y").unwrap_err(),
        FormError::NotOpen
    );
    assert_eq!(dialog.submit().unwrap_err(), FormError::NotOpen);
}

#[test]
fn cancel_closes_editor_without_submission() {
    let mut dialog = EditorDialog::default();
    dialog.open_create();
    fill_ann(&mut dialog);
    dialog.cancel();

    assert!(!dialog.is_open());
    assert!(dialog.form().is_none());
}

#[test]
fn mode_texts_match_screen_copy() {
    let create = EditorMode::Create;
    assert_eq!(create.title(), "Add New Employee");
    assert_eq!(create.submit_label(), "Add Employee");
    assert_eq!(create.description(), "Enter the details of the new employee.");

    let edit = EditorMode::Edit(EmployeeId::from("1"));
    assert_eq!(edit.submit_label(), "Update Employee");
    assert_eq!(edit.description(), "Update employee information below.");
}

#[test]
fn delete_dialog_confirm_yields_pending_id_once() {
    let mut dialog = DeleteDialog::default();
    dialog.open(EmployeeId::from("2"));
    assert_eq!(dialog.pending(), Some(&EmployeeId::from("2")));

    assert_eq!(dialog.confirm(), Some(EmployeeId::from("2")));
    assert!(!dialog.is_open());
    assert_eq!(dialog.pending(), None);
    assert_eq!(dialog.confirm(), None);
}

#[test]
fn delete_dialog_cancel_clears_pending() {
    let mut dialog = DeleteDialog::default();
    dialog.open(EmployeeId::from("1"));
    dialog.cancel();

    assert!(!dialog.is_open());
    assert_eq!(dialog.confirm(), None);
}
