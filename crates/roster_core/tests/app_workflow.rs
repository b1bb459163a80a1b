use roster_core::{
    sample_roster, AppError, EmployeeId, FormError, FormField, InMemoryEmployeeRepository,
    MutationOutcome, NotificationKind, RosterApp, RosterService, SequentialIdGenerator,
};

type App = RosterApp<InMemoryEmployeeRepository, SequentialIdGenerator>;

fn app() -> App {
    let repo = InMemoryEmployeeRepository::with_employees(sample_roster()).unwrap();
    RosterApp::new(RosterService::new(repo, SequentialIdGenerator::default()))
}

fn fill_ann(app: &mut App) {
    let values = [
        (FormField::FirstName, "Ann"),
        (FormField::LastName, "Lee"),
        (FormField::Email, "ann.lee@company.com"),
        (FormField::Phone, "+1 (555) 000-1111"),
        (FormField::Position, "Designer"),
        (FormField::Department, "Design"),
        (FormField::Salary, "72000"),
        (FormField::HireDate, "2024-03-01"),
    ];
    for (field, value) in values {
        app.set_field(field, value).unwrap();
    }
}

#[test]
fn add_flow_appends_and_notifies() {
    let mut app = app();
    app.begin_add();
    fill_ann(&mut app);

    let (id, outcome) = app.submit_editor().unwrap();

    assert_eq!(id.as_str(), "3");
    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(app.service().len(), 3);
    assert!(!app.editor().is_open());
    let notifications = app.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::EmployeeAdded);
    assert_eq!(notifications[0].title, "Employee added");
    assert!(app.take_notifications().is_empty());
}

#[test]
fn edit_flow_updates_in_place_and_notifies() {
    let mut app = app();
    assert!(app.begin_edit(&EmployeeId::from("2")));
    app.set_field(FormField::Department, "Strategy").unwrap();

    let (id, outcome) = app.submit_editor().unwrap();

    assert_eq!(id.as_str(), "2");
    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(app.service().employees()[1].department, "Strategy");
    let kinds: Vec<_> = app.take_notifications().into_iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NotificationKind::EmployeeUpdated]);
}

#[test]
fn begin_edit_unknown_id_keeps_editor_closed() {
    let mut app = app();
    assert!(!app.begin_edit(&EmployeeId::from("nope")));
    assert!(!app.editor().is_open());
}

#[test]
fn invalid_submit_surfaces_form_error_without_mutation() {
    let mut app = app();
    app.begin_add();
    fill_ann(&mut app);
    app.set_field(FormField::HireDate, "yesterday").unwrap();

    let err = app.submit_editor().unwrap_err();

    assert_eq!(
        err,
        AppError::Form(FormError::InvalidHireDate("yesterday".to_string()))
    );
    assert!(app.editor().is_open());
    assert_eq!(app.service().len(), 2);
    assert!(app.take_notifications().is_empty());
}

#[test]
fn delete_flow_requires_confirmation() {
    let mut app = app();
    app.request_delete(EmployeeId::from("1"));
    assert!(app.delete_dialog().is_open());
    assert_eq!(app.service().len(), 2);

    app.cancel_delete();
    assert!(!app.delete_dialog().is_open());
    assert_eq!(app.service().len(), 2);
    assert_eq!(app.confirm_delete(), MutationOutcome::Ignored);

    app.request_delete(EmployeeId::from("1"));
    assert_eq!(app.confirm_delete(), MutationOutcome::Applied);
    assert_eq!(app.service().len(), 1);
    assert!(!app.delete_dialog().is_open());
    let notifications = app.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].description,
        "The employee has been removed successfully."
    );
}

#[test]
fn search_query_drives_visible_rows() {
    let mut app = app();
    assert_eq!(app.visible().len(), 2);

    app.set_search_query("SMITH");
    assert_eq!(app.search_query(), "SMITH");
    let rows = app.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Jane Smith");
    assert_eq!(rows[0].hire_date, "8/20/2022");

    app.set_search_query("nobody");
    assert!(app.render().contains("No employees found."));
}

#[test]
fn date_format_is_configurable() {
    let app = app().with_date_format("%Y/%m/%d");
    assert_eq!(app.rows()[0].hire_date, "2023/01/15");
}

#[test]
fn added_record_is_visible_through_active_query() {
    let mut app = app();
    app.set_search_query("design");
    assert!(app.visible().is_empty());

    app.begin_add();
    fill_ann(&mut app);
    app.submit_editor().unwrap();

    let visible = app.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].full_name(), "Ann Lee");
}

#[test]
fn edit_of_record_deleted_meanwhile_is_ignored_silently() {
    let mut app = app();
    assert!(app.begin_edit(&EmployeeId::from("1")));
    app.set_field(FormField::Position, "Staff Engineer").unwrap();

    app.request_delete(EmployeeId::from("1"));
    assert_eq!(app.confirm_delete(), MutationOutcome::Applied);
    app.take_notifications();
    let before = app.service().employees().to_vec();

    let (id, outcome) = app.submit_editor().unwrap();

    assert_eq!(id.as_str(), "1");
    assert_eq!(outcome, MutationOutcome::Ignored);
    assert!(!app.editor().is_open());
    assert_eq!(app.service().employees(), before.as_slice());
    assert!(app.service().get(&EmployeeId::from("1")).is_none());
    assert!(app.take_notifications().is_empty());
}

#[test]
fn notifications_follow_mutation_order() {
    let mut app = app();

    app.begin_add();
    fill_ann(&mut app);
    let (added, _) = app.submit_editor().unwrap();

    assert!(app.begin_edit(&added));
    app.set_field(FormField::Salary, "75000").unwrap();
    app.submit_editor().unwrap();

    app.request_delete(EmployeeId::from("2"));
    app.confirm_delete();

    // Ignored mutations add nothing to the queue.
    app.request_delete(EmployeeId::from("missing"));
    app.confirm_delete();

    let kinds: Vec<_> = app.take_notifications().into_iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::EmployeeAdded,
            NotificationKind::EmployeeUpdated,
            NotificationKind::EmployeeDeleted,
        ]
    );
    assert_eq!(app.service().len(), 2);
    assert_eq!(app.service().get(&added).unwrap().salary, 75_000.0);
}
