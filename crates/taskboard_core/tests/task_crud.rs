use taskboard_core::{
    RepoError, SqliteTaskRepository, Status, TaskRepository, DEFAULT_TASKS,
};

#[test]
fn data_operations_fail_before_initialize() {
    let repo = SqliteTaskRepository::in_memory();

    assert!(matches!(repo.select_all(), Err(RepoError::NotInitialized)));
    assert!(matches!(
        repo.insert("too early", Status::Todo),
        Err(RepoError::NotInitialized)
    ));
    assert!(matches!(
        repo.update_status(1, Status::Completed),
        Err(RepoError::NotInitialized)
    ));
    assert!(matches!(repo.delete(1), Err(RepoError::NotInitialized)));
    assert!(matches!(
        repo.count_by_status(),
        Err(RepoError::NotInitialized)
    ));
    assert!(matches!(repo.clear_all(), Err(RepoError::NotInitialized)));
    assert!(matches!(
        repo.seed_if_empty(DEFAULT_TASKS),
        Err(RepoError::NotInitialized)
    ));
}

#[test]
fn initialize_is_idempotent() {
    let mut repo = SqliteTaskRepository::in_memory();
    repo.initialize().unwrap();
    repo.initialize().unwrap();

    let id = repo.insert("first", Status::Todo).unwrap();
    repo.initialize().unwrap();

    // A redundant initialize must not reopen and drop existing state.
    let tasks = repo.select_all().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
}

#[test]
fn insert_assigns_monotonic_ids_and_trims_titles() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();

    let first = repo.insert("  alpha  ", Status::Todo).unwrap();
    let second = repo.insert("beta", Status::InProgress).unwrap();
    assert!(second > first);

    let tasks = repo.select_all().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "alpha");
    assert_eq!(tasks[0].status, Status::Todo);
    assert_eq!(tasks[1].title, "beta");
    assert_eq!(tasks[1].status, Status::InProgress);
}

#[test]
fn insert_rejects_blank_title() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();

    let err = repo.insert("   ", Status::Todo).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.select_all().unwrap().is_empty());
}

#[test]
fn update_status_reports_whether_a_row_was_affected() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();
    let id = repo.insert("movable", Status::Todo).unwrap();

    assert!(repo.update_status(id, Status::Completed).unwrap());
    assert!(!repo.update_status(id + 100, Status::Completed).unwrap());

    let tasks = repo.select_all().unwrap();
    assert_eq!(tasks[0].status, Status::Completed);
    assert_eq!(tasks[0].title, "movable");
}

#[test]
fn delete_reports_whether_a_row_was_affected() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();
    let id = repo.insert("short-lived", Status::Todo).unwrap();

    assert!(repo.delete(id).unwrap());
    assert!(!repo.delete(id).unwrap());
    assert!(repo.select_all().unwrap().is_empty());
}

#[test]
fn select_by_status_filters_in_id_order() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();
    let a = repo.insert("a", Status::Todo).unwrap();
    repo.insert("b", Status::InProgress).unwrap();
    let c = repo.insert("c", Status::Todo).unwrap();

    let todos = repo.select_by_status(Status::Todo).unwrap();
    assert_eq!(
        todos.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![a, c]
    );
    assert!(repo.select_by_status(Status::Completed).unwrap().is_empty());
}

#[test]
fn count_by_status_defaults_absent_statuses_to_zero() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();

    let empty = repo.count_by_status().unwrap();
    assert_eq!(empty.for_status(Status::Todo), 0);
    assert_eq!(empty.for_status(Status::InProgress), 0);
    assert_eq!(empty.for_status(Status::Completed), 0);

    repo.insert("one", Status::Todo).unwrap();
    repo.insert("two", Status::Todo).unwrap();
    repo.insert("three", Status::Completed).unwrap();

    let counts = repo.count_by_status().unwrap();
    assert_eq!(counts.todo, 2);
    assert_eq!(counts.in_progress, 0);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.total(), 3);
}

#[test]
fn seed_if_empty_inserts_only_on_first_call() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();

    let first = repo.seed_if_empty(DEFAULT_TASKS).unwrap();
    assert_eq!(first, DEFAULT_TASKS.len() as u32);

    let second = repo.seed_if_empty(DEFAULT_TASKS).unwrap();
    assert_eq!(second, 0);

    let tasks = repo.select_all().unwrap();
    assert_eq!(tasks.len(), DEFAULT_TASKS.len());
    assert_eq!(tasks[0].title, "Plan weekly meal prep");
    assert_eq!(tasks[1].status, Status::InProgress);
    assert_eq!(tasks[3].title, "Buy more honey dew drops");
}

#[test]
fn seed_if_empty_runs_again_after_clear_all() {
    let repo = SqliteTaskRepository::open_in_memory().unwrap();

    repo.seed_if_empty(DEFAULT_TASKS).unwrap();
    let removed = repo.clear_all().unwrap();
    assert_eq!(removed, DEFAULT_TASKS.len() as u32);
    assert!(repo.select_all().unwrap().is_empty());

    let reseeded = repo.seed_if_empty(DEFAULT_TASKS).unwrap();
    assert_eq!(reseeded, DEFAULT_TASKS.len() as u32);
}

#[test]
fn close_releases_the_connection_until_reinitialized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskboard.db");

    let mut repo = SqliteTaskRepository::at_path(&path);
    repo.initialize().unwrap();
    let id = repo.insert("durable", Status::Todo).unwrap();

    repo.close().unwrap();
    assert!(matches!(repo.select_all(), Err(RepoError::NotInitialized)));
    assert!(matches!(
        repo.insert("while closed", Status::Todo),
        Err(RepoError::NotInitialized)
    ));

    repo.initialize().unwrap();
    let tasks = repo.select_all().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
    assert_eq!(tasks[0].title, "durable");
}
