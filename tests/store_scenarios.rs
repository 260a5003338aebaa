//! End-to-end scenarios through the public store/filter/engine API,
//! each against a real storage slot in a temp directory.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

use backlog::io::storage::{SLOT_FILE, Storage, seed_tasks};
use backlog::model::drag::{DragState, DropTarget};
use backlog::model::filter::{Filter, visible};
use backlog::model::store::{TaskDraft, TaskStore};
use backlog::model::task::{Priority, Status, Task};

fn task(id: &str, priority: Priority, title: &str) -> Task {
    Task::new(id.into(), priority, Status::Todo, title.into())
}

/// Seed the slot with a fixed collection, then open a store over it
fn store_over(dir: &Path, tasks: &[Task]) -> TaskStore {
    let storage = Storage::new(dir.to_path_buf());
    storage.save(tasks);
    TaskStore::open(storage)
}

fn ids(store: &TaskStore) -> Vec<String> {
    store.tasks().iter().map(|t| t.id.clone()).collect()
}

#[test]
fn scenario_a_reorder_two_high_tasks() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = store_over(
        dir.path(),
        &[
            task("1", Priority::High, "First"),
            task("2", Priority::High, "Second"),
        ],
    );

    store.reorder("2", "1");
    assert_eq!(ids(&store), vec!["2", "1"]);

    // The new order survives a reload
    let reloaded = TaskStore::open(Storage::new(dir.path().to_path_buf()));
    assert_eq!(ids(&reloaded), vec!["2", "1"]);
}

#[test]
fn scenario_b_reprioritize_flips_filter_membership() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = store_over(
        dir.path(),
        &[
            task("1", Priority::High, "First"),
            task("3", Priority::Medium, "Third"),
            task("4", Priority::Longterm, "Fourth"),
        ],
    );

    store.reprioritize("3", Priority::Urgent);

    // Same sequence index, only the priority changed
    assert_eq!(ids(&store), vec!["1", "3", "4"]);
    let moved = store.get("3").unwrap();
    assert_eq!(moved.priority, Priority::Urgent);
    assert_eq!(moved.title, "Third");

    let medium = visible(store.tasks(), Filter::Tier(Priority::Medium));
    assert!(medium.iter().all(|t| t.id != "3"));
    let urgent = visible(store.tasks(), Filter::Tier(Priority::Urgent));
    assert!(urgent.iter().any(|t| t.id == "3"));
}

#[test]
fn scenario_c_delete_unknown_id_leaves_slot_untouched() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = store_over(dir.path(), &seed_tasks());
    let raw_before = fs::read_to_string(dir.path().join(SLOT_FILE)).unwrap();

    assert!(!store.delete("9"));

    let raw_after = fs::read_to_string(dir.path().join(SLOT_FILE)).unwrap();
    assert_eq!(raw_after, raw_before);
    assert_eq!(store.len(), 5);
}

#[test]
fn persistence_round_trip_preserves_everything() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut original = seed_tasks();
    original[1].action = None;
    original[3].deadline = Some("June".into());

    let storage = Storage::new(dir.path().to_path_buf());
    storage.save(&original);
    assert_eq!(storage.load(), original);
}

#[test]
fn edit_session_create_update_delete() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = store_over(dir.path(), &[task("1", Priority::High, "Existing")]);

    // Create through the untrusted-draft path
    let draft = TaskDraft {
        priority: Priority::Urgent,
        status: Status::DecisionNeeded,
        title: "  Decide something  ".into(),
        deadline: "Friday".into(),
        details: String::new(),
        action: "Phone a friend".into(),
    };
    let id = store.create(&draft).unwrap();
    let created = store.get(&id).unwrap();
    assert_eq!(created.title, "Decide something");
    assert_eq!(created.details, None);
    assert_eq!(created.action.as_deref(), Some("Phone a friend"));

    // Update replaces the record in place
    let mut edited = TaskDraft::from_task(created);
    edited.status = Status::Done;
    edited.deadline.clear();
    assert!(store.update(&id, &edited));
    let updated = store.get(&id).unwrap();
    assert_eq!(updated.status, Status::Done);
    assert_eq!(updated.deadline, None);
    assert_eq!(ids(&store), vec!["1".to_string(), id.clone()]);

    // Delete, then confirm the reloaded slot agrees
    assert!(store.delete(&id));
    let reloaded = TaskStore::open(Storage::new(dir.path().to_path_buf()));
    assert_eq!(ids(&reloaded), vec!["1"]);
}

#[test]
fn move_session_cross_tier_drop_onto_task() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = store_over(
        dir.path(),
        &[
            task("1", Priority::Urgent, "Alpha"),
            task("2", Priority::High, "Beta"),
            task("3", Priority::High, "Gamma"),
        ],
    );

    // Pick up Gamma, hover a tier, change mind, drop on Alpha
    let mut drag = DragState::default();
    assert!(drag.begin("3"));
    drag.hover(DropTarget::Tier(Priority::Longterm));
    drag.hover(DropTarget::Task("1".into()));
    drag.commit(&mut store);

    assert_eq!(ids(&store), vec!["3", "1", "2"]);
    // Dropped onto an urgent task, so the tier follows the drop
    assert_eq!(store.get("3").unwrap().priority, Priority::Urgent);

    let reloaded = TaskStore::open(Storage::new(dir.path().to_path_buf()));
    assert_eq!(ids(&reloaded), vec!["3", "1", "2"]);
}

#[test]
fn abandoned_and_cancelled_moves_leave_no_trace() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = store_over(
        dir.path(),
        &[
            task("1", Priority::Urgent, "Alpha"),
            task("2", Priority::High, "Beta"),
        ],
    );
    let before = store.tasks().to_vec();
    let raw_before = fs::read_to_string(dir.path().join(SLOT_FILE)).unwrap();

    let mut drag = DragState::default();
    drag.begin("1");
    drag.hover(DropTarget::Tier(Priority::Medium));
    drag.cancel();
    assert_eq!(store.tasks(), before.as_slice());

    drag.begin("1");
    drag.hover(DropTarget::Task("2".into()));
    drag.leave();
    drag.commit(&mut store);
    assert_eq!(store.tasks(), before.as_slice());

    let raw_after = fs::read_to_string(dir.path().join(SLOT_FILE)).unwrap();
    assert_eq!(raw_after, raw_before);
}
