use crate::model::store::TaskStore;
use crate::model::task::Priority;

/// A region that can receive the task being moved: a priority-tier
/// header/empty zone, or another task's row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Tier(Priority),
    Task(String),
}

/// The move interaction as an explicit state machine. At most one move is
/// in flight; only the most recent hover target matters; cancelling never
/// touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: String,
    },
    Hovering {
        source: String,
        target: DropTarget,
    },
}

impl DragState {
    /// Begin moving `source`. Refused while another move is active; the
    /// interaction surface prevents that input structurally, so a second
    /// begin is simply ignored.
    pub fn begin(&mut self, source: &str) -> bool {
        if !matches!(self, DragState::Idle) {
            return false;
        }
        *self = DragState::Dragging {
            source: source.to_string(),
        };
        true
    }

    /// Enter (or switch to) a candidate drop zone. There is no hover
    /// history; the latest target replaces any previous one.
    pub fn hover(&mut self, target: DropTarget) {
        let source = match self.source() {
            Some(s) => s.to_string(),
            None => return,
        };
        *self = DragState::Hovering { source, target };
    }

    /// Leave the current zone without entering another.
    pub fn leave(&mut self) {
        if let DragState::Hovering { source, .. } = self {
            *self = DragState::Dragging {
                source: std::mem::take(source),
            };
        }
    }

    /// Abort the move. Always a no-op on the store.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Release the move, applying at most one of:
    /// - a cross-tier drop on a tier zone → `reprioritize`;
    /// - a drop on another task → `reorder`, and when the target task sits
    ///   in a different tier the source's priority follows it (so the task
    ///   lands where it visually dropped rather than snapping back to its
    ///   old group);
    /// - no target → abandoned.
    pub fn commit(&mut self, store: &mut TaskStore) {
        let state = std::mem::take(self);
        let (source, target) = match state {
            DragState::Hovering { source, target } => (source, target),
            _ => return,
        };
        match target {
            DropTarget::Tier(tier) => {
                // Same-tier drops must not mutate anything
                if store.get(&source).is_some_and(|t| t.priority != tier) {
                    store.reprioritize(&source, tier);
                }
            }
            DropTarget::Task(target_id) => {
                if source == target_id {
                    return;
                }
                let target_tier = store.get(&target_id).map(|t| t.priority);
                store.reorder(&source, &target_id);
                if let Some(tier) = target_tier {
                    if store.get(&source).is_some_and(|t| t.priority != tier) {
                        store.reprioritize(&source, tier);
                    }
                }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// The task being moved, if a move is in flight
    pub fn source(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { source } => Some(source),
            DragState::Hovering { source, .. } => Some(source),
        }
    }

    /// The current candidate drop zone, if hovering one
    pub fn target(&self) -> Option<&DropTarget> {
        match self {
            DragState::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::Storage;
    use crate::model::store::TaskDraft;
    use crate::model::task::Status;
    use tempfile::TempDir;

    fn store_with(entries: &[(&str, Priority)]) -> (TempDir, TaskStore) {
        let dir = TempDir::new().unwrap();
        let mut store = TaskStore::open(Storage::new(dir.path().to_path_buf()));
        // Clear the seed set so tests start from a known collection
        let seeded: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
        for id in seeded {
            store.delete(&id);
        }
        for (title, tier) in entries {
            let draft = TaskDraft {
                priority: *tier,
                status: Status::Todo,
                title: (*title).into(),
                ..TaskDraft::default()
            };
            store.create(&draft).unwrap();
        }
        (dir, store)
    }

    fn id_of(store: &TaskStore, title: &str) -> String {
        store
            .tasks()
            .iter()
            .find(|t| t.title == title)
            .map(|t| t.id.clone())
            .unwrap()
    }

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn begin_only_from_idle() {
        let mut drag = DragState::default();
        assert!(drag.begin("a"));
        assert!(!drag.begin("b"));
        assert_eq!(drag.source(), Some("a"));
    }

    #[test]
    fn hover_replaces_previous_target() {
        let mut drag = DragState::default();
        drag.begin("a");
        drag.hover(DropTarget::Tier(Priority::Urgent));
        drag.hover(DropTarget::Task("b".into()));
        assert_eq!(drag.target(), Some(&DropTarget::Task("b".into())));
    }

    #[test]
    fn leave_reverts_to_dragging() {
        let mut drag = DragState::default();
        drag.begin("a");
        drag.hover(DropTarget::Tier(Priority::Medium));
        drag.leave();
        assert_eq!(drag.source(), Some("a"));
        assert_eq!(drag.target(), None);
        // Leaving twice is harmless
        drag.leave();
        assert!(drag.is_active());
    }

    #[test]
    fn hover_without_begin_is_ignored() {
        let mut drag = DragState::default();
        drag.hover(DropTarget::Tier(Priority::Urgent));
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn cancel_never_mutates() {
        let (_dir, mut store) = store_with(&[("A", Priority::High), ("B", Priority::High)]);
        let before = store.tasks().to_vec();
        let mut drag = DragState::default();
        drag.begin(&id_of(&store, "A"));
        drag.hover(DropTarget::Tier(Priority::Urgent));
        drag.cancel();
        assert_eq!(drag, DragState::Idle);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn commit_without_target_is_abandoned() {
        let (_dir, mut store) = store_with(&[("A", Priority::High)]);
        let before = store.tasks().to_vec();
        let mut drag = DragState::default();
        drag.begin(&id_of(&store, "A"));
        drag.commit(&mut store);
        assert_eq!(drag, DragState::Idle);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn commit_on_other_tier_reprioritizes() {
        let (_dir, mut store) = store_with(&[("A", Priority::Medium), ("B", Priority::High)]);
        let a = id_of(&store, "A");
        let mut drag = DragState::default();
        drag.begin(&a);
        drag.hover(DropTarget::Tier(Priority::Urgent));
        drag.commit(&mut store);
        assert_eq!(store.get(&a).unwrap().priority, Priority::Urgent);
        // Sequence position unchanged
        assert_eq!(titles(&store), vec!["A", "B"]);
    }

    #[test]
    fn commit_on_own_tier_is_noop() {
        let (_dir, mut store) = store_with(&[("A", Priority::High), ("B", Priority::High)]);
        let before = store.tasks().to_vec();
        let mut drag = DragState::default();
        drag.begin(&id_of(&store, "A"));
        drag.hover(DropTarget::Tier(Priority::High));
        drag.commit(&mut store);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn commit_on_task_reorders_within_tier() {
        let (_dir, mut store) = store_with(&[("A", Priority::High), ("B", Priority::High)]);
        let mut drag = DragState::default();
        drag.begin(&id_of(&store, "B"));
        drag.hover(DropTarget::Task(id_of(&store, "A")));
        drag.commit(&mut store);
        assert_eq!(titles(&store), vec!["B", "A"]);
    }

    #[test]
    fn commit_on_task_across_tiers_reorders_and_follows_tier() {
        let (_dir, mut store) = store_with(&[("A", Priority::Medium), ("B", Priority::Urgent)]);
        let a = id_of(&store, "A");
        let mut drag = DragState::default();
        drag.begin(&a);
        drag.hover(DropTarget::Task(id_of(&store, "B")));
        drag.commit(&mut store);
        assert_eq!(titles(&store), vec!["A", "B"]);
        assert_eq!(store.get(&a).unwrap().priority, Priority::Urgent);
    }

    #[test]
    fn commit_self_drop_is_noop() {
        let (_dir, mut store) = store_with(&[("A", Priority::High), ("B", Priority::High)]);
        let before = store.tasks().to_vec();
        let a = id_of(&store, "A");
        let mut drag = DragState::default();
        drag.begin(&a);
        drag.hover(DropTarget::Task(a.clone()));
        drag.commit(&mut store);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn commit_on_vanished_target_is_noop() {
        let (_dir, mut store) = store_with(&[("A", Priority::High), ("B", Priority::High)]);
        let b = id_of(&store, "B");
        let mut drag = DragState::default();
        drag.begin(&id_of(&store, "A"));
        drag.hover(DropTarget::Task(b.clone()));
        store.delete(&b);
        let before = store.tasks().to_vec();
        drag.commit(&mut store);
        assert_eq!(store.tasks(), before.as_slice());
    }
}
