use indexmap::IndexMap;

use crate::model::task::{Priority, Status, Task};

/// The active priority filter. A pure projection key: holds no state of
/// its own and never mutates the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Tier(Priority),
}

impl Filter {
    /// Filter chips in display order: All, then the tiers
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Tier(Priority::Urgent),
        Filter::Tier(Priority::High),
        Filter::Tier(Priority::Medium),
        Filter::Tier(Priority::Longterm),
    ];

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Tier(p) => p.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<Filter> {
        if key == "all" {
            Some(Filter::All)
        } else {
            Priority::from_key(key).map(Filter::Tier)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Tier(p) => p.label(),
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Tier(p) => task.priority == p,
        }
    }

    /// Next chip in display order, wrapping around
    pub fn next(self) -> Filter {
        let idx = Filter::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Filter::ALL[(idx + 1) % Filter::ALL.len()]
    }
}

/// The visible subsequence for a filter, in collection order.
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Partition the visible subsequence into the fixed tier ordering
/// (urgent → high → medium → longterm), preserving intra-tier order.
/// Every tier is present even when its group is empty, since empty
/// groups still render as drop zones.
pub fn tier_groups<'a>(tasks: &'a [Task], filter: Filter) -> Vec<(Priority, Vec<&'a Task>)> {
    let shown = visible(tasks, filter);
    Priority::ALL
        .into_iter()
        .map(|tier| {
            let group: Vec<&Task> = shown
                .iter()
                .copied()
                .filter(|t| t.priority == tier)
                .collect();
            (tier, group)
        })
        .collect()
}

/// Status counts over the whole collection, in first-seen order (for the
/// summary footer).
pub fn status_counts(tasks: &[Task]) -> IndexMap<Status, usize> {
    let mut counts = IndexMap::new();
    for task in tasks {
        *counts.entry(task.status).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("1".into(), Priority::Urgent, Status::DecisionNeeded, "A".into()),
            Task::new("2".into(), Priority::High, Status::Todo, "B".into()),
            Task::new("3".into(), Priority::High, Status::Waiting, "C".into()),
            Task::new("4".into(), Priority::Longterm, Status::Backlog, "D".into()),
            Task::new("5".into(), Priority::High, Status::Todo, "E".into()),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn all_filter_returns_full_collection_in_order() {
        let tasks = tasks();
        let shown = visible(&tasks, Filter::All);
        assert_eq!(ids(&shown), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn tier_filter_returns_matching_subset_in_order() {
        let tasks = tasks();
        let shown = visible(&tasks, Filter::Tier(Priority::High));
        assert_eq!(ids(&shown), vec!["2", "3", "5"]);
    }

    #[test]
    fn visible_is_referentially_transparent() {
        let tasks = tasks();
        let a = ids(&visible(&tasks, Filter::Tier(Priority::High)));
        let b = ids(&visible(&tasks, Filter::Tier(Priority::High)));
        assert_eq!(a, b);
    }

    #[test]
    fn tier_groups_keeps_fixed_tier_order_with_empty_groups() {
        let tasks = tasks();
        let groups = tier_groups(&tasks, Filter::All);
        let tiers: Vec<Priority> = groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(tiers, Priority::ALL.to_vec());
        // Medium has no tasks but still appears
        assert!(groups[2].1.is_empty());
        assert_eq!(ids(&groups[1].1), vec!["2", "3", "5"]);
    }

    #[test]
    fn tier_groups_under_filter_empties_other_tiers() {
        let tasks = tasks();
        let groups = tier_groups(&tasks, Filter::Tier(Priority::Urgent));
        assert_eq!(ids(&groups[0].1), vec!["1"]);
        assert!(groups[1].1.is_empty());
        assert!(groups[3].1.is_empty());
    }

    #[test]
    fn status_counts_first_seen_order() {
        let tasks = tasks();
        let counts = status_counts(&tasks);
        let order: Vec<Status> = counts.keys().copied().collect();
        assert_eq!(
            order,
            vec![
                Status::DecisionNeeded,
                Status::Todo,
                Status::Waiting,
                Status::Backlog
            ]
        );
        assert_eq!(counts[&Status::Todo], 2);
    }

    #[test]
    fn filter_key_round_trip() {
        for f in Filter::ALL {
            assert_eq!(Filter::from_key(f.key()), Some(f));
        }
        assert_eq!(Filter::from_key("bogus"), None);
    }
}
