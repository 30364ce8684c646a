//! Reorder Core
//!
//! Pure ordering logic for the optimistic drag-reorder flow, plus the
//! generation tokens that keep overlapping in-flight reorder requests from
//! stepping on each other.

use std::cell::Cell;
use std::rc::Rc;

use crate::models::Task;

/// Compute the order after moving `moved_id` to `to_index`.
///
/// Stable single-element move: the task is removed from its current index
/// and inserted at `to_index`; all other tasks keep their relative order.
/// Returns `None` when the id is not present or the move changes nothing.
pub fn move_task(tasks: &[Task], moved_id: u32, to_index: usize) -> Option<Vec<Task>> {
    let from = tasks.iter().position(|t| t.id == moved_id)?;
    let to = to_index.min(tasks.len().saturating_sub(1));
    if from == to {
        return None;
    }
    let mut next = tasks.to_vec();
    let task = next.remove(from);
    next.insert(to, task);
    Some(next)
}

/// Convert a drop slot (gap between rows, `0..=len`) into the index the
/// dragged row lands at. The slots directly above and below the dragged row
/// leave the order unchanged.
pub fn slot_to_index(from: usize, slot: usize) -> Option<usize> {
    if slot == from || slot == from + 1 {
        return None;
    }
    Some(if slot > from { slot - 1 } else { slot })
}

/// Move `moved_id` into a drop slot. `None` when the drop is a no-op.
pub fn move_to_slot(tasks: &[Task], moved_id: u32, slot: usize) -> Option<Vec<Task>> {
    let from = tasks.iter().position(|t| t.id == moved_id)?;
    let to = slot_to_index(from, slot)?;
    move_task(tasks, moved_id, to)
}

/// Completed share of a task sequence, in percent. Empty list counts as 0.
///
/// Used for locally-created summaries only; lists fetched from the API carry
/// the server-computed percentage.
pub fn completion_percentage(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let done = tasks.iter().filter(|t| t.completed).count();
    done as f64 / tasks.len() as f64 * 100.0
}

/// Monotonic token source for in-flight reorder requests.
///
/// Every move takes a fresh generation before its request is issued. A
/// settlement handler may touch the view only while its token is still the
/// newest one; once a later move has begun, the older settlement is ignored
/// whether it succeeded or failed. Each handler also owns the pre-move
/// snapshot it captured, so a rollback can never restore another move's
/// state.
#[derive(Clone, Debug, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next generation token
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether `token` is still the latest claimed generation
    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
        }
    }

    fn abc() -> Vec<Task> {
        vec![
            make_task(1, "A", false),
            make_task(2, "B", true),
            make_task(3, "C", false),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_move_matches_remove_then_insert() {
        let tasks: Vec<Task> = (0..5).map(|i| make_task(i, "t", false)).collect();
        for from in 0..tasks.len() {
            for to in 0..tasks.len() {
                let moved = move_task(&tasks, tasks[from].id, to);
                let mut expected = tasks.clone();
                let t = expected.remove(from);
                expected.insert(to, t);
                if from == to {
                    assert!(moved.is_none(), "move {from}->{to} should be a no-op");
                } else {
                    assert_eq!(moved.unwrap(), expected, "move {from}->{to}");
                }
            }
        }
    }

    #[test]
    fn test_move_unknown_id_is_rejected() {
        assert!(move_task(&abc(), 99, 0).is_none());
    }

    #[test]
    fn test_move_clamps_target_index() {
        let moved = move_task(&abc(), 1, 100).unwrap();
        assert_eq!(ids(&moved), vec![2, 3, 1]);
    }

    #[test]
    fn test_slot_to_index() {
        // Dragged row at index 1 of three rows: slots 1 and 2 surround it.
        assert_eq!(slot_to_index(1, 0), Some(0));
        assert_eq!(slot_to_index(1, 1), None);
        assert_eq!(slot_to_index(1, 2), None);
        assert_eq!(slot_to_index(1, 3), Some(2));
    }

    #[test]
    fn test_drop_after_last_moves_first_to_end() {
        // [A,B,C], drag A into the slot after C -> [B,C,A]
        let moved = move_to_slot(&abc(), 1, 3).unwrap();
        assert_eq!(ids(&moved), vec![2, 3, 1]);
    }

    #[test]
    fn test_adjacent_slots_are_noops() {
        assert!(move_to_slot(&abc(), 1, 0).is_none());
        assert!(move_to_slot(&abc(), 1, 1).is_none());
        assert!(move_to_slot(&abc(), 2, 1).is_none());
        assert!(move_to_slot(&abc(), 2, 2).is_none());
    }

    #[test]
    fn test_rollback_restores_snapshot_exactly() {
        let before = abc();
        let snapshot = before.clone();
        let mut view = move_to_slot(&before, 1, 3).unwrap();
        assert_ne!(view, before);
        // Server rejected the reorder: restore the captured snapshot.
        view = snapshot;
        assert_eq!(view, before);
    }

    #[test]
    fn test_completion_percentage() {
        assert_eq!(completion_percentage(&[]), 0.0);
        let tasks = vec![
            make_task(1, "a", true),
            make_task(2, "b", false),
            make_task(3, "c", false),
            make_task(4, "d", false),
        ];
        assert_eq!(completion_percentage(&tasks), 25.0);
    }

    #[test]
    fn test_stale_settlement_is_ignored() {
        let generation = Generation::new();
        let mut view = abc();

        // First move: [A,B,C] -> [B,A,C], request in flight.
        let snapshot1 = view.clone();
        view = move_task(&view, 1, 1).unwrap();
        let g1 = generation.begin();

        // Second move begins before the first settles: [B,A,C] -> [B,C,A].
        let snapshot2 = view.clone();
        view = move_task(&view, 1, 2).unwrap();
        let g2 = generation.begin();
        assert_eq!(ids(&view), vec![2, 3, 1]);

        // Second request settles successfully: server state applies.
        assert!(generation.is_current(g2));
        let server = view.clone();
        view = server;

        // First request fails afterwards: its token is stale, so its
        // snapshot must not be restored.
        assert!(!generation.is_current(g1));
        assert_eq!(ids(&view), vec![2, 3, 1]);
        assert_eq!(ids(&snapshot1), vec![1, 2, 3]);
        assert_eq!(ids(&snapshot2), vec![2, 1, 3]);
    }

    #[test]
    fn test_current_settlement_rolls_back_own_snapshot() {
        let generation = Generation::new();
        let mut view = abc();

        let snapshot = view.clone();
        view = move_to_slot(&view, 1, 3).unwrap();
        let token = generation.begin();

        // Request fails with no newer move in flight: revert.
        assert!(generation.is_current(token));
        view = snapshot;
        assert_eq!(view, abc());
    }
}
