//! Optimistic Todo Cache
//!
//! The local collection is only ever a cache of server state. Mutations go
//! through explicit apply/rollback pairs instead of ad hoc splicing: every
//! `apply` returns the `Rollback` that restores the exact prior state
//! (including position) when the remote call fails.

use crate::models::Todo;

/// A local mutation mirroring a pending remote call
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Append a todo (server-confirmed create, or an optimistic placeholder)
    Insert(Todo),
    /// Replace the todo with the same `id`
    Update(Todo),
    /// Remove the todo with this `id`
    Remove(u32),
}

/// Inverse of an applied [`Patch`]
#[derive(Debug, Clone, PartialEq)]
pub enum Rollback {
    /// Undo an insert
    Remove(u32),
    /// Undo an update by restoring the prior copy
    Replace(Todo),
    /// Undo a removal by reinserting at the original position
    Reinsert { index: usize, todo: Todo },
    /// The patch targeted a missing id; nothing changed
    Noop,
}

/// Apply a patch to the local collection, returning its inverse
pub fn apply(todos: &mut Vec<Todo>, patch: Patch) -> Rollback {
    match patch {
        Patch::Insert(todo) => {
            let id = todo.id;
            todos.push(todo);
            Rollback::Remove(id)
        }
        Patch::Update(updated) => match todos.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => Rollback::Replace(std::mem::replace(slot, updated)),
            None => Rollback::Noop,
        },
        Patch::Remove(id) => match todos.iter().position(|t| t.id == id) {
            Some(index) => Rollback::Reinsert {
                index,
                todo: todos.remove(index),
            },
            None => Rollback::Noop,
        },
    }
}

/// Restore the state captured by a [`Rollback`]
pub fn rollback(todos: &mut Vec<Todo>, rollback: Rollback) {
    match rollback {
        Rollback::Remove(id) => {
            todos.retain(|t| t.id != id);
        }
        Rollback::Replace(prior) => {
            if let Some(slot) = todos.iter_mut().find(|t| t.id == prior.id) {
                *slot = prior;
            }
        }
        Rollback::Reinsert { index, todo } => {
            let index = index.min(todos.len());
            todos.insert(index, todo);
        }
        Rollback::Noop => {}
    }
}

/// Replace a local entry with the server-returned authoritative copy
pub fn reconcile(todos: &mut [Todo], confirmed: Todo) {
    if let Some(slot) = todos.iter_mut().find(|t| t.id == confirmed.id) {
        *slot = confirmed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: None,
            completed,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn insert_then_rollback_removes_it() {
        let mut todos = vec![make_todo(1, "a", false)];
        let rb = apply(&mut todos, Patch::Insert(make_todo(2, "b", false)));
        assert_eq!(todos.len(), 2);

        rollback(&mut todos, rb);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
    }

    #[test]
    fn toggle_twice_restores_original_completed() {
        let mut todos = vec![make_todo(1, "a", false)];

        let mut flipped = todos[0].clone();
        flipped.completed = true;
        apply(&mut todos, Patch::Update(flipped));
        assert!(todos[0].completed);

        let mut flipped_back = todos[0].clone();
        flipped_back.completed = false;
        apply(&mut todos, Patch::Update(flipped_back));
        assert!(!todos[0].completed);
    }

    #[test]
    fn failed_update_rolls_back_to_prior_copy() {
        let mut todos = vec![make_todo(1, "original", false)];
        let rb = apply(&mut todos, Patch::Update(make_todo(1, "edited", false)));
        assert_eq!(todos[0].title, "edited");

        rollback(&mut todos, rb);
        assert_eq!(todos[0].title, "original");
    }

    #[test]
    fn failed_delete_reinserts_at_original_position() {
        let mut todos = vec![
            make_todo(1, "a", false),
            make_todo(2, "b", false),
            make_todo(3, "c", false),
        ];
        let rb = apply(&mut todos, Patch::Remove(2));
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), [1, 3]);

        rollback(&mut todos, rb);
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn patch_on_missing_id_is_noop() {
        let mut todos = vec![make_todo(1, "a", false)];
        assert_eq!(apply(&mut todos, Patch::Remove(99)), Rollback::Noop);
        assert_eq!(
            apply(&mut todos, Patch::Update(make_todo(99, "x", true))),
            Rollback::Noop
        );
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn reconcile_replaces_with_server_copy() {
        let mut todos = vec![make_todo(1, "local title", false)];
        let mut server = make_todo(1, "server title", true);
        server.created_at = "2026-02-02T00:00:00Z".to_string();

        reconcile(&mut todos, server.clone());
        assert_eq!(todos[0], server);
    }
}
