//! Todo list state and its reducer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn all() -> [TodoFilter; 3] {
        [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed]
    }

    /// Value used for `<option value=..>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoFilter::All => "all",
            TodoFilter::Active => "active",
            TodoFilter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }

    /// Unknown values fall back to `All`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => TodoFilter::Active,
            "completed" => TodoFilter::Completed,
            _ => TodoFilter::All,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub filter: TodoFilter,
}

impl TodoListState {
    pub fn new(initial_todos: Option<Vec<Todo>>, initial_filter: Option<TodoFilter>) -> Self {
        Self {
            todos: initial_todos.unwrap_or_default(),
            filter: initial_filter.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add { text: String },
    Toggle { id: String },
    Delete { id: String },
    SetFilter { filter: TodoFilter },
    ClearCompleted,
}

pub fn todo_reducer(state: &TodoListState, action: TodoAction) -> TodoListState {
    match action {
        TodoAction::Add { text } => {
            let mut todos = state.todos.clone();
            todos.push(Todo::new(text));
            TodoListState {
                todos,
                filter: state.filter,
            }
        }
        TodoAction::Toggle { id } => TodoListState {
            todos: state
                .todos
                .iter()
                .map(|todo| {
                    if todo.id == id {
                        Todo {
                            completed: !todo.completed,
                            ..todo.clone()
                        }
                    } else {
                        todo.clone()
                    }
                })
                .collect(),
            filter: state.filter,
        },
        TodoAction::Delete { id } => TodoListState {
            todos: state.todos.iter().filter(|t| t.id != id).cloned().collect(),
            filter: state.filter,
        },
        TodoAction::SetFilter { filter } => TodoListState {
            todos: state.todos.clone(),
            filter,
        },
        TodoAction::ClearCompleted => TodoListState {
            todos: state.todos.iter().filter(|t| !t.completed).cloned().collect(),
            filter: state.filter,
        },
    }
}

/// Todos passing the current filter, in insertion order.
pub fn visible_todos(state: &TodoListState) -> Vec<Todo> {
    state
        .todos
        .iter()
        .filter(|todo| state.filter.matches(todo))
        .cloned()
        .collect()
}

pub fn active_count(state: &TodoListState) -> usize {
    state.todos.iter().filter(|t| !t.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, text: &str, completed: bool) -> Todo {
        Todo {
            id: id.into(),
            text: text.into(),
            completed,
        }
    }

    fn sample_state() -> TodoListState {
        TodoListState::new(
            Some(vec![
                todo("1", "Buy milk", false),
                todo("2", "Walk dog", true),
                todo("3", "Write tests", false),
            ]),
            None,
        )
    }

    #[test]
    fn test_add_appends_uncompleted_todo_with_fresh_id() {
        let state = sample_state();
        let next = todo_reducer(&state, TodoAction::Add { text: "Read".into() });

        assert_eq!(next.todos.len(), 4);
        let added = next.todos.last().unwrap();
        assert_eq!(added.text, "Read");
        assert!(!added.completed);
        assert!(state.todos.iter().all(|t| t.id != added.id));
        // input state untouched
        assert_eq!(state.todos.len(), 3);
    }

    #[test]
    fn test_toggle_flips_only_matching_todo() {
        let next = todo_reducer(&sample_state(), TodoAction::Toggle { id: "2".into() });
        assert!(!next.todos[1].completed);
        assert!(!next.todos[0].completed);

        let unchanged = todo_reducer(&sample_state(), TodoAction::Toggle { id: "missing".into() });
        assert_eq!(unchanged, sample_state());
    }

    #[test]
    fn test_delete_and_clear_completed() {
        let next = todo_reducer(&sample_state(), TodoAction::Delete { id: "1".into() });
        assert_eq!(
            next.todos.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "3"]
        );

        let cleared = todo_reducer(&sample_state(), TodoAction::ClearCompleted);
        assert!(cleared.todos.iter().all(|t| !t.completed));
        assert_eq!(cleared.todos.len(), 2);
    }

    #[test]
    fn test_filtering() {
        let state = sample_state();
        assert_eq!(visible_todos(&state).len(), 3);

        let active = todo_reducer(&state, TodoAction::SetFilter { filter: TodoFilter::Active });
        assert_eq!(active.filter, TodoFilter::Active);
        assert_eq!(visible_todos(&active).len(), 2);

        let completed = todo_reducer(&state, TodoAction::SetFilter { filter: TodoFilter::Completed });
        assert_eq!(visible_todos(&completed), vec![todo("2", "Walk dog", true)]);

        assert_eq!(active_count(&state), 2);
    }

    #[test]
    fn test_filter_parsing() {
        for filter in TodoFilter::all() {
            assert_eq!(TodoFilter::from_str(filter.as_str()), filter);
        }
        assert_eq!(TodoFilter::from_str("bogus"), TodoFilter::All);
    }
}
