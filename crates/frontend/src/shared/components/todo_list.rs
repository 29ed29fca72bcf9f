use crate::shared::icons::icon;
use contracts::components::todo::{
    active_count, todo_reducer, visible_todos, Todo, TodoAction, TodoFilter, TodoListState,
};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn TodoFilters(
    #[prop(into)]
    value: Signal<TodoFilter>,
    on_change: Callback<TodoFilter>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get().as_str()
            on:change=move |ev| on_change.run(TodoFilter::from_str(&event_target_value(&ev)))
        >
            {TodoFilter::all()
                .into_iter()
                .map(|filter| view! { <option value=filter.as_str()>{filter.label()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn TodoItem(todo: Todo, on_toggle: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    let text_class = if todo.completed {
        "todo-item__text todo-item__text--done"
    } else {
        "todo-item__text"
    };

    view! {
        <div class="todo-item">
            <label>
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=todo.completed
                    on:change=move |_| on_toggle.run(())
                />
                <span class=text_class>{todo.text.clone()}</span>
            </label>
            <button
                type="button"
                class="button button--icon"
                aria-label=format!("Delete {}", todo.text)
                on:click=move |_| on_delete.run(())
            >
                {icon("trash")}
            </button>
        </div>
    }
}

#[component]
pub fn TodoList(
    #[prop(optional)]
    initial_todos: Option<Vec<Todo>>,
    #[prop(optional)]
    initial_filter: Option<TodoFilter>,
) -> impl IntoView {
    let state = RwSignal::new(TodoListState::new(initial_todos, initial_filter));
    let new_todo_ref = NodeRef::<html::Input>::new();

    let dispatch = move |action: TodoAction| {
        state.update(|state| *state = todo_reducer(state, action));
    };

    let filter = Signal::derive(move || state.with(|s| s.filter));
    let remaining = move || state.with(active_count);

    let handle_add = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = new_todo_ref.get() else {
            log::warn!("new todo input is not mounted");
            return;
        };
        let text = input.value();
        if !text.is_empty() {
            dispatch(TodoAction::Add { text });
            input.set_value("");
        }
    };

    view! {
        <div class="todo-list">
            <div class="todo-list__toolbar">
                <TodoFilters
                    value=filter
                    on_change=Callback::new(move |filter| dispatch(TodoAction::SetFilter { filter }))
                />
                <span>{move || format!("{} remaining", remaining())}</span>
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| dispatch(TodoAction::ClearCompleted)
                >
                    "Clear completed"
                </button>
            </div>
            <ul class="todo-list__items">
                <For
                    each=move || state.with(visible_todos)
                    key=|todo| (todo.id.clone(), todo.completed)
                    children=move |todo| {
                        let toggle_id = todo.id.clone();
                        let delete_id = todo.id.clone();
                        view! {
                            <li>
                                <TodoItem
                                    todo=todo
                                    on_toggle=Callback::new(move |_| {
                                        dispatch(TodoAction::Toggle { id: toggle_id.clone() })
                                    })
                                    on_delete=Callback::new(move |_| {
                                        dispatch(TodoAction::Delete { id: delete_id.clone() })
                                    })
                                />
                            </li>
                        }
                    }
                />
            </ul>
            <form class="todo-list__form" on:submit=handle_add>
                <input
                    node_ref=new_todo_ref
                    type="text"
                    class="form__input"
                    aria-label="New todo text"
                    placeholder="What needs to be done?"
                />
                <button type="submit" class="button button--primary">"Add"</button>
            </form>
        </div>
    }
}
