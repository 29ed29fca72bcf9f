use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
    Double,
}

/// Next count; never goes below zero.
pub fn apply_counter_action(count: u32, action: CounterAction) -> u32 {
    match action {
        CounterAction::Increment => count.saturating_add(1),
        CounterAction::Decrement => count.saturating_sub(1),
        CounterAction::Reset => 0,
        CounterAction::Double => count.saturating_mul(2),
    }
}

#[component]
pub fn Counter() -> impl IntoView {
    let (count, set_count) = signal(0u32);
    let apply = move |action: CounterAction| {
        set_count.update(|count| *count = apply_counter_action(*count, action));
    };

    view! {
        <p>"Count: " {move || count.get()}</p>
        <button type="button" on:click=move |_| apply(CounterAction::Increment)>"Increment"</button>
        <button type="button" on:click=move |_| apply(CounterAction::Decrement)>"Decrement"</button>
        <button type="button" on:click=move |_| apply(CounterAction::Reset)>"Reset"</button>
        <button type="button" on:click=move |_| apply(CounterAction::Double)>"Double"</button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_actions() {
        assert_eq!(apply_counter_action(0, CounterAction::Increment), 1);
        assert_eq!(apply_counter_action(0, CounterAction::Decrement), 0);
        assert_eq!(apply_counter_action(5, CounterAction::Decrement), 4);
        assert_eq!(apply_counter_action(5, CounterAction::Reset), 0);
        assert_eq!(apply_counter_action(3, CounterAction::Double), 6);
        assert_eq!(apply_counter_action(0, CounterAction::Double), 0);
    }
}
