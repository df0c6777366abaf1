use leptos::prelude::*;

/// Labelled dropdown; option values double as their labels
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let select_id = select_id(id);

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id.clone()>
                {label}
            </label>
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let option_value = option.clone();
                        let is_selected = move || value.get() == option_value;
                        let text = option.clone();
                        view! {
                            <option value=option selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Element id, "select" when none is given
fn select_id(id: Option<String>) -> String {
    id.unwrap_or_else(|| "select".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_id() {
        assert_eq!(select_id(Some("d100-country".to_string())), "d100-country");
        assert_eq!(select_id(None), "select");
    }
}
