use leptos::prelude::*;

/// Page title
#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
            </div>
        </div>
    }
}
