use leptos::prelude::*;

/// Page shell: fixed sidebar on the left, scrolling content on the right.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |  (left)   |           (center)           |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <div data-zone="left" class="left">
                    {left()}
                </div>

                <div data-zone="center" class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
