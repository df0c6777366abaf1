use contracts::shared::notice::{Notice, NoticeLevel};
use leptos::prelude::*;

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let (class, icon) = match notice.level {
        NoticeLevel::Info => ("notice notice--info", "\u{2139}"),
        NoticeLevel::Warning => ("notice notice--warning", "\u{26a0}"),
    };

    view! {
        <div class=class role="status">
            <span class="notice__icon">{icon}</span>
            <span class="notice__message">{notice.message}</span>
        </div>
    }
}
