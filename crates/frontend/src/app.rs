use crate::dashboards::ReportGenerator;
use crate::shared::notice::{NoticeHost, NoticeService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts for query and export feedback
    provide_context(NoticeService::new());

    view! {
        <ReportGenerator />
        <NoticeHost />
    }
}
