use leptos::prelude::*;
use thaw::*;

use super::action_buttons::ActionButtons;
use super::filter_panel::FilterPanel;
use super::report_table::ReportTable;
use super::view_model::ReportGeneratorVm;
use crate::dashboards::d100_report_generator::config::ReportConfig;
use crate::shared::notice::NoticeService;

/// Employee report generator page
#[component]
pub fn ReportGenerator() -> impl IntoView {
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");
    let vm = ReportGeneratorVm::new(ReportConfig::from_browser(), notices);

    // Load schema on mount
    Effect::new(move |_| vm.load_schema());

    let schema_ready = Memo::new(move |_| vm.has_schema());
    let has_rows = Memo::new(move |_| vm.records.with(|r| !r.is_empty()));

    view! {
        <div id="d100_report_generator--dashboard" class="report-generator">
            <h1>"Employee Report Generator"</h1>

            {move || {
                if let Some(err) = vm.schema_error.get() {
                    view! {
                        <div class="report-generator__error">
                            <strong>"Failed to load report columns: "</strong>
                            {err}
                        </div>
                    }
                    .into_any()
                } else if !schema_ready.get() {
                    view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Spinner />
                            <span>"Loading schema..."</span>
                        </Flex>
                    }
                    .into_any()
                } else {
                    view! {
                        <FilterPanel vm=vm />
                        <ActionButtons vm=vm />
                        <Show when=move || has_rows.get()>
                            <p class="report-generator__total">
                                "Total Records: " {move || vm.record_count.get()}
                            </p>
                        </Show>
                        <ReportTable vm=vm />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
