use contracts::dashboards::d100_report_generator::ExportFormat;
use leptos::prelude::*;
use thaw::*;

use super::labels::export_button_label;
use super::view_model::ReportGeneratorVm;

/// Buttons stay enabled while a request is in flight; a newer query
/// supersedes the pending one.
#[component]
pub fn ActionButtons(vm: ReportGeneratorVm) -> impl IntoView {
    let busy = Signal::derive(move || {
        vm.is_querying() || ExportFormat::all().iter().any(|f| vm.is_exporting(*f))
    });

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center style="margin: 16px 0; flex-wrap: wrap;">
            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.run_query()>
                "Generate Report"
            </Button>

            {ExportFormat::all()
                .iter()
                .copied()
                .map(|format| {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.export(format)
                        >
                            {export_button_label(format)}
                        </Button>
                    }
                })
                .collect_view()}

            <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.clear()>
                "Clear All Filters"
            </Button>

            <Show when=move || busy.get()>
                <Spinner />
            </Show>
        </Flex>
    }
}
