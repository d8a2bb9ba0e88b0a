use contracts::dashboards::d100_report_generator::format_cell;
use leptos::prelude::*;
use thaw::*;

use super::labels::header_label;
use super::view_model::ReportGeneratorVm;

/// Result rows projected onto the selected columns
#[component]
pub fn ReportTable(vm: ReportGeneratorVm) -> impl IntoView {
    let columns = Memo::new(move |_| vm.visible_columns());

    view! {
        {move || {
            if vm.records.with(|r| r.is_empty()) {
                return view! { <p class="report-table__empty">"No data to display."</p> }
                    .into_any();
            }

            view! {
                <div class="report-table">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {move || {
                                    columns
                                        .get()
                                        .into_iter()
                                        .map(|name| {
                                            view! {
                                                <TableHeaderCell min_width=120.0>
                                                    {header_label(&name)}
                                                </TableHeaderCell>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let columns = columns.get();
                                vm.records.with(|records| {
                                    records
                                        .iter()
                                        .map(|record| {
                                            let cells = columns
                                                .iter()
                                                .map(|name| {
                                                    let text = record
                                                        .get(name)
                                                        .map(format_cell)
                                                        .unwrap_or_default();
                                                    view! { <TableCell>{text}</TableCell> }
                                                })
                                                .collect_view();
                                            view! { <TableRow>{cells}</TableRow> }
                                        })
                                        .collect_view()
                                })
                            }}
                        </TableBody>
                    </Table>
                </div>
            }
            .into_any()
        }}
    }
}
