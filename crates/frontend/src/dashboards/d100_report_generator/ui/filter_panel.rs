use contracts::dashboards::d100_report_generator::{ColumnDescriptor, ColumnKind, FieldSlot};
use leptos::prelude::*;

use super::labels::column_label;
use super::view_model::ReportGeneratorVm;

/// One widget per schema column plus the column picker
#[component]
pub fn FilterPanel(vm: ReportGeneratorVm) -> impl IntoView {
    // Widgets are rebuilt only when the schema changes, not on every edit
    let columns = Memo::new(move |_| vm.columns());

    view! {
        <div class="report-filters">
            <h2>
                "Filters"
                {move || match vm.active_filter_count() {
                    0 => String::new(),
                    n => format!(" ({} active)", n),
                }}
            </h2>
            <div class="report-filters__grid">
                <For
                    each=move || columns.get()
                    key=|column| column.name.clone()
                    children=move |column| view! { <FilterField vm=vm column=column /> }
                />
            </div>

            <h2>"Select Columns"</h2>
            <div class="report-filters__columns">
                <For
                    each=move || columns.get()
                    key=|column| column.name.clone()
                    children=move |column| {
                        let name = column.name.clone();
                        let checked_name = name.clone();
                        view! {
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.is_column_selected(&checked_name)
                                    on:change=move |_| vm.toggle_column(&name)
                                />
                                {column_label(&column.name)}
                            </label>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn FilterField(vm: ReportGeneratorVm, column: ColumnDescriptor) -> impl IntoView {
    let label = column_label(&column.name);
    let name = column.name.clone();

    let body = match column.kind() {
        ColumnKind::Enum => {
            let options = column.options().to_vec();
            view! {
                <div class="report-filters__options">
                    {options
                        .into_iter()
                        .map(|option| {
                            let (column, checked_column) = (name.clone(), name.clone());
                            let (toggled, checked_option) = (option.clone(), option.clone());
                            view! {
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            vm.is_option_selected(&checked_column, &checked_option)
                                        }
                                        on:change=move |_| vm.toggle_option(&column, &toggled)
                                    />
                                    {option}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        ColumnKind::NumberRange => view! {
            <div class="report-filters__range">
                <FilterInput vm=vm key=FieldSlot::Min.key_for(&name) input_type="number" placeholder="Min" />
                <FilterInput vm=vm key=FieldSlot::Max.key_for(&name) input_type="number" placeholder="Max" />
            </div>
        }
        .into_any(),
        ColumnKind::DateRange => view! {
            <div class="report-filters__range">
                <FilterInput vm=vm key=FieldSlot::Start.key_for(&name) input_type="date" />
                <FilterInput vm=vm key=FieldSlot::End.key_for(&name) input_type="date" />
            </div>
        }
        .into_any(),
        ColumnKind::Text => view! {
            <FilterInput
                vm=vm
                key=FieldSlot::Value.key_for(&name)
                input_type="text"
                placeholder=format!("Enter {}", label)
            />
        }
        .into_any(),
    };

    view! {
        <div class="report-filters__field">
            <label class="report-filters__label">{label}</label>
            {body}
        </div>
    }
}

/// Text-like input bound to one flat filter key
#[component]
fn FilterInput(
    vm: ReportGeneratorVm,
    key: String,
    input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let value_key = key.clone();

    view! {
        <input
            class="report-filters__input"
            type=input_type
            placeholder=placeholder
            prop:value=move || vm.field_text(&value_key)
            on:input=move |ev| vm.set_field(&key, event_target_value(&ev))
        />
    }
}
