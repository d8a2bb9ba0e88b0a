pub mod action_buttons;
pub mod dashboard;
pub mod filter_panel;
pub mod labels;
pub mod report_table;
pub mod view_model;

pub use dashboard::ReportGenerator;
pub use view_model::ReportGeneratorVm;
