pub mod d100_report_generator;

pub use d100_report_generator::ui::ReportGenerator;
