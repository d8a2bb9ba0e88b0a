pub mod d100_report_generator;
