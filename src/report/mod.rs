pub mod black_hole_report;
