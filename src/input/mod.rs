pub mod mass_errors;
pub mod mass_parser;
