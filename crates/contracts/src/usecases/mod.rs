pub mod common;
pub mod u501_analyze_code;
