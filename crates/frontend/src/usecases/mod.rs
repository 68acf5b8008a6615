pub mod u501_analyze_code;
