mod parser_value_tests;
mod utils;
