//! Integration tests for the ansiout binary

mod helpers;

mod cat_test;
mod cli_test;
mod cursor_test;
mod output_test;
