pub mod debug_console;
pub mod help;
pub mod meal_table;
pub mod pagination;
pub mod search_bar;
pub mod status_bar;
