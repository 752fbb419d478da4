pub mod meal_table;
pub mod pagination;
