pub mod decimal_budget;
