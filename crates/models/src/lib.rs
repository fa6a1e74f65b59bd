pub mod attempt;
pub mod day_of_week;
pub mod quiz_data;
