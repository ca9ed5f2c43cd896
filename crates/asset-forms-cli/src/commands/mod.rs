pub mod check;
pub mod forms;
