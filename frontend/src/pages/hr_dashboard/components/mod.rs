pub mod employee_form;
pub mod employee_table;
pub mod leave_table;
pub mod stats;
