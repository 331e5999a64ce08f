pub mod auth;
pub mod dashboard;
pub mod employee_dashboard;
pub mod hr_dashboard;

pub use auth::*;
pub use dashboard::*;
