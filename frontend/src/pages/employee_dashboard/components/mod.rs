pub mod leave_form;
pub mod leave_history;
pub mod profile_card;
pub mod stats;
