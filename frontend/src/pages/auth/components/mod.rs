pub mod brand;
pub mod form;
