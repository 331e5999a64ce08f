use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::EmployeeDashboardPanel;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    view! { <EmployeeDashboardPanel /> }
}
