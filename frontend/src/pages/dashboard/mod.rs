use crate::{
    pages::{employee_dashboard::EmployeeDashboardPage, hr_dashboard::HrDashboardPage},
    state::auth::use_session,
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardKind {
    Hr,
    Employee,
}

impl DashboardKind {
    /// Exactly `"hr"` selects the HR dashboard; every other value, including
    /// none at all, lands on the employee dashboard.
    pub fn for_stored_role(role: Option<&str>) -> Self {
        match role {
            Some("hr") => DashboardKind::Hr,
            Some("employee") => DashboardKind::Employee,
            Some(other) => {
                log::warn!("Unknown stored role {:?}; showing employee dashboard", other);
                DashboardKind::Employee
            }
            None => DashboardKind::Employee,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_session();
    let kind = DashboardKind::for_stored_role(ctx.store().stored_role().as_deref());
    match kind {
        DashboardKind::Hr => view! { <HrDashboardPage /> }.into_view(),
        DashboardKind::Employee => view! { <EmployeeDashboardPage /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_hr_selects_hr_dashboard() {
        assert_eq!(DashboardKind::for_stored_role(Some("hr")), DashboardKind::Hr);
        assert_eq!(
            DashboardKind::for_stored_role(Some("employee")),
            DashboardKind::Employee
        );
        for other in ["HR", "admin", "", " hr"] {
            assert_eq!(
                DashboardKind::for_stored_role(Some(other)),
                DashboardKind::Employee,
                "{:?}",
                other
            );
        }
        assert_eq!(DashboardKind::for_stored_role(None), DashboardKind::Employee);
    }
}
