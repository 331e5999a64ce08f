use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RequireSession,
    pages::{auth::AuthPage, dashboard::DashboardPage},
    state::{
        auth::SessionProvider,
        notifications::{provide_notifications, ToastStack},
    },
};

pub const AUTH_ROUTE: &str = "/";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

pub const ROUTE_PATHS: &[&str] = &[AUTH_ROUTE, DASHBOARD_ROUTE];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[DASHBOARD_ROUTE];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_notifications();
    provide_meta_context();
    view! {
        <Title text="HR Module"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path=AUTH_ROUTE view=AuthPage/>
                    <Route path=DASHBOARD_ROUTE view=ProtectedDashboard/>
                </Routes>
            </Router>
            <ToastStack/>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireSession><DashboardPage/></RequireSession> }
}
