use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    components::guard::RequireSession,
    pages::{
        ForgotPasswordPage, HomePage, LoginPage, ProfilePage, RegisterPage, ResetPasswordPage,
        VerifyEmailPage,
    },
    state::{
        flow::FlowProvider,
        session::{Capabilities, SessionProvider},
    },
    utils::navigation::RouterNavigator,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/register/verify",
    "/forgot-password",
    "/reset-password",
    "/profile",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/profile"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/register/verify",
    "/forgot-password",
    "/reset-password",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="DocBook"/>
        <FlowProvider>
            <Router>
                <AppShell/>
            </Router>
        </FlowProvider>
    }
}

/// Routes plus the capabilities that need the router in scope.
#[component]
fn AppShell() -> impl IntoView {
    provide_context(Capabilities {
        navigator: Rc::new(RouterNavigator::from_router()),
        ..Capabilities::default()
    });
    view! {
        <SessionProvider>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/login" view=LoginPage/>
                <Route path="/register" view=RegisterPage/>
                <Route path="/register/verify" view=VerifyEmailPage/>
                <Route path="/forgot-password" view=ForgotPasswordPage/>
                <Route path="/reset-password" view=ResetPasswordPage/>
                <Route path="/profile" view=ProtectedProfile/>
            </Routes>
        </SessionProvider>
    }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireSession><ProfilePage/></RequireSession> }
}
