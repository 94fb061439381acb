//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::NavConfig;
use crate::identity::IdentityHandle;
use crate::net::api::LookupHandle;
use crate::routes::AppRoute;

/// HTML shell rendered by an SSR host for hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the identity and lookup handles the navigation bar depends on
/// and routes every navigation destination.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(IdentityHandle::for_target());
    provide_context(LookupHandle::http(NavConfig::from_build_env()));

    view! {
        <Stylesheet id="leptos" href="/pkg/ridewise.css"/>
        <Title text="RideWise"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=|| view! { <RoutePage route=AppRoute::Home/> }/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=|| view! { <RoutePage route=AppRoute::Dashboard/> }/>
                <Route path=StaticSegment(AppRoute::Help.segment()) view=|| view! { <RoutePage route=AppRoute::Help/> }/>
                <Route path=StaticSegment(AppRoute::About.segment()) view=|| view! { <RoutePage route=AppRoute::About/> }/>
                <Route path=StaticSegment(AppRoute::Contact.segment()) view=|| view! { <RoutePage route=AppRoute::Contact/> }/>
                <Route path=StaticSegment(AppRoute::Auth.segment()) view=|| view! { <RoutePage route=AppRoute::Auth/> }/>
                <Route path=StaticSegment(AppRoute::Profile.segment()) view=|| view! { <RoutePage route=AppRoute::Profile/> }/>
            </Routes>
        </Router>
    }
}

/// Placeholder body for a route; page content is served by other bundles.
#[component]
fn RoutePage(route: AppRoute) -> impl IntoView {
    view! {
        <main class="page">
            <h1>{route.title()}</h1>
        </main>
    }
}
