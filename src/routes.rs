//! Static client-side route table.
//!
//! DESIGN
//! ======
//! Every destination the navigation bar can reach is a variant here, so
//! links, redirects and the router share one source of paths.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Client-side destinations reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Profile,
    Dashboard,
    Help,
    About,
    Contact,
    Auth,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Home,
        AppRoute::Profile,
        AppRoute::Dashboard,
        AppRoute::Help,
        AppRoute::About,
        AppRoute::Contact,
        AppRoute::Auth,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Profile => "/profile",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Help => "/help",
            AppRoute::About => "/about",
            AppRoute::Contact => "/contact",
            AppRoute::Auth => "/auth",
        }
    }

    /// Path without the leading slash, as the router's static segments expect.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Page heading used by the placeholder page behind each route.
    pub const fn title(self) -> &'static str {
        match self {
            AppRoute::Home => "Ride",
            AppRoute::Profile => "Profile",
            AppRoute::Dashboard => "Drive",
            AppRoute::Help => "Help",
            AppRoute::About => "About",
            AppRoute::Contact => "Contact",
            AppRoute::Auth => "Log in",
        }
    }
}

/// A labelled link to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: AppRoute,
}

impl NavLink {
    pub const fn new(label: &'static str, route: AppRoute) -> Self {
        Self { label, route }
    }

    pub const fn href(self) -> &'static str {
        self.route.path()
    }
}

/// Links shown regardless of auth state, in display order.
pub const PRIMARY_LINKS: [NavLink; 5] = [
    NavLink::new("Ride", AppRoute::Home),
    NavLink::new("Drive", AppRoute::Dashboard),
    NavLink::new("Help", AppRoute::Help),
    NavLink::new("About", AppRoute::About),
    NavLink::new("Contact", AppRoute::Contact),
];

pub const BRAND_LINK: NavLink = NavLink::new("RideWise", AppRoute::Home);
pub const LOGIN_LINK: NavLink = NavLink::new("Log in", AppRoute::Auth);
pub const SIGNUP_LINK: NavLink = NavLink::new("Sign up", AppRoute::Auth);
