//! Top navigation bar with auth-aware profile controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the app shell inside the router. Owns the session and
//! menu state for its lifetime: the auth watcher writes the session, user
//! interaction writes the menus, and `build_nav_model` decides what shows.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar_model::{
    Avatar, DesktopAuth, GuestControls, MenuIcon, MobileAuth, ProfileAction, ProfileDropdown, build_nav_model,
};
use crate::identity::IdentityHandle;
use crate::net::api::LookupHandle;
use crate::routes::PRIMARY_LINKS;
use crate::state::auth_watcher::{AuthWatcher, edit_profile};
use crate::state::menu::MenuState;
use crate::state::session::SessionState;

/// Navigation bar: brand, static links, auth controls and the mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let identity = expect_context::<IdentityHandle>();
    let lookup = expect_context::<LookupHandle>();
    let navigate = use_navigate();

    let session = RwSignal::new(SessionState::default());
    let menus = RwSignal::new(MenuState::default());
    let model = Memo::new(move |_| build_nav_model(&session.get(), &menus.get()));

    let watcher = AuthWatcher::new(identity.0, lookup.0, move |state| session.set(state));

    // Auth events only arrive in the browser.
    #[cfg(feature = "hydrate")]
    {
        watcher.attach(|task| leptos::task::spawn_local(task));
        let mounted = watcher.clone();
        on_cleanup(move || mounted.detach());
    }

    // Actions request navigation through a signal so they stay `Send`.
    let nav_request = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(path) = nav_request.get() {
            nav_request.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_profile_action = Callback::new(move |action: ProfileAction| match action {
        ProfileAction::EditProfile => edit_profile(|path| nav_request.set(Some(path.to_owned()))),
        ProfileAction::Logout => {
            leptos::task::spawn_local(watcher.logout(move |path: &str| nav_request.set(Some(path.to_owned()))));
        }
    });

    let brand = model.get_untracked().brand;
    let desktop_links = PRIMARY_LINKS
        .iter()
        .map(|link| {
            view! { <a href=link.href() class="navbar__link">{link.label}</a> }
        })
        .collect_view();

    let desktop_auth = move || match model.get().desktop {
        DesktopAuth::Guest(guest) => guest_links(guest, "navbar__auth-link").into_any(),
        DesktopAuth::Profile(controls) => view! {
            <div
                class="navbar__profile"
                on:mouseenter=move |_| menus.update(MenuState::open_profile_menu)
                on:mouseleave=move |_| menus.update(MenuState::close_profile_menu)
                on:focusin=move |_| menus.update(MenuState::open_profile_menu)
                on:focusout=move |_| menus.update(MenuState::close_profile_menu)
            >
                <button class="navbar__avatar-button" aria-haspopup="menu">
                    {avatar_view(controls.avatar)}
                </button>
                {controls.dropdown.map(|dropdown| profile_dropdown(dropdown, on_profile_action))}
            </div>
        }
        .into_any(),
    };

    let mobile_menu = move || {
        model.get().mobile.map(|menu| {
            let links = menu
                .links
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href()
                            class="navbar__mobile-link"
                            on:click=move |_| menus.update(MenuState::close_mobile_menu)
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view();
            let auth = match menu.auth {
                MobileAuth::Guest(guest) => guest_links(guest, "navbar__mobile-link").into_any(),
                MobileAuth::Profile { display_name, user_type_label, action } => view! {
                    <div class="navbar__mobile-profile">
                        <div class="navbar__mobile-name">{display_name}</div>
                        <div class="navbar__mobile-type">{user_type_label}</div>
                        <button class="navbar__mobile-link" on:click=move |_| on_profile_action.run(action)>
                            {action.label()}
                        </button>
                    </div>
                }
                .into_any(),
            };
            view! {
                <div class="navbar__mobile">
                    {links}
                    {auth}
                </div>
            }
        })
    };

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a href=brand.href() class="navbar__brand">{brand.label}</a>
                <div class="navbar__desktop">
                    {desktop_links}
                    {desktop_auth}
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || aria_expanded(model.get().menu_icon)
                    on:click=move |_| menus.update(MenuState::toggle_mobile_menu)
                >
                    {move || menu_icon_glyph(model.get().menu_icon)}
                </button>
            </div>
            {mobile_menu}
        </nav>
    }
}

fn guest_links(guest: GuestControls, class: &'static str) -> impl IntoView {
    view! {
        <a href=guest.login.href() class=class>{guest.login.label}</a>
        <a href=guest.signup.href() class=format!("{class} {class}--primary")>{guest.signup.label}</a>
    }
}

fn avatar_view(avatar: Avatar) -> AnyView {
    match avatar {
        Avatar::Image(url) => view! { <img src=url alt="Profile" class="navbar__avatar"/> }.into_any(),
        Avatar::Placeholder => view! {
            <span class="navbar__avatar navbar__avatar--placeholder" aria-label="Profile">
                {AVATAR_PLACEHOLDER}
            </span>
        }
        .into_any(),
    }
}

fn profile_dropdown(dropdown: ProfileDropdown, on_action: Callback<ProfileAction>) -> impl IntoView {
    let actions = dropdown
        .actions
        .into_iter()
        .map(|action| {
            view! {
                <button class="navbar__dropdown-action" role="menuitem" on:click=move |_| on_action.run(action)>
                    {action.label()}
                </button>
            }
        })
        .collect_view();
    view! {
        <div class="navbar__dropdown" role="menu">
            <div class="navbar__dropdown-name">{dropdown.display_name}</div>
            {actions}
        </div>
    }
}

const AVATAR_PLACEHOLDER: &str = "\u{1F464}";

fn menu_icon_glyph(icon: MenuIcon) -> &'static str {
    match icon {
        MenuIcon::Hamburger => "\u{2630}",
        MenuIcon::Close => "\u{2715}",
    }
}

fn aria_expanded(icon: MenuIcon) -> &'static str {
    match icon {
        MenuIcon::Hamburger => "false",
        MenuIcon::Close => "true",
    }
}
