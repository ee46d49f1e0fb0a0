//! Declarative route table.
//!
//! DESIGN
//! ======
//! Each entry pairs a path with either a redirect or a view factory plus page
//! metadata. `App` mounts every entry through `RouteDef::render`, and pages
//! read their document title back with `title_for`. Paths are unique and the
//! root path redirects to the chat page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::pages::{chat::ChatPage, home::HomePage, settings::SettingsPage};

pub const ROOT: &str = "/";
pub const HOME: &str = "/home";
pub const CHAT: &str = "/chat";
pub const SETTINGS: &str = "/settings";

/// Metadata attached to a view route.
#[derive(Clone, Copy, Debug)]
pub struct RouteMeta {
    pub title: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub enum RouteTarget {
    /// Navigate to another declared path.
    Redirect(&'static str),
    /// Build the page on demand.
    View { view: fn() -> AnyView, meta: RouteMeta },
}

#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

pub const ROOT_ROUTE: RouteDef = RouteDef { path: ROOT, name: None, target: RouteTarget::Redirect(CHAT) };

pub const HOME_ROUTE: RouteDef = RouteDef {
    path: HOME,
    name: Some("Home"),
    target: RouteTarget::View { view: home_view, meta: RouteMeta { title: "云边奶茶铺 - 智能订单系统" } },
};

pub const CHAT_ROUTE: RouteDef = RouteDef {
    path: CHAT,
    name: Some("Chat"),
    target: RouteTarget::View { view: chat_view, meta: RouteMeta { title: "云边奶茶铺智能助手" } },
};

pub const SETTINGS_ROUTE: RouteDef = RouteDef {
    path: SETTINGS,
    name: Some("Settings"),
    target: RouteTarget::View { view: settings_view, meta: RouteMeta { title: "系统设置" } },
};

/// All routes in declaration order.
pub const ROUTES: &[RouteDef] = &[ROOT_ROUTE, HOME_ROUTE, CHAT_ROUTE, SETTINGS_ROUTE];

impl RouteDef {
    /// Path without the leading `/`, as expected by `StaticSegment`.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }

    pub fn title(&self) -> Option<&'static str> {
        match self.target {
            RouteTarget::View { meta, .. } => Some(meta.title),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&'static str> {
        match self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::View { .. } => None,
        }
    }

    /// Produce the route's view: the page itself, or a redirect.
    pub fn render(&self) -> AnyView {
        match self.target {
            RouteTarget::View { view, .. } => view(),
            RouteTarget::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
        }
    }
}

/// Look up a route by exact path.
pub fn find(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.path == path)
}

/// Document title for a view route; empty for unknown paths and redirects.
pub fn title_for(path: &str) -> &'static str {
    find(path).and_then(RouteDef::title).unwrap_or_default()
}

fn home_view() -> AnyView {
    view! { <HomePage/> }.into_any()
}

fn chat_view() -> AnyView {
    view! { <ChatPage/> }.into_any()
}

fn settings_view() -> AnyView {
    view! { <SettingsPage/> }.into_any()
}
