use crate::{
    AppState, handlers,
    models::{Layout, Page, ViewData},
};
use axum::{Router, routing::get};

/// RouteEntry
///
/// A static mapping from a URL path to the page rendered there and its view data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    pub view: ViewData,
}

impl RouteEntry {
    /// Rendered for any GET that matches neither a page nor a static file.
    pub const FALLBACK: RouteEntry = RouteEntry {
        path: "*",
        page: Page::Home,
        view: ViewData::titled("Home"),
    };
}

/// The site's content pages.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        page: Page::Home,
        view: ViewData::titled("Home").with_active("home"),
    },
    RouteEntry {
        path: "/about",
        page: Page::About,
        view: ViewData::titled("About")
            .with_active("about")
            .with_layout(Layout::Main),
    },
    RouteEntry {
        path: "/contact",
        page: Page::Contact,
        view: ViewData::titled("Contact").with_active("contact"),
    },
    RouteEntry {
        path: "/elements",
        page: Page::Elements,
        view: ViewData::titled("Elements"),
    },
    RouteEntry {
        path: "/receipe-post",
        page: Page::RecipePost,
        view: ViewData::titled("Receipe"),
    },
    RouteEntry {
        path: "/blog-post",
        page: Page::BlogPost,
        view: ViewData::titled("Blog Post"),
    },
];

/// resolve
///
/// The entry rendered for a GET to `path`, ignoring static files.
pub fn resolve(path: &str) -> RouteEntry {
    ROUTES
        .iter()
        .find(|entry| entry.path == path)
        .copied()
        .unwrap_or(RouteEntry::FALLBACK)
}

/// Registers one GET route per entry in `ROUTES`.
pub fn page_routes() -> Router<AppState> {
    ROUTES.iter().fold(Router::new(), |router, &entry| {
        router.route(entry.path, get(move || handlers::render_entry(entry)))
    })
}
