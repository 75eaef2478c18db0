use askama::Template;

use crate::models::{Layout, Page, ViewData};

// --- Body Templates ---
// Each page template renders body markup only; the shell comes from the layout.

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate<'a> {
    view: &'a ViewData,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate<'a> {
    view: &'a ViewData,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate<'a> {
    view: &'a ViewData,
}

#[derive(Template)]
#[template(path = "elements.html")]
struct ElementsTemplate<'a> {
    view: &'a ViewData,
}

#[derive(Template)]
#[template(path = "receipe-post.html")]
struct RecipePostTemplate<'a> {
    view: &'a ViewData,
}

#[derive(Template)]
#[template(path = "blog-post.html")]
struct BlogPostTemplate<'a> {
    view: &'a ViewData,
}

#[derive(Template)]
#[template(path = "pages/login.html")]
struct LoginTemplate<'a> {
    view: &'a ViewData,
}

// --- Layouts ---

#[derive(Template)]
#[template(path = "layouts/main.html")]
struct MainLayout<'a> {
    view: &'a ViewData,
    body: &'a str,
}

/// render
///
/// Renders `page` with `view`, then composes the body into the layout chosen by
/// `view.layout` (the main layout when none is named).
pub fn render(page: Page, view: &ViewData) -> Result<String, askama::Error> {
    let body = match page {
        Page::Home => HomeTemplate { view }.render()?,
        Page::About => AboutTemplate { view }.render()?,
        Page::Contact => ContactTemplate { view }.render()?,
        Page::Elements => ElementsTemplate { view }.render()?,
        Page::RecipePost => RecipePostTemplate { view }.render()?,
        Page::BlogPost => BlogPostTemplate { view }.render()?,
        Page::Login => LoginTemplate { view }.render()?,
    };

    match view.resolved_layout() {
        Layout::Main => MainLayout { view, body: &body }.render(),
        Layout::Bare => Ok(body),
    }
}
