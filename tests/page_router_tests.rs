use foodisus::{
    models::{Layout, Page, ViewData},
    routes::pages::{ROUTES, RouteEntry, resolve},
    views,
};

#[test]
fn test_known_paths_resolve_to_their_pages() {
    let expected = [
        ("/", Page::Home, "Home", Some("home")),
        ("/about", Page::About, "About", Some("about")),
        ("/contact", Page::Contact, "Contact", Some("contact")),
        ("/elements", Page::Elements, "Elements", None),
        ("/receipe-post", Page::RecipePost, "Receipe", None),
        ("/blog-post", Page::BlogPost, "Blog Post", None),
    ];

    for (path, page, title, active) in expected {
        let entry = resolve(path);
        assert_eq!(entry.path, path);
        assert_eq!(entry.page, page, "page for {path}");
        assert_eq!(entry.view.title, title, "title for {path}");
        assert_eq!(entry.view.active, active, "active marker for {path}");
    }
}

#[test]
fn test_about_names_the_main_layout_explicitly() {
    assert_eq!(resolve("/about").view.layout, Some(Layout::Main));
    assert_eq!(resolve("/contact").view.layout, None);
}

#[test]
fn test_unknown_path_falls_back_to_home_with_title_only() {
    let entry = resolve("/xyz-not-a-page");
    assert_eq!(entry, RouteEntry::FALLBACK);
    assert_eq!(entry.page, Page::Home);
    assert_eq!(entry.view, ViewData::titled("Home"));
}

#[test]
fn test_resolution_is_idempotent() {
    for entry in ROUTES {
        assert_eq!(resolve(entry.path), resolve(entry.path));
    }
    assert_eq!(resolve("/nowhere"), resolve("/nowhere"));
}

#[test]
fn test_route_paths_are_unique() {
    let mut paths: Vec<&str> = ROUTES.iter().map(|entry| entry.path).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), ROUTES.len());
}

#[test]
fn test_render_wraps_body_in_main_layout() {
    let html = views::render(Page::Contact, &resolve("/contact").view).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Contact | Foodisus</title>"));
    assert!(html.contains(r#"<li class="active"><a href="/contact">Contact</a></li>"#));
    assert!(html.contains(r#"class="contact-form""#));
}

#[test]
fn test_bare_layout_renders_body_only() {
    let view = ViewData::titled("Elements").with_layout(Layout::Bare);
    let html = views::render(Page::Elements, &view).unwrap();

    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(!html.contains("site-header"));
    assert!(html.contains("<h1>Elements</h1>"));
}

#[test]
fn test_login_renders_error_message_only_when_set() {
    let plain = views::render(Page::Login, &ViewData::titled("Login")).unwrap();
    assert!(!plain.contains("error-message"));

    let view = ViewData::titled("Login").with_error("Invalid login");
    let with_error = views::render(Page::Login, &view).unwrap();
    assert!(with_error.contains(r#"<p class="error-message">Invalid login</p>"#));
}

#[test]
fn test_rendering_is_deterministic() {
    let entry = resolve("/blog-post");
    let first = views::render(entry.page, &entry.view).unwrap();
    let second = views::render(entry.page, &entry.view).unwrap();
    assert_eq!(first, second);
}
