use serde::Deserialize;
use sqlx::FromRow;

// --- Credential Store Schema ---

/// User
///
/// A row of the `users` table. Passwords are stored and compared as plaintext;
/// this mirrors the existing data and is not fit for production use.
#[derive(Debug, Clone, FromRow, Default, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

// --- Request Payloads ---

/// LoginForm
///
/// The urlencoded body of `POST /login`. Both fields are optional so that a
/// missing field reaches the handler instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Credentials
///
/// A username/password pair where both values are known to be non-empty.
/// The only way to obtain one is `LoginForm::credentials`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl LoginForm {
    /// Returns the submitted pair, or `None` when either field is absent or empty.
    pub fn credentials(self) -> Option<Credentials> {
        let username = self.username.filter(|u| !u.is_empty())?;
        let password = self.password.filter(|p| !p.is_empty())?;
        Some(Credentials { username, password })
    }
}

impl Credentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// --- View Layer ---

/// Page
///
/// Every body template the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
    Elements,
    RecipePost,
    BlogPost,
    Login,
}

impl Page {
    /// The template name as it appears under `templates/` (without extension).
    pub fn template_name(self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Elements => "elements",
            Page::RecipePost => "receipe-post",
            Page::BlogPost => "blog-post",
            Page::Login => "pages/login",
        }
    }
}

/// Layout
///
/// The shell a body template is composed into. `Main` is the site-wide default.
/// `Bare` renders the body on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Main,
    Bare,
}

impl Layout {
    pub fn template_name(self) -> Option<&'static str> {
        match self {
            Layout::Main => Some("layouts/main"),
            Layout::Bare => None,
        }
    }
}

/// ViewData
///
/// The values handed to one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewData {
    pub title: &'static str,
    /// Highlights the matching navigation item.
    pub active: Option<&'static str>,
    /// Explicit layout; `None` means the default layout.
    pub layout: Option<Layout>,
    /// Shown above the login form.
    pub error_message: Option<&'static str>,
}

impl ViewData {
    /// View data carrying only a title.
    pub const fn titled(title: &'static str) -> Self {
        Self {
            title,
            active: None,
            layout: None,
            error_message: None,
        }
    }

    pub const fn with_active(mut self, active: &'static str) -> Self {
        self.active = Some(active);
        self
    }

    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub const fn with_error(mut self, message: &'static str) -> Self {
        self.error_message = Some(message);
        self
    }

    /// The layout this render will use.
    pub fn resolved_layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }

    pub fn is_active(&self, item: &str) -> bool {
        self.active == Some(item)
    }
}
