use serde::Deserialize;

use super::{escape, layout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

/// Everything needed to draw the auth screen.
#[derive(Debug, Clone, Default)]
pub struct AuthPage {
    pub tab: Tab,
    pub notice: Option<Notice>,
    /// Username to pre-fill after a rejected submission
    pub username: String,
}

impl AuthPage {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn login() -> Self {
        Self::new(Tab::Login)
    }

    pub fn signup() -> Self {
        Self::new(Tab::Signup)
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.notice = Some(Notice::Error(message.into()));
        self
    }

    pub fn with_success(mut self, message: impl Into<String>) -> Self {
        self.notice = Some(Notice::Success(message.into()));
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }
}

pub fn render(page: &AuthPage) -> String {
    let tab_link = |tab: Tab, href: &str, label: &str| {
        let class = if page.tab == tab { " class='active'" } else { "" };
        format!("<a href='{}'{}>{}</a>", href, class, label)
    };

    let notice = match &page.notice {
        Some(Notice::Error(msg)) => format!("<div class='notice error'>❌ {}</div>\n", escape(msg)),
        Some(Notice::Success(msg)) => {
            format!("<div class='notice success'>✅ {}</div>\n", escape(msg))
        }
        None => String::new(),
    };

    let form = match page.tab {
        Tab::Login => format!(
            "<form method='post' action='/login'>\n\
             <label>Username <input name='username' value=\"{}\"></label>\n\
             <label>Password <input name='password' type='password'></label>\n\
             <button type='submit'>🚀 Log in</button>\n</form>",
            escape(&page.username)
        ),
        Tab::Signup => format!(
            "<form method='post' action='/signup'>\n\
             <label>New Username <input name='username' value=\"{}\"></label>\n\
             <label>Password <input name='password' type='password'></label>\n\
             <label>Confirm Password <input name='confirm' type='password'></label>\n\
             <button type='submit'>✨ Sign up</button>\n</form>",
            escape(&page.username)
        ),
    };

    let body = format!(
        "<div class='title'>🔐 Anonymous Chatroom</div>\n\
         <nav class='tabs'>{} {}</nav>\n{}{}",
        tab_link(Tab::Login, "/?tab=login", "🔑 Login"),
        tab_link(Tab::Signup, "/?tab=signup", "📝 Sign up"),
        notice,
        form
    );

    layout("Anonymous Chatroom", &body)
}
