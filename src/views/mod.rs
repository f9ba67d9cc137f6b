pub mod auth;
pub mod chat;

const STYLE: &str = r#"
.stApp, body {
    background: linear-gradient(135deg, #000428, #004e92);
    color: white;
    font-family: sans-serif;
    min-height: 100vh;
    margin: 0;
}
main { max-width: 720px; margin: 0 auto; padding: 24px; }
.title {
    text-align: center;
    font-size: 32px;
    font-weight: bold;
    text-shadow: 0 0 10px cyan;
}
.chat-bubble {
    background-color: rgba(255,255,255,0.1);
    padding: 12px;
    border-radius: 12px;
    margin: 5px 0;
    font-size: 16px;
}
.chat-bubble:hover { background-color: rgba(0,255,200,0.2); }
.tabs a { color: white; margin-right: 16px; }
.tabs a.active { font-weight: bold; text-decoration: underline; }
.notice { padding: 10px; border-radius: 8px; margin: 8px 0; }
.notice.error { background-color: rgba(255,60,60,0.3); }
.notice.success { background-color: rgba(60,255,120,0.3); }
.sidebar { display: flex; justify-content: space-between; align-items: center; }
form label { display: block; margin: 8px 0; }
"#;

/// Wrap `body` in the shared page shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n\
         <body class=\"stApp\">\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!(
            "<div class='title'>Something went wrong</div>\n<div class='notice error'>{}</div>",
            escape(message)
        ),
    )
}

/// Escape text for an HTML body or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
