use super::{escape, layout};
use crate::store::{ChatMessage, Session};

/// How many of the most recent messages the feed shows.
pub const FEED_LIMIT: usize = 50;

/// The tail of `messages` shown in the feed, oldest first.
pub fn visible_messages(messages: &[ChatMessage]) -> &[ChatMessage] {
    &messages[messages.len().saturating_sub(FEED_LIMIT)..]
}

pub fn render(session: &Session, messages: &[ChatMessage]) -> String {
    let mut feed = String::new();
    for msg in visible_messages(messages) {
        feed.push_str(&format!(
            "<div class='chat-bubble'><b>{}:</b> {}</div>\n",
            escape(&msg.user),
            escape(&msg.text)
        ));
    }

    let body = format!(
        "<div class='sidebar'>\n\
         <span class='notice success'>🟢 Logged in as {}</span>\n\
         <form method='post' action='/logout'><button type='submit'>🚪 Logout</button></form>\n\
         </div>\n\
         <div class='title'>🌍 Public Anonymous Chatroom</div>\n\
         <section class='feed'>\n{}</section>\n\
         <form method='post' action='/chat'>\n\
         <input name='text' placeholder='Type your anonymous message…' autofocus>\n\
         <button type='submit'>Send</button>\n</form>",
        escape(&session.username),
        feed
    );

    layout("Public Anonymous Chatroom", &body)
}
