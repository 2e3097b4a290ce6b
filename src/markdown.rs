//! Model Response Markdown
//!
//! Renders a model's response text with pulldown-cmark for `inner_html`.
//! The text comes from a third party, so the event stream is sanitized:
//! - raw HTML is shown as text
//! - links keep only http(s)/mailto targets and open in a new tab
//! - images are reduced to their alt text

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse and sanitize a response
pub fn render_response(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = sanitize_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Targets a link may point at
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:")
}

enum State {
    Normal,
    InLink,
    /// `in_link` is the state to return to once the image closes
    InImage { depth: usize, in_link: bool },
}

fn sanitize_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal | State::InLink => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

                Event::Start(Tag::Link { dest_url, .. }) => {
                    if is_safe_url(&dest_url) {
                        let html = format!(
                            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                            escape_html(&dest_url)
                        );
                        events.push(Event::Html(CowStr::from(html)));
                        state = State::InLink;
                    }
                }
                Event::End(TagEnd::Link) => {
                    if matches!(state, State::InLink) {
                        events.push(Event::Html(CowStr::Borrowed("</a>")));
                        state = State::Normal;
                    }
                }

                Event::Start(Tag::Image { .. }) => {
                    state = State::InImage {
                        depth: 0,
                        in_link: matches!(state, State::InLink),
                    }
                }

                other => events.push(other),
            },

            // Alt text survives as plain text
            State::InImage { ref mut depth, in_link } => match event {
                Event::Start(_) => *depth += 1,
                Event::End(_) => {
                    if *depth == 0 {
                        state = if in_link { State::InLink } else { State::Normal };
                    } else {
                        *depth -= 1;
                    }
                }
                Event::Text(text) | Event::Code(text) => events.push(Event::Text(text)),
                _ => {}
            },
        }
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
