//! Server-rendered comment fragments

use crate::types::{AuthorHandle, CommentId};
use tracing::debug;

/// Prefix of element ids the server gives comment containers
const COMMENT_ELEMENT_PREFIX: &str = "comment-";

/// Markup for one comment, with the metadata the page needs to place it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFragment {
    /// Comment id read from the markup, or a local id
    pub id: CommentId,
    /// Author read from `data-author-username`
    pub author: Option<AuthorHandle>,
    /// The markup as returned by the server
    pub markup: String,
}

impl CommentFragment {
    /// Read id and author from server markup
    ///
    /// Only the outer element's start tag is consulted. The id comes from its
    /// `data-comment-id`, falling back to an element id of the form
    /// `comment-N`. Markup without either gets a local id.
    pub fn parse(markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let tag = first_start_tag(&markup).unwrap_or_default();
        let id = comment_id_in(tag).unwrap_or_else(|| {
            let id = CommentId::local();
            debug!("Fragment carries no comment id, using {}", id);
            id
        });
        let author = attribute_value(tag, "data-author-username")
            .filter(|v| !v.is_empty())
            .map(AuthorHandle::new);

        Self { id, author, markup }
    }

    /// Whether the id came from the server
    pub fn has_server_id(&self) -> bool {
        !self.id.is_local()
    }

    /// Plain-text rendering of the markup
    pub fn text(&self) -> String {
        plain_text(&self.markup)
    }
}

fn comment_id_in(tag: &str) -> Option<CommentId> {
    if let Some(id) = attribute_value(tag, "data-comment-id").filter(|v| !v.is_empty()) {
        return Some(CommentId::from_string(id));
    }
    attribute_value(tag, "id")
        .and_then(|v| v.strip_prefix(COMMENT_ELEMENT_PREFIX))
        .filter(|v| !v.is_empty())
        .map(CommentId::from_string)
}

/// Body of the first start tag in `markup`, between `<` and the closing `>`
///
/// Comments, doctypes and end tags are skipped. A `>` inside a quoted value
/// does not close the tag.
fn first_start_tag(markup: &str) -> Option<&str> {
    let mut rest = markup;

    loop {
        let open = rest.find('<')?;
        rest = &rest[open + 1..];

        if let Some(after) = rest.strip_prefix("!--") {
            rest = &after[after.find("-->")? + 3..];
            continue;
        }
        if rest.starts_with(&['/', '!', '?'][..]) {
            rest = &rest[rest.find('>')? + 1..];
            continue;
        }
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            continue;
        }

        let mut quote = None;
        for (i, c) in rest.char_indices() {
            match (quote, c) {
                (Some(q), _) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(c),
                (None, '>') => return Some(&rest[..i]),
                _ => {}
            }
        }
        return Some(rest);
    }
}

/// Value of attribute `name` in a start tag body, quoted or bare
///
/// `tag` is what sits between `<` and `>`. Text inside other attributes'
/// quoted values is never mistaken for an attribute.
pub(crate) fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = tag
        .trim_start_matches(|c: char| !c.is_whitespace() && c != '/')
        .trim_start();

    while !rest.is_empty() {
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len())
            .max(1);
        let attr = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after) => {
                let after = after.trim_start();
                match after.chars().next() {
                    Some(quote @ ('"' | '\'')) => {
                        let inner = &after[1..];
                        let close = inner.find(quote).unwrap_or(inner.len());
                        rest = inner.get(close + 1..).unwrap_or_default();
                        Some(&inner[..close])
                    }
                    Some(_) => {
                        let len = after.find(char::is_whitespace).unwrap_or(after.len());
                        rest = &after[len..];
                        Some(&after[..len])
                    }
                    None => {
                        rest = after;
                        Some("")
                    }
                }
            }
            None => None,
        };

        if attr.eq_ignore_ascii_case(name) {
            return Some(value.unwrap_or_default());
        }
        rest = rest.trim_start();
    }

    None
}

/// Strip tags, decode the common entities and collapse whitespace
pub fn plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;

    for c in markup.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
