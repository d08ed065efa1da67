//! Convenience catalog: well known attribute names, element constructors and modifiers.
//!
//! Pure shorthand over [`Element`]; nothing here adds behavior of its own.

use crate::compose::IntoNodes;
use crate::node::{AttributeName, Element};
use url::Url;

pub const ID: AttributeName = AttributeName::from_static("id");
pub const CLASS: AttributeName = AttributeName::from_static("class");
pub const HREF: AttributeName = AttributeName::from_static("href");
pub const TYPE: AttributeName = AttributeName::from_static("type");
pub const SRC: AttributeName = AttributeName::from_static("src");
pub const REL: AttributeName = AttributeName::from_static("rel");

impl Element {
    /// Set the `id` attribute, or remove it when `id` is `None`.
    pub fn id<S: Into<String>>(self, id: impl Into<Option<S>>) -> Self {
        self.set_or_remove(ID, id.into())
    }

    /// Set the `class` attribute, or remove it when `class` is `None`.
    pub fn class<S: Into<String>>(self, class: impl Into<Option<S>>) -> Self {
        self.set_or_remove(CLASS, class.into())
    }

    fn set_or_remove<S: Into<String>>(self, name: AttributeName, value: Option<S>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self.remove_attr(name.as_str()),
        }
    }

    pub fn division(content: impl IntoNodes) -> Self {
        Element::new("div").child(content)
    }

    pub fn paragraph(content: impl IntoNodes) -> Self {
        Element::new("p").child(content)
    }

    pub fn button(title: impl Into<String>) -> Self {
        Element::new("button").attr(TYPE, "button").child(title.into())
    }

    pub fn image(url: &Url) -> Self {
        Element::new("img").attr(SRC, url.as_str())
    }

    /// A full document: `<html><head>…</head><body>…</body></html>`.
    pub fn html(head: impl IntoNodes, body: impl IntoNodes) -> Self {
        Element::new("html").child((
            Element::new("head").child(head),
            Element::new("body").child(body),
        ))
    }

    pub fn css_link(url: &Url) -> Self {
        Element::new("link")
            .attr(REL, "stylesheet")
            .attr(TYPE, "text/css")
            .attr(HREF, url.as_str())
    }

    pub fn javascript(script: impl Into<String>) -> Self {
        Element::new("script")
            .attr(TYPE, "application/javascript")
            .child(script.into())
    }

    pub fn meta_name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Element::new("meta")
            .attr("name", name)
            .attr("content", content)
    }

    pub fn meta_http_equiv(http_equiv: impl Into<String>, content: impl Into<String>) -> Self {
        Element::new("meta")
            .attr("http-equiv", http_equiv)
            .attr("content", content)
    }

    pub fn meta_charset(charset: impl Into<String>) -> Self {
        Element::new("meta").attr("charset", charset)
    }
}
