//! HTML document walking for rel-annotated and general links.
//!
//! Two independent traversals over a parsed document tree: locating the
//! element that advertises a webmention endpoint, and collecting every
//! hyperlink under an optional CSS-selector-scoped subtree. Parsing is
//! browser-grade (html5ever via `scraper`), so malformed markup still
//! produces a best-effort tree.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::relation;

static ENDPOINT_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("link[href][rel]").expect("Failed to parse link selector - this is a bug")
});

static ENDPOINT_ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href][rel]").expect("Failed to parse anchor selector - this is a bug")
});

/// Finds the `href` of the first element whose `rel` attribute carries a
/// webmention relation.
///
/// `<link>` elements are preferred: a matching `<link>` anywhere in the
/// document wins even if a matching `<a>` appears earlier. Among elements of
/// the same kind, the first in document order wins. Elements missing either
/// `href` or `rel` are never candidates.
#[must_use]
pub fn find_webmention_link(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector in [&*ENDPOINT_LINK_SELECTOR, &*ENDPOINT_ANCHOR_SELECTOR] {
        for element in document.select(selector) {
            let Some(rel) = element.value().attr("rel") else {
                continue;
            };
            if !relation::attribute_matches(rel) {
                continue;
            }
            if let Some(href) = element.value().attr("href") {
                return Some(href.to_owned());
            }
        }
    }
    None
}

/// Collects every `href` on `<link>` and `<a>` elements within the capture
/// scope, in document order.
///
/// With no selector (or an empty one) the whole document is in scope.
/// Otherwise capture turns on at any node matching the selector and stays on
/// for that node's entire subtree; it is not re-evaluated per descendant.
///
/// # Errors
///
/// Returns [`Error::Selector`] if the selector fails to compile.
pub fn collect_links(html: &str, selector: Option<&str>) -> Result<Vec<String>> {
    let scope = match selector {
        Some(s) if !s.is_empty() => {
            Some(Selector::parse(s).map_err(|err| Error::Selector(format!("{s}: {err}")))?)
        },
        _ => None,
    };

    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();
    collect_into(
        document.root_element(),
        scope.as_ref(),
        scope.is_none(),
        &mut hrefs,
    );
    Ok(hrefs)
}

fn collect_into(
    element: ElementRef<'_>,
    scope: Option<&Selector>,
    mut capturing: bool,
    hrefs: &mut Vec<String>,
) {
    if !capturing {
        if let Some(scope) = scope {
            capturing = scope.matches(&element);
        }
    }
    if capturing {
        let name = element.value().name();
        if name == "link" || name == "a" {
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_owned());
            }
        }
    }
    for child in element.child_elements() {
        collect_into(child, scope, capturing, hrefs);
    }
}
