use lazy_static::lazy_static;
use regex::Regex;
use scout_core::present::truncate_chars;
use scout_core::ScholarResult;
use scraper::{ElementRef, Html, Selector};
use url::Url;

lazy_static! {
    static ref WS: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Extracts results from a Scholar results page.
///
/// A result block is any `div` with a class starting with `gs_r`. Its title
/// link is the `a` directly inside a direct-child `h3.gs_rt`, its snippet the
/// direct-child `div.gs_rs`. Blocks without both title and URL are dropped.
pub fn parse_results(html: &str, base: &Url, snippet_chars: usize) -> Vec<ScholarResult> {
    let doc = Html::parse_document(html);
    let div = Selector::parse("div").expect("valid selector");
    let mut results = Vec::new();

    for block in doc.select(&div) {
        if !block.value().classes().any(|c| c.starts_with("gs_r")) {
            continue;
        }
        let Some(link) = child(block, "h3", Some("gs_rt")).and_then(|h3| child(h3, "a", None)) else {
            continue;
        };
        let title = clean_text(link);
        let url = link
            .value()
            .attr("href")
            .and_then(|h| Url::parse(h).or_else(|_| base.join(h)).ok())
            .map(String::from)
            .unwrap_or_default();
        if title.is_empty() || url.is_empty() {
            continue;
        }
        let snippet = child(block, "div", Some("gs_rs"))
            .map(|s| truncate_chars(&clean_text(s), snippet_chars))
            .unwrap_or_default();
        results.push(ScholarResult { title, url, snippet });
    }
    results
}

fn child<'a>(el: ElementRef<'a>, tag: &str, class: Option<&str>) -> Option<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).find(|c| {
        c.value().name() == tag && class.map_or(true, |cl| c.value().classes().any(|x| x == cl))
    })
}

fn clean_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    WS.replace_all(raw.trim(), " ").into_owned()
}
