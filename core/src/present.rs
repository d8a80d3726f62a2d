use serde::{Deserialize, Serialize};

use crate::scorer::DocumentScore;

/// A ranked document ready for display, scored relative to the best hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayHit {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub raw_score: f64,
    pub percent: f64,
}

/// Top `top_n` positive-score results as percentages of the best score.
/// Returns nothing when the best score is not positive.
pub fn display_hits(results: &[DocumentScore], top_n: usize) -> Vec<DisplayHit> {
    let max_score = match results.first() {
        Some(best) if best.score > 0.0 => best.score,
        _ => return Vec::new(),
    };
    results
        .iter()
        .take(top_n)
        .take_while(|r| r.score > 0.0)
        .enumerate()
        .map(|(i, r)| DisplayHit {
            rank: i + 1,
            id: r.id.clone(),
            name: display_name(&r.id).to_string(),
            raw_score: r.score,
            percent: r.score / max_score * 100.0,
        })
        .collect()
}

/// Last path component, accepting either separator.
pub fn display_name(path: &str) -> &str {
    match path.rfind(|c| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Cuts `text` to `max_chars` characters, appending `...` when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(id: &str, score: f64) -> DocumentScore { DocumentScore { id: id.into(), score } }

    #[test]
    fn percentages_relative_to_best() {
        let hits = display_hits(&[ds("/a/x.pdf", 2.0), ds("/a/y.pdf", 1.0)], 5);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].percent, 100.0);
        assert_eq!(hits[1].percent, 50.0);
        assert_eq!(hits[1].name, "y.pdf");
        assert_eq!(hits[1].rank, 2);
    }

    #[test]
    fn non_positive_scores_hidden() {
        let hits = display_hits(&[ds("a", 1.0), ds("b", 0.0), ds("c", -1.0)], 5);
        assert_eq!(hits.len(), 1);
        assert!(display_hits(&[ds("a", 0.0)], 5).is_empty());
        assert!(display_hits(&[ds("a", -3.0)], 5).is_empty());
        assert!(display_hits(&[], 5).is_empty());
    }

    #[test]
    fn capped_at_top_n() {
        let results: Vec<_> = (0..8).map(|i| ds(&format!("d{i}"), 10.0 - i as f64)).collect();
        assert_eq!(display_hits(&results, 5).len(), 5);
    }

    #[test]
    fn names_from_paths() {
        assert_eq!(display_name("/home/u/papers/a.pdf"), "a.pdf");
        assert_eq!(display_name("C:\\docs\\b.pdf"), "b.pdf");
        assert_eq!(display_name("plain.pdf"), "plain.pdf");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    }
}
