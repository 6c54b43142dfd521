//! Motivational quote

use web_sys::Document;

use crate::selectors::QUOTE_CONTAINER_ID;

/// Pick `quotes[floor(r * len)]` for `r` in `[0, 1)`
pub fn pick(quotes: &[String], r: f64) -> Option<&str> {
    if quotes.is_empty() {
        return None;
    }
    let index = ((r * quotes.len() as f64).floor() as usize).min(quotes.len() - 1);
    Some(quotes[index].as_str())
}

/// Fill the quote container once. Returns whether a quote was shown.
pub fn wire(document: &Document, quotes: &[String]) -> bool {
    let Some(container) = document.get_element_by_id(QUOTE_CONTAINER_ID) else {
        return false;
    };
    match pick(quotes, js_sys::Math::random()) {
        Some(quote) => {
            container.set_text_content(Some(quote));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    fn quotes() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into(), "d".into()]
    }

    #[test]
    fn test_pick_buckets() {
        let quotes = quotes();
        assert_eq!(pick(&quotes, 0.0), Some("a"));
        assert_eq!(pick(&quotes, 0.24), Some("a"));
        assert_eq!(pick(&quotes, 0.25), Some("b"));
        assert_eq!(pick(&quotes, 0.99), Some("d"));
    }

    #[test]
    fn test_pick_is_uniform_over_buckets() {
        let quotes = quotes();
        let mut counts = [0usize; 4];
        let steps = 1000;
        for i in 0..steps {
            let r = i as f64 / steps as f64;
            let picked = pick(&quotes, r).unwrap();
            let index = quotes.iter().position(|q| q == picked).unwrap();
            counts[index] += 1;
        }
        assert!(counts.iter().all(|&c| c == steps / 4));
    }

    #[test]
    fn test_pick_empty() {
        assert_eq!(pick(&[], 0.5), None);
    }

    #[test]
    fn test_pick_never_out_of_range() {
        let quotes = quotes();
        assert_eq!(pick(&quotes, 1.0), Some("d"));
    }

    #[test]
    fn test_default_quotes_non_empty() {
        let config = PageConfig::default();
        for r in [0.0, 0.3, 0.6, 0.999] {
            let quote = pick(&config.quotes, r).unwrap();
            assert!(!quote.is_empty());
        }
    }
}
