//! Symbol search.

use screener_data::Record;

/// Result cap used by interactive lookups.
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Records whose symbol or name contains `query`, ignoring case.
///
/// Results keep input order and stop at `limit`. A blank query matches
/// nothing.
pub fn search<'a, I>(records: I, query: &str, limit: usize) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_uppercase();
    records
        .into_iter()
        .filter(|r| {
            r.symbol.to_uppercase().contains(&needle)
                || r.name
                    .as_deref()
                    .is_some_and(|name| name.to_uppercase().contains(&needle))
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<Record> {
        [
            ("AAPL", Some("Apple Inc.")),
            ("AMAT", Some("Applied Materials")),
            ("PLD", Some("Prologis")),
            ("APA", None),
            ("MSFT", Some("Microsoft")),
        ]
        .into_iter()
        .map(|(symbol, name)| Record {
            name: name.map(str::to_string),
            ..Record::new(symbol)
        })
        .collect()
    }

    fn symbols(found: &[&Record]) -> Vec<String> {
        found.iter().map(|r| r.symbol.clone()).collect()
    }

    #[test]
    fn test_matches_symbol_or_name_case_insensitively() {
        let records = universe();
        assert_eq!(
            symbols(&search(&records, "appl", DEFAULT_SEARCH_LIMIT)),
            vec!["AAPL", "AMAT"]
        );
        assert_eq!(
            symbols(&search(&records, "ap", DEFAULT_SEARCH_LIMIT)),
            vec!["AAPL", "AMAT", "APA"]
        );
        assert_eq!(
            symbols(&search(&records, "soft", DEFAULT_SEARCH_LIMIT)),
            vec!["MSFT"]
        );
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let records = universe();
        assert!(search(&records, "", DEFAULT_SEARCH_LIMIT).is_empty());
        assert!(search(&records, "   ", DEFAULT_SEARCH_LIMIT).is_empty());
    }

    #[test]
    fn test_limit() {
        let records = universe();
        assert_eq!(symbols(&search(&records, "a", 2)), vec!["AAPL", "AMAT"]);
        assert!(search(&records, "a", 0).is_empty());
    }
}
