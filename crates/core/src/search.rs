use crate::models::market::CurrencyQuote;

/// Anything the search filter can match against.
pub trait SearchTarget {
    fn name(&self) -> &str;
    fn symbol(&self) -> &str;
}

impl SearchTarget for CurrencyQuote {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Whether a single item matches the search term.
///
/// An item matches when the lower-cased term is a substring of its
/// lower-cased name or symbol. The empty term matches everything.
#[must_use]
pub fn matches<T: SearchTarget>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.name().to_lowercase().contains(&needle)
        || item.symbol().to_lowercase().contains(&needle)
}

/// Order-preserving projection of `items` onto those matching `term`.
///
/// Pure and idempotent: filtering an already-filtered result with the same
/// term returns it unchanged, and the empty term is the identity.
#[must_use]
pub fn filter<T: SearchTarget + Clone>(items: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name().to_lowercase().contains(&needle)
                || item.symbol().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
