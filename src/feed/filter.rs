use crate::feed::DayKey;
use crate::store::Headline;
use chrono::FixedOffset;
use std::cmp::Reverse;
use std::collections::HashSet;

/// The category dimension of the visible feed.
///
/// `All` passes every headline, including ones whose category is the
/// `N/A` placeholder. `Only` matches by exact string equality; there is
/// no normalization because category names come verbatim from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == category,
        }
    }

    /// Name shown in the header line.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(name) => name,
        }
    }
}

/// Headlines published on `day` under `tz`, in input order.
///
/// Headlines without a publish time (or with one outside the representable
/// range) belong to no day and are always excluded here.
pub fn filter_day(headlines: &[Headline], day: DayKey, tz: FixedOffset) -> Vec<Headline> {
    headlines
        .iter()
        .filter(|h| {
            h.published
                .and_then(|secs| DayKey::from_timestamp(secs, tz))
                .is_some_and(|key| key == day)
        })
        .cloned()
        .collect()
}

/// Headlines matching `filter`, in input order.
pub fn filter_category(headlines: &[Headline], filter: &CategoryFilter) -> Vec<Headline> {
    headlines
        .iter()
        .filter(|h| filter.matches(&h.category))
        .cloned()
        .collect()
}

/// Bookmarked headlines ordered by publish time, newest first.
///
/// A missing publish time sorts as zero, placing undated rows at the
/// bottom with any epoch-dated rows. Ties keep the order the store
/// returned; the sort is stable.
pub fn list_bookmarked(headlines: &[Headline], saved: &HashSet<String>) -> Vec<Headline> {
    let mut out: Vec<Headline> = headlines
        .iter()
        .filter(|h| saved.contains(&h.id))
        .cloned()
        .collect();
    out.sort_by_key(|h| Reverse(h.published.unwrap_or(0)));
    out
}
