//! Cursor-based page loading over the remote catalog.
//!
//! A cursor is a page index: page `c` covers offsets `[c * page_size,
//! (c + 1) * page_size)`. A non-empty filter switches the loader into
//! exact-match mode, which produces a single terminal page (or an empty one
//! when the name is unknown — an empty result is a valid outcome there, not
//! an error).

use crate::models::PokemonSummary;
use crate::source::{BASE_URL, CatalogSource, SourceError};

/// Page size used when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One loaded page of summary rows with its neighbouring cursors.
#[derive(Debug, Clone)]
pub struct SummaryPage {
    /// Rows of this page.
    pub items: Vec<PokemonSummary>,
    /// Cursor of the preceding page; `None` at the start of the sequence.
    pub prev_cursor: Option<u32>,
    /// Cursor of the following page; `None` when the sequence is exhausted.
    pub next_cursor: Option<u32>,
}

/// Loads one page.
///
/// With a non-empty (trimmed) `filter` this performs a case-folded exact-match
/// detail lookup and synthesizes a one-row terminal page; a not-found answer
/// becomes an empty terminal page. With an empty filter it fetches
/// `(limit = page_size, offset = cursor * page_size)` from the list endpoint.
///
/// Errors are recoverable: re-invoking with the same arguments retries the
/// identical request.
pub async fn load<S>(
    source: &S,
    cursor: u32,
    page_size: u32,
    filter: &str,
) -> Result<SummaryPage, SourceError>
where
    S: CatalogSource + ?Sized,
{
    let filter = filter.trim();
    if !filter.is_empty() {
        return match source.detail(&filter.to_lowercase()).await {
            Ok(detail) => Ok(SummaryPage {
                items: vec![PokemonSummary {
                    name: detail.name.clone(),
                    url: format!("{BASE_URL}/pokemon/{}/", detail.id),
                }],
                prev_cursor: None,
                next_cursor: None,
            }),
            Err(SourceError::NotFound) => {
                tracing::debug!(filter, "exact match misses, returning empty page");
                Ok(SummaryPage {
                    items: Vec::new(),
                    prev_cursor: None,
                    next_cursor: None,
                })
            }
            Err(e) => Err(e),
        };
    }

    let response = source.list(page_size, cursor * page_size).await?;
    let next_cursor = if response.results.is_empty() || response.next.is_none() {
        None
    } else {
        Some(cursor + 1)
    };
    let prev_cursor = if cursor == 0 { None } else { Some(cursor - 1) };
    Ok(SummaryPage {
        items: response.results,
        prev_cursor,
        next_cursor,
    })
}

/// A resumable, incrementally loaded sequence of pages for one filter.
///
/// Tracks a scroll anchor so that, after invalidation, the sequence can be
/// re-anchored near where the user was instead of restarting at page zero.
#[derive(Debug)]
pub struct Pager {
    filter: String,
    page_size: u32,
    start_cursor: u32,
    pages: Vec<SummaryPage>,
    anchor: Option<usize>,
}

impl Pager {
    /// Starts a fresh sequence at cursor zero.
    pub fn new(filter: impl Into<String>, page_size: u32) -> Self {
        Self::resume(filter, page_size, 0)
    }

    /// Resumes a sequence from an arbitrary cursor (see [`Pager::refresh_cursor`]).
    pub fn resume(filter: impl Into<String>, page_size: u32, start_cursor: u32) -> Self {
        Self {
            filter: filter.into(),
            page_size,
            start_cursor,
            pages: Vec::new(),
            anchor: None,
        }
    }

    fn next_load_cursor(&self) -> Option<u32> {
        match self.pages.last() {
            None => Some(self.start_cursor),
            Some(page) => page.next_cursor,
        }
    }

    /// Loads the next page, or returns `Ok(None)` when the sequence is
    /// exhausted. A failed load leaves the sequence unchanged so the caller
    /// can retry the same cursor.
    pub async fn load_next<S>(&mut self, source: &S) -> Result<Option<&SummaryPage>, SourceError>
    where
        S: CatalogSource + ?Sized,
    {
        let Some(cursor) = self.next_load_cursor() else {
            return Ok(None);
        };
        let page = load(source, cursor, self.page_size, &self.filter).await?;
        self.pages.push(page);
        Ok(self.pages.last())
    }

    /// All rows loaded so far, in order.
    pub fn items(&self) -> impl Iterator<Item = &PokemonSummary> {
        self.pages.iter().flat_map(|p| p.items.iter())
    }

    /// Number of rows loaded so far.
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }

    /// Records the index of the row currently in view.
    pub fn set_anchor(&mut self, item_index: usize) {
        self.anchor = Some(item_index);
    }

    /// Cursor to re-anchor on after invalidation.
    ///
    /// Locates the loaded page closest to the anchor and computes
    /// `prev_cursor + 1`, falling back to `next_cursor - 1`; `None` means
    /// restart from the beginning.
    pub fn refresh_cursor(&self) -> Option<u32> {
        let anchor = self.anchor?;
        let page = self.closest_page_to(anchor)?;
        page.prev_cursor
            .map(|p| p + 1)
            .or_else(|| page.next_cursor.map(|n| n.saturating_sub(1)))
    }

    /// The page containing `item_index`, or the last loaded page when the
    /// anchor lies beyond what has been loaded.
    fn closest_page_to(&self, item_index: usize) -> Option<&SummaryPage> {
        let mut seen = 0usize;
        for page in &self.pages {
            seen += page.items.len();
            if item_index < seen {
                return Some(page);
            }
        }
        self.pages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListResponse, PokemonDetail, detail::Sprites};
    use async_trait::async_trait;

    /// In-memory catalog with `total` sequentially numbered entries.
    struct FakeCatalog {
        total: u32,
    }

    fn entry(i: u32) -> PokemonSummary {
        PokemonSummary {
            name: format!("poke-{i}"),
            url: format!("{BASE_URL}/pokemon/{}/", i + 1),
        }
    }

    #[async_trait]
    impl CatalogSource for FakeCatalog {
        async fn list(&self, limit: u32, offset: u32) -> Result<ListResponse, SourceError> {
            let end = (offset + limit).min(self.total);
            let results = (offset.min(self.total)..end).map(entry).collect();
            Ok(ListResponse {
                count: self.total,
                next: (end < self.total).then(|| "next-page".to_string()),
                previous: (offset > 0).then(|| "prev-page".to_string()),
                results,
            })
        }

        async fn detail(&self, name_or_id: &str) -> Result<PokemonDetail, SourceError> {
            match name_or_id {
                "pikachu" => Ok(PokemonDetail {
                    id: 25,
                    name: "pikachu".into(),
                    sprites: Sprites::default(),
                    types: Vec::new(),
                    stats: Vec::new(),
                    height: 4,
                    weight: 60,
                }),
                "broken" => Err(SourceError::Api {
                    status: 500,
                    body: "server error".into(),
                }),
                _ => Err(SourceError::NotFound),
            }
        }
    }

    #[tokio::test]
    async fn cursor_round_trip_yields_contiguous_windows() {
        let source = FakeCatalog { total: 100 };
        let page0 = load(&source, 0, 20, "").await.unwrap();
        let page1 = load(&source, 1, 20, "").await.unwrap();

        assert_eq!(page0.items.len(), 20);
        assert_eq!(page1.items.len(), 20);
        assert_eq!(page0.items[0].name, "poke-0");
        assert_eq!(page0.items[19].name, "poke-19");
        assert_eq!(page1.items[0].name, "poke-20");
        assert_eq!(page1.items[19].name, "poke-39");

        assert_eq!(page0.prev_cursor, None);
        assert_eq!(page0.next_cursor, Some(1));
        assert_eq!(page1.prev_cursor, Some(0));
        assert_eq!(page1.next_cursor, Some(2));
    }

    #[tokio::test]
    async fn last_page_is_terminal() {
        let source = FakeCatalog { total: 30 };
        let page1 = load(&source, 1, 20, "").await.unwrap();
        assert_eq!(page1.items.len(), 10);
        assert_eq!(page1.next_cursor, None);
        assert_eq!(page1.prev_cursor, Some(0));

        let beyond = load(&source, 5, 20, "").await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.next_cursor, None);
    }

    #[tokio::test]
    async fn exact_match_is_terminal_in_both_directions() {
        let source = FakeCatalog { total: 100 };
        // Cursor is irrelevant in exact-match mode; case is folded.
        let page = load(&source, 7, 20, "  Pikachu ").await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "pikachu");
        assert_eq!(page.items[0].id_from_url(), Some(25));
        assert_eq!(page.prev_cursor, None);
        assert_eq!(page.next_cursor, None);
    }

    #[tokio::test]
    async fn exact_match_miss_is_an_empty_page_not_an_error() {
        let source = FakeCatalog { total: 100 };
        let page = load(&source, 0, 20, "missingno").await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.prev_cursor, None);
        assert_eq!(page.next_cursor, None);
    }

    #[tokio::test]
    async fn non_404_lookup_failure_propagates() {
        let source = FakeCatalog { total: 100 };
        let err = load(&source, 0, 20, "broken").await.unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn whitespace_filter_falls_back_to_listing() {
        let source = FakeCatalog { total: 5 };
        let page = load(&source, 0, 20, "   ").await.unwrap();
        assert_eq!(page.items.len(), 5);
    }

    #[tokio::test]
    async fn pager_walks_to_exhaustion() {
        let source = FakeCatalog { total: 45 };
        let mut pager = Pager::new("", DEFAULT_PAGE_SIZE);
        assert!(pager.load_next(&source).await.unwrap().is_some());
        assert!(pager.load_next(&source).await.unwrap().is_some());
        assert!(pager.load_next(&source).await.unwrap().is_some());
        assert!(pager.load_next(&source).await.unwrap().is_none());
        assert_eq!(pager.item_count(), 45);
    }

    #[tokio::test]
    async fn refresh_cursor_keeps_the_anchored_window() {
        let source = FakeCatalog { total: 100 };
        let mut pager = Pager::new("", 20);
        pager.load_next(&source).await.unwrap();
        pager.load_next(&source).await.unwrap();

        // Anchor inside page 1: prev_cursor(0) + 1 == 1.
        pager.set_anchor(25);
        assert_eq!(pager.refresh_cursor(), Some(1));

        // Anchor inside page 0: no prev_cursor, fall back to next_cursor - 1.
        pager.set_anchor(3);
        assert_eq!(pager.refresh_cursor(), Some(0));
    }

    #[tokio::test]
    async fn refresh_cursor_without_anchor_restarts() {
        let source = FakeCatalog { total: 100 };
        let mut pager = Pager::new("", 20);
        pager.load_next(&source).await.unwrap();
        assert_eq!(pager.refresh_cursor(), None);
    }
}
