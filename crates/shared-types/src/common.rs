use serde::{Deserialize, Serialize};

/// Rows per page in every dashboard table.
pub const PAGE_SIZE: usize = 6;

/// A record that can be matched by the dashboard search boxes.
pub trait Searchable {
    /// The text fields a free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match of `query` against any of `fields`.
/// A blank query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter `items` with the record's default search fields.
pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(&item.search_fields(), query))
        .cloned()
        .collect()
}

/// Filter `items` on a caller-chosen set of fields.
pub fn filter_by<T, F>(items: &[T], query: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<&str>,
{
    items
        .iter()
        .filter(|item| matches_query(&fields(item), query))
        .cloned()
        .collect()
}

/// Number of pages needed for `total` rows. Always at least one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 || total == 0 {
        return 1;
    }
    total.div_ceil(page_size)
}

/// Clamp a 1-based page number into `1..=page_count`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// One page of a client-side paginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let total_pages = page_count(total, limit);
        let page = page.clamp(1, total_pages);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.limit
    }
}

impl<T: Clone> Paginated<T> {
    /// Slice an already-filtered list down to one page.
    pub fn from_items(items: &[T], page: usize, limit: usize) -> Self {
        let meta = PaginationMeta::new(page, limit, items.len());
        let start = meta.offset().min(items.len());
        let end = (start + limit).min(items.len());
        Self {
            data: items[start..end].to_vec(),
            meta,
        }
    }
}

/// Convenience wrapper for the common case of a fixed page size.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    Paginated::from_items(items, page, page_size).data
}
