use crate::models::{SearchDogsParams, SortDirection, SortField, SortSpec};

use super::pagination::{offset, PAGE_SIZE};

/// Breed filter, sort order and page of the dog search.
///
/// Changing what is searched for (breeds or sort) always returns to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    breeds: Vec<String>,
    sort: SortSpec,
    page: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self {
            breeds: Vec::new(),
            sort: SortSpec::default(),
            page: 1,
        }
    }

    /// Start on `page` (values below 1 become 1).
    pub fn at_page(page: usize) -> Self {
        Self {
            page: page.max(1),
            ..Self::new()
        }
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the breed filter. Returns whether anything changed.
    pub fn set_breeds(&mut self, breeds: Vec<String>) -> bool {
        let mut unique: Vec<String> = Vec::with_capacity(breeds.len());
        for breed in breeds {
            if !unique.contains(&breed) {
                unique.push(breed);
            }
        }
        if unique == self.breeds {
            return false;
        }
        self.breeds = unique;
        self.page = 1;
        true
    }

    pub fn set_sort_field(&mut self, field: SortField) -> bool {
        if field == self.sort.field {
            return false;
        }
        self.sort.field = field;
        self.page = 1;
        true
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) -> bool {
        if direction == self.sort.direction {
            return false;
        }
        self.sort.direction = direction;
        self.page = 1;
        true
    }

    /// Move to `page`, leaving filters and sort alone.
    pub fn set_page(&mut self, page: usize) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Request parameters for the current page.
    pub fn to_params(&self) -> SearchDogsParams {
        SearchDogsParams {
            breeds: self.breeds.clone(),
            size: Some(PAGE_SIZE),
            from: Some(offset(self.page)),
            sort: Some(self.sort),
            ..Default::default()
        }
    }
}
