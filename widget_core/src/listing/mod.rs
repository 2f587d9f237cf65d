//! Filter -> sort -> paginate pipeline shared by the listing pages
//! (mentor match, project gallery, member directory).
//!
//! The pipeline order is fixed: name/description substring filter, exact tag
//! membership, exact availability membership, optional descending rating
//! sort, then a 1-based page slice. The result set is recomputed from
//! scratch on every filter change; nothing is cached between renders.

use serde::{Deserialize, Serialize};

/// Implemented by anything that can appear on a listing page.
pub trait Listed {
    fn title(&self) -> &str;

    /// Extra text searched alongside the title (e.g. a project description).
    fn description(&self) -> &str {
        ""
    }

    /// Tags the tag filter matches against (skills, categories).
    fn tags(&self) -> &[String] {
        &[]
    }

    /// Values the availability filter matches against (weekdays).
    fn availability(&self) -> &[String] {
        &[]
    }

    /// Rating used by the optional descending sort.
    fn rating(&self) -> f32 {
        0.0
    }
}

/// The user-controlled filter inputs plus the current page.
///
/// The page-reset rule lives here, in the setters: changing any filter input
/// snaps back to page 1. The pipeline itself never touches the page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub name_query: String,
    pub selected_tag: Option<String>,
    pub selected_availability: Option<String>,
    pub sort_by_rating: bool,
    /// 1-based.
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            name_query: String::new(),
            selected_tag: None,
            selected_availability: None,
            sort_by_rating: false,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
        self.page = 1;
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.selected_tag = tag;
        self.page = 1;
    }

    pub fn set_availability(&mut self, availability: Option<String>) {
        self.selected_availability = availability;
        self.page = 1;
    }

    pub fn set_sort_by_rating(&mut self, enabled: bool) {
        self.sort_by_rating = enabled;
        self.page = 1;
    }

    /// Back to no filters, first page.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Run the pipeline over `items` and slice out the current page.
    pub fn apply<'a, T: Listed>(&self, items: &'a [T], page_size: usize) -> ResultPage<'a, T> {
        let query = self.name_query.trim().to_lowercase();

        let mut filtered: Vec<&T> = items
            .iter()
            .filter(|item| {
                query.is_empty()
                    || item.title().to_lowercase().contains(&query)
                    || item.description().to_lowercase().contains(&query)
            })
            .filter(|item| match &self.selected_tag {
                Some(tag) => item.tags().iter().any(|t| t == tag),
                None => true,
            })
            .filter(|item| match &self.selected_availability {
                Some(day) => item.availability().iter().any(|d| d == day),
                None => true,
            })
            .collect();

        if self.sort_by_rating {
            // Stable sort: equally rated items keep their input order.
            filtered.sort_by(|a, b| {
                b.rating()
                    .partial_cmp(&a.rating())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let total_count = filtered.len();
        let total_pages = if page_size == 0 {
            1
        } else {
            total_count.div_ceil(page_size).max(1)
        };
        let page = self.page.clamp(1, total_pages);
        let start = (page - 1) * page_size;
        let items = if page_size == 0 || start >= total_count {
            Vec::new()
        } else {
            filtered[start..(start + page_size).min(total_count)].to_vec()
        };

        ResultPage {
            items,
            total_pages,
            total_count,
        }
    }
}

/// One page of filtered results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage<'a, T> {
    pub items: Vec<&'a T>,
    /// Never zero: an empty result set still shows one (empty) page.
    pub total_pages: usize,
    /// Matches across all pages.
    pub total_count: usize,
}
