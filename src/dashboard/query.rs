//! Query state and its reducer
//!
//! [`QueryState`] is an immutable value; every change goes through
//! [`QueryState::reduce`], which is also where the page-reset rule lives.

use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

use crate::api::ListQuery;
use crate::config::validators::PAGE_SIZE_OPTIONS;

/// Sentinel sent to the server when no category filter is active
pub const ALL_CATEGORIES: &str = "all";

/// Server-side sort columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    CampaignTitle,
    OriginalUrl,
    Category,
    ClickCount,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "Created",
            SortField::CampaignTitle => "Campaign",
            SortField::OriginalUrl => "URL",
            SortField::Category => "Category",
            SortField::ClickCount => "Clicks",
        }
    }

    /// Next column in cycling order, wrapping around
    pub fn next(&self) -> SortField {
        let all: Vec<SortField> = SortField::iter().collect();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggle(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

/// 排序规格，默认 createdAt desc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// Page sizes the server accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Two,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const OPTIONS: [PageSize; 4] = [
        PageSize::Two,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn value(&self) -> u32 {
        match self {
            PageSize::Two => PAGE_SIZE_OPTIONS[0],
            PageSize::Twenty => PAGE_SIZE_OPTIONS[1],
            PageSize::Fifty => PAGE_SIZE_OPTIONS[2],
            PageSize::Hundred => PAGE_SIZE_OPTIONS[3],
        }
    }

    pub fn next(&self) -> PageSize {
        let idx = Self::OPTIONS.iter().position(|p| p == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }
}

impl TryFrom<u32> for PageSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::OPTIONS
            .iter()
            .copied()
            .find(|p| p.value() == value)
            .ok_or_else(|| {
                format!(
                    "Invalid page size: {}. Valid: {:?}",
                    value, PAGE_SIZE_OPTIONS
                )
            })
    }
}

/// Category filter: the `all` sentinel or one exact category value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Value of the `categoryFilter` query parameter
    pub fn as_param(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(c) => c,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Next filter when cycling through `all` followed by the known categories
    pub fn cycle(&self, categories: &[String]) -> CategoryFilter {
        let next = match self {
            CategoryFilter::All => categories.first(),
            CategoryFilter::Only(current) => categories
                .iter()
                .position(|c| c == current)
                .and_then(|idx| categories.get(idx + 1)),
        };
        next.map(|c| CategoryFilter::Only(c.clone()))
            .unwrap_or(CategoryFilter::All)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from(s))
    }
}

/// Transitions accepted by [`QueryState::reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    SetPage(u32),
    /// Also resets the page: the old index may not exist at the new size
    SetPageSize(PageSize),
    /// Resets the page
    SetSearchTerm(String),
    /// Resets the page
    SetCategoryFilter(CategoryFilter),
    /// Keeps the page
    SetSort(SortSpec),
    /// Empty search, `all` category, page 0 in one transition
    ClearFilters,
}

/// 查询状态（不可变值）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub page: u32,
    pub page_size: PageSize,
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: SortSpec,
}

impl QueryState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Apply one transition, returning the next state
    pub fn reduce(&self, action: QueryAction) -> QueryState {
        let mut next = self.clone();
        match action {
            QueryAction::SetPage(page) => next.page = page,
            QueryAction::SetPageSize(size) => {
                next.page_size = size;
                next.page = 0;
            }
            QueryAction::SetSearchTerm(term) => {
                if term != self.search_term {
                    next.search_term = term;
                    next.page = 0;
                }
            }
            QueryAction::SetCategoryFilter(filter) => {
                if filter != self.category {
                    next.category = filter;
                    next.page = 0;
                }
            }
            QueryAction::SetSort(sort) => next.sort = sort,
            QueryAction::ClearFilters => {
                next.search_term.clear();
                next.category = CategoryFilter::All;
                next.page = 0;
            }
        }
        next
    }

    /// Query parameters for `GET /links`
    pub fn to_list_query(&self) -> ListQuery {
        ListQuery {
            current_page: self.page,
            page_size: self.page_size.value(),
            search_term: self.search_term.clone(),
            sort_field: self.sort.field.as_ref().to_string(),
            sort_order: self.sort.order.as_ref().to_string(),
            category_filter: self.category.as_param().to_string(),
        }
    }

    /// Number of pages for `total` matches; at least 1
    pub fn page_count(&self, total: u64) -> u32 {
        let size = u64::from(self.page_size.value());
        u32::try_from(total.div_ceil(size).max(1)).unwrap_or(u32::MAX)
    }

    pub fn has_filters(&self) -> bool {
        !self.search_term.is_empty() || !self.category.is_all()
    }
}
