use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{catalog::CategoryFilter, error::AppResult};

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

/// Search bar state shared by the catalog, the client dashboard and public lists.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GiftQuery {
    /// Case-insensitive text matched against name and description.
    pub q: Option<String>,
    /// A category id or `all`.
    pub category: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl GiftQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn category_filter(&self) -> AppResult<CategoryFilter> {
        CategoryFilter::parse(self.category.as_deref())
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl SearchQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}
