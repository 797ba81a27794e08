use serde::Serialize;
use utoipa::ToSchema;

use crate::routes::params::Pagination;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

/// Slices an in-memory result set to one page and describes it.
pub fn paginate<T>(items: Vec<T>, pagination: Pagination) -> (Vec<T>, Meta) {
    let (page, per_page, offset) = pagination.normalize();
    let total = items.len() as i64;
    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = usize::try_from(per_page).unwrap_or(usize::MAX);
    let page_items = items.into_iter().skip(skip).take(take).collect();
    (page_items, Meta::new(page, per_page, total))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }

    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(message, data, Some(Meta::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_reports_total_and_slices() {
        let (items, meta) = paginate(
            (1..=7).collect::<Vec<_>>(),
            Pagination {
                page: Some(2),
                per_page: Some(3),
            },
        );
        assert_eq!(items, vec![4, 5, 6]);
        assert_eq!(meta.total, Some(7));
        assert_eq!(meta.page, Some(2));

        let (items, _) = paginate(vec![1, 2], Pagination { page: Some(5), per_page: None });
        assert!(items.is_empty());
    }

    #[test]
    fn paginate_far_past_the_end_is_an_empty_page() {
        let (items, meta) = paginate(
            vec![1, 2, 3],
            Pagination {
                page: Some(i64::MAX),
                per_page: Some(100),
            },
        );
        assert!(items.is_empty());
        assert_eq!(meta.page, Some(i64::MAX));
        assert_eq!(meta.total, Some(3));
    }
}
