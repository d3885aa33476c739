use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

impl ListQuery {
    /// (page, limit, offset) with limit clamped to [1, 100] and page floored to 1.
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = (page - 1) * limit;
        (page, limit, offset)
    }
}

/// Path ids must be one-or-more ASCII digits naming a positive integer.
/// Anything else is rejected here, before a statement is ever issued.
pub fn parse_id(raw: &str) -> AppResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest("ID tidak valid".to_string()));
    }
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| AppError::BadRequest("ID tidak valid".to_string()))
}
