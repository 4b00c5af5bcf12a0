//! Offset/limit pagination window for list queries.

use sea_orm::QuerySelect;

use crate::model::coffee::PaginationQueryDto;

/// Largest LIMIT/OFFSET SQLite accepts; both are signed 64-bit there.
const MAX_WINDOW: u64 = i64::MAX as u64;

/// A pagination window over an ordered result set.
///
/// `offset` records are skipped from the start, then at most `limit` records are
/// returned. A missing `limit` returns everything after the offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub limit: Option<u64>,
    pub offset: u64,
}

impl PaginationParams {
    pub fn new(limit: Option<u64>, offset: u64) -> Self {
        Self { limit, offset }
    }

    pub fn from_dto(dto: PaginationQueryDto) -> Self {
        Self {
            limit: dto.limit,
            offset: dto.offset.unwrap_or(0),
        }
    }

    /// Applies the window to a select query.
    ///
    /// The query must already be ordered; pagination over an unordered query has no
    /// stable meaning. Values above `i64::MAX` are clamped to it, which selects the
    /// same rows.
    pub fn apply<Q: QuerySelect>(self, query: Q) -> Q {
        let limit = self.limit.map(|limit| limit.min(MAX_WINDOW));
        // A zero offset is omitted so SQLite does not need a LIMIT clause for it
        let offset = (self.offset > 0).then_some(self.offset.min(MAX_WINDOW));

        query.offset(offset).limit(limit)
    }
}
