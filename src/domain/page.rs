use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;
const MAX_OFFSET: i64 = i32::MAX as i64;

/// Raw `offset`/`limit` pair as it arrives in a query string.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    pub fn parse(offset: Option<i64>, limit: Option<i64>) -> Result<Self, String> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if !(0..=MAX_OFFSET).contains(&offset) {
            return Err(format!(
                "{offset} is not a valid page offset. It must be between 0 and {MAX_OFFSET}."
            ));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!(
                "{limit} is not a valid page limit. It must be between 1 and {MAX_LIMIT}."
            ));
        }
        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = String;

    fn try_from(value: PageQuery) -> Result<Self, Self::Error> {
        PageRequest::parse(value.offset, value.limit)
    }
}

/// One slice of a larger ordered collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.request.offset + self.request.limit < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.request.offset > 0
    }

    pub fn next_offset(&self) -> i64 {
        self.request.offset + self.request.limit
    }

    pub fn previous_offset(&self) -> i64 {
        (self.request.offset - self.request.limit).max(0)
    }

    /// Offset of the last full window, `0` for an empty collection.
    pub fn last_offset(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            ((self.total - 1) / self.request.limit) * self.request.limit
        }
    }
}
