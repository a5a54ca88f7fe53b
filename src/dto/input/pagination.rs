use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    ///
    /// indexing starts at 1; page 1 replaces the local list,
    /// subsequent pages append
    ///
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn first_page(limit: u32) -> Self {
        Self { page: 1, limit }
    }
}
