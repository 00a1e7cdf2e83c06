use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    /// 1-based index of the first item on this page, 0 when the page is empty.
    pub from: u32,
    /// 1-based index of the last item on this page, 0 when the page is empty.
    pub to: u32,
    pub total: u32,
}

impl PageMeta {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// A page of items plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Collection<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Collection<U> {
        Collection {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
