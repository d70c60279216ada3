//! Static page table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Sort,
    Editor,
}

/// All pages, in index order.
pub const PAGES: [Page; 2] = [Page::Sort, Page::Editor];

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Page::Sort => "sort",
            Page::Editor => "editor",
        }
    }

    pub fn route(self) -> String {
        format!("/{}", self.name())
    }

    /// Parse a route (`/sort`) or bare page name (`sort`).
    pub fn from_route(route: &str) -> Option<Page> {
        let name = route.strip_prefix('/').unwrap_or(route);
        PAGES.into_iter().find(|page| page.name() == name)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
