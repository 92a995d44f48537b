use serde::Deserialize;

use crate::types::{Direction, ListModule, ParamList};

/// Extra per-category properties to request (`acprop`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryProp {
    /// Adds the member counts (pages, files, subcategories).
    Size,
    /// Tags categories hidden with `__HIDDENCAT__`.
    Hidden,
}

impl CategoryProp {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryProp::Size => "size",
            CategoryProp::Hidden => "hidden",
        }
    }
}

/// Filters for the `allcategories` list module. Unset fields are omitted
/// from the request and take the server's documented defaults.
#[derive(Debug, Clone, Default)]
pub struct AllCategoriesRequest {
    /// The category to start enumerating from.
    pub from: Option<String>,
    /// Continuation token from a previous response.
    pub continue_token: Option<String>,
    /// The category to stop enumerating at.
    pub to: Option<String>,
    /// Only categories whose title begins with this value.
    pub prefix: Option<String>,
    /// Sort direction. Server default: ascending.
    pub dir: Option<Direction>,
    /// Only categories with at least this many members.
    pub min: Option<u64>,
    /// Only categories with at most this many members.
    pub max: Option<u64>,
    /// How many categories to return, at most 500. Server default: 10.
    pub limit: Option<u32>,
    /// Extra properties to include per category.
    pub prop: Vec<CategoryProp>,
}

/// A category name and its member counts. The counts are only populated
/// when the request asked for [`CategoryProp::Size`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Category title without the `Category:` prefix.
    #[serde(rename = "*")]
    pub name: String,
    /// Total members (pages + files + subcategories).
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default)]
    pub files: u64,
    #[serde(default)]
    pub subcats: u64,
}

impl ListModule for AllCategoriesRequest {
    type Item = Category;

    const MODULE: &'static str = "allcategories";
    const CONTINUE_KEY: &'static str = "accontinue";

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = ParamList::default();
        params.push_opt("acfrom", self.from.as_deref());
        params.push_opt("accontinue", self.continue_token.as_deref());
        params.push_opt("acto", self.to.as_deref());
        params.push_opt("acprefix", self.prefix.as_deref());
        params.push_opt("acdir", self.dir.map(Direction::as_str));
        params.push_opt("acmin", self.min);
        params.push_opt("acmax", self.max);
        params.push_opt("aclimit", self.limit);
        params.push_list("acprop", self.prop.iter().map(|p| p.as_str()).collect());
        params.into_inner()
    }
}
