use serde::de::DeserializeOwned;

/// Sort direction shared by both list modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

/// One page of results from a list module.
///
/// `continuation` is `Some` only when the server returned a non-empty
/// continuation token, i.e. more results exist. To fetch the next page,
/// copy the token into the request's `continue_token` field and re-issue
/// the call with the other filters unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse<T> {
    /// Whether the server marked this batch as complete (`batchcomplete`).
    pub batch_complete: bool,
    /// The result entities for this page, in server-return order.
    pub items: Vec<T>,
    /// Continuation token for the next page, if any.
    pub continuation: Option<String>,
}

impl<T> ListResponse<T> {
    /// True when enumeration is exhausted and no further call is needed.
    pub fn is_complete(&self) -> bool {
        self.continuation.is_none()
    }
}

/// A `list=` module of the Action API: its wire name, the continuation
/// key it echoes, and how a typed request maps to query parameters.
///
/// Implemented by [`AllPagesRequest`](crate::pages::AllPagesRequest) and
/// [`AllCategoriesRequest`](crate::categories::AllCategoriesRequest); the
/// shared executor in [`Client`](crate::client::Client) handles the rest.
pub trait ListModule {
    /// The entity type decoded from the module's result array.
    type Item: DeserializeOwned;

    /// Wire name of the module (`allpages`, `allcategories`).
    const MODULE: &'static str;

    /// Key inside the response's `continue` object holding the token
    /// (`apcontinue`, `accontinue`).
    const CONTINUE_KEY: &'static str;

    /// The requested result-count limit, if set.
    fn limit(&self) -> Option<u32>;

    /// Module-specific query parameters. Only set fields are emitted;
    /// omitted parameters take the server's documented default.
    fn query_params(&self) -> Vec<(&'static str, String)>;
}

/// Builder for the module-specific parameter list. Unset fields produce
/// no parameter at all, so a numeric 0 is distinct from "not set".
#[derive(Debug, Default)]
pub(crate) struct ParamList(Vec<(&'static str, String)>);

impl ParamList {
    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        self.0.push((key, value.to_string()));
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Multi-valued filters are joined with `|` and skipped when empty.
    pub fn push_list(&mut self, key: &'static str, values: Vec<&'static str>) {
        if !values.is_empty() {
            self.push(key, values.join("|"));
        }
    }

    pub fn into_inner(self) -> Vec<(&'static str, String)> {
        self.0
    }
}
