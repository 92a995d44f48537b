use serde::Deserialize;

use crate::types::{Direction, ListModule, ParamList};

/// Redirect filter for the `allpages` query (`apfilterredir`).
///
/// Note: due to the API's miser mode, filtering may return fewer than
/// `aplimit` results before continuing, in extreme cases zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectFilter {
    All,
    Redirects,
    NonRedirects,
}

impl RedirectFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectFilter::All => "all",
            RedirectFilter::Redirects => "redirects",
            RedirectFilter::NonRedirects => "nonredirects",
        }
    }
}

/// Protection type filter (`apprtype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionType {
    Edit,
    Move,
    Upload,
}

impl ProtectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProtectionType::Edit => "edit",
            ProtectionType::Move => "move",
            ProtectionType::Upload => "upload",
        }
    }
}

/// Protection level filter (`apprlevel`); only meaningful together with
/// a protection type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionLevel {
    Autoconfirmed,
    Sysop,
}

impl ProtectionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ProtectionLevel::Autoconfirmed => "autoconfirmed",
            ProtectionLevel::Sysop => "sysop",
        }
    }
}

/// Cascading-protection filter (`apprfiltercascade`); ignored by the
/// server when no protection type filter is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeFilter {
    Cascading,
    NonCascading,
    All,
}

impl CascadeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            CascadeFilter::Cascading => "cascading",
            CascadeFilter::NonCascading => "noncascading",
            CascadeFilter::All => "all",
        }
    }
}

/// Protection expiry filter (`apprexpiry`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryFilter {
    /// Only pages with indefinite protection expiry.
    Indefinite,
    /// Only pages with a definite (specific) protection expiry.
    Definite,
    All,
}

impl ExpiryFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpiryFilter::Indefinite => "indefinite",
            ExpiryFilter::Definite => "definite",
            ExpiryFilter::All => "all",
        }
    }
}

/// Language-link filter (`apfilterlanglinks`). May not consider
/// langlinks added by extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangLinksFilter {
    WithLangLinks,
    WithoutLangLinks,
    All,
}

impl LangLinksFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            LangLinksFilter::WithLangLinks => "withlanglinks",
            LangLinksFilter::WithoutLangLinks => "withoutlanglinks",
            LangLinksFilter::All => "all",
        }
    }
}

/// Filters for the `allpages` list module. Unset fields are omitted from
/// the request and take the server's documented defaults.
#[derive(Debug, Clone, Default)]
pub struct AllPagesRequest {
    /// The page title to start enumerating from.
    pub from: Option<String>,
    /// Continuation token from a previous response.
    pub continue_token: Option<String>,
    /// The page title to stop enumerating at.
    pub to: Option<String>,
    /// Only page titles that begin with this value.
    pub prefix: Option<String>,
    /// The namespace to enumerate. Server default: 0 (articles).
    pub namespace: Option<i64>,
    /// Which pages to list with respect to redirects. Server default: all.
    pub filter_redir: Option<RedirectFilter>,
    /// Only pages with at least this many bytes.
    pub min_size: Option<u64>,
    /// Only pages with at most this many bytes.
    pub max_size: Option<u64>,
    /// Limit to pages protected against these actions.
    pub protection_types: Vec<ProtectionType>,
    /// Filter protections by level; requires `protection_types`.
    pub protection_levels: Vec<ProtectionLevel>,
    /// Filter protections by cascadingness. Server default: all.
    pub filter_cascade: Option<CascadeFilter>,
    /// How many pages to return, at most 500. Server default: 10.
    pub limit: Option<u32>,
    /// Sort direction. Server default: ascending.
    pub dir: Option<Direction>,
    /// Filter by presence of language links. Server default: all.
    pub filter_lang_links: Option<LangLinksFilter>,
    /// Filter protections by expiry. Server default: all.
    pub protection_expiry: Option<ExpiryFilter>,
}

/// A wiki page as returned by `allpages`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub pageid: u64,
    /// Namespace the page lives in.
    pub ns: i64,
    pub title: String,
}

impl ListModule for AllPagesRequest {
    type Item = Page;

    const MODULE: &'static str = "allpages";
    const CONTINUE_KEY: &'static str = "apcontinue";

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = ParamList::default();
        params.push_opt("apfrom", self.from.as_deref());
        params.push_opt("apcontinue", self.continue_token.as_deref());
        params.push_opt("apto", self.to.as_deref());
        params.push_opt("apprefix", self.prefix.as_deref());
        params.push_opt("apnamespace", self.namespace);
        params.push_opt("apfilterredir", self.filter_redir.map(RedirectFilter::as_str));
        params.push_opt("apminsize", self.min_size);
        params.push_opt("apmaxsize", self.max_size);
        params.push_list(
            "apprtype",
            self.protection_types.iter().map(|t| t.as_str()).collect(),
        );
        params.push_list(
            "apprlevel",
            self.protection_levels.iter().map(|l| l.as_str()).collect(),
        );
        params.push_opt(
            "apprfiltercascade",
            self.filter_cascade.map(CascadeFilter::as_str),
        );
        params.push_opt("aplimit", self.limit);
        params.push_opt("apdir", self.dir.map(Direction::as_str));
        params.push_opt(
            "apfilterlanglinks",
            self.filter_lang_links.map(LangLinksFilter::as_str),
        );
        params.push_opt(
            "apprexpiry",
            self.protection_expiry.map(ExpiryFilter::as_str),
        );
        params.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_request_emits_no_params() {
        let request = AllPagesRequest::default();
        assert!(request.query_params().is_empty());
    }

    #[test]
    fn full_request_emits_wire_names() {
        let request = AllPagesRequest {
            from: Some("A".to_string()),
            continue_token: Some("Applesauce".to_string()),
            to: Some("B".to_string()),
            prefix: Some("Ap".to_string()),
            namespace: Some(0),
            filter_redir: Some(RedirectFilter::NonRedirects),
            min_size: Some(100),
            max_size: Some(5000),
            protection_types: vec![ProtectionType::Edit, ProtectionType::Move],
            protection_levels: vec![ProtectionLevel::Sysop],
            filter_cascade: Some(CascadeFilter::NonCascading),
            limit: Some(20),
            dir: Some(Direction::Ascending),
            filter_lang_links: Some(LangLinksFilter::WithLangLinks),
            protection_expiry: Some(ExpiryFilter::Indefinite),
        };

        assert_eq!(
            request.query_params(),
            vec![
                ("apfrom", "A".to_string()),
                ("apcontinue", "Applesauce".to_string()),
                ("apto", "B".to_string()),
                ("apprefix", "Ap".to_string()),
                ("apnamespace", "0".to_string()),
                ("apfilterredir", "nonredirects".to_string()),
                ("apminsize", "100".to_string()),
                ("apmaxsize", "5000".to_string()),
                ("apprtype", "edit|move".to_string()),
                ("apprlevel", "sysop".to_string()),
                ("apprfiltercascade", "noncascading".to_string()),
                ("aplimit", "20".to_string()),
                ("apdir", "ascending".to_string()),
                ("apfilterlanglinks", "withlanglinks".to_string()),
                ("apprexpiry", "indefinite".to_string()),
            ]
        );
    }

    #[test]
    fn namespace_zero_is_distinct_from_unset() {
        let unset = AllPagesRequest::default();
        assert!(unset.query_params().is_empty());

        let explicit = AllPagesRequest {
            namespace: Some(0),
            ..Default::default()
        };
        assert_eq!(
            explicit.query_params(),
            vec![("apnamespace", "0".to_string())]
        );
    }

    #[test]
    fn page_decodes_wire_fields() {
        let page: Page = serde_json::from_value(json!({
            "pageid": 15580374,
            "ns": 0,
            "title": "Anarchism"
        }))
        .unwrap();

        assert_eq!(
            page,
            Page {
                pageid: 15580374,
                ns: 0,
                title: "Anarchism".to_string(),
            }
        );
    }
}
