/// Action API endpoint used when no other endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://www.mediawiki.org/w/api.php";

/// Highest `aplimit`/`aclimit` the API accepts from unauthenticated
/// callers. Bot accounts get 5000, but this client never authenticates.
pub const MAX_LIMIT: u32 = 500;
