/// Coarse classification of a URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeClass {
    Unknown,
    None,
    Filesystem,
    Network,
}

const NETWORK_SCHEMES: [&str; 4] = ["http", "https", "ftp", "sftp"];

/// Classify a bare scheme token (no `:` or `//`).
/// Tokens are compared exactly: `HTTP` is not `http`.
pub fn classify_scheme(token: &str) -> SchemeClass {
    if token.is_empty() {
        return SchemeClass::None;
    }
    if NETWORK_SCHEMES.contains(&token) {
        return SchemeClass::Network;
    }
    if token == "file" {
        return SchemeClass::Filesystem;
    }
    SchemeClass::Unknown
}

impl SchemeClass {
    /// Classify a URL-like string by its scheme.
    ///
    /// A string with no scheme at all (a plain path such as `/var/thing`)
    /// is `Unknown`, not `None`: `None` is reserved for an explicitly empty
    /// token.
    pub fn of_location(location: &str) -> Self {
        match scheme_token(location) {
            Some(token) => classify_scheme(token),
            None => SchemeClass::Unknown,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, SchemeClass::Network)
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(self, SchemeClass::Filesystem)
    }
}

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn scheme_token(location: &str) -> Option<&str> {
    let (candidate, _) = location.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(candidate)
    } else {
        None
    }
}
