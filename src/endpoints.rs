use std::fmt;

/// The ingestion endpoints this client can submit to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Track,
    Import,
    Engage,
    Groups,
}

impl Endpoint {
    /// Fixed path of the endpoint on the API host
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Track => "/track",
            Endpoint::Import => "/import",
            Endpoint::Engage => "/engage",
            Endpoint::Groups => "/groups",
        }
    }

    /// Import is the only call authenticated with the API secret.
    /// The client stays permissive: a missing secret is not rejected
    /// locally, the API does that itself.
    pub fn requires_secret(&self) -> bool {
        matches!(self, Endpoint::Import)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Track => write!(f, "track"),
            Endpoint::Import => write!(f, "import"),
            Endpoint::Engage => write!(f, "engage"),
            Endpoint::Groups => write!(f, "groups"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_their_fixed_paths() {
        assert_eq!(Endpoint::Track.path(), "/track");
        assert_eq!(Endpoint::Import.path(), "/import");
        assert_eq!(Endpoint::Engage.path(), "/engage");
        assert_eq!(Endpoint::Groups.path(), "/groups");
    }

    #[test]
    fn only_import_authenticates_with_the_secret() {
        assert!(Endpoint::Import.requires_secret());
        assert!(!Endpoint::Track.requires_secret());
        assert!(!Endpoint::Engage.requires_secret());
        assert!(!Endpoint::Groups.requires_secret());
    }
}
