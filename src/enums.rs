/// Method class a route is registered under.
///
/// `Any` (code 0) is the wildcard class: it matches every request method
/// absent a more specific registration. The named verbs cover codes 1..=7;
/// `Other` carries arbitrary host-defined codes above that range, so the
/// trie never needs to know the full method vocabulary up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Method {
    Any,
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Other(u16),
}

pub(crate) const ANY_CODE: u16 = 0;

impl Method {
    pub const fn code(self) -> u16 {
        match self {
            Method::Any => 0,
            Method::Get => 1,
            Method::Post => 2,
            Method::Put => 3,
            Method::Delete => 4,
            Method::Patch => 5,
            Method::Head => 6,
            Method::Options => 7,
            Method::Other(code) => code,
        }
    }

    /// Canonicalizes codes 0..=7 back to the named variants, so
    /// `Method::from_code(m.code()) == m` holds for every named method.
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 => Method::Any,
            1 => Method::Get,
            2 => Method::Post,
            3 => Method::Put,
            4 => Method::Delete,
            5 => Method::Patch,
            6 => Method::Head,
            7 => Method::Options,
            other => Method::Other(other),
        }
    }

    pub const fn name(self) -> Option<&'static str> {
        match self {
            Method::Any => Some("ANY"),
            Method::Get => Some("GET"),
            Method::Post => Some("POST"),
            Method::Put => Some("PUT"),
            Method::Delete => Some("DELETE"),
            Method::Patch => Some("PATCH"),
            Method::Head => Some("HEAD"),
            Method::Options => Some("OPTIONS"),
            Method::Other(_) => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ANY" => Some(Method::Any),
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "PATCH" => Some(Method::Patch),
            "HEAD" => Some(Method::Head),
            "OPTIONS" => Some(Method::Options),
            _ => None,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Any
    }
}
