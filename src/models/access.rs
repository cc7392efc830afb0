//! Access-type selection for object retrieval URLs.

/// How a caller wants to retrieve an object.
///
/// Only the literal keyword `public` (compared case-insensitively) selects the
/// public branch. Every other value, the empty string included, falls through
/// to the signed branch — that default is the observable contract for
/// malformed input and must not tighten into a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessType {
    Public,
    Signed,
}

impl AccessType {
    pub fn from_query(value: &str) -> Self {
        if value.eq_ignore_ascii_case("public") {
            AccessType::Public
        } else {
            AccessType::Signed
        }
    }
}

impl Default for AccessType {
    fn default() -> Self {
        AccessType::Signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_keyword_is_case_insensitive() {
        for value in ["public", "PUBLIC", "Public", "pUbLiC"] {
            assert_eq!(AccessType::from_query(value), AccessType::Public);
        }
    }

    #[test]
    fn everything_else_falls_through_to_signed() {
        for value in ["private", "signed", "", "publicc", " public", "0"] {
            assert_eq!(AccessType::from_query(value), AccessType::Signed);
        }
    }
}
