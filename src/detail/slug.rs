//! Routable slugs for protocol names
//!
//! A slug is the name with spaces turned into hyphens, then percent-encoded
//! with the URI-component rules: letters, digits and `-_.!~*'()` stay as is.
//! The reverse turns every hyphen back into a space, so a name that really
//! contains a hyphen cannot be recovered from its slug.

/// `urlencoding` escapes for marks that URI components leave as is
const UNRESERVED_MARKS: [(&str, &str); 5] = [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// URL path segment for a protocol name
#[must_use]
pub fn slug(name: &str) -> String {
    // A literal `%` encodes as `%25`, so these sequences only come from the marks
    UNRESERVED_MARKS
        .iter()
        .fold(urlencoding::encode(&name.replace(' ', "-")).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

/// Protocol name to look up for a path segment
///
/// Malformed percent-encoding is left as is rather than rejected; such a
/// name will simply not be found.
#[must_use]
pub fn unslug(segment: &str) -> String {
    let decoded = urlencoding::decode(segment).map_or_else(|_| segment.to_string(), |name| name.into_owned());
    decoded.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_hyphens() {
        assert_eq!(slug("Agent Mesh Protocol"), "Agent-Mesh-Protocol");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(slug("A2A/Chat & Tools"), "A2A%2FChat-%26-Tools");
        assert_eq!(slug("Café"), "Caf%C3%A9");
    }

    #[test]
    fn test_uri_component_marks_stay_unescaped() {
        assert_eq!(slug("A2A (Beta)!"), "A2A-(Beta)!");
        assert_eq!(slug("Star*Link's"), "Star*Link's");
        assert_eq!(slug("100% (A2A)"), "100%25-(A2A)");
    }

    #[test]
    fn test_unslug_reverses_slug() {
        for name in ["Agent Mesh Protocol", "A2A/Chat & Tools", "Café", "A2A (Beta)!", "100% (A2A)"] {
            assert_eq!(unslug(&slug(name)), name);
        }
    }

    #[test]
    fn test_hyphenated_names_are_lossy() {
        assert_eq!(unslug(&slug("Peer-to-Peer Relay")), "Peer to Peer Relay");
    }

    #[test]
    fn test_malformed_encoding_passes_through() {
        assert_eq!(unslug("bad%FFname"), "bad%FFname");
    }
}
