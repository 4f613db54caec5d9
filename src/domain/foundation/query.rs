//! Query-string encoding shared by the redirect and the callback reply.
//!
//! Both sides of the processor protocol use `application/x-www-form-urlencoded`
//! pairs in a fixed order, spaces encoded as `+`.

use url::form_urlencoded;

/// Encodes ordered pairs as `key=value&key=value`.
///
/// An empty slice encodes to the empty string.
pub fn encode_query<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Decodes a query string into ordered pairs.
///
/// A leading `?` is ignored. Duplicate keys are all kept, in order.
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pairs_in_order() {
        let encoded = encode_query(&[("b", "2"), ("a", "1")]);
        assert_eq!(encoded, "b=2&a=1");
    }

    #[test]
    fn encodes_spaces_as_plus_and_escapes_reserved_characters() {
        let encoded = encode_query(&[("note", "a b&c=d")]);
        assert_eq!(encoded, "note=a+b%26c%3Dd");
    }

    #[test]
    fn empty_pairs_encode_to_empty_string() {
        let pairs: [(&str, &str); 0] = [];
        assert_eq!(encode_query(&pairs), "");
    }

    #[test]
    fn decode_ignores_leading_question_mark() {
        let pairs = decode_query("?Reference=7&Action=accord");
        assert_eq!(
            pairs,
            vec![
                ("Reference".to_string(), "7".to_string()),
                ("Action".to_string(), "accord".to_string()),
            ]
        );
    }

    #[test]
    fn decode_unescapes_values() {
        let pairs = decode_query("Param=T+1%2F2");
        assert_eq!(pairs, vec![("Param".to_string(), "T 1/2".to_string())]);
    }
}
