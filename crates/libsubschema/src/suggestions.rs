use regex::Regex;

enum TypeNameMatcher {
    Exact(&'static str),
    Pattern(Regex),
}
impl TypeNameMatcher {
    fn matches(&self, type_name: &str) -> bool {
        match self {
            TypeNameMatcher::Exact(name) => *name == type_name,
            TypeNameMatcher::Pattern(pattern) => pattern.is_match(type_name),
        }
    }
}

lazy_static::lazy_static! {
    /// Ordered table mapping commonly-misspelled type names to the built-in
    /// scalar the author most likely meant.
    ///
    /// Order is significant: the first matching entry wins, and the
    /// specific-width integer patterns must stay listed before the generic
    /// one (e.g. `int32` resolves to `Int` while `uint32` falls through to
    /// `BigInt`). Do not reorder or deduplicate entries.
    static ref TYPE_SUGGESTIONS: Vec<(TypeNameMatcher, &'static str)> = {
        use TypeNameMatcher::*;
        vec![
            (Exact("Address"), "Bytes"),
            (Exact("address"), "Bytes"),
            (Exact("bytes"), "Bytes"),
            (Exact("string"), "String"),
            (Exact("bool"), "Boolean"),
            (Exact("boolean"), "Boolean"),
            (Exact("Bool"), "Boolean"),
            (Exact("float"), "BigDecimal"),
            (Exact("Float"), "BigDecimal"),
            (Exact("int"), "Int"),
            (Exact("uint"), "BigInt"),
            (Pattern(Regex::new(r"^int(8|16|24|32)$").unwrap()), "Int"),
            (Pattern(Regex::new(r"^uint(8|16|24)$").unwrap()), "Int"),
            (Pattern(Regex::new(r"^u?int[0-9]+$").unwrap()), "BigInt"),
        ]
    };
}

/// Suggests the built-in scalar name a misspelled or non-schema type name
/// most likely refers to, if any entry of the suggestion table matches.
pub fn suggest_type(type_name: &str) -> Option<&'static str> {
    TYPE_SUGGESTIONS.iter().find_map(|(matcher, suggestion)| {
        if matcher.matches(type_name) {
            Some(*suggestion)
        } else {
            None
        }
    })
}
