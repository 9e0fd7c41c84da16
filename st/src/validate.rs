//! Type name validation

/// Reserved words rejected as type names by default
///
/// The C# keyword set, matching the default `cs` output extension. The
/// validator takes the list as input so generators targeting other
/// languages can supply their own.
pub const DEFAULT_RESERVED: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch",
    "char", "checked", "class", "const", "continue", "decimal", "default",
    "delegate", "do", "double", "else", "enum", "event", "explicit",
    "extern", "false", "finally", "fixed", "float", "for", "foreach",
    "goto", "if", "implicit", "in", "int", "interface", "internal",
    "is", "lock", "long", "namespace", "new", "null", "object",
    "operator", "out", "override", "params", "private", "protected",
    "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch",
    "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void",
    "volatile", "while",
];

/// Checks candidate type names against an identifier grammar and a
/// reserved-word list
#[derive(Debug, Clone)]
pub struct NameValidator {
    /// Reserved words, stored lowercased
    reserved: Vec<String>,
}

impl NameValidator {
    /// Create a validator with the given reserved words
    ///
    /// Comparison is case-insensitive; the list is lowercased once here.
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            reserved: reserved.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Check a candidate type name
    ///
    /// Valid names are non-empty, start with an ASCII letter or underscore,
    /// contain only ASCII letters, digits, and underscores, and are not on
    /// the reserved list.
    pub fn is_valid(&self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }

        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return false;
        }

        !self.reserved.contains(&name.to_lowercase())
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let v = NameValidator::default();
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("   "));
        assert!(!v.is_valid("\t"));
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(!NameValidator::default().is_valid("123Bad"));
    }

    #[test]
    fn test_rejects_invalid_characters() {
        let v = NameValidator::default();
        assert!(!v.is_valid("My-Type"));
        assert!(!v.is_valid("My Type"));
        assert!(!v.is_valid("Ns.Name"));
        assert!(!v.is_valid("Füße"));
    }

    #[test]
    fn test_rejects_reserved_case_insensitive() {
        let v = NameValidator::default();
        assert!(!v.is_valid("class"));
        assert!(!v.is_valid("Class"));
        assert!(!v.is_valid("CLASS"));
        assert!(!v.is_valid("namespace"));
    }

    #[test]
    fn test_accepts_ordinary_names() {
        let v = NameValidator::default();
        assert!(v.is_valid("Foo"));
        assert!(v.is_valid("_private"));
        assert!(v.is_valid("Name2"));
        assert!(v.is_valid("snake_case"));
        // Reserved words are whole-word matches only
        assert!(v.is_valid("classy"));
        assert!(v.is_valid("MyClass"));
    }

    #[test]
    fn test_custom_reserved_list() {
        let v = NameValidator::new(["let", "fn"]);
        assert!(!v.is_valid("Let"));
        assert!(!v.is_valid("fn"));
        // Not reserved under the custom list
        assert!(v.is_valid("class"));
    }

    proptest! {
        #[test]
        fn test_valid_grammar_non_reserved_accepted(name in "[A-Za-z_][A-Za-z0-9_]{0,15}") {
            let v = NameValidator::default();
            prop_assume!(!DEFAULT_RESERVED.contains(&name.to_lowercase().as_str()));
            prop_assert!(v.is_valid(&name));
        }

        #[test]
        fn test_leading_digit_always_rejected(name in "[0-9][A-Za-z0-9_]{0,15}") {
            prop_assert!(!NameValidator::default().is_valid(&name));
        }
    }
}
