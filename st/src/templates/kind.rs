//! Template kinds
//!
//! A kind selects which template file (or embedded default) is used.

use log::warn;

/// Category of source file to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// A plain class skeleton
    BasicType,
    /// A resource/asset definition skeleton
    ResourceType,
}

impl TemplateKind {
    /// All kinds, in declaration order
    pub const ALL: &'static [TemplateKind] = &[TemplateKind::BasicType, TemplateKind::ResourceType];

    /// Parse a kind from its name (case-insensitive; dashes and underscores ignored)
    ///
    /// Unrecognized names fall back to `BasicType` with a logged warning,
    /// same as the template file mapping's default arm. Callers that want
    /// strict parsing should check against [`TemplateKind::ALL`] first.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().replace(['-', '_'], "").as_str() {
            "basictype" | "basic" => Self::BasicType,
            "resourcetype" | "resource" => Self::ResourceType,
            _ => {
                warn!("Unknown template kind '{}', falling back to {}", name, Self::BasicType);
                Self::BasicType
            }
        }
    }

    /// Display name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::BasicType => "BasicType",
            Self::ResourceType => "ResourceType",
        }
    }

    /// Template file name looked up in the templates directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::BasicType => "BasicTypeTemplate.txt",
            Self::ResourceType => "ResourceTypeTemplate.txt",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_exact() {
        assert_eq!(TemplateKind::from_name("BasicType"), TemplateKind::BasicType);
        assert_eq!(TemplateKind::from_name("ResourceType"), TemplateKind::ResourceType);
    }

    #[test]
    fn test_from_name_loose_spellings() {
        assert_eq!(TemplateKind::from_name("basic-type"), TemplateKind::BasicType);
        assert_eq!(TemplateKind::from_name("resource_type"), TemplateKind::ResourceType);
        assert_eq!(TemplateKind::from_name("RESOURCE"), TemplateKind::ResourceType);
    }

    #[test]
    fn test_from_name_unknown_falls_back_to_basic() {
        assert_eq!(TemplateKind::from_name("interface"), TemplateKind::BasicType);
        assert_eq!(TemplateKind::from_name(""), TemplateKind::BasicType);
    }

    #[test]
    fn test_file_name_mapping() {
        assert_eq!(TemplateKind::BasicType.file_name(), "BasicTypeTemplate.txt");
        assert_eq!(TemplateKind::ResourceType.file_name(), "ResourceTypeTemplate.txt");
    }

    #[test]
    fn test_display_matches_name() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
