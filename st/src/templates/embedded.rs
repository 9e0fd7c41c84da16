//! Embedded default templates
//!
//! These are compiled into the binary from the .txt files under templates/
//! and used whenever no template file is found on disk.

use super::kind::TemplateKind;

/// Default basic type template
pub const BASIC_TYPE: &str = include_str!("../../templates/BasicTypeTemplate.txt");

/// Default resource type template
pub const RESOURCE_TYPE: &str = include_str!("../../templates/ResourceTypeTemplate.txt");

/// Get the embedded default template for a kind
pub fn get(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::BasicType => BASIC_TYPE,
        TemplateKind::ResourceType => RESOURCE_TYPE,
    }
}
