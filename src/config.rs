//! Generation settings

use serde::{Deserialize, Serialize};

/// Package name written at the top of generated code unless overridden
pub const DEFAULT_PACKAGE: &str = "main";

/// Which struct tag families to emit for each generated field.
///
/// Every flag defaults to `false`. Tags are always written in the order
/// json, db, gorm, xml regardless of how the flags were set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// `json:"column"`
    #[serde(rename = "AddJSONTag", alias = "addJSONTag", alias = "addJsonTag")]
    pub add_json_tag: bool,
    /// `gorm:"column:column"`
    #[serde(rename = "AddGormTag", alias = "addGormTag")]
    pub add_gorm_tag: bool,
    /// `xml:"column"`
    #[serde(rename = "AddXMLTag", alias = "addXMLTag", alias = "addXmlTag")]
    pub add_xml_tag: bool,
    /// `db:"column"` (sqlx)
    #[serde(rename = "AddDBTag", alias = "addDBTag", alias = "addDbTag")]
    pub add_db_tag: bool,
}

impl GenerationConfig {
    /// Enable every tag family
    pub fn all() -> Self {
        Self {
            add_json_tag: true,
            add_gorm_tag: true,
            add_xml_tag: true,
            add_db_tag: true,
        }
    }

    /// True when at least one tag family is enabled
    pub fn any_tags(&self) -> bool {
        self.add_json_tag || self.add_gorm_tag || self.add_xml_tag || self.add_db_tag
    }
}
