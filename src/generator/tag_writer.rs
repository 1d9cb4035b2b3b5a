//! Struct tag rendering

use crate::config::GenerationConfig;
use crate::naming::to_snake_case;

/// Build the space-separated tag list for one column, without the
/// surrounding back-ticks. Returns an empty string when no tag family is
/// enabled.
///
/// Generates e.g.: `json:"user_id" db:"user_id" gorm:"column:user_id" xml:"user_id"`
pub(crate) fn struct_tags(column_name: &str, config: &GenerationConfig) -> String {
    if !config.any_tags() {
        return String::new();
    }

    let value = to_snake_case(column_name);
    let mut tags = Vec::with_capacity(4);

    if config.add_json_tag {
        tags.push(format!("json:\"{}\"", value));
    }
    if config.add_db_tag {
        tags.push(format!("db:\"{}\"", value));
    }
    if config.add_gorm_tag {
        tags.push(format!("gorm:\"column:{}\"", value));
    }
    if config.add_xml_tag {
        tags.push(format!("xml:\"{}\"", value));
    }

    tags.join(" ")
}
