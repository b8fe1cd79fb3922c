use serde_json::{Map, Value as Json};

/// Reserved column carrying the page id in decoded rows.
pub const PAGE_ID_KEY: &str = "Page ID";

pub type Row = Map<String, Json>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Title,
    RichText,
    Number,
    Select,
    MultiSelect,
    Date,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    Formula,
    Relation,
    Rollup,
    CreatedTime,
    CreatedBy,
    LastEditedTime,
    LastEditedBy,
    People,
    Files,
    Unknown,
}

impl PropertyKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => Self::Title,
            "rich_text" => Self::RichText,
            "number" => Self::Number,
            "select" => Self::Select,
            "multi_select" => Self::MultiSelect,
            "date" => Self::Date,
            "checkbox" => Self::Checkbox,
            "url" => Self::Url,
            "email" => Self::Email,
            "phone_number" => Self::PhoneNumber,
            "formula" => Self::Formula,
            "relation" => Self::Relation,
            "rollup" => Self::Rollup,
            "created_time" => Self::CreatedTime,
            "created_by" => Self::CreatedBy,
            "last_edited_time" => Self::LastEditedTime,
            "last_edited_by" => Self::LastEditedBy,
            "people" => Self::People,
            "files" => Self::Files,
            _ => Self::Unknown,
        }
    }
}

/// Projects one typed property value onto a plain scalar or list.
///
/// Total: unknown tags yield a descriptive placeholder string instead of
/// an error, and missing keys decode to null or empty via optional access.
pub fn decode_property(property: &Json) -> Json {
    let tag = property["type"].as_str().unwrap_or_default();

    match PropertyKind::from_tag(tag) {
        PropertyKind::Title => plain_text(&property["title"]),
        PropertyKind::RichText => plain_text(&property["rich_text"]),
        PropertyKind::Number
        | PropertyKind::Checkbox
        | PropertyKind::Url
        | PropertyKind::Email
        | PropertyKind::PhoneNumber
        | PropertyKind::CreatedTime
        | PropertyKind::LastEditedTime => property[tag].clone(),
        PropertyKind::Select => property["select"]["name"].clone(),
        PropertyKind::MultiSelect => field_list(&property["multi_select"], "name"),
        PropertyKind::Date => decode_date(&property["date"]),
        PropertyKind::Formula => {
            let formula = &property["formula"];

            match formula["type"].as_str() {
                Some(subtype) => formula[subtype].clone(),
                None => Json::Null,
            }
        }
        PropertyKind::Relation => field_list(&property["relation"], "id"),
        PropertyKind::Rollup => {
            let rollup = &property["rollup"];

            match rollup["type"].as_str() {
                Some("array") => rollup
                    .get("array")
                    .cloned()
                    .unwrap_or_else(|| Json::Array(Vec::new())),
                Some(subtype) => rollup[subtype].clone(),
                None => Json::Null,
            }
        }
        PropertyKind::CreatedBy => property["created_by"]["name"].clone(),
        PropertyKind::LastEditedBy => property["last_edited_by"]["name"].clone(),
        PropertyKind::People => field_list(&property["people"], "name"),
        PropertyKind::Files => field_list(&property["files"], "name"),
        PropertyKind::Unknown => Json::String(format!("Unsupported property type: {tag}")),
    }
}

/// Decodes every property of a page into a flat row, with the page id
/// added under [`PAGE_ID_KEY`].
pub fn decode_page_properties(page: &Json) -> Row {
    let mut row = Row::new();

    if let Some(properties) = page["properties"].as_object() {
        for (name, property) in properties {
            row.insert(name.clone(), decode_property(property));
        }
    }

    row.insert(PAGE_ID_KEY.to_string(), page["id"].clone());

    row
}

fn plain_text(fragments: &Json) -> Json {
    let Some(fragments) = fragments.as_array() else {
        return Json::String(String::new());
    };

    let text = fragments
        .iter()
        .map(|fragment| fragment["plain_text"].as_str().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");

    Json::String(text)
}

fn field_list(items: &Json, field: &str) -> Json {
    let values = items
        .as_array()
        .map(|items| items.iter().map(|item| item[field].clone()).collect())
        .unwrap_or_default();

    Json::Array(values)
}

fn decode_date(date: &Json) -> Json {
    let Some(start) = date["start"].as_str() else {
        return Json::Null;
    };

    match date["end"].as_str() {
        Some(end) => Json::String(format!("{start} to {end}")),
        None => Json::String(start.to_string()),
    }
}
