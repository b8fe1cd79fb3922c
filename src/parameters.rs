use serde_json::Value as Json;
use std::num::NonZeroU32;

pub struct ClientParameters {
    pub api_key: String,
    pub base_url_override: Option<String>,
}

pub struct CreateDatabaseParameters<'a> {
    pub parent_page_id: &'a str,
    pub title: &'a str,
    pub properties: Json,
}

pub struct UpdateDatabaseParameters<'a> {
    pub database_id: &'a str,
    pub title: Option<&'a str>,
    pub properties: Option<Json>,
}

pub struct QueryDatabaseParameters<'a> {
    pub database_id: &'a str,
    pub filter: Option<Json>,
    pub sorts: Option<Json>,
    pub page_size: Option<NonZeroU32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParentType {
    #[default]
    DatabaseId,
    PageId,
}

impl ParentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DatabaseId => "database_id",
            Self::PageId => "page_id",
        }
    }
}

pub struct CreatePageParameters<'a> {
    pub parent_id: &'a str,
    pub parent_type: ParentType,
    pub properties: Json,
    pub content: Option<Vec<Json>>,
}

pub struct UpdatePageParameters<'a> {
    pub page_id: &'a str,
    pub properties: Json,
}

pub struct AppendBlocksParameters<'a> {
    pub block_id: &'a str,
    pub children: Vec<Json>,
}

pub struct UpdateBlockParameters<'a> {
    pub block_id: &'a str,
    pub block: Json,
}

pub struct GetBlockChildrenParameters<'a> {
    pub block_id: &'a str,
    pub page_size: Option<NonZeroU32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextBlockKind {
    #[default]
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
}

impl TextBlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
        }
    }
}

pub struct TextBlockParameters<'a> {
    pub kind: TextBlockKind,
    pub color: &'a str,
    pub bold: bool,
    pub underline: bool,
}

impl Default for TextBlockParameters<'_> {
    fn default() -> Self {
        Self {
            kind: TextBlockKind::default(),
            color: "default",
            bold: false,
            underline: false,
        }
    }
}
