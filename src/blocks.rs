use crate::pagination::paginate;
use crate::parameters::{
    AppendBlocksParameters, GetBlockChildrenParameters, TextBlockParameters, UpdateBlockParameters,
};
use crate::transport::{request, Client, Method};
use crate::Result;
use serde_json::Value as Json;
use std::{num::NonZeroU32, thread};

pub fn append_blocks(client: &Client, parameters: AppendBlocksParameters) -> Result<Json> {
    let AppendBlocksParameters { block_id, children } = parameters;

    let body = serde_json::json!({ "children": children });

    request(
        client,
        Method::Patch,
        &format!("blocks/{block_id}/children"),
        Some(body),
    )
}

/// Lists every child of a block, accumulating across pages.
pub fn get_block_children(
    client: &Client,
    parameters: GetBlockChildrenParameters,
) -> Result<Vec<Json>> {
    let GetBlockChildrenParameters {
        block_id,
        page_size,
    } = parameters;

    let page_size = page_size
        .unwrap_or(unsafe { NonZeroU32::new_unchecked(100) })
        .get();

    tracing::info!(
        message = "List Notion block children",
        block_id = block_id,
        page_size = page_size
    );

    paginate(
        |cursor| {
            let endpoint = children_endpoint(block_id, page_size, cursor);

            request(client, Method::Get, &endpoint, None)
        },
        thread::sleep,
    )
}

// The children listing is the one endpoint taking its cursor as a query
// parameter instead of a body field.
fn children_endpoint(block_id: &str, page_size: u32, cursor: Option<&str>) -> String {
    match cursor {
        Some(cursor) => {
            format!("blocks/{block_id}/children?start_cursor={cursor}&page_size={page_size}")
        }
        None => format!("blocks/{block_id}/children?page_size={page_size}"),
    }
}

pub fn update_block(client: &Client, parameters: UpdateBlockParameters) -> Result<Json> {
    let UpdateBlockParameters { block_id, block } = parameters;

    request(client, Method::Patch, &format!("blocks/{block_id}"), Some(block))
}

// The service archives the block rather than destroying it.
pub fn delete_block(client: &Client, block_id: &str) -> Result<Json> {
    request(client, Method::Delete, &format!("blocks/{block_id}"), None)
}

pub fn create_text_block(content: &str, parameters: TextBlockParameters) -> Json {
    let TextBlockParameters {
        kind,
        color,
        bold,
        underline,
    } = parameters;

    let mut block = serde_json::json!({
        "object": "block",
        "type": kind.as_str(),
    });

    block[kind.as_str()] = serde_json::json!({
        "rich_text": [{
            "type": "text",
            "text": { "content": content },
            "annotations": {
                "bold": bold,
                "underline": underline,
                "color": color,
            },
        }]
    });

    block
}

pub fn create_to_do_block(content: &str, checked: bool) -> Json {
    serde_json::json!({
        "object": "block",
        "type": "to_do",
        "to_do": {
            "rich_text": [{
                "type": "text",
                "text": { "content": content },
            }],
            "checked": checked,
        }
    })
}

pub fn create_bullet_list_block(content: &str) -> Json {
    serde_json::json!({
        "object": "block",
        "type": "bulleted_list_item",
        "bulleted_list_item": {
            "rich_text": [{
                "type": "text",
                "text": { "content": content },
            }]
        }
    })
}

pub fn create_numbered_list_block(content: &str) -> Json {
    serde_json::json!({
        "object": "block",
        "type": "numbered_list_item",
        "numbered_list_item": {
            "rich_text": [{
                "type": "text",
                "text": { "content": content },
            }]
        }
    })
}

pub fn create_code_block(content: &str, language: &str) -> Json {
    serde_json::json!({
        "object": "block",
        "type": "code",
        "code": {
            "rich_text": [{
                "type": "text",
                "text": { "content": content },
            }],
            "language": language,
        }
    })
}

/// Collects the plain-text fragments of paragraph blocks.
pub fn extract_plain_text(blocks: &[Json]) -> Vec<String> {
    let mut fragments = Vec::new();

    for block in blocks {
        if block["type"].as_str() != Some("paragraph") {
            continue;
        }

        let Some(rich_text) = block["paragraph"]["rich_text"].as_array() else {
            continue;
        };

        for text_item in rich_text {
            if let Some(plain_text) = text_item["plain_text"].as_str() {
                fragments.push(plain_text.to_string());
            }
        }
    }

    fragments
}
