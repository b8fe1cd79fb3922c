use crate::pagination::paginate;
use crate::parameters::{CreateDatabaseParameters, QueryDatabaseParameters, UpdateDatabaseParameters};
use crate::transport::{request, Client, Method};
use crate::Result;
use serde_json::Value as Json;
use std::{num::NonZeroU32, thread};

pub fn create_database(client: &Client, parameters: CreateDatabaseParameters) -> Result<Json> {
    let CreateDatabaseParameters {
        parent_page_id,
        title,
        properties,
    } = parameters;

    let body = serde_json::json!({
        "parent": { "type": "page_id", "page_id": parent_page_id },
        "title": [{ "type": "text", "text": { "content": title } }],
        "properties": properties,
    });

    request(client, Method::Post, "databases", Some(body))
}

// Absent fields stay out of the payload so the service does not clear them.
pub fn update_database(client: &Client, parameters: UpdateDatabaseParameters) -> Result<Json> {
    let UpdateDatabaseParameters {
        database_id,
        title,
        properties,
    } = parameters;

    let mut body = serde_json::json!({});

    if let Some(title) = title {
        body["title"] = serde_json::json!([{ "type": "text", "text": { "content": title } }]);
    }

    if let Some(properties) = properties {
        body["properties"] = properties;
    }

    request(
        client,
        Method::Patch,
        &format!("databases/{database_id}"),
        Some(body),
    )
}

pub fn get_database(client: &Client, database_id: &str) -> Result<Json> {
    request(client, Method::Get, &format!("databases/{database_id}"), None)
        .map_err(|err| err.context(format!("Failed to retrieve database {database_id}")))
}

/// Queries a database and accumulates every page of results.
pub fn query_database(client: &Client, parameters: QueryDatabaseParameters) -> Result<Vec<Json>> {
    let QueryDatabaseParameters {
        database_id,
        filter,
        sorts,
        page_size,
    } = parameters;

    let page_size = page_size
        .unwrap_or(unsafe { NonZeroU32::new_unchecked(100) })
        .get();

    tracing::info!(
        message = "Query Notion database",
        database_id = database_id,
        page_size = page_size
    );

    let endpoint = format!("databases/{database_id}/query");
    let mut template = serde_json::json!({ "page_size": page_size });

    if let Some(filter) = filter {
        template["filter"] = filter;
    }

    if let Some(sorts) = sorts {
        template["sorts"] = sorts;
    }

    paginate(
        |cursor| {
            let mut body = template.clone();

            if let Some(cursor) = cursor {
                body["start_cursor"] = cursor.into();
            }

            request(client, Method::Post, &endpoint, Some(body))
        },
        thread::sleep,
    )
}

/// A starter property schema for bootstrapping a new database.
pub fn create_database_schema() -> Json {
    serde_json::json!({
        "Title": { "title": {} },
        "Description": { "rich_text": {} },
        "Status": {
            "select": {
                "options": [
                    { "name": "Not Started", "color": "red" },
                    { "name": "In Progress", "color": "yellow" },
                    { "name": "Complete", "color": "green" }
                ]
            }
        },
        "Tags": {
            "multi_select": {
                "options": [
                    { "name": "Important", "color": "red" },
                    { "name": "Urgent", "color": "yellow" },
                    { "name": "Low Priority", "color": "blue" }
                ]
            }
        },
        "Due Date": { "date": {} },
        "Completed": { "checkbox": {} }
    })
}
