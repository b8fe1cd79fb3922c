use crate::parameters::{CreatePageParameters, UpdatePageParameters};
use crate::transport::{request, Client, Method};
use crate::Result;
use serde_json::Value as Json;

pub fn create_page(client: &Client, parameters: CreatePageParameters) -> Result<Json> {
    let CreatePageParameters {
        parent_id,
        parent_type,
        properties,
        content,
    } = parameters;

    let mut parent = serde_json::json!({});
    parent[parent_type.as_str()] = Json::String(parent_id.to_string());

    let mut body = serde_json::json!({
        "parent": parent,
        "properties": properties,
    });

    if let Some(content) = content {
        body["children"] = Json::Array(content);
    }

    request(client, Method::Post, "pages", Some(body))
}

pub fn update_page(client: &Client, parameters: UpdatePageParameters) -> Result<Json> {
    let UpdatePageParameters {
        page_id,
        properties,
    } = parameters;

    let body = serde_json::json!({ "properties": properties });

    request(client, Method::Patch, &format!("pages/{page_id}"), Some(body))
}

pub fn get_page(client: &Client, page_id: &str) -> Result<Json> {
    request(client, Method::Get, &format!("pages/{page_id}"), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{ClientParameters, ParentType};
    use anyhow::Result;
    use httpmock::{
        Method::{GET, PATCH, POST},
        MockServer,
    };
    use serde_json::json;

    fn test_client(base_url: String) -> Client {
        Client::new(ClientParameters {
            api_key: "test_api_key".to_string(),
            base_url_override: Some(base_url),
        })
    }

    #[test]
    fn test_create_page_defaults_to_database_parent() -> Result<()> {
        let mock_notion_server = MockServer::start();
        let base_url = mock_notion_server.base_url();
        let properties = json!({
            "Name": {"title": [{"text": {"content": "Tuscan Kale"}}]}
        });

        let mock = mock_notion_server.mock(|when, then| {
            when.path("/pages")
                .method(POST)
                .header("Authorization", "Bearer test_api_key")
                .json_body(json!({
                    "parent": { "database_id": "test_database_id" },
                    "properties": properties,
                }));

            then.status(200)
                .json_body(json!({"object": "page", "id": "test_page_id"}));
        });

        let client = test_client(base_url);

        let page = create_page(
            &client,
            CreatePageParameters {
                parent_id: "test_database_id",
                parent_type: ParentType::default(),
                properties,
                content: None,
            },
        )?;

        mock.assert();
        assert_eq!(page["id"], "test_page_id");

        Ok(())
    }

    #[test]
    fn test_create_page_under_a_page_carries_children() -> Result<()> {
        let mock_notion_server = MockServer::start();
        let base_url = mock_notion_server.base_url();
        let properties = json!({"title": [{"text": {"content": "Notes"}}]});
        let content = vec![crate::create_bullet_list_block("First point")];

        let mock = mock_notion_server.mock(|when, then| {
            when.path("/pages")
                .method(POST)
                .json_body(json!({
                    "parent": { "page_id": "test_parent_page_id" },
                    "properties": properties,
                    "children": content,
                }));

            then.status(200)
                .json_body(json!({"object": "page", "id": "test_page_id"}));
        });

        let client = test_client(base_url);

        create_page(
            &client,
            CreatePageParameters {
                parent_id: "test_parent_page_id",
                parent_type: ParentType::PageId,
                properties,
                content: Some(content),
            },
        )?;

        mock.assert();

        Ok(())
    }

    #[test]
    fn test_update_page_wraps_properties() -> Result<()> {
        let mock_notion_server = MockServer::start();
        let base_url = mock_notion_server.base_url();
        let properties = json!({"Completed": {"checkbox": true}});

        let mock = mock_notion_server.mock(|when, then| {
            when.path("/pages/test_page_id")
                .method(PATCH)
                .json_body(json!({"properties": properties}));

            then.status(200)
                .json_body(json!({"object": "page", "id": "test_page_id"}));
        });

        let client = test_client(base_url);

        update_page(
            &client,
            UpdatePageParameters {
                page_id: "test_page_id",
                properties,
            },
        )?;

        mock.assert();

        Ok(())
    }

    #[test]
    fn test_get_page_returns_page_object() -> Result<()> {
        let mock_notion_server = MockServer::start();
        let base_url = mock_notion_server.base_url();

        let mock = mock_notion_server.mock(|when, then| {
            when.path("/pages/test_page_id").method(GET);

            then.status(200).json_body(json!({
                "object": "page",
                "id": "test_page_id",
                "properties": {"Name": {"type": "title", "title": []}},
            }));
        });

        let client = test_client(base_url);

        let page = get_page(&client, "test_page_id")?;

        mock.assert();
        assert_eq!(page["object"], "page");

        Ok(())
    }
}
