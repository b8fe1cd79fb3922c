use crate::Result;
use serde_json::Value as Json;
use std::time::Duration;

// Notion limits integrations to an average of three requests per second.
// See https://developers.notion.com/reference/request-limits for details.
pub const PAGE_DELAY: Duration = Duration::from_millis(300);

/// Drives a cursor-paginated endpoint to exhaustion.
///
/// `fetch` receives the cursor of the previous page (`None` on the first
/// call) and returns one page of the form
/// `{"results": [...], "has_more": bool, "next_cursor": str|null}`.
/// Results are concatenated across pages. `sleep` runs between pages,
/// never after the last one.
pub fn paginate<F, S>(mut fetch: F, sleep: S) -> Result<Vec<Json>>
where
    F: FnMut(Option<&str>) -> Result<Json>,
    S: Fn(Duration),
{
    let mut results = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch(cursor.as_deref())?;

        if let Some(items) = page["results"].as_array() {
            results.extend(items.iter().cloned());
        }

        if !page["has_more"].as_bool().unwrap_or(false) {
            return Ok(results);
        }

        cursor = page["next_cursor"].as_str().map(ToString::to_string);

        sleep(PAGE_DELAY);
    }
}
