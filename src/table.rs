use crate::databases::query_database;
use crate::parameters::QueryDatabaseParameters;
use crate::properties::{decode_page_properties, Row};
use crate::transport::Client;
use crate::Result;

/// Projects a queried database into rows of decoded property values.
///
/// Pages with differing property sets stay sparse: keys absent on a page
/// are absent from its row.
pub fn to_table(client: &Client, parameters: QueryDatabaseParameters) -> Result<Vec<Row>> {
    let pages = query_database(client, parameters)?;

    Ok(pages.iter().map(decode_page_properties).collect())
}
