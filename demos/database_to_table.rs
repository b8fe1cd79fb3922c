use anyhow::Result;
use clap::Parser;
use notionkit::{to_table, Client, ClientParameters, QueryDatabaseParameters};
use serde_json::Value as Json;

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    api_key: String,

    #[arg(long)]
    database_id: String,
}

fn main() -> Result<()> {
    let Cli {
        api_key,
        database_id,
    } = Cli::parse();

    let client = Client::new(ClientParameters {
        api_key,
        base_url_override: None,
    });

    let rows = to_table(
        &client,
        QueryDatabaseParameters {
            database_id: &database_id,
            filter: None,
            sorts: None,
            page_size: None,
        },
    )?;

    for row in rows {
        println!("{}", Json::Object(row));
    }

    Ok(())
}
