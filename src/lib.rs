mod blocks;
mod databases;
mod failure;
mod headers;
mod pages;
mod pagination;
mod parameters;
mod properties;
mod table;
mod transport;

pub use blocks::{
    append_blocks, create_bullet_list_block, create_code_block, create_numbered_list_block,
    create_text_block, create_to_do_block, delete_block, extract_plain_text, get_block_children,
    update_block,
};
pub use databases::{
    create_database, create_database_schema, get_database, query_database, update_database,
};
pub use failure::{Error, HttpFailure};
pub use pages::{create_page, get_page, update_page};
pub use pagination::{paginate, PAGE_DELAY};
pub use parameters::*;
pub use properties::{decode_page_properties, decode_property, PropertyKind, Row, PAGE_ID_KEY};
pub use table::to_table;
pub use transport::{Client, Method};

pub type Result<T> = std::result::Result<T, Error>;
