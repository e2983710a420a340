//! Product Manager - interactive SQLite product catalog
//!
//! A single-table CRUD tool: initialize the schema on startup, then loop a
//! text menu offering create, list, find-by-id, update and delete.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod input;
pub mod menu;

// Re-export commonly used items
pub use config::AppConfig;
pub use db::{
    delete_product, get_product, init_db, init_schema, insert_product, list_products, open,
    product_count, update_product, Product,
};
pub use error::{AppError, Result};
pub use format::{format_product_detail, format_product_table};
pub use input::{parse_id, parse_name, parse_price, parse_stock, FieldError, FieldUpdate};
pub use menu::{confirm_delete, parse_choice, MenuChoice};
