//! SQLite storage layer for the product catalog.
//!
//! Uses parameterized queries exclusively (no SQL string concatenation).
//! Every caller opens its own connection via [`open`] and drops it when the
//! operation finishes; nothing here holds a connection across operations.

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use rusqlite::{params, Connection};

/// One row of the `products` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Opens (or creates) the product database.
///
/// The parent directory is created first if it does not exist.
pub fn open(config: &AppConfig) -> Result<Connection> {
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }
    log::debug!("Opening database: {}", config.db_path.display());
    let conn = Connection::open(&config.db_path)?;
    Ok(conn)
}

/// Creates the `products` table if it does not already exist.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL,
            price REAL NOT NULL CHECK(price >= 0),
            stock INTEGER NOT NULL CHECK(stock >= 0)
        );",
    )?;
    Ok(())
}

/// Initializes the database schema.
///
/// If the schema script from the config exists it is executed in full and is
/// the source of truth (the script uses CREATE TABLE IF NOT EXISTS, so this
/// is idempotent). Otherwise the table is created inline.
pub fn init_db(config: &AppConfig) -> Result<()> {
    let conn = open(config)?;
    if config.schema_path.exists() {
        let script = std::fs::read_to_string(&config.schema_path)
            .map_err(AppError::SchemaScript)?;
        conn.execute_batch(&script)?;
        log::info!(
            "Database initialized from schema script: {}",
            config.schema_path.display()
        );
    } else {
        log::warn!(
            "Schema script not found at {}, creating table inline",
            config.schema_path.display()
        );
        init_schema(&conn)?;
        log::info!("Database schema created");
    }
    Ok(())
}

/// Inserts a new product and returns its assigned id.
///
/// Inputs are validated by the caller; the CHECK constraints back that up.
pub fn insert_product(conn: &Connection, name: &str, price: f64, stock: i64) -> Result<i64> {
    conn.execute(
        "INSERT INTO products (name, price, stock) VALUES (?1, ?2, ?3)",
        params![name, price, stock],
    )?;
    let id = conn.last_insert_rowid();
    log::info!("Inserted product {} ({})", id, name);
    Ok(id)
}

/// Returns every product ordered by ascending id.
pub fn list_products(conn: &Connection) -> Result<Vec<Product>> {
    let mut stmt =
        conn.prepare("SELECT id, name, price, stock FROM products ORDER BY id ASC")?;
    let products = stmt
        .query_map([], |row| {
            Ok(Product {
                id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
                stock: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(products)
}

/// Looks up a single product by id.
pub fn get_product(conn: &Connection, id: i64) -> Result<Option<Product>> {
    let mut stmt =
        conn.prepare("SELECT id, name, price, stock FROM products WHERE id = ?1")?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(row) => Ok(Some(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            stock: row.get(3)?,
        })),
        None => Ok(None),
    }
}

/// Writes all three fields of a product back in one statement.
///
/// Returns the number of rows changed (0 when the id does not exist).
pub fn update_product(
    conn: &Connection,
    id: i64,
    name: &str,
    price: f64,
    stock: i64,
) -> Result<usize> {
    let changed = conn.execute(
        "UPDATE products SET name = ?1, price = ?2, stock = ?3 WHERE id = ?4",
        params![name, price, stock, id],
    )?;
    if changed > 0 {
        log::info!("Updated product {}", id);
    }
    Ok(changed)
}

/// Deletes a product by id. Returns the number of rows removed.
pub fn delete_product(conn: &Connection, id: i64) -> Result<usize> {
    let removed = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
    if removed > 0 {
        log::info!("Deleted product {}", id);
    }
    Ok(removed)
}

/// Total number of products in the table.
pub fn product_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn init_schema_creates_table() {
        let conn = test_conn();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='products'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn init_schema_is_idempotent() {
        let conn = test_conn();
        insert_product(&conn, "Widget", 1.0, 1).unwrap();
        init_schema(&conn).unwrap();
        assert_eq!(product_count(&conn).unwrap(), 1);
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let conn = test_conn();
        let first = insert_product(&conn, "Widget", 9.99, 5).unwrap();
        let second = insert_product(&conn, "Gadget", 19.99, 3).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert!(second > first);
    }

    #[test]
    fn inserted_row_is_retrievable_with_submitted_values() {
        let conn = test_conn();
        let id = insert_product(&conn, "Widget", 9.99, 5).unwrap();

        let product = get_product(&conn, id).unwrap().unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Widget");
        assert!((product.price - 9.99).abs() < f64::EPSILON);
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn check_constraints_reject_negative_values() {
        let conn = test_conn();
        assert!(insert_product(&conn, "Bad price", -1.0, 5).is_err());
        assert!(insert_product(&conn, "Bad stock", 1.0, -5).is_err());
        assert_eq!(product_count(&conn).unwrap(), 0);
    }

    #[test]
    fn list_is_empty_before_any_insert() {
        let conn = test_conn();
        assert!(list_products(&conn).unwrap().is_empty());
    }

    #[test]
    fn list_returns_rows_ordered_by_id() {
        let conn = test_conn();
        insert_product(&conn, "Charlie", 3.0, 3).unwrap();
        insert_product(&conn, "Alpha", 1.0, 1).unwrap();
        insert_product(&conn, "Bravo", 2.0, 2).unwrap();

        let products = list_products(&conn).unwrap();
        assert_eq!(products.len(), 3);
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn get_missing_id_returns_none() {
        let conn = test_conn();
        assert!(get_product(&conn, 42).unwrap().is_none());
    }

    #[test]
    fn update_rewrites_all_fields() {
        let conn = test_conn();
        let id = insert_product(&conn, "Widget", 9.99, 5).unwrap();

        let changed = update_product(&conn, id, "Widget Pro", 14.99, 8).unwrap();
        assert_eq!(changed, 1);

        let product = get_product(&conn, id).unwrap().unwrap();
        assert_eq!(product.name, "Widget Pro");
        assert!((product.price - 14.99).abs() < f64::EPSILON);
        assert_eq!(product.stock, 8);
    }

    #[test]
    fn update_missing_id_changes_nothing() {
        let conn = test_conn();
        let changed = update_product(&conn, 42, "Ghost", 1.0, 1).unwrap();
        assert_eq!(changed, 0);
    }

    #[test]
    fn update_keeps_id_immutable() {
        let conn = test_conn();
        let id = insert_product(&conn, "Widget", 9.99, 5).unwrap();
        update_product(&conn, id, "Renamed", 9.99, 5).unwrap();

        let product = get_product(&conn, id).unwrap().unwrap();
        assert_eq!(product.id, id);
    }

    #[test]
    fn delete_removes_the_row() {
        let conn = test_conn();
        let id = insert_product(&conn, "Widget", 9.99, 5).unwrap();

        let removed = delete_product(&conn, id).unwrap();
        assert_eq!(removed, 1);
        assert!(get_product(&conn, id).unwrap().is_none());
        assert_eq!(product_count(&conn).unwrap(), 0);
    }

    #[test]
    fn delete_missing_id_removes_nothing() {
        let conn = test_conn();
        insert_product(&conn, "Widget", 9.99, 5).unwrap();
        assert_eq!(delete_product(&conn, 42).unwrap(), 0);
        assert_eq!(product_count(&conn).unwrap(), 1);
    }

    #[test]
    fn deleted_id_is_not_reused() {
        let conn = test_conn();
        let first = insert_product(&conn, "Widget", 9.99, 5).unwrap();
        delete_product(&conn, first).unwrap();

        let second = insert_product(&conn, "Gadget", 1.0, 1).unwrap();
        assert!(second > first);
    }
}
