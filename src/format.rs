//! Console renderers for product listings.
//!
//! Pure string builders so the output can be asserted in tests. Column
//! widths are fixed: id 5, name 30, price 12, stock 8.

use crate::db::Product;

/// Renders every product as a fixed-width table.
///
/// The empty set gets its own message instead of a bare header, and a
/// non-empty table always ends with the row count.
pub fn format_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products registered\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<30} {:<12} {:<8}\n",
        "ID", "NAME", "PRICE", "STOCK"
    ));
    output.push_str(&format!("{}\n", "-".repeat(60)));
    for product in products {
        output.push_str(&format!(
            "{:<5} {:<30} ${:<11.2} {:<8}\n",
            product.id, product.name, product.price, product.stock
        ));
    }
    output.push_str(&format!("\nTotal products: {}\n", products.len()));
    output
}

/// Renders a single product as a label/value listing.
pub fn format_product_detail(product: &Product) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<15} {}\n", "Field", "Value"));
    output.push_str(&format!("{}\n", "-".repeat(40)));
    output.push_str(&format!("{:<15} {}\n", "ID:", product.id));
    output.push_str(&format!("{:<15} {}\n", "Name:", product.name));
    output.push_str(&format!("{:<15} ${:.2}\n", "Price:", product.price));
    output.push_str(&format!("{:<15} {}\n", "Stock:", product.stock));
    output
}

/// One-line summary used before update and delete confirmations.
pub fn format_product_summary(product: &Product) -> String {
    format!(
        "{} - ${:.2} - Stock: {}",
        product.name, product.price, product.stock
    )
}
