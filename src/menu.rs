//! Interactive menu loop and the five operation handlers.
//!
//! Every handler opens its own database connection and drops it on return,
//! so no connection outlives a single operation. Validation failures and
//! lookup misses print a message and return to the menu; storage errors
//! propagate to the loop, which reports them and carries on.

use crate::config::AppConfig;
use crate::db;
use crate::error::Result;
use crate::format::{format_product_detail, format_product_summary, format_product_table};
use crate::input::{
    name_update, parse_id, parse_name, parse_price, parse_stock, price_update, stock_update,
};
use std::io::{self, BufRead, Write};

/// One of the six menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    ListAll,
    FindById,
    Update,
    Delete,
    Exit,
}

/// Resolves a raw input line to a menu choice.
///
/// All non-digit characters are stripped first, so input like "opt: 2!"
/// still selects option 2. Anything other than a single known digit is
/// an invalid selection.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    let digits: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.as_str() {
        "1" => Some(MenuChoice::Create),
        "2" => Some(MenuChoice::ListAll),
        "3" => Some(MenuChoice::FindById),
        "4" => Some(MenuChoice::Update),
        "5" => Some(MenuChoice::Delete),
        "6" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Checks the delete confirmation token: only `s` or `si`,
/// case-insensitive, confirms. Anything else cancels.
pub fn confirm_delete(input: &str) -> bool {
    let token = input.trim().to_lowercase();
    token == "s" || token == "si"
}

/// Prints a prompt and reads one trimmed line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Waits for Enter before redisplaying the menu.
fn pause() -> io::Result<()> {
    let _ = prompt("\nPress Enter to continue...")?;
    Ok(())
}

/// Prints a banner for one operation.
fn section(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{}", title);
    println!("{}", "=".repeat(50));
}

fn show_menu() {
    println!("\n{}", "=".repeat(50));
    println!("PRODUCT MANAGER");
    println!("{}", "=".repeat(50));
    println!("1. Create product");
    println!("2. List all products");
    println!("3. Find product by id");
    println!("4. Update product");
    println!("5. Delete product");
    println!("6. Exit");
    println!("{}", "=".repeat(50));
}

/// Create: prompts for the three fields in order and aborts on the first
/// invalid one. Nothing is inserted unless every field validates.
fn handle_create(config: &AppConfig) -> Result<()> {
    section("CREATE NEW PRODUCT");

    let name = match parse_name(&prompt("Product name: ")?) {
        Ok(name) => name,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    let price = match parse_price(&prompt("Price: $")?) {
        Ok(price) => price,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    let stock = match parse_stock(&prompt("Stock: ")?) {
        Ok(stock) => stock,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let conn = db::open(config)?;
    let id = db::insert_product(&conn, &name, price, stock)?;
    println!("\nProduct created with id: {}", id);
    Ok(())
}

fn handle_list(config: &AppConfig) -> Result<()> {
    section("PRODUCT LIST");

    let conn = db::open(config)?;
    let products = db::list_products(&conn)?;
    print!("\n{}", format_product_table(&products));
    Ok(())
}

fn handle_find(config: &AppConfig) -> Result<()> {
    section("FIND PRODUCT BY ID");

    let id = match parse_id(&prompt("Product id: ")?) {
        Ok(id) => id,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let conn = db::open(config)?;
    match db::get_product(&conn, id)? {
        Some(product) => print!("\n{}", format_product_detail(&product)),
        None => println!("\nNo product found with id {}", id),
    }
    Ok(())
}

/// Update: blank input keeps the current value; an invalid price or stock
/// token is reported and falls back to the current value instead of
/// aborting. All three fields are written back in one statement.
fn handle_update(config: &AppConfig) -> Result<()> {
    section("UPDATE PRODUCT");

    let conn = db::open(config)?;
    let products = db::list_products(&conn)?;
    print!("\n{}", format_product_table(&products));

    let id = match parse_id(&prompt("\nId of the product to update: ")?) {
        Ok(id) => id,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    let current = match db::get_product(&conn, id)? {
        Some(product) => product,
        None => {
            println!("\nNo product found with id {}", id);
            return Ok(());
        }
    };

    println!("\nCurrent product: {}", format_product_summary(&current));
    println!("\nEnter new values (press Enter to keep the current value):");

    let name = name_update(&prompt(&format!("New name [{}]: ", current.name))?)
        .apply(current.name.clone());

    let price_input = prompt(&format!("New price [{:.2}]: ", current.price))?;
    let price_change = price_update(&price_input);
    if let Some(e) = price_change.rejection() {
        println!("{}. Keeping the current price.", e);
    }
    let price = price_change.apply(current.price);

    let stock_input = prompt(&format!("New stock [{}]: ", current.stock))?;
    let stock_change = stock_update(&stock_input);
    if let Some(e) = stock_change.rejection() {
        println!("{}. Keeping the current stock.", e);
    }
    let stock = stock_change.apply(current.stock);

    db::update_product(&conn, id, &name, price, stock)?;
    println!("\nProduct updated");
    println!("New values: {} - ${:.2} - Stock: {}", name, price, stock);
    Ok(())
}

fn handle_delete(config: &AppConfig) -> Result<()> {
    section("DELETE PRODUCT");

    let conn = db::open(config)?;
    let products = db::list_products(&conn)?;
    print!("\n{}", format_product_table(&products));

    let id = match parse_id(&prompt("\nId of the product to delete: ")?) {
        Ok(id) => id,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    let product = match db::get_product(&conn, id)? {
        Some(product) => product,
        None => {
            println!("\nNo product found with id {}", id);
            return Ok(());
        }
    };

    println!(
        "\nYou are about to delete: {}",
        format_product_summary(&product)
    );
    let answer = prompt("Are you sure? (s/si to confirm): ")?;

    if confirm_delete(&answer) {
        db::delete_product(&conn, id)?;
        println!("\nProduct deleted");
    } else {
        println!("\nDeletion cancelled");
    }
    Ok(())
}

/// Runs the menu loop until the user exits (or stdin closes).
pub fn run(config: &AppConfig) -> Result<()> {
    loop {
        show_menu();
        print!("\nSelect an option (1-6): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // stdin closed; same farewell as an explicit exit
            println!("\nGoodbye!");
            return Ok(());
        }

        let choice = match parse_choice(&line) {
            Some(MenuChoice::Exit) => {
                println!("\nGoodbye!");
                return Ok(());
            }
            Some(choice) => choice,
            None => {
                println!("\nInvalid option. Please select a number from 1 to 6.");
                pause()?;
                continue;
            }
        };

        let result = match choice {
            MenuChoice::Create => handle_create(config),
            MenuChoice::ListAll => handle_list(config),
            MenuChoice::FindById => handle_find(config),
            MenuChoice::Update => handle_update(config),
            MenuChoice::Delete => handle_delete(config),
            MenuChoice::Exit => unreachable!("exit handled above"),
        };
        if let Err(e) = result {
            log::error!("Operation failed: {}", e);
            println!("\n{}", e);
        }

        pause()?;
    }
}
