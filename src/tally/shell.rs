//! The interactive menu loop.
//!
//! A thin adapter between the console and the API facade: it reads lines,
//! parses them into typed requests, and prints the structured results. A
//! malformed number aborts the current operation with an "Invalid input."
//! message and no state change. Choice 6 (and end of input) saves the
//! catalog and exits; a failed save is reported but still exits cleanly,
//! since losing the message would be worse than losing the exit code.
//!
//! The loop is generic over `BufRead`/`Write` so sessions can be scripted
//! in tests without a terminal.

use crate::print;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tally::api::{NewProduct, TallyApi};
use tally::error::Result;
use tally::store::CatalogStore;

const MENU: &str = "\n===== Sales & Product Management System =====\n\
                    1. Add Product\n\
                    2. List All Products\n\
                    3. Update Stock\n\
                    4. Record Sale\n\
                    5. Search Product by ID\n\
                    6. Save & Exit\n\
                    =============================================";

pub fn run<S, R, W>(api: &mut TallyApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        write!(out, "Enter your choice: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            // End of input behaves like Save & Exit so piped sessions
            // never lose data.
            return save_and_exit(api, out);
        };

        match line.trim().parse::<u32>() {
            Ok(1) => handle_add(api, input, out)?,
            Ok(2) => handle_list(api, out)?,
            Ok(3) => handle_stock(api, input, out)?,
            Ok(4) => handle_sale(api, input, out)?,
            Ok(5) => handle_search(api, input, out)?,
            Ok(6) => return save_and_exit(api, out),
            Ok(_) => writeln!(out, "Invalid choice. Try again.")?,
            Err(_) => writeln!(out, "Invalid input. Please enter a number.")?,
        }
    }
}

fn save_and_exit<S: CatalogStore, W: Write>(api: &mut TallyApi<S>, out: &mut W) -> Result<()> {
    match api.save() {
        Ok(()) => writeln!(out, "Data saved. Exiting...")?,
        Err(e) => writeln!(out, "Error: unable to save data ({})", e)?,
    }
    Ok(())
}

fn handle_add<S, R, W>(api: &mut TallyApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = prompt_value::<u32, R, W>(input, out, "Enter product ID: ")? else {
        return Ok(());
    };
    if api.catalog().find(id).is_some() {
        writeln!(out, "Product with ID {} already exists.", id)?;
        return Ok(());
    }

    write!(out, "Enter product name: ")?;
    out.flush()?;
    let Some(name) = read_line(input)? else {
        return Ok(());
    };

    let Some(price) = prompt_value::<Decimal, R, W>(input, out, "Enter product price: ")? else {
        return Ok(());
    };
    let Some(quantity) =
        prompt_value::<u32, R, W>(input, out, "Enter initial quantity (stock): ")?
    else {
        return Ok(());
    };

    match api.add_product(NewProduct {
        id,
        name,
        price,
        quantity,
    }) {
        Ok(result) => print::print_messages(out, &result.messages)?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn handle_list<S: CatalogStore, W: Write>(api: &TallyApi<S>, out: &mut W) -> Result<()> {
    let result = api.list_products()?;
    print::print_messages(out, &result.messages)?;
    if !result.listed.is_empty() {
        print::print_products(out, &result.listed, result.total_revenue)?;
    }
    Ok(())
}

fn handle_stock<S, R, W>(api: &mut TallyApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = prompt_value::<u32, R, W>(input, out, "Enter product ID to update stock: ")?
    else {
        return Ok(());
    };
    let Some(current) = api.catalog().find(id) else {
        writeln!(out, "Product not found.")?;
        return Ok(());
    };
    writeln!(
        out,
        "Current stock for {} (ID {}): {}",
        current.name, current.id, current.quantity
    )?;

    let Some(quantity) = prompt_value::<u32, R, W>(input, out, "Enter new stock quantity: ")?
    else {
        return Ok(());
    };

    match api.update_stock(id, quantity) {
        Ok(result) => print::print_messages(out, &result.messages)?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn handle_sale<S, R, W>(api: &mut TallyApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = prompt_value::<u32, R, W>(input, out, "Enter product ID to sell: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_value::<u32, R, W>(input, out, "Enter quantity to sell: ")? else {
        return Ok(());
    };

    match api.record_sale(id, quantity) {
        Ok(result) => print::print_messages(out, &result.messages)?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn handle_search<S, R, W>(api: &TallyApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = prompt_value::<u32, R, W>(input, out, "Enter product ID to search: ")? else {
        return Ok(());
    };

    match api.search_product(id) {
        Ok(result) => print::print_product_details(out, &result.listed[0])?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

/// Read one line, stripping the trailing newline. `None` means end of
/// input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

/// Prompt for a value and parse it. `None` aborts the current operation:
/// either the input ended, or the value was malformed (reported here).
fn prompt_value<T, R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Invalid input.")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tally::store::memory::InMemoryStore;

    fn session(store: InMemoryStore, script: &str) -> (TallyApi<InMemoryStore>, String) {
        let mut api = TallyApi::load(store).unwrap();
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        run(&mut api, &mut input, &mut out).unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn add_then_exit_persists_product() {
        let (api, out) = session(
            InMemoryStore::new(),
            "1\n1\nWidget\n9.99\n10\n6\n",
        );
        assert!(out.contains("Product added: Widget (ID 1)"));
        assert!(out.contains("Data saved. Exiting..."));
        assert_eq!(
            api.store().contents(),
            Some("1|Widget|9.99|10|0|0.00\n")
        );
    }

    #[test]
    fn non_numeric_menu_choice_keeps_looping() {
        let (_, out) = session(InMemoryStore::new(), "abc\n6\n");
        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Data saved. Exiting..."));
    }

    #[test]
    fn unknown_menu_choice_is_reported() {
        let (_, out) = session(InMemoryStore::new(), "9\n6\n");
        assert!(out.contains("Invalid choice. Try again."));
    }

    #[test]
    fn malformed_price_aborts_add_without_state_change() {
        let (api, out) = session(InMemoryStore::new(), "1\n1\nWidget\ncheap\n6\n");
        assert!(out.contains("Invalid input."));
        assert!(api.catalog().is_empty());
    }

    #[test]
    fn sale_flow_updates_stock_and_revenue() {
        let store = InMemoryStore::with_contents("1|Widget|9.99|10|0|0.00\n");
        let (api, out) = session(store, "4\n1\n3\n6\n");
        assert!(out.contains("Sale recorded: 3 x Widget for 29.97"));
        let p = api.catalog().find(1).unwrap();
        assert_eq!(p.quantity, 7);
        assert_eq!(p.units_sold, 3);
    }

    #[test]
    fn oversold_sale_reports_insufficient_stock() {
        let store = InMemoryStore::with_contents("1|Widget|9.99|7|0|0.00\n");
        let (api, out) = session(store, "4\n1\n20\n6\n");
        assert!(out.contains("Not enough stock: requested 20, available 7"));
        assert_eq!(api.catalog().find(1).unwrap().quantity, 7);
    }

    #[test]
    fn stock_update_shows_current_level_first() {
        let store = InMemoryStore::with_contents("1|Widget|9.99|10|0|0.00\n");
        let (api, out) = session(store, "3\n1\n50\n6\n");
        assert!(out.contains("Current stock for Widget (ID 1): 10"));
        assert_eq!(api.catalog().find(1).unwrap().quantity, 50);
    }

    #[test]
    fn search_prints_full_details() {
        let store = InMemoryStore::with_contents("1|Widget|9.99|10|2|19.98\n");
        let (_, out) = session(store, "5\n1\n6\n");
        assert!(out.contains("Product Details:"));
        assert!(out.contains("Units Sold: 2"));
        assert!(out.contains("Revenue   : 19.98"));
    }

    #[test]
    fn duplicate_id_is_caught_before_further_prompts() {
        let store = InMemoryStore::with_contents("1|Widget|9.99|10|0|0.00\n");
        let (api, out) = session(store, "1\n1\n6\n");
        assert!(out.contains("Product with ID 1 already exists."));
        assert_eq!(api.catalog().len(), 1);
    }

    #[test]
    fn eof_saves_before_exit() {
        let (api, out) = session(InMemoryStore::new(), "1\n2\nGadget\n5.00\n4\n");
        assert!(out.contains("Data saved. Exiting..."));
        assert_eq!(api.store().contents(), Some("2|Gadget|5.00|4|0|0.00\n"));
    }

    #[test]
    fn empty_list_prints_no_products_message() {
        let (_, out) = session(InMemoryStore::new(), "2\n6\n");
        assert!(out.contains("No products available."));
    }
}
