use colored::Colorize;
use rust_decimal::Decimal;
use std::io::{self, Write};
use tally::api::{CmdMessage, MessageLevel};
use tally::model::Product;
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const NUM_WIDTH: usize = 10;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Render the catalog as an aligned table, followed by the revenue total.
pub fn print_products<W: Write>(
    out: &mut W,
    products: &[Product],
    total_revenue: Option<Decimal>,
) -> io::Result<()> {
    writeln!(
        out,
        "\n{}{}{}{}{}{}",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Price", NUM_WIDTH),
        pad("Stock", NUM_WIDTH),
        pad("Sold", NUM_WIDTH),
        "Revenue"
    )?;
    writeln!(out, "{}", "-".repeat(ID_WIDTH + NAME_WIDTH + NUM_WIDTH * 3 + 7))?;

    for p in products {
        writeln!(
            out,
            "{}{}{}{}{}{:.2}",
            pad(&p.id.to_string(), ID_WIDTH),
            pad(&p.name, NAME_WIDTH),
            pad(&format!("{:.2}", p.price), NUM_WIDTH),
            pad(&p.quantity.to_string(), NUM_WIDTH),
            pad(&p.units_sold.to_string(), NUM_WIDTH),
            p.revenue
        )?;
    }

    if let Some(total) = total_revenue {
        writeln!(out, "\nTotal revenue (all products): {:.2}", total)?;
    }
    Ok(())
}

pub fn print_product_details<W: Write>(out: &mut W, p: &Product) -> io::Result<()> {
    writeln!(out, "\nProduct Details:")?;
    writeln!(out, "ID        : {}", p.id)?;
    writeln!(out, "Name      : {}", p.name)?;
    writeln!(out, "Price     : {:.2}", p.price)?;
    writeln!(out, "In Stock  : {}", p.quantity)?;
    writeln!(out, "Units Sold: {}", p.units_sold)?;
    writeln!(out, "Revenue   : {:.2}", p.revenue)?;
    Ok(())
}

/// Left-align to a display width, with one trailing space minimum so
/// columns never touch even for overlong names.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    let padding = width.saturating_sub(w).max(1);
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn table_contains_all_fields() {
        let mut p = Product::new(1, "Widget".into(), Decimal::from_str("9.99").unwrap(), 10);
        p.units_sold = 3;
        p.revenue = Decimal::from_str("29.97").unwrap();

        let mut buf = Vec::new();
        print_products(&mut buf, &[p], Some(Decimal::from_str("29.97").unwrap())).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Widget"));
        assert!(text.contains("9.99"));
        assert!(text.contains("29.97"));
        assert!(text.contains("Total revenue (all products): 29.97"));
    }

    #[test]
    fn pad_keeps_a_separating_space_for_long_values() {
        let padded = pad("a-name-longer-than-the-column-width!", 20);
        assert!(padded.ends_with(' '));
    }
}
