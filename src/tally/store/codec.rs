//! Line codec for the catalog data file.
//!
//! One record per line:
//!
//! ```text
//! id|name|price|quantity|unitsSold|revenue
//! ```
//!
//! Price and revenue are written with exactly two fraction digits. The
//! format is unversioned, so decoding is best-effort: a line that does not
//! split into exactly six well-typed fields is skipped silently. Names are
//! guaranteed free of `|` and newlines by validation at insertion time
//! (see [`crate::model::Product::validate_name`]).

use crate::catalog::Catalog;
use crate::model::Product;
use rust_decimal::Decimal;

const FIELD_COUNT: usize = 6;

/// Render one product as a data-file line (no trailing newline).
pub fn encode_product(product: &Product) -> String {
    format!(
        "{}|{}|{:.2}|{}|{}|{:.2}",
        product.id,
        product.name,
        product.price,
        product.quantity,
        product.units_sold,
        product.revenue
    )
}

/// Parse one line into a product. Returns `None` on any malformed field;
/// the caller decides whether that is worth reporting (it is not).
pub fn decode_line(line: &str) -> Option<Product> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let id: u32 = fields[0].trim().parse().ok()?;
    let name = fields[1].to_string();
    if name.is_empty() {
        return None;
    }
    let price: Decimal = fields[2].trim().parse().ok()?;
    let quantity: u32 = fields[3].trim().parse().ok()?;
    let units_sold: u64 = fields[4].trim().parse().ok()?;
    let revenue: Decimal = fields[5].trim().parse().ok()?;

    if price.is_sign_negative() || revenue.is_sign_negative() {
        return None;
    }

    Some(Product {
        id,
        name,
        price,
        quantity,
        units_sold,
        revenue,
    })
}

/// Serialize the whole catalog in insertion order.
pub fn encode_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for product in catalog.all() {
        out.push_str(&encode_product(product));
        out.push('\n');
    }
    out
}

/// Deserialize a catalog, skipping malformed lines and dropping records
/// beyond capacity. The revenue aggregate is recomputed from the parsed
/// products, not trusted from the file.
pub fn decode_catalog(text: &str) -> Catalog {
    let products: Vec<Product> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(decode_line)
        .take(crate::catalog::CAPACITY)
        .collect();
    Catalog::from_products(products)
}
