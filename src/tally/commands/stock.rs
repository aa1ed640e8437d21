use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Overwrite a product's stock level. This is a direct correction, not a
/// delta: sale counters and revenue are deliberately untouched.
pub fn run(catalog: &mut Catalog, id: u32, quantity: u32) -> Result<CmdResult> {
    let product = catalog.set_quantity(id, quantity)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stock for {} (ID {}) set to {}",
        product.name, product.id, product.quantity
    )));
    result.affected.push(product);
    Ok(result)
}
