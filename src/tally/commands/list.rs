use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default()
        .with_listed(catalog.all().to_vec())
        .with_total_revenue(catalog.total_revenue());
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("No products available."));
    }
    Ok(result)
}
