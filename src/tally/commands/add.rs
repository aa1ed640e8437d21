use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, NewProduct};
use crate::error::{Result, TallyError};
use crate::model::Product;

pub fn run(catalog: &mut Catalog, request: NewProduct) -> Result<CmdResult> {
    Product::validate_name(&request.name)?;
    if request.price.is_sign_negative() {
        return Err(TallyError::InvalidInput(
            "Price cannot be negative".to_string(),
        ));
    }

    let product = Product::new(request.id, request.name, request.price, request.quantity);
    let snapshot = product.clone();
    catalog.insert(product)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added: {} (ID {})",
        snapshot.name, snapshot.id
    )));
    result.affected.push(snapshot);
    Ok(result)
}
