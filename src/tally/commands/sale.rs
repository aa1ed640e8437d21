use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};

pub fn run(catalog: &mut Catalog, id: u32, quantity: u32) -> Result<CmdResult> {
    if quantity == 0 {
        return Err(TallyError::InvalidInput(
            "Quantity must be positive".to_string(),
        ));
    }

    let sale = catalog.apply_sale(id, quantity)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sale recorded: {} x {} for {:.2}",
        sale.quantity, sale.product.name, sale.amount
    )));
    result.affected.push(sale.product.clone());
    result.sale = Some(sale);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, NewProduct};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        add::run(
            &mut catalog,
            NewProduct {
                id: 1,
                name: "Widget".to_string(),
                price: dec("9.99"),
                quantity: 10,
            },
        )
        .unwrap();
        catalog
    }

    #[test]
    fn records_sale_and_updates_revenue() {
        let mut catalog = seeded_catalog();
        let result = run(&mut catalog, 1, 3).unwrap();

        let sale = result.sale.unwrap();
        assert_eq!(sale.amount, dec("29.97"));

        let p = catalog.find(1).unwrap();
        assert_eq!(p.quantity, 7);
        assert_eq!(p.units_sold, 3);
        assert_eq!(p.revenue, dec("29.97"));
        assert_eq!(catalog.total_revenue(), dec("29.97"));
    }

    #[test]
    fn zero_quantity_is_invalid_input() {
        let mut catalog = seeded_catalog();
        let err = run(&mut catalog, 1, 0).unwrap_err();
        assert!(matches!(err, TallyError::InvalidInput(_)));
        assert_eq!(catalog.find(1).unwrap().quantity, 10);
    }

    #[test]
    fn oversold_sale_is_rejected_without_mutation() {
        let mut catalog = seeded_catalog();
        run(&mut catalog, 1, 3).unwrap();
        let before = catalog.clone();

        let err = run(&mut catalog, 1, 20).unwrap_err();
        assert!(matches!(err, TallyError::InsufficientStock { .. }));
        assert_eq!(catalog, before);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut catalog = seeded_catalog();
        assert!(matches!(
            run(&mut catalog, 42, 1).unwrap_err(),
            TallyError::NotFound(42)
        ));
    }
}
