use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{Result, TallyError};

/// Look up a single product by id and return a read-only snapshot.
pub fn run(catalog: &Catalog, id: u32) -> Result<CmdResult> {
    let product = catalog.find(id).ok_or(TallyError::NotFound(id))?.clone();
    Ok(CmdResult::default().with_listed(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, NewProduct};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn returns_full_snapshot() {
        let mut catalog = Catalog::new();
        add::run(
            &mut catalog,
            NewProduct {
                id: 7,
                name: "Desk Lamp".to_string(),
                price: Decimal::from_str("24.00").unwrap(),
                quantity: 3,
            },
        )
        .unwrap();

        let before = catalog.clone();
        let result = run(&catalog, 7).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Desk Lamp");
        // Read-only: the catalog is untouched.
        assert_eq!(catalog, before);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = Catalog::new();
        assert!(matches!(
            run(&catalog, 42).unwrap_err(),
            TallyError::NotFound(42)
        ));
    }
}
