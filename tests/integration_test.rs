use retail_console::lifecycle::{RetailSystem, SeedData};
use retail_console::model::{OrderId, Product, ProductId, SalesSummary};
use retail_console::ordering::OrderError;
use rust_decimal_macros::dec;

/// Full end-to-end scenario against a single-product shop.
#[test]
fn test_widget_shop_end_to_end() {
    let mut system = RetailSystem::new();
    system
        .catalog_mut()
        .add(Product::new(1, "Widget", dec!(10.00)))
        .expect("Failed to add product");
    system.inventory_mut().set(ProductId(1), 5);

    // First order fits in stock
    let order = system
        .ordering()
        .place_order(ProductId(1), 3)
        .expect("Failed to place order");
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.total_price, dec!(30.00));
    assert_eq!(system.inventory().get(ProductId(1)), 2);

    // Second order exceeds what is left
    let result = system.ordering().place_order(ProductId(1), 3);
    assert!(
        matches!(result, Err(OrderError::InsufficientInventory { .. })),
        "Should fail when inventory is insufficient"
    );
    assert_eq!(
        system.inventory().get(ProductId(1)),
        2,
        "Inventory should not change on failed order"
    );

    let report = system.reporter().summarize().expect("Failed to summarize");
    assert_eq!(report.len(), 1);
    assert_eq!(
        report[&ProductId(1)],
        SalesSummary {
            total_sales: dec!(30.00),
            quantity_sold: 3,
        }
    );
}

/// The reference shop seeded at startup.
#[test]
fn test_reference_shop_flow() {
    let mut system = RetailSystem::seeded(&SeedData::default()).expect("Failed to seed");

    system.ordering().place_order(ProductId(1), 2).unwrap();
    system.ordering().place_order(ProductId(2), 5).unwrap();
    system.ordering().place_order(ProductId(1), 1).unwrap();

    // Price change applies only to later orders
    system
        .catalog_mut()
        .update_price(ProductId(1), dec!(899.99))
        .unwrap();
    system.ordering().place_order(ProductId(1), 1).unwrap();

    let entries: Vec<(ProductId, i64)> = system.inventory().all_entries().into_iter().collect();
    assert_eq!(
        entries,
        vec![(ProductId(1), 6), (ProductId(2), 15), (ProductId(3), 15)]
    );

    let report = system.reporter().summarize().expect("Failed to summarize");
    assert_eq!(report[&ProductId(1)].total_sales, dec!(3899.96));
    assert_eq!(report[&ProductId(1)].quantity_sold, 4);
    assert_eq!(report[&ProductId(2)].total_sales, dec!(2999.95));
    assert_eq!(report[&ProductId(2)].quantity_sold, 5);
    assert!(!report.contains_key(&ProductId(3)));

    let ids: Vec<OrderId> = system.orders().all().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![OrderId(1), OrderId(2), OrderId(3), OrderId(4)]);
}

/// Restocking through the ledger makes a previously rejected order succeed.
#[test]
fn test_restock_after_depletion() {
    let mut system = RetailSystem::seeded(&SeedData::default()).unwrap();

    system.ordering().place_order(ProductId(3), 15).unwrap();
    assert_eq!(system.inventory().get(ProductId(3)), 0);
    assert!(system.ordering().place_order(ProductId(3), 1).is_err());

    system.inventory_mut().set(ProductId(3), 4);
    let order = system.ordering().place_order(ProductId(3), 4).unwrap();

    assert_eq!(order.id, OrderId(2));
    assert_eq!(order.total_price, dec!(1199.96));
    assert_eq!(system.inventory().get(ProductId(3)), 0);
}
