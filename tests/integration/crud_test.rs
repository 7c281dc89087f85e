//! CRUD integration tests over the seeded customer, product, and order
//! repositories.

mod common;

use backoffice_common::Error;
use backoffice_customers::NewCustomer;
use backoffice_orders::{OrderEvent, OrderStatus};
use backoffice_products::NewProduct;
use rust_decimal::Decimal;

use common::TestApp;

mod customers {
    use super::*;

    #[tokio::test]
    async fn seeded_customers_are_listed_in_order() {
        let app = TestApp::new();
        let customers = app.customers.list().await.unwrap();

        let ids: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C001", "C002", "C003"]);
    }

    #[tokio::test]
    async fn added_customer_gets_the_next_sequential_id() {
        let app = TestApp::new();
        let added = app
            .customers
            .add(NewCustomer {
                name: "Dana White".to_string(),
                email: "dana@example.com".to_string(),
                phone: "000-111-2222".to_string(),
                address: "1 First St".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(added.id, "C004");
        assert_eq!(added.total_orders, 0);
        assert_eq!(added.total_spent, Decimal::ZERO);
        assert_eq!(app.customers.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn invalid_customer_is_rejected_before_any_store_change() {
        let app = TestApp::new();
        let result = app
            .customers
            .add(NewCustomer {
                name: "No Email".to_string(),
                email: "not-an-email".to_string(),
                phone: "".to_string(),
                address: "".to_string(),
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(app.customers.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn updated_customer_is_visible_on_next_read() {
        let app = TestApp::new();
        let mut bob = app.customers.get("C002").await.unwrap().unwrap();
        bob.address = "789 Updated Blvd".to_string();

        app.customers.update("C002", bob).await.unwrap();

        let reread = app.customers.get("C002").await.unwrap().unwrap();
        assert_eq!(reread.address, "789 Updated Blvd");
        assert_eq!(reread.name, "Bob Johnson");
    }

    #[tokio::test]
    async fn update_of_missing_customer_is_not_found() {
        let app = TestApp::new();
        let alice = app.customers.get("C001").await.unwrap().unwrap();
        let result = app.customers.update("C404", alice).await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}

mod products {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_is_complete() {
        let app = TestApp::new();
        let products = app.products.list().await.unwrap();

        assert_eq!(products.len(), 5);
        assert_eq!(products[4].name, "4K Smart TV 55\"");
        assert_eq!(products[4].price, Decimal::new(59999, 2));
    }

    #[tokio::test]
    async fn added_product_gets_the_next_sequential_id() {
        let app = TestApp::new();
        let added = app
            .products
            .add(NewProduct {
                name: "Mechanical Keyboard".to_string(),
                description: "Tactile switches, compact layout.".to_string(),
                price: Decimal::new(12999, 2),
                stock: 30,
                images: vec![],
                category: "Accessories".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(added.id, "P006");
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let app = TestApp::new();
        let result = app
            .products
            .add(NewProduct {
                name: "Freebie".to_string(),
                description: "".to_string(),
                price: Decimal::new(-1, 2),
                stock: 1,
                images: vec![],
                category: "Misc".to_string(),
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(app.products.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn deleted_product_disappears_from_the_catalog() {
        let app = TestApp::new();
        app.products.delete("P003").await.unwrap();

        assert!(app.products.get("P003").await.unwrap().is_none());
        assert_eq!(app.products.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn delete_of_missing_product_is_not_found() {
        let app = TestApp::new();
        let result = app.products.delete("P404").await;

        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(app.products.list().await.unwrap().len(), 5);
    }
}

mod orders {
    use super::*;

    #[tokio::test]
    async fn seeded_orders_carry_consistent_totals() {
        let app = TestApp::new();
        for order in app.orders.list().await.unwrap() {
            assert_eq!(order.total, order.computed_total());
        }
    }

    #[tokio::test]
    async fn pending_order_ships_then_delivers() {
        let app = TestApp::new();

        let shipped = app
            .orders
            .update_status("ORD003", OrderEvent::Ship)
            .await
            .unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);

        let delivered = app
            .orders
            .update_status("ORD003", OrderEvent::Deliver)
            .await
            .unwrap();
        assert_eq!(delivered.status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn pending_order_cannot_skip_to_delivered() {
        let app = TestApp::new();
        let result = app.orders.update_status("ORD004", OrderEvent::Deliver).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(
            app.orders.get("ORD004").await.unwrap().unwrap().status,
            OrderStatus::Pending
        );
    }

    #[tokio::test]
    async fn delivered_order_is_terminal() {
        let app = TestApp::new();
        // ORD001 is seeded as Delivered
        for event in [OrderEvent::Ship, OrderEvent::Deliver, OrderEvent::Cancel] {
            let result = app.orders.update_status("ORD001", event).await;
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[tokio::test]
    async fn shipped_order_can_still_be_cancelled() {
        let app = TestApp::new();
        // ORD002 is seeded as Shipped
        let cancelled = app
            .orders
            .update_status("ORD002", OrderEvent::Cancel)
            .await
            .unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn status_change_of_missing_order_is_not_found() {
        let app = TestApp::new();
        let result = app.orders.update_status("ORD404", OrderEvent::Ship).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
