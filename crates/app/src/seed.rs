//! Seed data for the in-memory mock store
//!
//! Created once at composition time; entities live for the process
//! lifetime and are only mutated through repository operations.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use backoffice_customers::Customer;
use backoffice_messaging::{Channel, Conversation, Message, Sender};
use backoffice_orders::{Order, OrderItem, OrderStatus};
use backoffice_products::Product;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "C001".to_string(),
            name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            phone: "111-222-3333".to_string(),
            address: "123 Main St".to_string(),
            total_orders: 5,
            total_spent: Decimal::new(25075, 2),
        },
        Customer {
            id: "C002".to_string(),
            name: "Bob Johnson".to_string(),
            email: "bob@example.com".to_string(),
            phone: "444-555-6666".to_string(),
            address: "456 Oak Ave".to_string(),
            total_orders: 3,
            total_spent: Decimal::new(12000, 2),
        },
        Customer {
            id: "C003".to_string(),
            name: "Charlie Brown".to_string(),
            email: "charlie@example.com".to_string(),
            phone: "777-888-9999".to_string(),
            address: "789 Pine Ln".to_string(),
            total_orders: 1,
            total_spent: Decimal::new(5000, 2),
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "P001".to_string(),
            name: "Wireless Earbuds".to_string(),
            description: "High-quality wireless earbuds with noise cancellation.".to_string(),
            price: Decimal::new(7999, 2),
            stock: 50,
            images: vec!["https://picsum.photos/id/1015/300/300".to_string()],
            category: "Electronics".to_string(),
        },
        Product {
            id: "P002".to_string(),
            name: "Smartwatch Ultra".to_string(),
            description: "Advanced smartwatch with fitness tracking and notifications."
                .to_string(),
            price: Decimal::new(19999, 2),
            stock: 20,
            images: vec!["https://picsum.photos/id/1025/300/300".to_string()],
            category: "Wearables".to_string(),
        },
        Product {
            id: "P003".to_string(),
            name: "Portable Bluetooth Speaker".to_string(),
            description: "Compact speaker with powerful sound and long battery life.".to_string(),
            price: Decimal::new(4999, 2),
            stock: 100,
            images: vec!["https://picsum.photos/id/1027/300/300".to_string()],
            category: "Audio".to_string(),
        },
        Product {
            id: "P004".to_string(),
            name: "Ergonomic Office Chair".to_string(),
            description: "Comfortable chair designed for long working hours.".to_string(),
            price: Decimal::new(24999, 2),
            stock: 15,
            images: vec!["https://picsum.photos/id/237/300/300".to_string()],
            category: "Home Office".to_string(),
        },
        Product {
            id: "P005".to_string(),
            name: "4K Smart TV 55\"".to_string(),
            description: "Vibrant 4K display with smart features.".to_string(),
            price: Decimal::new(59999, 2),
            stock: 8,
            images: vec!["https://picsum.photos/id/238/300/300".to_string()],
            category: "Electronics".to_string(),
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001".to_string(),
            customer_id: "C001".to_string(),
            customer_name: "Alice Smith".to_string(),
            items: vec![OrderItem {
                product_id: "P001".to_string(),
                product_name: "Wireless Earbuds".to_string(),
                quantity: 1,
                price: Decimal::new(7999, 2),
            }],
            status: OrderStatus::Delivered,
            total: Decimal::new(7999, 2),
            order_date: at(2023, 10, 26, 10, 0),
            shipping_address: "123 Main St".to_string(),
        },
        Order {
            id: "ORD002".to_string(),
            customer_id: "C002".to_string(),
            customer_name: "Bob Johnson".to_string(),
            items: vec![OrderItem {
                product_id: "P002".to_string(),
                product_name: "Smartwatch Ultra".to_string(),
                quantity: 1,
                price: Decimal::new(19999, 2),
            }],
            status: OrderStatus::Shipped,
            total: Decimal::new(19999, 2),
            order_date: at(2023, 10, 27, 11, 30),
            shipping_address: "456 Oak Ave".to_string(),
        },
        Order {
            id: "ORD003".to_string(),
            customer_id: "C001".to_string(),
            customer_name: "Alice Smith".to_string(),
            items: vec![OrderItem {
                product_id: "P003".to_string(),
                product_name: "Portable Bluetooth Speaker".to_string(),
                quantity: 2,
                price: Decimal::new(4999, 2),
            }],
            status: OrderStatus::Pending,
            total: Decimal::new(9998, 2),
            order_date: at(2023, 10, 28, 14, 15),
            shipping_address: "123 Main St".to_string(),
        },
        Order {
            id: "ORD004".to_string(),
            customer_id: "C003".to_string(),
            customer_name: "Charlie Brown".to_string(),
            items: vec![OrderItem {
                product_id: "P001".to_string(),
                product_name: "Wireless Earbuds".to_string(),
                quantity: 1,
                price: Decimal::new(7999, 2),
            }],
            status: OrderStatus::Pending,
            total: Decimal::new(7999, 2),
            order_date: at(2023, 10, 29, 9, 0),
            shipping_address: "789 Pine Ln".to_string(),
        },
    ]
}

pub fn conversations() -> Vec<Conversation> {
    let m1 = Message {
        id: "M001".to_string(),
        conversation_id: "CONV001".to_string(),
        customer_id: "C001".to_string(),
        sender: Sender::Customer,
        channel: Channel::Email,
        subject: Some("Order status inquiry".to_string()),
        body: "Hi, I would like to know the status of my order ORD001.".to_string(),
        timestamp: at(2023, 10, 28, 15, 0),
        attachments: vec![],
    };
    let m2 = Message {
        id: "M002".to_string(),
        conversation_id: "CONV001".to_string(),
        customer_id: "C001".to_string(),
        sender: Sender::Admin,
        channel: Channel::Email,
        subject: Some("Re: Order status inquiry".to_string()),
        body: "Your order ORD001 has been delivered.".to_string(),
        timestamp: at(2023, 10, 28, 15, 5),
        attachments: vec![],
    };
    let m3 = Message {
        id: "M003".to_string(),
        conversation_id: "CONV002".to_string(),
        customer_id: "C002".to_string(),
        sender: Sender::Customer,
        channel: Channel::Whatsapp,
        subject: None,
        body: "Hey, I need to change the shipping address for my order ORD002.".to_string(),
        timestamp: at(2023, 10, 28, 16, 0),
        attachments: vec![],
    };
    let m4 = Message {
        id: "M004".to_string(),
        conversation_id: "CONV003".to_string(),
        customer_id: "C003".to_string(),
        sender: Sender::Customer,
        channel: Channel::Email,
        subject: Some("Product return request".to_string()),
        body: "Hello, I received product P001 but it is faulty. I would like to request a return or replacement."
            .to_string(),
        timestamp: at(2023, 10, 29, 10, 30),
        attachments: vec![],
    };

    vec![
        Conversation {
            id: "CONV001".to_string(),
            customer_id: "C001".to_string(),
            customer_name: "Alice Smith".to_string(),
            last_message: m2.body.clone(),
            last_message_timestamp: m2.timestamp,
            unread_count: 0,
            messages: vec![m1, m2],
        },
        Conversation {
            id: "CONV002".to_string(),
            customer_id: "C002".to_string(),
            customer_name: "Bob Johnson".to_string(),
            last_message: m3.body.clone(),
            last_message_timestamp: m3.timestamp,
            unread_count: 1,
            messages: vec![m3],
        },
        Conversation {
            id: "CONV003".to_string(),
            customer_id: "C003".to_string(),
            customer_name: "Charlie Brown".to_string(),
            last_message: m4.body.clone(),
            last_message_timestamp: m4.timestamp,
            unread_count: 1,
            messages: vec![m4],
        },
    ]
}
