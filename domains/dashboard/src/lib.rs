//! Dashboard domain: business-metric aggregation across the back office
//!
//! Reads from the customer, order, and conversation stores and derives the
//! headline numbers and the monthly revenue series for the dashboard view.
//! Purely read-only; all figures are recomputed from the stores' latest
//! state on every call.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_common::Result;
use backoffice_customers::CustomerRepository;
use backoffice_messaging::ConversationStore;
use backoffice_orders::{OrderRepository, OrderStatus};

/// Headline metrics shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub total_revenue: Decimal,
    pub total_customers: usize,
    pub unread_messages: u32,
}

/// One point of the revenue-trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Short month name ("Oct", "Nov", ...)
    pub name: String,
    pub revenue: Decimal,
}

#[derive(Clone)]
pub struct DashboardService {
    customers: CustomerRepository,
    orders: OrderRepository,
    conversations: ConversationStore,
}

impl DashboardService {
    pub fn new(
        customers: CustomerRepository,
        orders: OrderRepository,
        conversations: ConversationStore,
    ) -> Self {
        Self {
            customers,
            orders,
            conversations,
        }
    }

    /// Compute the headline metrics from the stores' current state
    pub async fn stats(&self) -> Result<DashboardStats> {
        let orders = self.orders.list().await?;
        let customers = self.customers.list().await?;
        let unread_messages = self.conversations.total_unread().await?;

        let stats = DashboardStats {
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            total_revenue: orders.iter().map(|o| o.total).sum(),
            total_customers: customers.len(),
            unread_messages,
        };

        tracing::debug!(?stats, "Computed dashboard stats");
        Ok(stats)
    }

    /// Revenue grouped by calendar month, ordered by first occurrence in
    /// the order list
    pub async fn revenue_by_month(&self) -> Result<Vec<MonthlyRevenue>> {
        let orders = self.orders.list().await?;

        let mut series: Vec<MonthlyRevenue> = Vec::new();
        for order in &orders {
            let name = short_month_name(order.order_date.month());
            match series.iter_mut().find(|p| p.name == name) {
                Some(point) => point.revenue += order.total,
                None => series.push(MonthlyRevenue {
                    name: name.to_string(),
                    revenue: order.total,
                }),
            }
        }

        Ok(series)
    }
}

fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}
