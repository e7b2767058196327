//! Notification gateway — renders and dispatches confirmation mail.

use std::sync::Arc;

use tracing::warn;

use storefront_core::result::AppResult;
use storefront_entity::stock::OrderOutcome;

use crate::mailer::Mailer;

/// Renders order/pickup confirmations and dispatches them as detached
/// tasks.
///
/// Dispatch is decoupled from the mutation that triggered it: by the time a
/// message leaves here the stock document has already been committed, so a
/// failed send is logged and nothing is rolled back.
pub struct NotificationGateway {
    mailer: Arc<dyn Mailer>,
    operator_address: String,
}

impl NotificationGateway {
    /// Create a gateway over the given transport.
    pub fn new(mailer: Arc<dyn Mailer>, operator_address: String) -> Self {
        Self {
            mailer,
            operator_address,
        }
    }

    /// Fire-and-forget dispatch of the order confirmation pair.
    pub fn dispatch_order(self: &Arc<Self>, email: String, name: String, outcome: OrderOutcome) {
        let gateway = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = gateway.send_order_mails(&email, &name, &outcome).await {
                warn!(email = %email, error = %e, "Order confirmation mail failed");
            }
        });
    }

    /// Fire-and-forget dispatch of the pickup confirmation pair.
    pub fn dispatch_pickup(self: &Arc<Self>, email: String, name: String, pickup_time: String) {
        let gateway = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = gateway
                .send_pickup_mails(&email, &name, &pickup_time)
                .await
            {
                warn!(email = %email, error = %e, "Pickup confirmation mail failed");
            }
        });
    }

    /// Send the customer confirmation and the operator copy for an order.
    pub async fn send_order_mails(
        &self,
        email: &str,
        name: &str,
        outcome: &OrderOutcome,
    ) -> AppResult<()> {
        let ordered = outcome
            .fulfilled
            .iter()
            .map(|line| line.describe())
            .collect::<Vec<_>>()
            .join("\n");
        let missing = join_or_none(&outcome.not_in_stock());

        let customer_body = format!("Your order:\n{ordered}\n\nNot in stock:\n{missing}");
        self.mailer
            .send(email, "Your Order Confirmation", &customer_body)
            .await?;

        let operator_body = format!(
            "Order from {name} ({email}):\n{ordered}\nTotal price: ${}\n\nNot fulfilled:\n{missing}",
            outcome.total_price
        );
        self.mailer
            .send(
                &self.operator_address,
                &format!("New Order from {name}"),
                &operator_body,
            )
            .await
    }

    /// Send the customer confirmation and the operator copy for a pickup.
    pub async fn send_pickup_mails(
        &self,
        email: &str,
        name: &str,
        pickup_time: &str,
    ) -> AppResult<()> {
        let customer_body = format!("Hi {name},\n\nYour pickup is scheduled for {pickup_time}.");
        self.mailer
            .send(email, "Your Pickup Confirmation", &customer_body)
            .await?;

        let operator_body = format!("Pickup scheduled by {name} ({email}) for {pickup_time}.");
        self.mailer
            .send(
                &self.operator_address,
                &format!("New Pickup from {name}"),
                &operator_body,
            )
            .await
    }
}

fn join_or_none(lines: &[String]) -> String {
    if lines.is_empty() {
        "None".to_string()
    } else {
        lines.join("\n")
    }
}
