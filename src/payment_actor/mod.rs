//! # Payment Actor
//!
//! Stand-in payment executor. Every authorization succeeds with a fresh UUID
//! transaction id, which is logged together with the order, user and method.

use crate::clients::{GatewayError, PaymentClient};
use crate::model::{PayOrderRequest, TransactionId};
use tokio::sync::{mpsc, oneshot};
use tracing::info;
use uuid::Uuid;

/// Messages accepted by the payment actor.
#[derive(Debug)]
pub enum PaymentRequest {
    PayOrder {
        request: PayOrderRequest,
        respond_to: oneshot::Sender<Result<TransactionId, GatewayError>>,
    },
}

pub struct PaymentActor {
    receiver: mpsc::Receiver<PaymentRequest>,
    processed: usize,
}

impl PaymentActor {
    /// Creates the actor and its client.
    pub fn new(buffer_size: usize) -> (Self, PaymentClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            processed: 0,
        };
        (actor, PaymentClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(entity_type = "Payment", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                PaymentRequest::PayOrder {
                    request,
                    respond_to,
                } => {
                    let transaction_id = TransactionId(Uuid::new_v4().to_string());
                    self.processed += 1;
                    info!(
                        order_id = %request.order_id,
                        user_id = %request.user_id,
                        payment_method = %request.payment_method,
                        %transaction_id,
                        "Payment processed"
                    );
                    let _ = respond_to.send(Ok(transaction_id));
                }
            }
        }

        info!(entity_type = "Payment", processed = self.processed, "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::PaymentGateway;
    use crate::model::{OrderId, PaymentMethod, UserId};

    #[tokio::test]
    async fn test_each_payment_gets_a_distinct_transaction() {
        let (actor, client) = PaymentActor::new(4);
        let handle = tokio::spawn(actor.run());

        let request = PayOrderRequest {
            order_id: OrderId::new_v4(),
            user_id: UserId("user-1".to_string()),
            payment_method: PaymentMethod::Card,
        };
        let first = client.pay_order(request.clone()).await.unwrap();
        let second = client.pay_order(request).await.unwrap();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first.0).is_ok());

        drop(client);
        handle.await.unwrap();
    }
}
