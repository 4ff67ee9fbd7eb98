use crate::clients::GatewayError;
use crate::model::{PayOrderRequest, TransactionId};
use crate::payment_actor::PaymentRequest;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Payment authorization contract.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn pay_order(&self, request: PayOrderRequest) -> Result<TransactionId, GatewayError>;
}

/// Client for the payment actor.
#[derive(Clone)]
pub struct PaymentClient {
    sender: mpsc::Sender<PaymentRequest>,
}

impl PaymentClient {
    pub fn new(sender: mpsc::Sender<PaymentRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl PaymentGateway for PaymentClient {
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    async fn pay_order(&self, request: PayOrderRequest) -> Result<TransactionId, GatewayError> {
        debug!(?request, "pay_order called");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PaymentRequest::PayOrder {
                request,
                respond_to,
            })
            .await
            .map_err(|_| GatewayError::unavailable("payment", "actor closed"))?;
        response
            .await
            .map_err(|_| GatewayError::unavailable("payment", "actor dropped response channel"))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, PaymentMethod, UserId};

    fn request() -> PayOrderRequest {
        PayOrderRequest {
            order_id: OrderId::new_v4(),
            user_id: UserId("user-1".to_string()),
            payment_method: PaymentMethod::Sbp,
        }
    }

    #[tokio::test]
    async fn test_forwards_request_and_returns_transaction() {
        let (sender, mut receiver) = mpsc::channel(1);
        let client = PaymentClient::new(sender);
        let expected = request();
        let sent = expected.clone();

        let task = tokio::spawn(async move { client.pay_order(sent).await });

        match receiver.recv().await {
            Some(PaymentRequest::PayOrder {
                request,
                respond_to,
            }) => {
                assert_eq!(request, expected);
                respond_to
                    .send(Ok(TransactionId("tx-42".to_string())))
                    .unwrap();
            }
            None => panic!("Expected PayOrder request"),
        }

        assert_eq!(
            task.await.unwrap().unwrap(),
            TransactionId("tx-42".to_string())
        );
    }

    #[tokio::test]
    async fn test_closed_channel_is_unavailable() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);

        let result = PaymentClient::new(sender).pay_order(request()).await;
        assert!(matches!(result, Err(GatewayError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_unavailable() {
        let (sender, mut receiver) = mpsc::channel(1);
        let client = PaymentClient::new(sender);
        let task = tokio::spawn(async move { client.pay_order(request()).await });

        drop(receiver.recv().await);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(GatewayError::Unavailable { .. })));
    }
}
