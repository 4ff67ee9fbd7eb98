//! Full end-to-end tests with all real actors, over both store backends.

use checkout_orders::clients::CatalogGateway;
use checkout_orders::lifecycle::{AppConfig, CheckoutSystem, StoreBackend};
use checkout_orders::model::{
    Order, OrderId, OrderStatus, PartId, PartsFilter, PaymentMethod, PaymentRecord,
    TransactionId, UserId,
};
use checkout_orders::orchestrator::OrderError;
use checkout_orders::store::{ActorOrderStore, InMemoryOrderStore, OrderStore};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

fn config(store_backend: StoreBackend) -> AppConfig {
    AppConfig {
        store_backend,
        channel_buffer: 16,
        ..AppConfig::default()
    }
}

fn parts(raw: &[&str]) -> Vec<PartId> {
    raw.iter().map(|id| PartId::new(*id)).collect()
}

async fn order_lifecycle(backend: StoreBackend) {
    let system = CheckoutSystem::new(&config(backend));
    let orders = &system.orchestrator;

    // Engine + window from the fixture
    let created = orders
        .create_order(
            UserId("user-7".to_string()),
            parts(&["part-uuid-1", "part-uuid-3"]),
        )
        .await
        .expect("Failed to create order");
    assert_eq!(created.total_price, 53500.0);

    let tx = orders
        .pay_order(created.order_id, "CREDIT_CARD")
        .await
        .expect("Failed to pay order");
    let paid = orders.get_order(created.order_id).await.unwrap();
    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(paid.transaction_id(), Some(&tx));
    assert_eq!(paid.payment_method(), Some(PaymentMethod::CreditCard));

    assert!(matches!(
        orders.cancel_order(created.order_id).await,
        Err(OrderError::Conflict(_))
    ));

    // A second order is cancelled instead
    let other = orders
        .create_order(UserId("user-7".to_string()), parts(&["part-uuid-4"]))
        .await
        .unwrap();
    orders.cancel_order(other.order_id).await.unwrap();
    assert_eq!(
        orders.get_order(other.order_id).await.unwrap().status,
        OrderStatus::Cancelled
    );

    assert!(matches!(
        orders
            .create_order(UserId("user-7".to_string()), parts(&["part-uuid-99"]))
            .await,
        Err(OrderError::InvalidRequest(_))
    ));
    assert!(matches!(
        orders.get_order(OrderId::new_v4()).await,
        Err(OrderError::NotFound(_))
    ));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_order_lifecycle_with_memory_store() {
    order_lifecycle(StoreBackend::Memory).await;
}

#[tokio::test]
async fn test_order_lifecycle_with_actor_store() {
    order_lifecycle(StoreBackend::Actor).await;
}

#[tokio::test]
async fn test_catalog_is_served_by_the_system() {
    let system = CheckoutSystem::new(&AppConfig::default());

    let all = system.catalog.list_parts(PartsFilter::default()).await.unwrap();
    assert_eq!(all.len(), 4);

    let tank = system
        .catalog
        .get_part(PartId::new("part-uuid-2"))
        .await
        .unwrap()
        .expect("fixture part missing");
    assert_eq!(tank.name, "Liquid Hydrogen Tank 500L");
    assert_eq!(tank.price, 23000.0);

    system.shutdown().await.unwrap();
}

// =============================================================================
// Concurrency
// =============================================================================

fn seed(user: &str) -> Order {
    Order::new(
        OrderId::new_v4(),
        UserId(user.to_string()),
        parts(&["part-uuid-1"]),
        45000.0,
    )
}

/// Many tasks mutating distinct orders at once: every mutation lands, and each
/// order's payment fields change together.
async fn concurrent_updates_are_not_lost(store: Arc<dyn OrderStore>) {
    let mut ids = Vec::new();
    for i in 0..32 {
        let order = seed(&format!("user-{}", i));
        ids.push(order.id);
        store.create(order).await.unwrap();
    }

    let mut tasks = Vec::new();
    for (i, id) in ids.iter().copied().enumerate() {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            let tx = TransactionId(format!("tx-{}", i));
            if i % 2 == 0 {
                store
                    .update(
                        &id,
                        Box::new(move |o: &mut Order| {
                            o.mark_paid(PaymentRecord {
                                transaction_id: tx,
                                payment_method: PaymentMethod::Card,
                            })
                        }),
                    )
                    .await
            } else {
                store
                    .update(&id, Box::new(|o: &mut Order| o.mark_cancelled()))
                    .await
            }
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    for (i, id) in ids.iter().enumerate() {
        let order = store.get(id).await.unwrap();
        if i % 2 == 0 {
            assert_eq!(order.status, OrderStatus::Paid);
            assert!(order.transaction_id().is_some() && order.payment_method().is_some());
        } else {
            assert_eq!(order.status, OrderStatus::Cancelled);
            assert!(order.payment.is_none());
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_memory_store() {
    concurrent_updates_are_not_lost(Arc::new(InMemoryOrderStore::new())).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_actor_store() {
    let (actor, store) = ActorOrderStore::spawnable(8);
    let handle = tokio::spawn(actor.run());

    concurrent_updates_are_not_lost(Arc::new(store)).await;

    handle.abort();
}

/// Readers polling orders while a writer pays or cancels them only ever see a
/// whole mutation: a paid order always carries its payment record, and an
/// unpaid one never does.
async fn readers_never_see_partial_mutation(store: Arc<dyn OrderStore>) {
    let mut ids = Vec::new();
    for i in 0..16 {
        let order = seed(&format!("user-{}", i));
        ids.push(order.id);
        store.create(order).await.unwrap();
    }
    let ids = Arc::new(ids);
    let done = Arc::new(AtomicBool::new(false));
    let reads = Arc::new(AtomicUsize::new(0));

    let mut readers = Vec::new();
    for _ in 0..4 {
        let (store, ids, done, reads) = (store.clone(), ids.clone(), done.clone(), reads.clone());
        readers.push(tokio::spawn(async move {
            loop {
                let finished = done.load(Ordering::SeqCst);
                for id in ids.iter() {
                    let order = store.get(id).await.unwrap();
                    match order.status {
                        OrderStatus::Paid => assert!(
                            order.payment.is_some(),
                            "paid order {} without payment record",
                            id
                        ),
                        OrderStatus::PendingPayment | OrderStatus::Cancelled => assert!(
                            order.payment.is_none(),
                            "unpaid order {} with payment record",
                            id
                        ),
                    }
                    reads.fetch_add(1, Ordering::SeqCst);
                }
                if finished {
                    break;
                }
                tokio::task::yield_now().await;
            }
        }));
    }

    let writer = {
        let (store, ids) = (store.clone(), ids.clone());
        tokio::spawn(async move {
            for (i, id) in ids.iter().copied().enumerate() {
                let mutator: checkout_orders::framework::Mutator<Order> = if i % 2 == 0 {
                    // Two separate field writes; readers must never see the gap.
                    Box::new(move |o: &mut Order| {
                        o.status = OrderStatus::Paid;
                        for _ in 0..1_000 {
                            std::hint::spin_loop();
                        }
                        o.payment = Some(PaymentRecord {
                            transaction_id: TransactionId(format!("tx-{}", i)),
                            payment_method: PaymentMethod::Sbp,
                        });
                    })
                } else {
                    Box::new(|o: &mut Order| o.mark_cancelled())
                };
                store.update(&id, mutator).await.unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    done.store(true, Ordering::SeqCst);
    for reader in readers {
        reader.await.unwrap();
    }
    assert!(reads.load(Ordering::SeqCst) > 0);

    for (i, id) in ids.iter().enumerate() {
        let order = store.get(id).await.unwrap();
        let expected = if i % 2 == 0 {
            OrderStatus::Paid
        } else {
            OrderStatus::Cancelled
        };
        assert_eq!(order.status, expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_during_writes_memory_store() {
    readers_never_see_partial_mutation(Arc::new(InMemoryOrderStore::new())).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_during_writes_actor_store() {
    let (actor, store) = ActorOrderStore::spawnable(8);
    let handle = tokio::spawn(actor.run());

    readers_never_see_partial_mutation(Arc::new(store)).await;

    handle.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_through_the_orchestrator() {
    let system = CheckoutSystem::new(&config(StoreBackend::Actor));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let orders = system.orchestrator.clone();
        tasks.push(tokio::spawn(async move {
            orders
                .create_order(UserId(format!("user-{}", i)), parts(&["part-uuid-2"]))
                .await
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap().order_id);
    }
    ids.sort_by_key(|id| id.0);
    ids.dedup();
    assert_eq!(ids.len(), 20);

    for id in ids {
        let order = system.orchestrator.get_order(id).await.unwrap();
        assert_eq!(order.total_price, 23000.0);
    }

    system.shutdown().await.unwrap();
}
