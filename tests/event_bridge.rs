//! Inbound dispatch, subscription lifecycle and payload validation.

mod common;

use common::*;
use game_bridge::bridge::{BridgeError, CommandOutcome, EventBridge, InboundEvent};
use game_bridge::runtime::RuntimeSlot;
use parking_lot::Mutex;
use std::sync::Arc;

#[tokio::test]
async fn runtime_events_reach_the_inventory() {
    let harness = Harness::ready().await;
    let _subscription = harness.inventory.attach();

    let port = harness.host.port();
    port.raise("ItemCollected", Some("pear"));
    port.raise("ItemCollected", Some("pear"));
    port.raise("ItemCollected", Some("grape"));

    let snapshot = harness.inventory.snapshot();
    assert_eq!(snapshot.count(&kind("pear")), 2);
    assert_eq!(snapshot.count(&kind("grape")), 1);
    assert_eq!(snapshot.value(), 150);
}

#[tokio::test]
async fn events_before_registration_are_lost() {
    let harness = Harness::ready().await;
    let port = harness.host.port();

    assert_eq!(port.raise("ItemCollected", Some("pear")), 0);
    assert_eq!(harness.bridge.dropped_event_count(), 1);

    let _subscription = harness.inventory.attach();
    port.raise("ItemCollected", Some("pear"));
    assert_eq!(harness.inventory.snapshot().count(&kind("pear")), 1);
}

#[tokio::test]
async fn unknown_item_kinds_are_quarantined() {
    let harness = Harness::ready().await;
    let _subscription = harness.inventory.attach();
    let port = harness.host.port();

    port.raise("ItemCollected", Some("banana"));
    port.raise("ItemCollected", None);
    port.raise("ItemCollected", Some("pear"));

    let snapshot = harness.inventory.snapshot();
    let kinds: Vec<String> = snapshot.known_kinds().map(ToString::to_string).collect();
    assert_eq!(kinds, vec!["pear"]);
    assert_eq!(snapshot.value(), 50);

    let quarantined = harness.bridge.quarantine().recent();
    assert_eq!(quarantined.len(), 2);
    assert_eq!(
        quarantined[0].error,
        BridgeError::UnknownItemKind {
            kind: "banana".to_string()
        }
    );
    assert_eq!(
        quarantined[1].error,
        BridgeError::MissingPayload {
            name: "ItemCollected".to_string()
        }
    );
}

#[test]
fn every_handler_for_a_name_runs() {
    let bridge = EventBridge::new(RuntimeSlot::new());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let first_seen = Arc::clone(&seen);
    let _first = bridge.register_inbound_handler("Spawned", move |event: &InboundEvent| {
        first_seen.lock().push(format!("first:{:?}", event.payload));
    });
    let second_seen = Arc::clone(&seen);
    let _second = bridge.register_inbound_handler("Spawned", move |event: &InboundEvent| {
        second_seen.lock().push(format!("second:{:?}", event.payload));
    });
    let _other = bridge.register_inbound_handler("Despawned", |_| {
        panic!("wrong event name dispatched");
    });

    let invoked = bridge.inbound_port().raise("Spawned", Some("enemy"));

    assert_eq!(invoked, 2);
    let mut seen = seen.lock().clone();
    seen.sort();
    assert_eq!(
        seen,
        vec![
            "first:Some(\"enemy\")".to_string(),
            "second:Some(\"enemy\")".to_string()
        ]
    );
}

#[test]
fn dropped_subscription_stops_delivery() {
    let bridge = EventBridge::new(RuntimeSlot::new());
    let hits = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&hits);
    let subscription = bridge.register_inbound_handler("ItemCollected", move |_| {
        *counter.lock() += 1;
    });
    let port = bridge.inbound_port();

    port.raise("ItemCollected", Some("pear"));
    drop(subscription);
    port.raise("ItemCollected", Some("pear"));

    assert_eq!(*hits.lock(), 1);
    assert_eq!(bridge.dropped_event_count(), 1);
}

#[test]
fn handler_may_unsubscribe_others_while_dispatching() {
    let bridge = EventBridge::new(RuntimeSlot::new());
    let victim = Arc::new(Mutex::new(Some(
        bridge.register_inbound_handler("ItemCollected", |_| {}),
    )));
    let slot = Arc::clone(&victim);
    let _killer = bridge.register_inbound_handler("ItemCollected", move |_| {
        slot.lock().take();
    });

    bridge.inbound_port().raise("ItemCollected", Some("pear"));

    assert_eq!(bridge.handler_count("ItemCollected"), 1);
}

#[tokio::test]
async fn send_command_forwards_target_method_and_argument() {
    let harness = Harness::ready().await;

    let outcome = harness
        .bridge
        .send_command("Spawner", "Spawn", Some("tomato"));
    assert_eq!(outcome, CommandOutcome::Delivered);
    harness.bridge.send_command("GameManager", "IncrementCounter", None);

    let messages = harness.host.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].target, "Spawner");
    assert_eq!(messages[0].method, "Spawn");
    assert_eq!(messages[0].argument.as_deref(), Some("tomato"));
    assert_eq!(messages[1].argument, None);
    assert_eq!(harness.bridge.delivered_count(), 2);
}
