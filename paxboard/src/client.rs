//! Passenger entity client
//!
//! Sole path through which the UI reads or mutates passenger data; owns
//! broadcasting of change events. Every mutating call makes exactly one
//! round-trip and, on success, exactly one hub publication carrying the
//! canonical server value - in that order. A failed call publishes nothing
//! and the error propagates to the caller.
//!
//! The transport and the hub are constructor parameters: no globals, and
//! tests can substitute a spy for the wire.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use paxboard_core::{ChangeKind, Hub, HubKey};

use crate::api::{Method, Transport, TransportError};
use crate::model::{Passenger, PassengerPatch, ENTITY};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected before any network call
    #[error("cannot create passenger with empty first name")]
    EmptyFirstName,
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The unwrapped `data` payload did not decode as the expected shape
    #[error("malformed passenger payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct PassengerClient<T> {
    transport: T,
    hub: Arc<Hub<Passenger>>,
}

impl<T: Transport> PassengerClient<T> {
    pub fn new(transport: T, hub: Arc<Hub<Passenger>>) -> Self {
        Self { transport, hub }
    }

    /// Fetch all passengers as an ordered sequence.
    ///
    /// No pagination, no filtering; transport errors propagate unchanged.
    pub async fn list(&self) -> Result<Vec<Passenger>, ClientError> {
        let data = self.transport.execute(Method::Get, "passengers", None).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Create a passenger and publish `(passenger, create)` with the
    /// server-confirmed value.
    ///
    /// Rejects a missing or blank-after-trimming `first_name` before any
    /// network call. There is no optimistic local insert: the event payload
    /// is the canonical entity the server returned.
    pub async fn create(&self, patch: PassengerPatch) -> Result<Passenger, ClientError> {
        let blank = patch
            .first_name
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty();
        if blank {
            return Err(ClientError::EmptyFirstName);
        }

        let body = serde_json::to_value(&patch)?;
        let data = self
            .transport
            .execute(Method::Post, "passengers", Some(body))
            .await?;
        let passenger: Passenger = serde_json::from_value(data)?;

        info!(id = %passenger.id, "passenger created");
        self.hub
            .publish(HubKey::new(ENTITY, ChangeKind::Create), &passenger);
        Ok(passenger)
    }

    /// Update a passenger and publish `(passenger, update)`.
    ///
    /// The server response is authoritative and fully replaces any rendered
    /// copy; the client performs no merge.
    pub async fn update(&self, id: &str, patch: PassengerPatch) -> Result<Passenger, ClientError> {
        let body = serde_json::to_value(&patch)?;
        let data = self
            .transport
            .execute(Method::Patch, &format!("passengers/{id}"), Some(body))
            .await?;
        let passenger: Passenger = serde_json::from_value(data)?;

        info!(id = %passenger.id, "passenger updated");
        self.hub
            .publish(HubKey::new(ENTITY, ChangeKind::Update), &passenger);
        Ok(passenger)
    }

    /// Delete a passenger and publish `(passenger, delete)` with the removed
    /// value as returned by the server.
    ///
    /// The roster does not subscribe to delete events; see DESIGN.md.
    pub async fn delete(&self, id: &str) -> Result<Passenger, ClientError> {
        let data = self
            .transport
            .execute(Method::Delete, &format!("passengers/{id}"), None)
            .await?;
        let passenger: Passenger = serde_json::from_value(data)?;

        info!(id = %passenger.id, "passenger deleted");
        self.hub
            .publish(HubKey::new(ENTITY, ChangeKind::Delete), &passenger);
        Ok(passenger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SpyTransport;
    use serde_json::json;
    use std::sync::Mutex;

    fn ann() -> serde_json::Value {
        json!({ "id": "1", "first_name": "Ann", "last_name": "Lee", "status": "new" })
    }

    fn collector(
        hub: &Hub<Passenger>,
        change: ChangeKind,
    ) -> Arc<Mutex<Vec<Passenger>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        hub.subscribe(HubKey::new(ENTITY, change), move |p: &Passenger| {
            sink.lock().unwrap().push(p.clone());
        });
        seen
    }

    #[tokio::test]
    async fn create_rejects_blank_first_name_before_any_request() {
        let spy = Arc::new(SpyTransport::new());
        let hub = Arc::new(Hub::new());
        let client = PassengerClient::new(spy.clone(), hub.clone());
        let created = collector(&hub, ChangeKind::Create);

        for first_name in ["", "   ", "\t\n"] {
            let err = client
                .create(PassengerPatch::with_first_name(first_name))
                .await
                .unwrap_err();
            assert!(matches!(err, ClientError::EmptyFirstName));
        }
        let err = client.create(PassengerPatch::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::EmptyFirstName));

        assert_eq!(spy.request_count(), 0);
        assert!(created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_publishes_exactly_one_create_event_with_server_value() {
        let spy = Arc::new(SpyTransport::new());
        let hub = Arc::new(Hub::new());
        let client = PassengerClient::new(spy.clone(), hub.clone());
        let created = collector(&hub, ChangeKind::Create);
        let updated = collector(&hub, ChangeKind::Update);

        spy.enqueue(ann());
        let passenger = client
            .create(PassengerPatch::with_first_name("Ann"))
            .await
            .unwrap();

        let events = created.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], passenger);
        assert!(updated.lock().unwrap().is_empty());

        let requests = spy.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "passengers");
        assert_eq!(requests[0].body, Some(json!({ "first_name": "Ann" })));
    }

    #[tokio::test]
    async fn update_publishes_exactly_one_update_event() {
        let spy = Arc::new(SpyTransport::new());
        let hub = Arc::new(Hub::new());
        let client = PassengerClient::new(spy.clone(), hub.clone());
        let updated = collector(&hub, ChangeKind::Update);

        spy.enqueue(
            json!({ "id": "1", "first_name": "Ann", "last_name": "Lee", "status": "approved" }),
        );
        let passenger = client
            .update("1", PassengerPatch::with_status("approved"))
            .await
            .unwrap();

        assert_eq!(passenger.status, "approved");
        let events = updated.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], passenger);

        let requests = spy.requests();
        assert_eq!(requests[0].method, Method::Patch);
        assert_eq!(requests[0].path, "passengers/1");
        assert_eq!(requests[0].body, Some(json!({ "status": "approved" })));
    }

    #[tokio::test]
    async fn delete_publishes_the_removed_value() {
        let spy = Arc::new(SpyTransport::new());
        let hub = Arc::new(Hub::new());
        let client = PassengerClient::new(spy.clone(), hub.clone());
        let deleted = collector(&hub, ChangeKind::Delete);

        spy.enqueue(ann());
        let passenger = client.delete("1").await.unwrap();

        assert_eq!(deleted.lock().unwrap().clone(), vec![passenger]);
        let requests = spy.requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].path, "passengers/1");
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn failed_mutation_publishes_nothing() {
        let spy = Arc::new(SpyTransport::new());
        let hub = Arc::new(Hub::new());
        let client = PassengerClient::new(spy.clone(), hub.clone());
        let created = collector(&hub, ChangeKind::Create);
        let updated = collector(&hub, ChangeKind::Update);

        spy.enqueue_error(TransportError::MissingData);
        assert!(client
            .create(PassengerPatch::with_first_name("Ann"))
            .await
            .is_err());

        spy.enqueue_error(TransportError::MissingData);
        assert!(client
            .update("1", PassengerPatch::with_status("approved"))
            .await
            .is_err());

        assert!(created.lock().unwrap().is_empty());
        assert!(updated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_decodes_the_roster_in_order() {
        let spy = Arc::new(SpyTransport::new());
        let hub = Arc::new(Hub::new());
        let client = PassengerClient::new(spy.clone(), hub);

        spy.enqueue(json!([
            { "id": "1", "first_name": "Ann", "last_name": "Lee", "status": "new" },
            { "id": "2", "first_name": "Bo", "last_name": "Ruiz", "status": "approved" },
        ]));
        let roster = client.list().await.unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, "1");
        assert_eq!(roster[1].id, "2");

        let requests = spy.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "passengers");
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn list_surfaces_malformed_payloads() {
        let spy = Arc::new(SpyTransport::new());
        let hub = Arc::new(Hub::new());
        let client = PassengerClient::new(spy.clone(), hub);

        spy.enqueue(json!({ "not": "a list" }));
        assert!(matches!(
            client.list().await.unwrap_err(),
            ClientError::Decode(_)
        ));
    }
}
