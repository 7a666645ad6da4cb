//! Test doubles and common utilities for reconciliation contract tests
//!
//! These doubles implement the two trait seams with scripted responses and
//! count every call, so tests can assert not just on the final [`Outcome`]
//! but on which network operations would have been issued.

use gddns_core::error::{Error, Result};
use gddns_core::traits::{IpResolver, PublicIp, RecordClient, RecordRef, UpdateResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// An IpResolver that returns a scripted result and counts calls
#[derive(Clone)]
pub struct ScriptedResolver {
    /// Address to hand out; `None` scripts a resolution failure
    ip: Option<PublicIp>,
    /// Call counter for resolve()
    resolve_call_count: Arc<AtomicUsize>,
}

impl ScriptedResolver {
    /// Resolver that always succeeds with the given address
    pub fn returning(ip: &str) -> Self {
        Self {
            ip: Some(PublicIp::parse(ip).expect("test address must be a dotted quad")),
            resolve_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Resolver that always fails (unreachable service or bad body)
    pub fn failing() -> Self {
        Self {
            ip: None,
            resolve_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times resolve() was called
    pub fn resolve_call_count(&self) -> usize {
        self.resolve_call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IpResolver for ScriptedResolver {
    async fn resolve(&self) -> Result<PublicIp> {
        self.resolve_call_count.fetch_add(1, Ordering::SeqCst);
        match &self.ip {
            Some(ip) => Ok(ip.clone()),
            None => Err(Error::ip_resolution("scripted resolution failure")),
        }
    }
}

/// Scripted behavior for the record read
#[derive(Clone)]
pub enum ScriptedRead {
    /// The record has this published value
    Value(String),
    /// The record exists but carries no value
    Absent,
    /// The read fails at the transport level
    Fails,
}

/// A RecordClient with scripted responses that records every call
#[derive(Clone)]
pub struct RecordingClient {
    read: ScriptedRead,
    /// Scripted PUT response; `None` scripts a transport failure
    put_response: Option<UpdateResponse>,
    read_call_count: Arc<AtomicUsize>,
    put_call_count: Arc<AtomicUsize>,
    /// Values submitted via put_value(), in order
    put_values: Arc<Mutex<Vec<String>>>,
}

impl RecordingClient {
    /// Client whose read behaves as scripted and whose write succeeds
    /// with 201 Created
    pub fn new(read: ScriptedRead) -> Self {
        Self {
            read,
            put_response: Some(UpdateResponse {
                status: 201,
                body: r#"{"message": "DNS Record Created"}"#.to_string(),
            }),
            read_call_count: Arc::new(AtomicUsize::new(0)),
            put_call_count: Arc::new(AtomicUsize::new(0)),
            put_values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the write to come back with the given status and body
    pub fn with_put_response(mut self, status: u16, body: &str) -> Self {
        self.put_response = Some(UpdateResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Script the write to fail at the transport level
    pub fn with_failing_put(mut self) -> Self {
        self.put_response = None;
        self
    }

    /// Number of times current_value() was called
    pub fn read_call_count(&self) -> usize {
        self.read_call_count.load(Ordering::SeqCst)
    }

    /// Number of times put_value() was called
    pub fn put_call_count(&self) -> usize {
        self.put_call_count.load(Ordering::SeqCst)
    }

    /// The values submitted through put_value(), in call order
    pub fn put_values(&self) -> Vec<String> {
        self.put_values.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecordClient for RecordingClient {
    async fn current_value(&self, _record: &RecordRef) -> Result<Option<String>> {
        self.read_call_count.fetch_add(1, Ordering::SeqCst);
        match &self.read {
            ScriptedRead::Value(value) => Ok(Some(value.clone())),
            ScriptedRead::Absent => Ok(None),
            ScriptedRead::Fails => Err(Error::record_read("scripted read failure")),
        }
    }

    async fn put_value(&self, _record: &RecordRef, value: &str) -> Result<UpdateResponse> {
        self.put_call_count.fetch_add(1, Ordering::SeqCst);
        self.put_values.lock().unwrap().push(value.to_string());
        match &self.put_response {
            Some(response) => Ok(response.clone()),
            None => Err(Error::http("scripted transport failure")),
        }
    }
}

/// The record every contract test reconciles
pub fn test_record() -> RecordRef {
    RecordRef::new("zone-uuid", "home", "A")
}
