//! In-memory transport shared by the client integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use ledgerly_client::{ApiClient, ApiRequest, ApiTransport, CompanyContext, TransportError};
use ledgerly_shared::types::CompanyId;
use serde_json::{Value, json};

/// Records every request and answers from a queue.
///
/// An empty queue answers with a network error.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful envelope around `data`.
    pub fn ok(&self, data: Value) -> &Self {
        self.push(Ok(json!({ "success": true, "data": data })))
    }

    /// Queues a failed envelope.
    pub fn fail(&self, code: &str, message: &str) -> &Self {
        self.push(Ok(json!({
            "success": false,
            "error": { "code": code, "message": message }
        })))
    }

    /// Queues a raw transport result.
    pub fn push(&self, response: Result<Value, TransportError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ApiTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no response queued".to_string())))
    }
}

pub const COMPANY: CompanyId = CompanyId::new(7);

pub fn client(transport: &std::sync::Arc<MockTransport>) -> ApiClient<MockTransport> {
    ApiClient::new(std::sync::Arc::clone(transport), CompanyContext::new(COMPANY))
}

pub fn journal_json(id: i64, number: &str) -> Value {
    json!({
        "id": id,
        "journalDate": "2024-03-15",
        "journalNumber": number,
        "description": "Office supplies",
        "fiscalPeriodId": 3,
        "details": [
            { "lineNumber": 1, "entryType": "DEBIT", "accountId": 10, "amount": 50000 },
            { "lineNumber": 2, "entryType": "CREDIT", "accountId": 20, "amount": 50000 }
        ]
    })
}

pub fn period_json(id: i64, start: &str, end: &str, closed: bool) -> Value {
    json!({
        "id": id,
        "periodYear": 2024,
        "periodNumber": id,
        "periodName": format!("Period {id}"),
        "startDate": start,
        "endDate": end,
        "isClosed": closed
    })
}
