//! Shared JSON fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

/// Stable account id used across fixtures.
pub const ACCOUNT_ID: &str = "3eed1f5a-93a8-4a5f-8d3e-2b8b1a33d502";

/// Token payload returned by a successful login.
pub fn token_body() -> Value {
    json!({
        "access_token": "abc123",
        "token_type": "bearer"
    })
}

/// Profile payload for the test user.
pub fn profile_body() -> Value {
    json!({
        "user_id": "7f8a1f9c-42cb-4c4f-9f53-0b2c6a3a6f01",
        "email": "testuser1@example.com",
        "full_name": "Test User",
        "phone": null,
        "is_active": true,
        "created_at": "2026-01-15T09:30:00"
    })
}

/// Single bank account list payload.
pub fn accounts_body() -> Value {
    json!([{
        "account_id": ACCOUNT_ID,
        "bank_name": "HDFC Bank",
        "account_type": "savings",
        "is_primary": true,
        "current_balance_inr": 74500.0,
        "last_synced_at": null,
        "created_at": "2026-01-01T00:00:00"
    }])
}

/// FastAPI-style 401 body.
pub fn unauthorized_body() -> Value {
    json!({"detail": "Could not validate credentials"})
}

/// The exact bulk request the template CSV must produce.
pub fn template_bulk_request() -> Value {
    json!([
        {
            "account_id": ACCOUNT_ID,
            "txn_timestamp": "2026-02-01T00:00:00",
            "amount_inr": 50000.0,
            "txn_type": "credit",
            "balance_after_txn": 50000.0,
            "description": "Freelance payment",
            "merchant_category": "freelancing"
        },
        {
            "account_id": ACCOUNT_ID,
            "txn_timestamp": "2026-02-02T00:00:00",
            "amount_inr": 500.0,
            "txn_type": "debit",
            "balance_after_txn": 49500.0,
            "description": "Grocery shopping",
            "merchant_category": "groceries"
        },
        {
            "account_id": ACCOUNT_ID,
            "txn_timestamp": "2026-02-03T00:00:00",
            "amount_inr": 25000.0,
            "txn_type": "credit",
            "balance_after_txn": 74500.0,
            "description": "Consulting fee",
            "merchant_category": "consulting"
        }
    ])
}

/// Server echo for a created transaction.
pub fn stored_txn(n: u32, request: &Value) -> Value {
    let mut txn = request.clone();
    let obj = txn.as_object_mut().unwrap();
    obj.insert(
        "transaction_id".to_string(),
        json!(format!("00000000-0000-0000-0000-00000000000{n}")),
    );
    obj.insert(
        "is_income".to_string(),
        json!(request["txn_type"] == "credit"),
    );
    obj.insert("created_at".to_string(), json!("2026-02-05T12:00:00"));
    txn
}

/// Bulk response echoing the request with server-assigned fields.
pub fn template_bulk_response() -> Value {
    let request = template_bulk_request();
    let txns: Vec<Value> = request
        .as_array()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, txn)| stored_txn(u32::try_from(i).unwrap() + 1, txn))
        .collect();
    Value::Array(txns)
}
