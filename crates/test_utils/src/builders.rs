//! Record builders for tests

use chrono::{TimeZone, Utc};
use domain_lending::{
    ApplicationKind, ApplicationStatus, Loan, LoanApplication, NewApplication, Payment, Vehicle,
};

/// A stored application with fixed timestamps, owned by user 7
pub fn application(id: i64) -> LoanApplication {
    LoanApplication {
        id,
        user_id: 7,
        kind: ApplicationKind::Auto,
        vehicle_vin: Some("1HGBH41JXMN109186".to_string()),
        vehicle_name: Some("Cobalt S".to_string()),
        currency_code: "USD".to_string(),
        price: 12_000,
        down_payment: 2_000,
        net_price: 10_000,
        margin_rate: 10.0,
        term_months: 12,
        monthly_payment: 917,
        status: ApplicationStatus::New,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

/// A draft matching [`application`], before storage assigns an id
pub fn new_application() -> NewApplication {
    NewApplication {
        user_id: 7,
        kind: ApplicationKind::Auto,
        vehicle_vin: Some("1HGBH41JXMN109186".to_string()),
        vehicle_name: Some("Cobalt S".to_string()),
        currency_code: "USD".to_string(),
        price: 12_000,
        down_payment: 2_000,
        net_price: 10_000,
        margin_rate: 10.0,
        term_months: 12,
        monthly_payment: 917,
        status: ApplicationStatus::New,
    }
}

/// An active loan for user 7, derived from application 1
pub fn loan(id: i64) -> Loan {
    Loan {
        id,
        application_id: 1,
        user_id: 7,
        currency_code: "USD".to_string(),
        vehicle_vin: "1HGBH41JXMN109186".to_string(),
        amount: 10_000,
        term_months: 12,
        monthly_payment: 917,
        remaining_balance: 8_166,
        status: "ACTIVE".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
    }
}

/// A completed card payment against loan 3
pub fn payment(id: i64) -> Payment {
    Payment {
        id,
        loan_id: 3,
        currency_code: "USD".to_string(),
        payment_date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        amount: 917,
        method: "CARD".to_string(),
        status: "COMPLETED".to_string(),
        transaction_id: "txn-0001".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 5, 0).unwrap(),
    }
}

/// A partner vehicle listing
pub fn vehicle(vin: &str) -> Vehicle {
    Vehicle {
        vin: vin.to_string(),
        image_url: format!("https://img.example.com/{vin}.jpg"),
        name: "Cobalt S".to_string(),
        engine_type: "1.5L petrol".to_string(),
        configuration: "sedan".to_string(),
        price: 12_000,
        currency_code: "USD".to_string(),
    }
}
