//! Orchestrator tests over mock ports

use std::sync::atomic::Ordering;
use std::sync::Arc;

use core_kernel::paging::PageRequest;
use core_kernel::ServiceError;
use domain_lending::{ApplicationStatus, LendingService};
use test_utils::{application, loan, new_application, payment, vehicle};
use test_utils::{MockApplications, MockLoans, MockPartner, MockPayments};

struct Harness {
    applications: Arc<MockApplications>,
    loans: Arc<MockLoans>,
    payments: Arc<MockPayments>,
    partner: Arc<MockPartner>,
    service: LendingService,
}

fn harness(
    applications: MockApplications,
    loans: MockLoans,
    payments: MockPayments,
    partner: MockPartner,
) -> Harness {
    let applications = Arc::new(applications);
    let loans = Arc::new(loans);
    let payments = Arc::new(payments);
    let partner = Arc::new(partner);
    let service = LendingService::new(
        applications.clone(),
        loans.clone(),
        payments.clone(),
        partner.clone(),
    );
    Harness {
        applications,
        loans,
        payments,
        partner,
        service,
    }
}

fn default_harness() -> Harness {
    harness(
        MockApplications::new(),
        MockLoans::default(),
        MockPayments::default(),
        MockPartner::default(),
    )
}

mod create_application {
    use super::*;

    #[tokio::test]
    async fn forces_status_to_new_and_notifies_partner() {
        let h = default_harness();

        let mut draft = new_application();
        draft.status = ApplicationStatus::Approved; // caller input is ignored

        let created = h.service.create_application(draft).await.unwrap();
        assert_eq!(created.status, ApplicationStatus::New);
        assert!(created.id > 0);

        let submitted = h.partner.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0], created);
    }

    #[tokio::test]
    async fn partner_failure_fails_the_create_but_keeps_local_row() {
        let h = default_harness();
        h.partner.fail_submit.store(true, Ordering::Relaxed);

        let err = h.service.create_application(new_application()).await.unwrap_err();
        assert_eq!(err.code(), 5);

        // known consistency gap: the insert already committed
        assert_eq!(h.applications.stored().len(), 1);
    }

    #[tokio::test]
    async fn insert_failure_is_internal_and_skips_partner() {
        let h = default_harness();
        h.applications.fail.store(true, Ordering::Relaxed);

        let err = h.service.create_application(new_application()).await.unwrap_err();
        assert_eq!(err.code(), 5);
        assert!(h.partner.submitted().is_empty());
    }
}

mod get_operations {
    use super::*;

    #[tokio::test]
    async fn missing_application_is_not_found() {
        let h = default_harness();
        let err = h.service.get_application(99).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("application not found".into()));
        assert_eq!(err.code(), 2);
    }

    #[tokio::test]
    async fn storage_failure_is_internal_not_not_found() {
        let h = default_harness();
        h.applications.fail.store(true, Ordering::Relaxed);
        let err = h.service.get_application(99).await.unwrap_err();
        assert_eq!(err.code(), 5);
    }

    #[tokio::test]
    async fn stored_loan_is_returned() {
        let h = harness(
            MockApplications::new(),
            MockLoans::with_records(vec![loan(3)]),
            MockPayments::default(),
            MockPartner::default(),
        );
        let found = h.service.get_loan(3).await.unwrap();
        assert_eq!(found, loan(3));
    }

    #[tokio::test]
    async fn missing_loan_is_not_found() {
        let h = default_harness();
        let err = h.service.get_loan(3).await.unwrap_err();
        assert_eq!(err.code(), 2);
    }
}

mod list_operations {
    use super::*;

    #[tokio::test]
    async fn zero_count_short_circuits_the_paged_fetch() {
        let h = default_harness();

        let result = h.service.list_applications(7, None).await.unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.page.total_items, 0);
        assert_eq!(result.page.total_pages, 0);

        assert_eq!(h.applications.count_calls.load(Ordering::Relaxed), 1);
        assert_eq!(h.applications.list_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn non_empty_count_pages_through_the_records() {
        let records = (1..=25).map(application).collect();
        let h = harness(
            MockApplications::with_records(records),
            MockLoans::default(),
            MockPayments::default(),
            MockPartner::default(),
        );

        let page = PageRequest { page: 2, limit: 10 };
        let result = h.service.list_applications(7, Some(&page)).await.unwrap();
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.items[0].id, 11);
        assert_eq!(result.page.current_page, 2);
        assert_eq!(result.page.limit, 10);
        assert_eq!(result.page.total_items, 25);
        assert_eq!(result.page.total_pages, 3);
    }

    #[tokio::test]
    async fn count_failure_is_internal() {
        let h = default_harness();
        h.loans.fail.store(true, Ordering::Relaxed);
        let err = h.service.list_loans(7, None).await.unwrap_err();
        assert_eq!(err.code(), 5);
        assert_eq!(h.loans.list_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn payments_list_by_loan() {
        let h = harness(
            MockApplications::new(),
            MockLoans::default(),
            MockPayments::with_records(vec![payment(1), payment(2)]),
            MockPartner::default(),
        );

        let result = h.service.list_payments(3, None).await.unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.page.total_items, 2);
        assert_eq!(result.page.total_pages, 1);
        assert_eq!(h.payments.count_calls.load(Ordering::Relaxed), 1);
        assert_eq!(h.payments.list_calls.load(Ordering::Relaxed), 1);
    }
}

mod vehicles_and_calculate {
    use super::*;

    #[tokio::test]
    async fn vehicles_come_straight_from_the_partner() {
        let h = harness(
            MockApplications::new(),
            MockLoans::default(),
            MockPayments::default(),
            MockPartner::with_vehicles(vec![vehicle("VIN1"), vehicle("VIN2")]),
        );

        let vehicles = h.service.list_vehicles().await.unwrap();
        assert_eq!(vehicles.len(), 2);
    }

    #[tokio::test]
    async fn partner_failure_on_vehicles_is_internal() {
        let h = default_harness();
        h.partner.fail_list.store(true, Ordering::Relaxed);
        let err = h.service.list_vehicles().await.unwrap_err();
        assert_eq!(err.code(), 5);
    }

    #[tokio::test]
    async fn calculate_delegates_to_the_pricing_kernel() {
        let h = default_harness();
        let quote = h.service.calculate(12_000, 2_000, 12, 10.0).unwrap();
        assert_eq!(quote.net_price, 10_000);
        assert_eq!(quote.monthly_payment, 917);
        assert_eq!(quote.total_amount, 11_000);
    }

    #[tokio::test]
    async fn calculate_rejects_zero_term() {
        let h = default_harness();
        let err = h.service.calculate(12_000, 2_000, 0, 10.0).unwrap_err();
        assert_eq!(err.code(), 1);
    }
}
