//! 提现流程测试

mod common;

use common::{Harness, business, creator};
use creatorpay_common::Pagination;
use payout_service::domain::{Caller, PayoutStatus};

async fn with_account(h: &Harness) -> Caller {
    let caller = creator();
    h.accounts
        .submit_account(&caller, "0690000031", "011")
        .await
        .unwrap();
    caller
}

#[tokio::test]
async fn test_withdraw_initiates_transfer_in_minor_units() {
    let h = Harness::new();
    let caller = with_account(&h).await;
    let calls_before = h.processor.total_calls();

    let payout = h
        .payouts
        .withdraw(&caller, 2500.75, Some("March earnings".to_string()))
        .await
        .unwrap();

    assert_eq!(payout.amount.amount, 250_075);
    assert_eq!(payout.status, PayoutStatus::Pending);
    assert_eq!(payout.recipient_code, "RCP_0001");
    assert_eq!(payout.description.as_deref(), Some("March earnings"));
    assert!(payout.reference.starts_with("payout_"));
    assert!(payout.transfer_code.is_some());

    assert_eq!(h.processor.total_calls(), calls_before + 1);
    let transfers = h.processor.transfers.lock().unwrap().clone();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].amount, 250_075);
    assert_eq!(transfers[0].reference, payout.reference);
    assert_eq!(transfers[0].recipient_code, "RCP_0001");
}

#[tokio::test]
async fn test_withdraw_defaults_description() {
    let h = Harness::new();
    let caller = with_account(&h).await;

    let payout = h.payouts.withdraw(&caller, 100.0, None).await.unwrap();
    assert_eq!(payout.description.as_deref(), Some("Payout"));

    let payout = h
        .payouts
        .withdraw(&caller, 100.0, Some("   ".to_string()))
        .await
        .unwrap();
    assert_eq!(payout.description.as_deref(), Some("Payout"));
}

#[tokio::test]
async fn test_withdraw_without_account_fails_precondition() {
    let h = Harness::new();

    let err = h
        .payouts
        .withdraw(&creator(), 1000.0, None)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 412);
    assert_eq!(h.processor.total_calls(), 0);
}

#[tokio::test]
async fn test_withdraw_rejects_non_positive_amounts() {
    let h = Harness::new();
    let caller = with_account(&h).await;
    let calls_before = h.processor.total_calls();

    for amount in [0.0, -50.0, f64::NAN, f64::INFINITY, 0.001] {
        let err = h.payouts.withdraw(&caller, amount, None).await.unwrap_err();
        assert_eq!(err.status_code(), 400, "amount {amount} should be rejected");
    }
    assert_eq!(h.processor.total_calls(), calls_before);
}

#[tokio::test]
async fn test_business_cannot_withdraw() {
    let h = Harness::new();
    let err = h
        .payouts
        .withdraw(&business(), 1000.0, None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_processor_status_is_recorded() {
    let h = Harness::new();
    let caller = with_account(&h).await;

    h.processor.set_transfer_status("otp");
    let payout = h.payouts.withdraw(&caller, 10.0, None).await.unwrap();
    assert_eq!(payout.status, PayoutStatus::Pending);

    h.processor.set_transfer_status("success");
    let payout = h.payouts.withdraw(&caller, 10.0, None).await.unwrap();
    assert_eq!(payout.status, PayoutStatus::Success);
}

#[tokio::test]
async fn test_failed_transfer_is_not_recorded() {
    let h = Harness::new();
    let caller = with_account(&h).await;
    h.processor.set_unavailable(true);

    let err = h.payouts.withdraw(&caller, 10.0, None).await.unwrap_err();
    assert_eq!(err.status_code(), 502);

    h.processor.set_unavailable(false);
    let history = h
        .payouts
        .history(&caller, &Pagination::default())
        .await
        .unwrap();
    assert_eq!(history.total, 0);
}

#[tokio::test]
async fn test_history_newest_first_and_scoped_to_creator() {
    let h = Harness::new();
    let alice = with_account(&h).await;
    let bob = with_account(&h).await;

    for amount in [10.0, 20.0, 30.0] {
        h.payouts.withdraw(&alice, amount, None).await.unwrap();
    }
    h.payouts.withdraw(&bob, 99.0, None).await.unwrap();

    let history = h
        .payouts
        .history(&alice, &Pagination::default())
        .await
        .unwrap();

    assert_eq!(history.total, 3);
    assert!(history.items.iter().all(|p| p.creator_id == alice.id));
    assert_eq!(
        history.items.iter().map(|p| p.amount.amount).collect::<Vec<_>>(),
        vec![3000, 2000, 1000]
    );
    assert!(
        history
            .items
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at)
    );
}

#[tokio::test]
async fn test_history_pagination() {
    let h = Harness::new();
    let caller = with_account(&h).await;
    for amount in 1..=5 {
        h.payouts.withdraw(&caller, amount as f64, None).await.unwrap();
    }

    let page = h
        .payouts
        .history(&caller, &Pagination::from_query(Some(2), Some(2)))
        .await
        .unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 2);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(
        page.items.iter().map(|p| p.amount.amount).collect::<Vec<_>>(),
        vec![300, 200]
    );
}
