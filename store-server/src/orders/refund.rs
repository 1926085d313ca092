//! Refund rules
//!
//! An order is refunded at most once, for a positive amount no greater than
//! its grand total, with a stated reason. Cancelled and already refunded
//! orders are out of scope for refunds.

use crate::db::models::OrderRecord;
use crate::orders::transitions::is_refundable;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{RefundInfo, RefundRequest};
use shared::util::now_iso;

/// Validate a refund request against the order and produce the refund block
pub fn prepare_refund(
    order: &OrderRecord,
    request: &RefundRequest,
    processed_by: &str,
) -> AppResult<RefundInfo> {
    if !is_refundable(order.status) || order.refund.is_some() {
        return Err(AppError::with_message(
            ErrorCode::OrderTerminal,
            "Order can no longer be refunded",
        )
        .with_detail("status", order.status.as_str()));
    }

    if request.reason.trim().is_empty() {
        return Err(AppError::new(ErrorCode::RefundReasonRequired));
    }

    if request.amount <= 0.0 {
        return Err(AppError::new(ErrorCode::RefundInvalidAmount)
            .with_detail("amount", request.amount));
    }

    if request.amount > order.totals.total {
        return Err(AppError::new(ErrorCode::RefundExceedsTotal)
            .with_detail("amount", request.amount)
            .with_detail("total", order.totals.total));
    }

    Ok(RefundInfo {
        amount: request.amount,
        reason: request.reason.trim().to_string(),
        method: request.method.clone(),
        processed_at: now_iso(),
        processed_by: processed_by.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        CustomerInfo, OrderStatus, PaymentInfo, PaymentStatus, ShippingAddress, ShippingInfo,
        StatusHistoryEntry, Totals,
    };

    fn order(status: OrderStatus) -> OrderRecord {
        OrderRecord {
            id: None,
            order_number: "PX-20260830-ABCDEF12".to_string(),
            customer: CustomerInfo {
                id: None,
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                phone: "".to_string(),
            },
            shipping_address: ShippingAddress {
                street: "Rua A 1".to_string(),
                city: "Lisboa".to_string(),
                postal_code: "1000-001".to_string(),
                country: "PT".to_string(),
            },
            items: vec![],
            totals: Totals {
                subtotal: 71.98,
                shipping: 4.99,
                total: 76.97,
            },
            payment: PaymentInfo {
                method: "card".to_string(),
                status: PaymentStatus::Pending,
                transaction_id: None,
                paid_at: None,
            },
            shipping: ShippingInfo {
                method: "standard".to_string(),
                cost: 4.99,
                tracking_number: None,
            },
            status,
            status_history: vec![StatusHistoryEntry {
                status: OrderStatus::Pending,
                note: "order created".to_string(),
                updated_at: "2026-08-30T10:00:00.000Z".to_string(),
                updated_by: "system".to_string(),
            }],
            refund: None,
            notes: String::new(),
            idempotency_key: None,
            created_at: "2026-08-30T10:00:00.000Z".to_string(),
            updated_at: "2026-08-30T10:00:00.000Z".to_string(),
        }
    }

    fn request(amount: f64, reason: &str) -> RefundRequest {
        RefundRequest {
            amount,
            reason: reason.to_string(),
            method: "card".to_string(),
        }
    }

    #[test]
    fn test_full_refund_of_delivered_order() {
        let refund =
            prepare_refund(&order(OrderStatus::Delivered), &request(76.97, "damaged"), "admin:1")
                .unwrap();
        assert_eq!(refund.amount, 76.97);
        assert_eq!(refund.reason, "damaged");
        assert_eq!(refund.processed_by, "admin:1");
    }

    #[test]
    fn test_partial_refund_is_allowed() {
        let refund =
            prepare_refund(&order(OrderStatus::Shipped), &request(10.0, "late"), "admin:1");
        assert!(refund.is_ok());
    }

    #[test]
    fn test_blank_reason_rejected() {
        let err = prepare_refund(&order(OrderStatus::Pending), &request(10.0, "   "), "admin:1")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RefundReasonRequired);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let err = prepare_refund(&order(OrderStatus::Pending), &request(0.0, "oops"), "admin:1")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RefundInvalidAmount);

        let err = prepare_refund(&order(OrderStatus::Pending), &request(-5.0, "oops"), "admin:1")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RefundInvalidAmount);
    }

    #[test]
    fn test_amount_above_total_rejected() {
        let err = prepare_refund(&order(OrderStatus::Pending), &request(100.0, "all"), "admin:1")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RefundExceedsTotal);
    }

    #[test]
    fn test_cancelled_and_refunded_orders_rejected() {
        for status in [OrderStatus::Cancelled, OrderStatus::Refunded] {
            let err = prepare_refund(&order(status), &request(10.0, "late"), "admin:1")
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::OrderTerminal, "status {status}");
        }
    }

    #[test]
    fn test_second_refund_rejected_even_if_status_looks_live() {
        let mut order = order(OrderStatus::Delivered);
        order.refund = Some(RefundInfo {
            amount: 10.0,
            reason: "first".to_string(),
            method: "card".to_string(),
            processed_at: "2026-08-30T11:00:00.000Z".to_string(),
            processed_by: "admin:1".to_string(),
        });

        let err = prepare_refund(&order, &request(5.0, "second"), "admin:1").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderTerminal);
    }
}
