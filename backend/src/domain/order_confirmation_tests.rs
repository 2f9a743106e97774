//! Tests for the order-confirmation service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockEmailSender;
use rstest::{fixture, rstest};

const SENDER: &str = "Loja <nao-responda@sua-loja.com>";

#[fixture]
fn confirmation() -> OrderConfirmation {
    OrderConfirmation {
        customer_email: CustomerEmail::new("a@x.com").expect("valid email"),
        customer_name: "Ana".to_owned(),
        order_id: OrderId::new("42").expect("valid id"),
    }
}

fn make_service(sender: MockEmailSender) -> OrderConfirmationService<MockEmailSender> {
    OrderConfirmationService::new(Arc::new(sender), SENDER)
}

#[rstest]
fn email_targets_only_the_customer(confirmation: OrderConfirmation) {
    let message = confirmation.to_email(SENDER);

    assert_eq!(message.recipients, vec!["a@x.com".to_owned()]);
    assert_eq!(message.sender, SENDER);
    assert_eq!(message.subject, "Confirmação do Pedido #42");
    assert!(message.html_body.contains("Olá, Ana!"));
    assert!(message.html_body.contains("#42"));
}

#[rstest]
#[case("<b>Zé</b>", "A-1")]
#[case("O'Brien & Filhos", "pedido 7")]
fn customer_text_is_interpolated_verbatim(#[case] name: &str, #[case] order: &str) {
    let request = OrderConfirmation {
        customer_email: CustomerEmail::new("c@x.com").expect("valid email"),
        customer_name: name.to_owned(),
        order_id: OrderId::new(order).expect("valid id"),
    };
    let message = request.to_email(SENDER);

    assert!(message.html_body.contains(name));
    assert!(message.html_body.contains(order));
    assert!(message.subject.ends_with(order));
}

#[rstest]
#[case("", CustomerEmailValidationError::Empty)]
#[case("   ", CustomerEmailValidationError::Empty)]
#[case("ana", CustomerEmailValidationError::Malformed)]
#[case("@x.com", CustomerEmailValidationError::Malformed)]
#[case("ana@", CustomerEmailValidationError::Malformed)]
#[case("a@b@c", CustomerEmailValidationError::Malformed)]
fn rejects_invalid_addresses(#[case] raw: &str, #[case] expected: CustomerEmailValidationError) {
    assert_eq!(CustomerEmail::new(raw), Err(expected));
}

#[rstest]
#[case(" Ana@X.com ")]
#[case("\tana@x.com")]
#[case("Ana@X.com")]
fn recipient_is_the_supplied_address_unmodified(#[case] raw: &str) {
    let request = OrderConfirmation {
        customer_email: CustomerEmail::new(raw).expect("valid email"),
        customer_name: "Ana".to_owned(),
        order_id: OrderId::new("42").expect("valid id"),
    };

    assert_eq!(request.to_email(SENDER).recipients, vec![raw.to_owned()]);
}

#[rstest]
#[tokio::test]
async fn confirm_sends_once_and_returns_receipt(confirmation: OrderConfirmation) {
    let mut sender = MockEmailSender::new();
    sender
        .expect_send()
        .withf(|message| {
            message.recipients == ["a@x.com"] && message.subject == "Confirmação do Pedido #42"
        })
        .times(1)
        .returning(|_| Ok(()));

    let receipt = make_service(sender)
        .confirm(confirmation)
        .await
        .expect("confirmation succeeds");

    assert_eq!(receipt.order_id().as_str(), "42");
    assert_eq!(receipt.message(), "E-mail de confirmação enviado.");
}

#[rstest]
#[tokio::test]
async fn provider_rejection_maps_to_delivery_failure(confirmation: OrderConfirmation) {
    let mut sender = MockEmailSender::new();
    sender
        .expect_send()
        .times(1)
        .returning(|_| Err(EmailSenderError::rejected(422_u16, "invalid `to` field")));

    let error = make_service(sender)
        .confirm(confirmation)
        .await
        .expect_err("rejection fails");

    assert_eq!(error.code(), ErrorCode::EmailDeliveryFailed);
    assert_eq!(error.message(), "Falha ao enviar e-mail de confirmação.");
}

#[rstest]
#[tokio::test]
async fn transport_failure_maps_to_delivery_failure(confirmation: OrderConfirmation) {
    let mut sender = MockEmailSender::new();
    sender
        .expect_send()
        .times(1)
        .returning(|_| Err(EmailSenderError::transport("connection reset")));

    let error = make_service(sender)
        .confirm(confirmation)
        .await
        .expect_err("transport fails");

    assert_eq!(error.code(), ErrorCode::EmailDeliveryFailed);
    assert!(error.message().contains("connection reset"));
}
