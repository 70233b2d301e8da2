#[cfg(test)]
mod tests {
    use crate::core::checkout::CheckoutState;
    use crate::core::payment::STEP_DELAY;
    use crate::core::{
        CATALOG, Cart, CheckoutField, CheckoutStep, Currency, DemoAuthService, OpenPopover,
        PaymentPhase, SubmitError, YearMonth, run_payment_sequence, select_currency,
    };
    use futures::executor::block_on;
    use futures::future::ready;
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    fn now() -> YearMonth {
        YearMonth::new(2025, 6)
    }

    fn signed_in_service() -> DemoAuthService {
        let mut auth = DemoAuthService::new();
        auth.login("aman", "Aman@123").expect("demo login");
        let code = auth
            .session()
            .user
            .as_ref()
            .and_then(|u| u.verification_code.clone())
            .expect("code issued");
        auth.verify_code(&code).expect("verify");
        auth
    }

    fn cart_with_two_tools() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(CATALOG[0].to_cart_item());
        cart.add_item(CATALOG[2].to_cart_item());
        cart
    }

    fn fill(state: &mut CheckoutState) {
        let entries = [
            (CheckoutField::FirstName, "Aman"),
            (CheckoutField::LastName, "Kumar"),
            (CheckoutField::Address, "12 MG Road"),
            (CheckoutField::City, "Pune"),
            (CheckoutField::Country, "IN"),
            (CheckoutField::ZipCode, "411001"),
            (CheckoutField::NameOnCard, "Aman Kumar"),
            (CheckoutField::CardNumber, "4111 1111 1111 1111"),
            (CheckoutField::ExpiryDate, "12/30"),
            (CheckoutField::Cvv, "123"),
        ];
        for (field, value) in entries {
            state.form.set_field(field, value, now());
        }
    }

    /// Run the scripted sequence to completion against `state` and `cart`
    fn run_to_completion(state: &RefCell<CheckoutState>, cart: &RefCell<Cart>) -> Vec<&'static str> {
        let messages = RefCell::new(Vec::new());
        block_on(run_payment_sequence(
            |_| ready(()),
            |phase| {
                if let Some(msg) = phase.message() {
                    messages.borrow_mut().push(msg);
                }
                state
                    .borrow_mut()
                    .enter_phase(phase, &mut cart.borrow_mut());
            },
        ));
        messages.into_inner()
    }

    #[test]
    fn test_full_checkout_flow_clears_cart() {
        let auth = signed_in_service();
        let user = auth.session().current_user().expect("signed in");

        let cart = RefCell::new(cart_with_two_tools());
        let state = RefCell::new(CheckoutState::new(user.email.clone()));

        {
            let mut s = state.borrow_mut();
            s.next_step();
            s.next_step();
            assert_eq!(s.step, CheckoutStep::Payment);
            fill(&mut s);
            s.form.agree_terms = true;
            s.begin_payment(now()).expect("valid form");
        }

        let messages = run_to_completion(&state, &cart);

        assert_eq!(
            messages,
            vec![
                "Validating payment information...",
                "Processing payment...",
                "Confirming transaction...",
                "Finalizing order...",
            ]
        );
        let state = state.into_inner();
        assert!(state.order_complete);
        assert!(state.form.errors.is_empty());
        assert!(cart.borrow().is_empty());
    }

    #[test]
    fn test_terms_not_agreed_never_clears_cart() {
        let cart = cart_with_two_tools();
        let mut state = CheckoutState::new("aman@example.com");
        fill(&mut state);

        for _ in 0..3 {
            assert_eq!(state.begin_payment(now()), Err(SubmitError::TermsNotAgreed));
        }
        assert_eq!(state.phase, PaymentPhase::Idle);
        assert!(!state.order_complete);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_invalid_fields_block_even_with_terms() {
        let mut state = CheckoutState::new("not-an-email");
        fill(&mut state);
        state.form.agree_terms = true;

        let err = state.begin_payment(now()).unwrap_err();
        assert_eq!(err.to_string(), "Please fix all errors before proceeding");
        assert_eq!(
            state.form.error(CheckoutField::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(!state.is_processing());
    }

    #[test]
    fn test_sequence_timing_matches_script() {
        let total: std::time::Duration = [
            PaymentPhase::Validating,
            PaymentPhase::Processing,
            PaymentPhase::Confirming,
            PaymentPhase::Finalizing,
            PaymentPhase::Done,
        ]
        .iter()
        .map(|p| p.delay())
        .sum();
        assert_eq!(total, STEP_DELAY * 4 + std::time::Duration::from_millis(1000));
    }

    #[test]
    fn test_currency_selection_closes_popover_and_is_idempotent() {
        let cart = cart_with_two_tools();
        let mut currency = Currency::Usd;
        let mut open = OpenPopover::None;

        assert_eq!(currency.format_price(cart.total_price()), "$30.00");

        let inr: Currency = "INR".parse().expect("supported currency");
        let mut changes = Vec::new();
        for _ in 0..2 {
            open = open.toggle(OpenPopover::Currency);
            assert!(open.is_open(OpenPopover::Currency));

            let choice = select_currency(open, currency, inr);
            changes.push(choice.changed);
            currency = choice.currency;
            open = choice.open;

            assert_eq!(open, OpenPopover::None);
            assert_eq!(currency.format_price(cart.total_price()), "₹2,490.00");
        }
        assert_eq!(changes, vec![true, false]);
    }

    #[test]
    fn test_summary_total_in_selected_currency() {
        let cart = cart_with_two_tools();
        let summary = crate::core::OrderSummary::for_cart(&cart);
        assert_eq!(summary.total, Decimal::new(33, 0));
        assert_eq!(Currency::Eur.format_price(summary.total), "€30.36");
    }
}
