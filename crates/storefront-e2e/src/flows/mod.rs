// Flows - multi-step business scenarios
//
// Flows sequence page-object calls and reduce the result to a plain
// value: a bool, a message string, or a small outcome struct. Nothing
// below the flow layer makes pass/fail decisions.

mod account;
mod login;
mod register;

pub use account::{AccountFlow, AccountInfo, AccountUpdate, AccountUpdateOutcome, DashboardSections, PasswordChange};
pub use login::{LoginFlow, LoginOutcome};
pub use register::{RegisterFlow, RegisterOutcome, Registration};

use std::time::Duration;

use thirtyfour::WebDriver;
use tracing::debug;

use crate::locator::Locator;
use crate::wait::Waiter;

/// One way a scenario can be judged successful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessSignal {
    /// The current URL contains the fragment.
    UrlContains(&'static str),
    /// The element becomes visible.
    ElementVisible(Locator),
    /// The page source contains the substring. Checked immediately,
    /// without waiting.
    PageSourceContains(&'static str),
}

/// An ordered cascade of success signals.
///
/// Signals are evaluated strictly in list order and the first positive
/// one is accepted; later signals are never consulted after a hit, even
/// if they would contradict it. The ordering IS the policy - keep it in
/// the list, not in call sites.
#[derive(Debug, Clone)]
pub struct SuccessCheck {
    signals: Vec<SuccessSignal>,
    url_timeout: Duration,
    element_timeout: Duration,
}

impl SuccessCheck {
    pub fn new(signals: Vec<SuccessSignal>) -> Self {
        Self {
            signals,
            url_timeout: Duration::from_secs(15),
            element_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_url_timeout(mut self, timeout: Duration) -> Self {
        self.url_timeout = timeout;
        self
    }

    pub fn with_element_timeout(mut self, timeout: Duration) -> Self {
        self.element_timeout = timeout;
        self
    }

    pub fn signals(&self) -> &[SuccessSignal] {
        &self.signals
    }

    async fn probe(&self, driver: &WebDriver, signal: &SuccessSignal) -> bool {
        match signal {
            SuccessSignal::UrlContains(fragment) => Waiter::new(driver)
                .with_timeout(self.url_timeout)
                .url_contains(fragment)
                .await
                .is_ok(),
            SuccessSignal::ElementVisible(locator) => Waiter::new(driver)
                .with_timeout(self.element_timeout)
                .visibility(*locator)
                .await
                .is_ok(),
            SuccessSignal::PageSourceContains(needle) => driver
                .source()
                .await
                .map(|source| source.contains(needle))
                .unwrap_or(false),
        }
    }

    /// Evaluates the cascade, returning the first positive signal.
    pub async fn evaluate(&self, driver: &WebDriver) -> Option<&SuccessSignal> {
        evaluate_with(&self.signals, |signal| self.probe(driver, signal)).await
    }

    /// Convenience: whether any signal in the cascade fires.
    pub async fn is_success(&self, driver: &WebDriver) -> bool {
        self.evaluate(driver).await.is_some()
    }
}

// The cascade walk itself, independent of how a signal is probed: first
// positive wins, everything after it is never consulted.
async fn evaluate_with<'a, F, Fut>(
    signals: &'a [SuccessSignal],
    mut probe: F,
) -> Option<&'a SuccessSignal>
where
    F: FnMut(&'a SuccessSignal) -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for signal in signals {
        if probe(signal).await {
            debug!(signal = ?signal, "success signal accepted");
            return Some(signal);
        }
        debug!(signal = ?signal, "success signal negative, trying next");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn signals() -> Vec<SuccessSignal> {
        vec![
            SuccessSignal::UrlContains("account/success"),
            SuccessSignal::ElementVisible(crate::pages::RegisterPage::SUCCESS_MESSAGE_CONTAINER),
            SuccessSignal::PageSourceContains("Your Account"),
            SuccessSignal::PageSourceContains("Thank you"),
        ]
    }

    #[tokio::test]
    async fn test_first_positive_signal_wins() {
        let signals = signals();
        let hit = evaluate_with(&signals, |signal| {
            let positive = matches!(signal, SuccessSignal::PageSourceContains("Your Account"));
            async move { positive }
        })
        .await;
        assert_eq!(hit, Some(&signals[2]));
    }

    #[tokio::test]
    async fn test_no_positive_signal_yields_none() {
        let signals = signals();
        let hit = evaluate_with(&signals, |_| async { false }).await;
        assert_eq!(hit, None);
    }

    #[tokio::test]
    async fn test_later_signals_never_consulted_after_a_hit() {
        let signals = signals();
        let consulted = RefCell::new(Vec::new());
        let hit = evaluate_with(&signals, |signal| {
            consulted.borrow_mut().push(signal.clone());
            // Second signal fires; the two contradicting page-source
            // checks after it must never run.
            let positive = matches!(signal, SuccessSignal::ElementVisible(_));
            async move { positive }
        })
        .await;
        assert_eq!(hit, Some(&signals[1]));
        assert_eq!(consulted.borrow().len(), 2);
    }

    #[test]
    fn test_cascade_order_is_data() {
        let check = SuccessCheck::new(vec![
            SuccessSignal::UrlContains("account/success"),
            SuccessSignal::PageSourceContains("Thank you"),
        ]);
        assert_eq!(
            check.signals()[0],
            SuccessSignal::UrlContains("account/success")
        );
        assert_eq!(check.signals().len(), 2);
    }
}
