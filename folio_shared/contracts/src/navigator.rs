use folio_models::handoff::Handoff;

/// The browser primitive behind `window.location` and `window.open`.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NavigatorService: Send + Sync + 'static {
    /// Hands the url off to whatever handles it. Failures are not reported
    /// back to the caller.
    fn hand_off(&self, handoff: Handoff);
}

#[cfg(feature = "mock")]
impl MockNavigatorService {
    pub fn with_hand_off(mut self, handoff: Handoff) -> Self {
        self.expect_hand_off()
            .once()
            .with(mockall::predicate::eq(handoff))
            .return_const(());
        self
    }

    /// Expects a single handoff and stores it in `slot` for closer inspection.
    pub fn with_captured_hand_off(
        mut self,
        slot: std::sync::Arc<std::sync::Mutex<Option<Handoff>>>,
    ) -> Self {
        self.expect_hand_off()
            .once()
            .returning(move |handoff| *slot.lock().unwrap() = Some(handoff));
        self
    }
}
