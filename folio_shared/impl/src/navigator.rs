use folio_models::handoff::Handoff;
use folio_shared_contracts::navigator::NavigatorService;
use tracing::{debug, warn};

/// Opens urls with the handler registered by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNavigatorService;

impl NavigatorService for SystemNavigatorService {
    #[tracing::instrument(skip_all, fields(url = %handoff.url))]
    fn hand_off(&self, handoff: Handoff) {
        // There is no browsing context to replace, so both targets end up
        // with the default handler.
        debug!(handoff_target = ?handoff.target, "handing off url");
        if let Err(err) = webbrowser::open(&handoff.url) {
            warn!("failed to open url: {err}");
        }
    }
}

/// Writes urls to stdout instead of opening them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintNavigatorService;

impl NavigatorService for PrintNavigatorService {
    fn hand_off(&self, handoff: Handoff) {
        println!("{}", handoff.url);
    }
}
