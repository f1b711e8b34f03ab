use userdeck_business::{BusinessConfig, register_users_page};
use userdeck_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_users_page(&mut ctx, config);
        Self { ctx }
    }

    /// State pointed at a mock server.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
