//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use graphview_auth::RegistrationService;
use graphview_core::config::AppConfig;
use graphview_database::UserStore;
use graphview_module::{ConverterDispatcher, ModuleRegistry};
use graphview_session::DiagramSessionStore;

/// Application state passed to every handler via `State<AppState>`.
///
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Registered conversion modules, read-only after startup.
    pub registry: Arc<ModuleRegistry>,
    /// Dispatcher over `registry`.
    pub dispatcher: ConverterDispatcher,
    /// Per-session uploaded diagrams.
    pub sessions: DiagramSessionStore,
    /// User registration.
    pub registration: Arc<RegistrationService>,
}

impl AppState {
    /// Wires the state from its collaborators.
    pub fn new(config: AppConfig, registry: ModuleRegistry, users: Arc<dyn UserStore>) -> Self {
        let registry = Arc::new(registry);
        let dispatcher = ConverterDispatcher::new(registry.clone());
        let sessions = DiagramSessionStore::new(&config.session);
        let registration = Arc::new(RegistrationService::new(users, &config.auth));

        Self {
            config: Arc::new(config),
            registry,
            dispatcher,
            sessions,
            registration,
        }
    }
}
