//! Module listing.

use axum::Json;
use axum::extract::State;

use graphview_module::{ModuleSummary, RAW_FORMAT};

use crate::state::AppState;

/// Display name of the canonical bypass type.
const RAW_DISPLAY_NAME: &str = "Canonical graph JSON";

/// GET /api/modules
///
/// Registered modules plus the `raw` bypass, sorted by key.
pub async fn list_modules(State(state): State<AppState>) -> Json<Vec<ModuleSummary>> {
    let mut modules = state.registry.summaries();
    modules.push(ModuleSummary {
        key: RAW_FORMAT.to_string(),
        name: RAW_DISPLAY_NAME.to_string(),
    });
    modules.sort_by(|a, b| a.key.cmp(&b.key));
    Json(modules)
}
