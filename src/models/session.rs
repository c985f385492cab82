// Session lookup types. Sessions are issued and persisted by the external
// auth service; this crate only reads them to resolve the caller.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The caller resolved from a live session: the owner id every scoped
/// operation is keyed on, plus the display name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
}
