// Authenticated caller identity, resolved from a live session.

use serde::{Deserialize, Serialize};

/// Caller information injected into request extensions by the session
/// middleware. Ownership scoping always keys on `user_id`, never on any
/// client-supplied identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub name: String,
}
