use super::Role;
use serde::Serialize;
use uuid::Uuid;

///
/// Identity of the signed-in user.
///
/// Serialized as the `join` payload when the realtime
/// connection is established.
///
#[derive(Debug, Clone, Serialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}
