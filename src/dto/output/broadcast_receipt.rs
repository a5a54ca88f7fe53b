use serde::Deserialize;

///
/// Server response to a bulk create: how many notifications
/// were created, one per recipient.
///
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastReceipt {
    pub created_count: u64,
}
