use serde::{Deserialize, Serialize};

/// Host save-event discriminator, carried as a typed payload rather than a
/// capability lookup on the host's script context.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserEventType {
    Create,
    Edit,
    Delete,
}

impl UserEventType {
    /// Lot/expiration resolution runs on create and edit, never on delete.
    pub fn triggers_resolution(&self) -> bool {
        matches!(self, UserEventType::Create | UserEventType::Edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_create_and_edit_trigger_resolution() {
        assert!(UserEventType::Create.triggers_resolution());
        assert!(UserEventType::Edit.triggers_resolution());
        assert!(!UserEventType::Delete.triggers_resolution());
    }
}
