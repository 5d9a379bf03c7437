//! Open/closed bookkeeping for modal dialogs.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Visibility of a modal together with the data it displays.
///
/// The payload is the open flag: a closed modal holds no data, so a reopened
/// modal never shows what a previous one displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState<T> {
    data: Option<T>,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ModalState<T> {
    /// Creates a closed modal.
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Opens the modal with `payload`, replacing whatever it displayed.
    pub fn open_modal(&mut self, payload: T) {
        if self.data.replace(payload).is_some() {
            log::trace!("modal payload replaced");
        } else {
            log::trace!("modal opened");
        }
    }

    /// Closes the modal and drops its payload. Closing twice is a no-op.
    pub fn close_modal(&mut self) {
        if self.data.take().is_some() {
            log::trace!("modal closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.data.is_some()
    }

    /// Payload of the open modal, `None` when closed.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutable access to the payload, e.g. while a form inside is edited.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }
}

/// Serialized as `{"open": bool, "data": T | null}` for template contexts.
impl<T: Serialize> Serialize for ModalState<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ModalState", 2)?;
        state.serialize_field("open", &self.is_open())?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn starts_closed_without_data() {
        let modal: ModalState<String> = ModalState::default();
        assert!(!modal.is_open());
        assert!(modal.data().is_none());
    }

    #[test]
    fn open_stores_payload() {
        let mut modal = ModalState::new();
        modal.open_modal(7_u32);
        assert!(modal.is_open());
        assert_eq!(modal.data(), Some(&7));
    }

    #[test]
    fn reopening_replaces_payload() {
        let mut modal = ModalState::new();
        modal.open_modal(vec![1, 2]);
        modal.open_modal(vec![3]);
        assert!(modal.is_open());
        assert_eq!(modal.data(), Some(&vec![3]));
    }

    #[test]
    fn close_clears_payload_and_is_idempotent() {
        let mut modal = ModalState::new();
        modal.open_modal("edit");
        modal.close_modal();
        let once = modal.clone();
        modal.close_modal();

        assert_eq!(modal, once);
        assert!(!modal.is_open());
        assert!(modal.data().is_none());
    }

    #[test]
    fn closing_a_fresh_modal_matches_initial_state() {
        let mut modal: ModalState<i32> = ModalState::new();
        modal.close_modal();
        assert_eq!(modal, ModalState::new());
    }

    #[test]
    fn data_mut_edits_open_payload_only() {
        let mut modal = ModalState::new();
        assert!(modal.data_mut().is_none());

        modal.open_modal(String::from("draft"));
        if let Some(text) = modal.data_mut() {
            text.push_str(" v2");
        }
        assert_eq!(modal.data().map(String::as_str), Some("draft v2"));
    }

    #[test]
    fn serializes_flag_and_data() {
        let mut modal = ModalState::new();
        assert_eq!(
            serde_json::to_value(&modal).unwrap(),
            json!({"open": false, "data": null})
        );

        modal.open_modal(json!({"id": 1}));
        assert_eq!(
            serde_json::to_value(&modal).unwrap(),
            json!({"open": true, "data": {"id": 1}})
        );
    }
}
