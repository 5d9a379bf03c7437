//! Client-side UI state: modal dialogs and root-attached flyouts.

pub mod modal;
pub mod portal;
