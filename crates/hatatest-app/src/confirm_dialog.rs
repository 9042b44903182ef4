//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in the TUI crate.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Dispatched when the user confirms; a decline drops the dialog and
    /// issues nothing.
    pub on_confirm: Message,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(title: impl Into<String>, message: impl Into<String>, on_confirm: Message) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_confirm,
        }
    }

    /// Confirmation before deleting a question
    pub fn delete_question(question_id: i64) -> Self {
        Self::new(
            "Soruyu Sil",
            "Bu soruyu silmek istediğinize emin misiniz?",
            Message::ConfirmedDeleteQuestion { question_id },
        )
    }

    /// Confirmation before deleting a test result
    pub fn delete_result(result_id: i64) -> Self {
        Self::new(
            "Sonucu Sil",
            "Bu sonucu silmek istediğinize emin misiniz?",
            Message::ConfirmedDeleteResult { result_id },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_question_dialog() {
        let dialog = ConfirmDialogState::delete_question(7);
        assert_eq!(dialog.title, "Soruyu Sil");
        assert!(dialog.message.contains("emin misiniz"));
        assert!(matches!(
            dialog.on_confirm,
            Message::ConfirmedDeleteQuestion { question_id: 7 }
        ));
    }

    #[test]
    fn test_delete_result_dialog() {
        let dialog = ConfirmDialogState::delete_result(3);
        assert!(matches!(
            dialog.on_confirm,
            Message::ConfirmedDeleteResult { result_id: 3 }
        ));
    }
}
