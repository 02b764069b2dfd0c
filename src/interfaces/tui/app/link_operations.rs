//! Link CRUD operations

use super::{App, CurrentScreen};
use crate::dashboard::{DeleteOutcome, PermissionSet, SubmitOutcome};
use crate::errors::AffilinkError;

impl App {
    pub fn open_add(&mut self) {
        if self.dashboard.open_create() {
            self.current_screen = CurrentScreen::LinkForm;
        }
    }

    pub fn open_edit_selected(&mut self) {
        let Some(link) = self.get_selected_link().cloned() else {
            return;
        };
        if self.dashboard.open_edit(&link) {
            self.current_screen = CurrentScreen::LinkForm;
        }
    }

    pub fn open_delete_selected(&mut self) {
        let Some(id) = self.get_selected_link().map(|l| l.id.clone()) else {
            return;
        };
        if self.dashboard.open_delete(id) {
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub fn open_details(&mut self) {
        if self.dashboard.permissions().can_view() && self.get_selected_link().is_some() {
            self.current_screen = CurrentScreen::ViewDetails;
        }
    }

    pub fn cancel_modal(&mut self) {
        self.dashboard.close_modal();
        self.current_screen = CurrentScreen::Main;
    }

    /// Submit the open form; stays on the form only when validation fails
    pub async fn submit_form(&mut self) {
        match self.dashboard.submit().await {
            SubmitOutcome::Invalid => return,
            SubmitOutcome::Created => self.set_status("Link created successfully!".to_string()),
            SubmitOutcome::Updated => self.set_status("Link updated successfully!".to_string()),
            SubmitOutcome::Failed(_) | SubmitOutcome::NoForm => self.clear_messages(),
        }
        self.clamp_selection();
        self.current_screen = CurrentScreen::Main;
    }

    pub async fn confirm_delete(&mut self) {
        match self.dashboard.confirm_delete().await {
            DeleteOutcome::Deleted => self.set_status("Link deleted successfully!".to_string()),
            DeleteOutcome::Failed(_) | DeleteOutcome::NoTarget => self.clear_messages(),
        }
        self.clamp_selection();
        self.current_screen = CurrentScreen::Main;
    }

    /// Copy the selected link's redirect URL to the clipboard
    pub fn copy_share_url(&mut self) {
        let Some(id) = self.get_selected_link().map(|l| l.id.clone()) else {
            return;
        };
        let url = self.dashboard.share_url(&id);

        let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(&url));
        match copied {
            Ok(()) => self.set_status(format!("Copied: {}", url)),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                self.set_error(AffilinkError::clipboard(e.to_string()).format_simple());
            }
        }
    }
}
