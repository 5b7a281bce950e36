// UI state - status messages and presentation settings
use crate::style::Theme;
use std::time::Instant;

pub struct UiState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    pub is_loading: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            error_message: None,
            info_message: None,
            is_loading: false,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }

    pub fn has_messages(&self) -> bool {
        self.error_message.is_some() || self.info_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_messages_expire() {
        let mut ui = UiState::new(Theme::Dark);
        ui.set_error("bad".into());
        ui.set_info("ok".into());
        ui.clear_expired_messages(60);
        assert!(ui.has_messages());

        ui.error_message = Instant::now()
            .checked_sub(Duration::from_secs(10))
            .map(|t| ("bad".to_string(), t));
        ui.clear_expired_messages(5);
        assert!(ui.error_message.is_none());
        assert!(ui.info_message.is_some());
    }
}
