//! Folds controller events into the CLI's view model.
use client_frontend_core::{
    MintEvent, UpdateScope, ViewModel, ViewModelUpdater,
    event::{EventConsumer, EventImpact},
    message::MessageLog,
};

pub struct CliEventConsumer {
    view_model: ViewModel,
}

impl CliEventConsumer {
    pub fn new(view_model: ViewModel) -> Self {
        Self { view_model }
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn dismiss_notice(&mut self) -> EventImpact {
        Self::impact(ViewModelUpdater::dismiss_notice(&mut self.view_model))
    }

    fn impact(scope: UpdateScope) -> EventImpact {
        if scope.is_empty() {
            EventImpact::none()
        } else {
            EventImpact::redraw()
        }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &MintEvent) -> EventImpact {
        let scope = ViewModelUpdater::update(&mut self.view_model, event);
        if scope.affects_control() {
            tracing::debug!("Control is now {:?}", self.view_model.control());
        }
        Self::impact(scope)
    }

    fn message_log(&self) -> &MessageLog {
        &self.view_model.messages
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.view_model.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{Control, Notice};

    #[test]
    fn redraws_only_on_change() {
        let mut consumer = CliEventConsumer::new(ViewModel::default());

        assert!(consumer.on_event(&MintEvent::MintedCount(4)).requires_redraw);
        assert!(!consumer.on_event(&MintEvent::MintedCount(4)).requires_redraw);
        assert_eq!(consumer.view_model().minted, 4);
    }

    #[test]
    fn dismissing_clears_notice() {
        let mut consumer = CliEventConsumer::new(ViewModel::default());
        consumer.on_event(&MintEvent::Notice(Notice::wrong_network("Rinkeby")));
        assert!(consumer.view_model().has_notice());

        assert!(consumer.dismiss_notice().requires_redraw);
        assert!(!consumer.view_model().has_notice());
        assert_eq!(consumer.view_model().control(), Control::ConnectWallet);
    }

    #[test]
    fn message_log_is_the_view_model_log() {
        let mut consumer = CliEventConsumer::new(ViewModel::default());
        consumer.message_log_mut().push_text("Quitting...");
        assert_eq!(consumer.message_log().len(), 1);
    }
}
