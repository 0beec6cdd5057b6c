//! Contact form submission with a local mail-link fallback.
//!
//! One request may be in flight.  A transport failure never reaches the
//! visitor: the form opens a pre-filled mail composer instead and then
//! follows the normal success path.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::adapters::mail_link;
use crate::app::events::ViewEvent;
use crate::app::ports::{SubmissionRequest, TransportError};
use crate::config::ContactConfig;
use crate::error::Error;
use crate::scheduler::{TimerId, TimerPurpose};

use super::Cx;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Map the fields onto the endpoint's entry ids.
    pub fn to_request(&self, config: &ContactConfig) -> SubmissionRequest {
        SubmissionRequest {
            endpoint: config.endpoint.clone(),
            fields: vec![
                (config.name_field.clone(), self.name.clone()),
                (config.email_field.clone(), self.email.clone()),
                (config.subject_field.clone(), self.subject.clone()),
                (config.message_field.clone(), self.message.clone()),
            ],
        }
    }
}

/// How a submission ended, as far as the visitor is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    MailFallback,
}

#[derive(Default)]
pub struct ContactController {
    in_flight: Option<ContactForm>,
    success_timer: Option<TimerId>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a submission.  Ignored while one is in flight.
    pub fn submit(&mut self, form: ContactForm, cx: &mut Cx<'_>) -> Option<Delivery> {
        if self.in_flight.is_some() {
            warn!("Contact: submission already in flight, ignoring");
            return None;
        }
        let request = form.to_request(&cx.config.contact);
        cx.emit(ViewEvent::FormSending);
        self.in_flight = Some(form);
        info!("Contact: sending to {}", request.endpoint);

        match cx.platform.send(&request) {
            Ok(()) => None,
            Err(e) => self.settle(Err(e), cx),
        }
    }

    /// The request finished.  Stray settlements are ignored.
    pub fn settle(&mut self, outcome: Result<(), TransportError>, cx: &mut Cx<'_>) -> Option<Delivery> {
        let Some(form) = self.in_flight.take() else {
            warn!("Contact: settlement with nothing in flight");
            return None;
        };

        let delivery = match outcome {
            Ok(()) => Delivery::Sent,
            Err(e) => {
                let err = Error::from(e);
                warn!("Contact: {err}, falling back to mail link");
                let link = mail_link::compose(&cx.config.contact.fallback_recipient, &form);
                cx.platform.open_mail_link(&link);
                Delivery::MailFallback
            }
        };

        info!("Contact: delivered ({:?})", delivery);
        cx.emit(ViewEvent::SuccessMessage(true));
        cx.emit(ViewEvent::FormReset);
        cx.emit(ViewEvent::FormReady);
        cx.timers.cancel_slot(&mut self.success_timer);
        self.success_timer = cx
            .timers
            .once(TimerPurpose::SuccessMessage, cx.config.timing.success_message_ms)
            .ok();
        Some(delivery)
    }

    pub fn on_success_timer(&mut self, id: TimerId, cx: &mut Cx<'_>) {
        if self.success_timer != Some(id) {
            return;
        }
        self.success_timer = None;
        cx.emit(ViewEvent::SuccessMessage(false));
    }

    pub fn teardown(&mut self, cx: &mut Cx<'_>) {
        cx.timers.cancel_slot(&mut self.success_timer);
    }
}
