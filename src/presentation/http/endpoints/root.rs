use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::handlers::sms_dispatcher::SmsDispatcher;

pub struct Endpoints;

#[derive(Clone)]
pub struct ApiState {
    pub dispatcher: Arc<SmsDispatcher>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Messages,
}
