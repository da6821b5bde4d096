use crate::{
    domain::models::{DispatchResult, MessageRequest},
    presentation::http::{requests::MessagePayloadDto, responses::DispatchResultDto},
};

pub fn map_message_request(payload: &MessagePayloadDto) -> MessageRequest {
    MessageRequest {
        phone_number: payload.phone_number.clone(),
        tracking_number: payload.tracking_number.clone(),
        body: payload.message.clone(),
    }
}

pub fn map_dispatch_result(result: &DispatchResult) -> DispatchResultDto {
    DispatchResultDto {
        phone_number: result.phone_number.clone(),
        status: result.status.into(),
    }
}
