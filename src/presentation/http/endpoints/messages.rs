use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    domain::models::MessageRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_dispatch_result, map_message_request},
        requests::BatchSendRequestDto,
        responses::BatchSendResponseDto,
    },
};

#[derive(Clone)]
pub struct MessagesEndpoints {
    state: Arc<ApiState>,
}

impl MessagesEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl MessagesEndpoints {
    /// Sends a batch of texts synchronously and returns one status per
    /// recipient, in submission order. Requests the quota denies come back
    /// as "Rate limit exceeded" without aborting the rest of the batch.
    #[oai(
        path = "/messages/batch",
        method = "post",
        tag = EndpointsTags::Messages,
    )]
    pub async fn send_batch(
        &self,
        request: Json<BatchSendRequestDto>,
    ) -> PoemResult<Json<BatchSendResponseDto>> {
        let requests: Vec<MessageRequest> = request
            .messages_payload
            .iter()
            .map(map_message_request)
            .collect();

        let results = self.state.dispatcher.dispatch(requests).await;

        Ok(Json(BatchSendResponseDto {
            success: true,
            results: results.iter().map(map_dispatch_result).collect(),
        }))
    }
}
