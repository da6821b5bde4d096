use poem_openapi::Object;

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct MessagePayloadDto {
    #[oai(validator(min_length = 1))]
    pub phone_number: String,
    #[oai(validator(min_length = 1))]
    pub tracking_number: String,
    #[oai(validator(min_length = 1, max_length = 1600))]
    pub message: String,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct BatchSendRequestDto {
    pub messages_payload: Vec<MessagePayloadDto>,
}
