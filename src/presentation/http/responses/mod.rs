use poem_openapi::Object;

use crate::presentation::models::DispatchStatusDto;

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct DispatchResultDto {
    pub phone_number: String,
    pub status: DispatchStatusDto,
}

#[derive(Object)]
pub struct BatchSendResponseDto {
    pub success: bool,
    pub results: Vec<DispatchResultDto>,
}
