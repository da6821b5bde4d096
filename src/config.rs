use std::env::var;

use chrono::{NaiveTime, Weekday};
use dotenvy::dotenv;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub sms_api_base_url: String,
    pub sms_api_token: String,
    pub sms_company_id: String,
    pub drop_day: Weekday,
    pub drop_time: NaiveTime,
    pub database_url: Option<String>,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            sms_api_base_url: var("SMS_API_BASE_URL")
                .map_err(|_| "An error occured while getting SMS_API_BASE_URL env param")?,
            sms_api_token: var("SMS_API_TOKEN")
                .map_err(|_| "An error occured while getting SMS_API_TOKEN env param")?,
            sms_company_id: var("SMS_COMPANY_ID")
                .map_err(|_| "An error occured while getting SMS_COMPANY_ID env param")?,
            drop_day: var("DROP_DAY")
                .map_err(|_| "An error occured while getting DROP_DAY env param")?
                .parse::<Weekday>()
                .map_err(|_| "An error occured while parsing DROP_DAY env param")?,
            drop_time: NaiveTime::parse_from_str(
                &var("DROP_TIME")
                    .map_err(|_| "An error occured while getting DROP_TIME env param")?,
                "%H:%M",
            )
            .map_err(|_| "An error occured while parsing DROP_TIME env param")?,
            database_url: var("DATABASE_URL").ok(),
        })
    }
}
