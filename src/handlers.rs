use axum::{
    extract::{Path, Query},
    Json,
};
use chrono::{Local, NaiveDate};
use log::debug;

use crate::{
    error::AppError,
    horoscope::{daily_horoscope, local_date, Horoscope, ZodiacSign},
    types::{DateQuery, SignInfo},
};

/// Today's horoscope uses the server's local calendar date unless `?date=` is
/// given.
#[axum::debug_handler]
pub async fn horoscope(
    Path(sign): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Horoscope>, AppError> {
    let sign: ZodiacSign = sign.parse()?;
    let date = match query.date {
        Some(raw) => parse_date(&raw)?,
        None => local_date(&Local::now()),
    };

    debug!("Generating horoscope for {} on {}", sign, date);
    Ok(Json(daily_horoscope(sign, date)))
}

#[axum::debug_handler]
pub async fn signs() -> Json<Vec<SignInfo>> {
    Json(ZodiacSign::ALL.into_iter().map(SignInfo::from).collect())
}

#[axum::debug_handler]
pub async fn birthday_sign(Query(query): Query<DateQuery>) -> Result<Json<SignInfo>, AppError> {
    let Some(raw) = query.date else {
        return Err(AppError::MissingDate);
    };
    let birthday = parse_date(&raw)?;

    Ok(Json(ZodiacSign::from_birthday(birthday).into()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(raw.to_string()))
}
