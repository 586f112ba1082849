//! Response DTOs
//!
//! Data structures for API response bodies. Conversions from domain
//! types live in `application::mapper`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dog response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogResponse {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub supplier: String,
    pub badge_id: Option<String>,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub date_acquired: NaiveDate,
    pub status_id: i64,
    pub status_name: String,
    pub leaving_date: Option<NaiveDate>,
    pub leaving_reason_id: Option<i64>,
    pub leaving_reason_name: Option<String>,
    pub kennelling_characteristic: Option<String>,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub size: u32,
    pub offset: u64,
    pub total_size: u64,
    pub total_pages: u64,
    pub number_of_elements: usize,
    pub empty: bool,
}

/// Dog status list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogStatusResponse {
    pub id: i64,
    pub status_name: String,
}

/// Leaving reason list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavingReasonResponse {
    pub id: i64,
    pub reason_name: String,
}
