pub mod activity_log_repository;
pub mod asset_repository;
pub mod catalog_repository;
pub mod user_repository;

use crate::StoreErrorResult;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn from_row<T: DeserializeOwned>(row: Value) -> StoreErrorResult<T> {
    Ok(serde_json::from_value(row)?)
}

pub(crate) fn from_rows<T: DeserializeOwned>(rows: Vec<Value>) -> StoreErrorResult<Vec<T>> {
    rows.into_iter().map(from_row).collect()
}

pub(crate) fn to_row<T: Serialize>(value: &T) -> StoreErrorResult<Value> {
    Ok(serde_json::to_value(value)?)
}
