use super::domain::{Employee, Provider, Vehicle};
use super::field_map::{to_frontend, Entity};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Reads a backend export, renaming columns to frontend keys before
/// deserialising each row.
pub(crate) fn parse_rows<T, R>(reader: R, entity: Entity) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let translated: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(|column| to_frontend(entity, column))
        .collect();
    csv_reader.set_headers(translated);

    csv_reader.deserialize::<T>().collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleRow {
    id: u64,
    plate: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    model: String,
    #[serde(default, deserialize_with = "flexible_date")]
    vtv_due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "flexible_date")]
    insurance_due_date: Option<NaiveDate>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Self {
            id: row.id,
            plate: row.plate,
            brand: row.brand,
            model: row.model,
            vtv_due_date: row.vtv_due_date,
            insurance_due_date: row.insurance_due_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeRow {
    id: u64,
    full_name: String,
    #[serde(default, deserialize_with = "flexible_date")]
    license_due_date: Option<NaiveDate>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            license_due_date: row.license_due_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProviderRow {
    id: u64,
    business_name: String,
    #[serde(default)]
    tax_id: String,
    #[serde(default, deserialize_with = "flexible_date")]
    art_due_date: Option<NaiveDate>,
}

impl From<ProviderRow> for Provider {
    fn from(row: ProviderRow) -> Self {
        Self {
            id: row.id,
            business_name: row.business_name,
            tax_id: row.tax_id,
            art_due_date: row.art_due_date,
        }
    }
}

fn flexible_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value)
            .map_err(|_| serde::de::Error::custom(format!("unrecognized date '{value}'"))),
    }
}

/// Accepts ISO dates, `DD/MM/YYYY`, MySQL `DATETIME`, and RFC 3339.
/// MySQL zero dates mean "not set".
fn parse_date(value: &str) -> Result<Option<NaiveDate>, ()> {
    if value.starts_with("0000-00-00") {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%d/%m/%Y") {
        return Ok(Some(date));
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(Some(datetime.date()));
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(datetime.date_naive()));
    }

    Err(())
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Result<Option<NaiveDate>, ()> {
    parse_date(value)
}
