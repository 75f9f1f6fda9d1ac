use crate::pricing::{OccupancyFraction, TenantPricingRecord};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    facility: String,
    unit: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tenant_name: Option<String>,
    current_rent: f64,
    street_rate: f64,
    unit_group_median: f64,
    unit_group_occupancy: f64,
    #[serde(default, deserialize_with = "blank_or_months")]
    tenure_months: Option<u32>,
    #[serde(default, deserialize_with = "blank_or_flag")]
    is_multi_unit: Option<bool>,
    #[serde(default, deserialize_with = "blank_or_flag")]
    is_lease_up: Option<bool>,
    #[serde(default, deserialize_with = "blank_or_flag")]
    is_first_ecri: Option<bool>,
}

impl RosterRow {
    fn into_record(self) -> TenantPricingRecord {
        let defaults = TenantPricingRecord::new(
            self.id,
            self.facility,
            self.unit,
            self.current_rent,
            self.street_rate,
            self.unit_group_median,
            OccupancyFraction(self.unit_group_occupancy),
        );

        TenantPricingRecord {
            tenant_name: self.tenant_name,
            tenure_months: self.tenure_months.unwrap_or(defaults.tenure_months),
            is_multi_unit: self.is_multi_unit.unwrap_or(defaults.is_multi_unit),
            is_lease_up: self.is_lease_up.unwrap_or(defaults.is_lease_up),
            is_first_ecri: self.is_first_ecri.unwrap_or(defaults.is_first_ecri),
            ..defaults
        }
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<TenantPricingRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<RosterRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Blank cells take the record default; anything else must be a whole month count.
fn blank_or_months<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    empty_string_as_none(deserializer)?
        .map(|value| {
            value.trim().parse::<u32>().map_err(|err| {
                D::Error::custom(format!("invalid tenure_months `{value}`: {err}"))
            })
        })
        .transpose()
}

fn blank_or_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    empty_string_as_none(deserializer)?
        .map(|value| {
            parse_flag(&value)
                .ok_or_else(|| D::Error::custom(format!("unrecognised flag value `{value}`")))
        })
        .transpose()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
