// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carbon activity models: reference catalog entries and logged events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Activity category in the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    Transport,
    Alimentation,
    Logement,
    Consommation,
}

/// Catalog entry describing one kind of trackable activity.
///
/// Immutable reference data served by the backend; `carbon_factor` is the
/// conversion factor in kg CO2e per `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CarbonActivity {
    /// Catalog identifier
    pub id: String,
    /// Category this activity belongs to
    pub category: Category,
    /// Display name
    pub name: String,
    /// Conversion factor (kg CO2e per unit)
    pub carbon_factor: f64,
    /// Unit label (e.g. "km", "kg", "kWh")
    pub unit: String,
}

/// One logged user action.
///
/// `activity_id` references a [`CarbonActivity::id`]; the reference is not
/// enforced here. Records are never mutated after creation; edits replace
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserActivity {
    /// Catalog identifier of the activity performed
    pub activity_id: String,
    /// Amount performed, in the catalog entry's unit
    pub quantity: f64,
    /// When the activity took place
    pub date: DateTime<Utc>,
}
