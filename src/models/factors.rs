// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Typed carbon-factor reference table.
//!
//! One tagged record per category, matching the JSON shape of the
//! backend's `/api/factors` endpoint. This crate treats the table as
//! opaque reference data; no footprint computation happens client-side.

use serde::{Deserialize, Serialize};

/// Carbon-factor table, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonFactors {
    #[serde(rename = "Transports")]
    pub transports: TransportFactors,
    #[serde(rename = "Logement_electromenagers")]
    pub logement_electromenagers: HousingFactors,
    #[serde(rename = "Alimentation")]
    pub alimentation: FoodFactors,
    #[serde(rename = "Vetements")]
    pub vetements: ClothingFactors,
    #[serde(rename = "Numerique")]
    pub numerique: DigitalFactors,
    #[serde(rename = "Consommation")]
    pub consommation: ConsumptionFactors,
}

/// kg CO2e per km travelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportFactors {
    pub train: f64,
    pub flight: f64,
    pub car: CarFactors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarFactors {
    pub small: f64,
    pub medium: f64,
    pub big: f64,
}

/// Housing and appliance factors (kWh usage, floor area, unit counts).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HousingFactors {
    pub electricity: f64,
    pub gas: f64,
    pub apartment: f64,
    pub house: f64,
    pub appliance: f64,
    pub electronic: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodFactors {
    #[serde(rename = "redMeat")]
    pub red_meat: f64,
    #[serde(rename = "whiteMeat")]
    pub white_meat: f64,
    pub pork: f64,
    /// Multiplier, not an additive factor.
    #[serde(rename = "bulkFoodPurchase")]
    pub bulk_food_purchase: BulkPurchaseFactors,
    /// Multiplier, not an additive factor.
    #[serde(rename = "shortCircuit")]
    pub short_circuit: ShortCircuitFactors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkPurchaseFactors {
    pub none: f64,
    pub partial: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortCircuitFactors {
    pub none: f64,
    pub partial: f64,
    pub majority: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingFactors {
    pub large: f64,
    pub small: f64,
    pub madein: OriginFactors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginFactors {
    pub france: f64,
    pub autre: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DigitalFactors {
    #[serde(rename = "googleSearch")]
    pub google_search: f64,
    #[serde(rename = "chatGPT")]
    pub chat_gpt: f64,
    #[serde(rename = "socialMedia")]
    pub social_media: f64,
    pub smartphone: SmartphoneFactors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartphoneFactors {
    pub small: f64,
    pub large: f64,
    pub used: f64,
    pub old: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionFactors {
    pub ecommerce: EcommerceFactors,
    pub commerce: CommerceFactors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EcommerceFactors {
    pub amazon: f64,
    pub leboncoin: f64,
    pub artisanat: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommerceFactors {
    pub brocante: f64,
    #[serde(rename = "localShops")]
    pub local_shops: f64,
}

impl CarbonFactors {
    /// Reference values served by the backend.
    ///
    /// Kept client-side so tests and offline tooling can work with the
    /// same table the `/api/factors` endpoint returns.
    pub fn reference() -> Self {
        Self {
            transports: TransportFactors {
                train: 0.014,
                flight: 0.285,
                car: CarFactors {
                    small: 0.1,
                    medium: 0.2,
                    big: 0.3,
                },
            },
            logement_electromenagers: HousingFactors {
                electricity: 0.4,
                gas: 0.2,
                apartment: 15.0,
                house: 20.0,
                appliance: 0.5,
                electronic: 0.3,
            },
            alimentation: FoodFactors {
                red_meat: 27.0,
                white_meat: 6.9,
                pork: 7.2,
                bulk_food_purchase: BulkPurchaseFactors {
                    none: 1.0,
                    partial: 0.9,
                    total: 0.8,
                },
                short_circuit: ShortCircuitFactors {
                    none: 1.0,
                    partial: 0.9,
                    majority: 0.8,
                },
            },
            vetements: ClothingFactors {
                large: 15.0,
                small: 10.0,
                madein: OriginFactors {
                    france: 1.0,
                    autre: 1.2,
                },
            },
            numerique: DigitalFactors {
                google_search: 0.0002,
                chat_gpt: 0.000382,
                social_media: 0.000380,
                smartphone: SmartphoneFactors {
                    small: 35.0,
                    large: 75.0,
                    used: 0.5,
                    old: 0.5,
                },
            },
            consommation: ConsumptionFactors {
                ecommerce: EcommerceFactors {
                    amazon: 0.25,
                    leboncoin: 0.05,
                    artisanat: 0.1,
                },
                commerce: CommerceFactors {
                    brocante: 0.03,
                    local_shops: 0.08,
                },
            },
        }
    }
}
