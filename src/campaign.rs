//! Input data: a campaign and its Ideal Customer Profiles.
//!
//! Field names follow the JSON produced by the ICP research step. Lists
//! that are missing from the input are treated as empty.

use crate::error::DeckError;
use deckline_layout::{FunnelLevel, IcpSlide, SignalItem};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Reads both the flat layout and the research step's layout, which nests
/// the customer, solution and date under `campaign_info`. Serializes flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CampaignDef")]
pub struct Campaign {
    pub customer_name: String,
    pub solution_name: String,
    pub campaign_date: Option<String>,
    pub icps: Vec<IcpRecord>,
    /// Replaces the stock propensity funnel levels when present.
    pub funnel: Option<Vec<FunnelLevelSpec>>,
}

#[derive(Default, Deserialize)]
struct CampaignInfo {
    customer_name: Option<String>,
    solution_name: Option<String>,
    campaign_date: Option<String>,
}

#[derive(Deserialize)]
struct CampaignDef {
    campaign_info: Option<CampaignInfo>,
    customer_name: Option<String>,
    solution_name: Option<String>,
    campaign_date: Option<String>,
    #[serde(default)]
    icps: Vec<IcpRecord>,
    #[serde(default)]
    funnel: Option<Vec<FunnelLevelSpec>>,
}

impl TryFrom<CampaignDef> for Campaign {
    type Error = String;

    fn try_from(def: CampaignDef) -> Result<Self, Self::Error> {
        let info = def.campaign_info.unwrap_or_default();
        Ok(Campaign {
            customer_name: info
                .customer_name
                .or(def.customer_name)
                .ok_or("missing field `customer_name`")?,
            solution_name: info
                .solution_name
                .or(def.solution_name)
                .ok_or("missing field `solution_name`")?,
            campaign_date: info.campaign_date.or(def.campaign_date),
            icps: def.icps,
            funnel: def.funnel,
        })
    }
}

impl Campaign {
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn deck_title(&self) -> String {
        format!("{} - Ideal Customer Profiles", self.customer_name)
    }

    pub fn deck_subtitle(&self) -> String {
        format!("{} GTM Campaign", self.solution_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcpRecord {
    pub icp_number: u32,
    pub title: String,
    #[serde(default)]
    pub industries: Vec<String>,
    /// Free text. A list of department names is joined with commas.
    #[serde(default, deserialize_with = "departments_text")]
    pub departments_and_functions: String,
    #[serde(default)]
    pub key_roles: Vec<String>,
    #[serde(default)]
    pub technographic_fit: TechnographicFit,
}

fn departments_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DepartmentsDef {
        Text(String),
        List(Vec<String>),
    }

    Ok(match DepartmentsDef::deserialize(deserializer)? {
        DepartmentsDef::Text(text) => text,
        DepartmentsDef::List(names) => names.join(", "),
    })
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechnographicFit {
    #[serde(default)]
    pub displacement_signals: Vec<Signal>,
    #[serde(default)]
    pub expansion_signals: Vec<Signal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(alias = "pain_explanation", alias = "readiness_explanation")]
    pub explanation: String,
    #[serde(default)]
    pub vendor_products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelLevelSpec {
    pub label: String,
    #[serde(default)]
    pub vendors: Vec<String>,
}

impl From<&Signal> for SignalItem {
    fn from(signal: &Signal) -> Self {
        SignalItem {
            description: signal.explanation.clone(),
            vendors: signal.vendor_products.clone(),
        }
    }
}

impl From<&FunnelLevelSpec> for FunnelLevel {
    fn from(level: &FunnelLevelSpec) -> Self {
        FunnelLevel {
            label: level.label.clone(),
            vendors: level.vendors.clone(),
        }
    }
}

impl From<&IcpRecord> for IcpSlide {
    fn from(record: &IcpRecord) -> Self {
        let fit = &record.technographic_fit;
        IcpSlide {
            number: record.icp_number,
            title: record.title.clone(),
            industries: record.industries.clone(),
            departments: record.departments_and_functions.clone(),
            key_roles: record.key_roles.clone(),
            legacy_signals: fit.displacement_signals.iter().map(SignalItem::from).collect(),
            expansion_signals: fit.expansion_signals.iter().map(SignalItem::from).collect(),
        }
    }
}
