// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Flag-gated configuration sections.
//!
//! Each section is a tagged pair of variants: the variant alone tells a
//! consumer whether the payload is meaningful, so the flag is never
//! re-checked downstream.

use tracing::warn;

use crate::env::{keys, RawEnv};
use crate::error::{ConfigError, Result};
use crate::schema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportForm {
    Disabled,
    Enabled {
        url: String,
        entries: ReportFormEntries,
    },
}

/// The three tracking entry identifiers of the report form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormEntries {
    pub error: String,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutdatedNetworkModal {
    Disabled,
    Enabled {
        title: Option<String>,
        message_paragraph_1: Option<String>,
        message_paragraph_2: Option<String>,
        url: Option<String>,
    },
}

/// Deliberately disabled stub: the upstream product short-circuits this
/// feature regardless of its flag, so no enabled variant exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiatExchangeRates {
    Disabled,
}

fn companion(
    feature: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::MissingCompanion { feature, field }),
    }
}

/// Build the report-form section. When the flag is off every companion
/// is ignored; when it is on each companion is required, checked in
/// declared order so the first missing one is the one reported.
pub(crate) fn report_form(raw: &RawEnv) -> Result<ReportForm> {
    const FEATURE: &str = "report-form";

    if !schema::required_bool(keys::ENABLE_REPORT_FORM, raw.enable_report_form.as_deref())? {
        return Ok(ReportForm::Disabled);
    }

    let url = companion(FEATURE, keys::REPORT_FORM_URL, raw.report_form_url.as_deref())?;
    let error = companion(
        FEATURE,
        keys::REPORT_FORM_ERROR_ENTRY,
        raw.report_form_error_entry.as_deref(),
    )?;
    let platform = companion(
        FEATURE,
        keys::REPORT_FORM_PLATFORM_ENTRY,
        raw.report_form_platform_entry.as_deref(),
    )?;
    let url_entry = companion(
        FEATURE,
        keys::REPORT_FORM_URL_ENTRY,
        raw.report_form_url_entry.as_deref(),
    )?;

    Ok(ReportForm::Enabled {
        url,
        entries: ReportFormEntries {
            error,
            platform,
            url: url_entry,
        },
    })
}

/// Build the outdated-network-modal section. Unlike the report form,
/// its companions are soft: an enabled modal with unset fields loads
/// fine but each gap is logged so product can decide whether that is
/// intended.
pub(crate) fn outdated_network_modal(raw: &RawEnv) -> Result<OutdatedNetworkModal> {
    let enabled = schema::opt_bool_literal(
        keys::ENABLE_OUTDATED_NETWORK_MODAL,
        raw.enable_outdated_network_modal.as_deref(),
    )?;

    if !enabled {
        return Ok(OutdatedNetworkModal::Disabled);
    }

    let soft = |field: &'static str, value: &Option<String>| -> Option<String> {
        let value = value.clone().filter(|v| !v.is_empty());
        if value.is_none() {
            warn!(field, "outdated-network-modal is enabled but a companion field is unset");
        }
        value
    };

    Ok(OutdatedNetworkModal::Enabled {
        title: soft(
            keys::OUTDATED_NETWORK_MODAL_TITLE,
            &raw.outdated_network_modal_title,
        ),
        message_paragraph_1: soft(
            keys::OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_1,
            &raw.outdated_network_modal_message_paragraph_1,
        ),
        message_paragraph_2: soft(
            keys::OUTDATED_NETWORK_MODAL_MESSAGE_PARAGRAPH_2,
            &raw.outdated_network_modal_message_paragraph_2,
        ),
        url: soft(
            keys::OUTDATED_NETWORK_MODAL_URL,
            &raw.outdated_network_modal_url,
        ),
    })
}

/// The fiat section never enables, but its flag must still be present
/// and its optional fields must still be shape-valid when set.
pub(crate) fn fiat_exchange_rates(raw: &RawEnv) -> Result<FiatExchangeRates> {
    schema::require(
        keys::ENABLE_FIAT_EXCHANGE_RATES,
        raw.enable_fiat_exchange_rates.as_deref(),
    )?;
    schema::opt_url(
        keys::FIAT_EXCHANGE_RATES_API_URL,
        raw.fiat_exchange_rates_api_url.as_deref(),
    )?;
    schema::opt_address(
        keys::FIAT_EXCHANGE_RATES_ETHEREUM_USDC_ADDRESS,
        raw.fiat_exchange_rates_ethereum_usdc_address.as_deref(),
    )?;

    Ok(FiatExchangeRates::Disabled)
}
