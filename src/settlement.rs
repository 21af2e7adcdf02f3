/// Early-settlement (quitação) quote for a payroll-deduction loan.
///
/// Applies simple monthly interest over the remaining installments:
///
/// ```text
/// valor_quitacao = valor_total * (1 + juros_mensal / 100 * parcelas_restantes)
/// economia       = valor_total - valor_quitacao
/// ```
///
/// Field names on the wire follow the dashboard backend (`valor_total`, ...);
/// the camelCase names sent by the calculator form are accepted as aliases.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SettlementRequest {
    /// Outstanding contract value.
    #[serde(rename = "valor_total", alias = "valorContrato")]
    pub contract_value: f64,
    /// Installments still to be paid.
    #[serde(rename = "parcelas_restantes", alias = "parcelasRestantes")]
    pub remaining_installments: u32,
    /// Monthly interest rate, in percent.
    #[serde(rename = "juros_mensal", alias = "jurosMensal")]
    pub monthly_interest_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettlementQuote {
    #[serde(rename = "valor_quitacao")]
    pub settlement_value: f64,
    #[serde(rename = "economia")]
    pub savings: f64,
}

fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    // Near f64::MAX the scaling overflows; such values carry no cents anyway.
    if cents.is_finite() {
        cents.round() / 100.0
    } else {
        value
    }
}

pub fn calculate_settlement(request: &SettlementRequest) -> Result<SettlementQuote, AppError> {
    if !request.contract_value.is_finite() || request.contract_value < 0.0 {
        return Err(AppError::BadRequest(
            "valor_total must be a non-negative number".to_string(),
        ));
    }

    if !request.monthly_interest_pct.is_finite() || request.monthly_interest_pct < 0.0 {
        return Err(AppError::BadRequest(
            "juros_mensal must be a non-negative number".to_string(),
        ));
    }

    let rate = request.monthly_interest_pct / 100.0;
    let settlement_value =
        request.contract_value * (1.0 + rate * f64::from(request.remaining_installments));
    let savings = request.contract_value - settlement_value;

    if !settlement_value.is_finite() || !savings.is_finite() {
        return Err(AppError::BadRequest(
            "Settlement value is out of range for the given inputs".to_string(),
        ));
    }

    tracing::debug!(
        "Settlement quote: value={} installments={} rate={}% -> {}",
        request.contract_value,
        request.remaining_installments,
        request.monthly_interest_pct,
        settlement_value
    );

    Ok(SettlementQuote {
        settlement_value: round_cents(settlement_value),
        savings: round_cents(savings),
    })
}
