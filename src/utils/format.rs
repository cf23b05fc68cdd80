// ============================================================================
// FORMAT - Conversión NEAR decimal <-> yoctoNEAR
// ============================================================================

use crate::error::WalletError;
use crate::utils::constants::NEAR_NOMINATION_EXP;

/// "1.5" NEAR -> "1500000000000000000000000" yoctoNEAR.
///
/// Acepta comas de miles y espacios alrededor; rechaza más de 24 decimales.
pub fn parse_near_amount(amount: &str) -> Result<String, WalletError> {
    let invalid = || WalletError::InvalidAmount(amount.to_string());

    let cleaned: String = amount.trim().chars().filter(|c| *c != ',').collect();
    let mut parts = cleaned.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    if parts.next().is_some() || (whole.is_empty() && fraction.is_empty()) {
        return Err(invalid());
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.len() > NEAR_NOMINATION_EXP {
        return Err(WalletError::InvalidAmount(format!(
            "{} has more than {} fractional digits",
            amount, NEAR_NOMINATION_EXP
        )));
    }

    let mut digits = String::with_capacity(whole.len() + NEAR_NOMINATION_EXP);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take(NEAR_NOMINATION_EXP - fraction.len()));

    let trimmed = digits.trim_start_matches('0');
    Ok(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
}

/// yoctoNEAR -> NEAR legible, redondeado a `frac_digits` decimales
/// ("1234500000000000000000000000", 2) -> "1,234.5"
pub fn format_near_amount(balance: &str, frac_digits: usize) -> Result<String, WalletError> {
    let mut value: u128 = balance
        .trim()
        .parse()
        .map_err(|_| WalletError::InvalidAmount(balance.to_string()))?;

    let frac_digits = frac_digits.min(NEAR_NOMINATION_EXP);
    if frac_digits < NEAR_NOMINATION_EXP {
        let rounding_exp = NEAR_NOMINATION_EXP - frac_digits - 1;
        if rounding_exp > 0 {
            value = value.saturating_add(5 * 10u128.pow(rounding_exp as u32));
        }
    }

    let digits = value.to_string();
    let (whole, fraction) = if digits.len() > NEAR_NOMINATION_EXP {
        let split = digits.len() - NEAR_NOMINATION_EXP;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = NEAR_NOMINATION_EXP))
    };

    let fraction = fraction[..frac_digits].trim_end_matches('0');
    let whole = group_thousands(&whole);
    Ok(if fraction.is_empty() { whole } else { format!("{}.{}", whole, fraction) })
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
