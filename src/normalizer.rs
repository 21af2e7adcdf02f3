/// Input normalization for the identifiers typed into the dashboard forms.
///
/// Two independent pairs of operations:
/// 1. CPF: checksum validation and the `XXX.XXX.XXX-XX` display mask
/// 2. Phone: DDD + subscriber validation and the `(DD) XXXXX-XXXX` display mask
///
/// Validation and formatting never depend on each other. The formatters are
/// meant to run on every keystroke, so they accept partial input and never fail.
use phonenumber::country::Id as CountryId;
use phonenumber::Mode;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;
/// Digits in a landline number (DDD + 8).
pub const LANDLINE_LEN: usize = 10;
/// Digits in a mobile number (DDD + 9).
pub const MOBILE_LEN: usize = 11;
/// Digits in a DDD area code.
pub const DDD_LEN: usize = 2;

/// Keep only the ASCII digits of `raw`, in order.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn leading_digits(raw: &str, max: usize) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Modulo-11 check digit over `prefix`, weights descending to 2.
fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (top_weight - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        remainder => remainder,
    }
}

/// Validate a CPF, ignoring any punctuation around the digits.
///
/// Rejects anything that is not exactly 11 digits, the repeated-digit
/// sequences (`000.000.000-00`, `111.111.111-11`, ...) and numbers whose
/// two check digits do not match.
pub fn validate_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != CPF_LEN {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Apply the CPF mask to however many digits are present (at most 11).
///
/// `"5299822"` becomes `"529.982.2"`, `"52998224725"` becomes `"529.982.247-25"`.
pub fn format_cpf(raw: &str) -> String {
    let d = leading_digits(raw, CPF_LEN);

    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Validate a Brazilian phone number (DDD + subscriber), punctuation ignored.
///
/// - 10 digits: landline, accepted as long as the DDD is well formed
/// - 11 digits: mobile, the subscriber part must start with `9`
/// - the DDD never starts with `0`
pub fn validate_phone(raw: &str) -> bool {
    let d = digits_only(raw);

    if d.len() != LANDLINE_LEN && d.len() != MOBILE_LEN {
        return false;
    }

    let (ddd, subscriber) = d.split_at(DDD_LEN);

    if ddd.starts_with('0') {
        return false;
    }

    // 10-digit numbers skip the leading-9 rule: they are landlines.
    if d.len() == MOBILE_LEN && !subscriber.starts_with('9') {
        return false;
    }

    true
}

/// Apply the phone mask to however many digits are present (at most 11).
///
/// Up to 10 digits the landline split `(DD) XXXX-XXXX` is used; the 11th
/// digit moves the dash to `(DD) XXXXX-XXXX`.
pub fn format_phone(raw: &str) -> String {
    let d = leading_digits(raw, MOBILE_LEN);

    match d.len() {
        0..=2 => d,
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// Normalize a phone number to E.164 (`+5511987654321`) using libphonenumber's
/// Brazilian metadata.
///
/// This is stricter than [`validate_phone`] (it knows which DDDs and number
/// ranges are allocated) and is only used as extra information.
pub fn to_e164(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    match phonenumber::parse(Some(CountryId::BR), raw) {
        Ok(number) if phonenumber::is_valid(&number) => {
            let formatted = number.format().mode(Mode::E164).to_string();
            tracing::debug!("Valid BR phone: {} -> {}", raw, formatted);
            Some(formatted)
        }
        Ok(_) => {
            tracing::debug!("Phone not allocated in BR numbering plan: {}", raw);
            None
        }
        Err(e) => {
            tracing::debug!("Failed to parse BR phone '{}': {:?}", raw, e);
            None
        }
    }
}
