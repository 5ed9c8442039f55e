//! Price Formatting
//!
//! Locale-aware currency rendering for menu prices.

/// Currency layout for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol ("R$", "$")
    pub symbol: &'static str,
    /// Text between the symbol and the amount
    pub symbol_separator: &'static str,
    /// Thousands separator
    pub group_separator: char,
    /// Separator before the cents
    pub decimal_separator: char,
}

impl CurrencyFormat {
    /// Brazilian Real, `pt-BR`
    pub const PT_BR: CurrencyFormat = CurrencyFormat {
        symbol: "R$",
        symbol_separator: "\u{a0}",
        group_separator: '.',
        decimal_separator: ',',
    };

    /// US Dollar, `en-US`
    pub const EN_US: CurrencyFormat = CurrencyFormat {
        symbol: "$",
        symbol_separator: "",
        group_separator: ',',
        decimal_separator: '.',
    };

    /// Look up a format by BCP 47 tag (case-insensitive, `_` accepted)
    pub fn from_locale(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" => Some(Self::PT_BR),
            "en-us" => Some(Self::EN_US),
            _ => None,
        }
    }

    /// Format a price as exchanged with the service (text form)
    pub fn format_text(&self, price: &str) -> String {
        self.format(parse_number(price))
    }

    /// Format a number with exactly two fraction digits
    pub fn format(&self, value: f64) -> String {
        let amount = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            "∞".to_string()
        } else {
            let (whole, cents) = round_to_cents(value.abs());
            format!("{}{}{}", group_digits(&whole, self.group_separator), self.decimal_separator, cents)
        };
        // Negative zero keeps its sign, like the browser's Intl output
        let sign = if !value.is_nan() && value.is_sign_negative() { "-" } else { "" };
        format!("{}{}{}{}", sign, self.symbol, self.symbol_separator, amount)
    }
}

/// Parse price text the way the browser's `Number(text)` does:
/// surrounding whitespace is ignored, empty text is zero, anything
/// unparsable is NaN. Unsigned `0x`/`0o`/`0b` literals are read in their radix.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let negative = trimmed.starts_with('-');
    if trimmed.len() - unsigned.len() > 1 {
        return f64::NAN;
    }
    if unsigned == "Infinity" {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    // Rust also accepts "inf" / "nan" spellings, Number() does not
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// `0x1F`, `0o17`, `0b101`; a prefix with no valid digits is NaN
fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Round a non-negative finite value to cents, half away from zero,
/// working on its shortest round-trip decimal form.
fn round_to_cents(value: f64) -> (String, String) {
    let text = format!("{}", value);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let to_text = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (to_text(&digits[..split]), to_text(&digits[split..]))
}

fn group_digits(whole: &str, separator: char) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
