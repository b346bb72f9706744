//! URL query coercion
//!
//! Every parameter arrives as optional text. Coercion never fails: anything
//! missing or malformed falls back to its default.

/// Raw query parameters, exactly as received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub q: Option<String>,
    pub page: Option<String>,
    pub category: Option<String>,
    pub user: Option<String>,
}

/// Typed, defaulted page parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// Search text, empty when not searching
    pub q: String,
    /// 1-indexed page number, always at least 1
    pub page: u32,
    /// Tag filter, empty when not filtering
    pub category: String,
    pub user: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: 1,
            category: String::new(),
            user: None,
        }
    }
}

/// Parse numeric text, accepting `0x`, `0o` and `0b` integer prefixes
fn parse_number(text: &str) -> Option<f64> {
    let radix = match text.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return text.parse().ok(),
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Coerce a raw `page` value into a page number
///
/// Numeric text (including fractions, exponents and radix prefixes) truncates
/// toward zero. Missing, empty, non-numeric, non-finite or sub-1 values give 1;
/// values past `u32::MAX` saturate.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(value) = raw.map(str::trim).and_then(parse_number) else {
        return 1;
    };

    if !value.is_finite() || value < 1.0 {
        return 1;
    }

    value.trunc() as u32
}

/// Decode one `application/x-www-form-urlencoded` component
///
/// Invalid UTF-8 becomes U+FFFD; the rest of the component still decodes.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

impl PageQuery {
    /// Parse a raw query string such as `q=svelte&page=2`
    ///
    /// A leading `?` is ignored. When a key repeats, its first value wins.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match decode_component(key).as_str() {
                "q" => &mut parsed.q,
                "page" => &mut parsed.page,
                "category" => &mut parsed.category,
                "user" => &mut parsed.user,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(decode_component(value));
            }
        }

        parsed
    }
}

impl PageParams {
    /// Apply defaults to a raw query
    pub fn from_query(query: &PageQuery) -> Self {
        Self {
            q: query.q.clone().unwrap_or_default(),
            page: parse_page(query.page.as_deref()),
            category: query.category.clone().unwrap_or_default(),
            user: query.user.clone().filter(|user| !user.is_empty()),
        }
    }

    /// Parse and coerce a raw query string in one step
    pub fn from_query_string(query: &str) -> Self {
        Self::from_query(&PageQuery::parse(query))
    }

    pub fn is_search(&self) -> bool {
        !self.q.is_empty()
    }
}
