//! Layout patterns for formatting and parsing
//!
//! Supported tokens (longest match wins, so `MMMM` is never read as `MM`+`MM`):
//! - YYYY: year, at least 4 digits, YY: 2-digit year (70-99 -> 19xx, 00-69 -> 20xx)
//! - MMMM: month name, MMM: month abbreviation, MM: 2-digit month, M: month
//! - DD: 2-digit day, D: day
//! - dddd: weekday name, ddd: weekday abbreviation (ignored when parsing)
//! - HH/H: hour 24h, hh/h: hour 12h
//! - mm/m: minute, ss/s: second
//! - SSS, SSSSSS, SSSSSSSSS: milli-, micro- and nanoseconds
//! - A: AM/PM, a: am/pm
//! - Z: UTC offset (`+08:00`, `+01:01:01` when seconds remain; `Z` is accepted when parsing)
//!
//! Text inside `[...]` is copied literally. Any other character is a literal.

use crate::civil::{days_in_month, month_abbrev, month_name, Weekday};
use crate::{Carbon, CarbonError, Offset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    MonthName,
    MonthAbbrev,
    Month2,
    Month,
    Day2,
    Day,
    WeekdayName,
    WeekdayAbbrev,
    Hour2,
    Hour,
    Hour12Padded,
    Hour12,
    Minute2,
    Minute,
    Second2,
    Second,
    Nanos,
    Micros,
    Millis,
    MeridiemUpper,
    MeridiemLower,
    Offset,
}

/// Token spellings, longer spellings before their prefixes
const TOKENS: [(&str, Token); 24] = [
    ("YYYY", Token::Year4),
    ("YY", Token::Year2),
    ("MMMM", Token::MonthName),
    ("MMM", Token::MonthAbbrev),
    ("MM", Token::Month2),
    ("M", Token::Month),
    ("DD", Token::Day2),
    ("D", Token::Day),
    ("dddd", Token::WeekdayName),
    ("ddd", Token::WeekdayAbbrev),
    ("HH", Token::Hour2),
    ("H", Token::Hour),
    ("hh", Token::Hour12Padded),
    ("h", Token::Hour12),
    ("mm", Token::Minute2),
    ("m", Token::Minute),
    ("ss", Token::Second2),
    ("s", Token::Second),
    ("SSSSSSSSS", Token::Nanos),
    ("SSSSSS", Token::Micros),
    ("SSS", Token::Millis),
    ("A", Token::MeridiemUpper),
    ("a", Token::MeridiemLower),
    ("Z", Token::Offset),
];

impl Token {
    /// Tokens that render as bare digits
    fn is_numeric(self) -> bool {
        !matches!(
            self,
            Token::MonthName
                | Token::MonthAbbrev
                | Token::WeekdayName
                | Token::WeekdayAbbrev
                | Token::MeridiemUpper
                | Token::MeridiemLower
                | Token::Offset
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item<'a> {
    Literal(&'a str),
    Token(Token),
}

fn tokenize(pattern: &str) -> Vec<Item<'_>> {
    let mut items = Vec::new();
    let mut literal_start: Option<usize> = None;
    let mut pos = 0;

    while pos < pattern.len() {
        let rest = &pattern[pos..];

        if let Some(inner) = rest.strip_prefix('[') {
            if let Some(start) = literal_start.take() {
                items.push(Item::Literal(&pattern[start..pos]));
            }
            // An unclosed bracket quotes the rest of the pattern
            let end = inner.find(']').unwrap_or(inner.len());
            items.push(Item::Literal(&inner[..end]));
            pos += 1 + end + usize::from(end < inner.len());
            continue;
        }

        if let Some((text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            if let Some(start) = literal_start.take() {
                items.push(Item::Literal(&pattern[start..pos]));
            }
            items.push(Item::Token(*token));
            pos += text.len();
            continue;
        }

        literal_start.get_or_insert(pos);
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    if let Some(start) = literal_start {
        items.push(Item::Literal(&pattern[start..]));
    }
    items
}

// ============================================================================
// Formatting
// ============================================================================

/// Render a value with a layout pattern
pub fn format(value: &Carbon, pattern: &str) -> String {
    let c = value.components();
    let hour12 = match c.hour % 12 {
        0 => 12,
        h => h,
    };
    let mut out = String::with_capacity(pattern.len() + 8);

    for item in tokenize(pattern) {
        match item {
            Item::Literal(text) => out.push_str(text),
            Item::Token(token) => match token {
                Token::Year4 if c.year < 0 => out.push_str(&format!("-{:04}", c.year.unsigned_abs())),
                Token::Year4 => out.push_str(&format!("{:04}", c.year)),
                Token::Year2 => out.push_str(&format!("{:02}", c.year.rem_euclid(100))),
                Token::MonthName => out.push_str(month_name(c.month)),
                Token::MonthAbbrev => out.push_str(month_abbrev(c.month)),
                Token::Month2 => out.push_str(&format!("{:02}", c.month)),
                Token::Month => out.push_str(&c.month.to_string()),
                Token::Day2 => out.push_str(&format!("{:02}", c.day)),
                Token::Day => out.push_str(&c.day.to_string()),
                Token::WeekdayName => out.push_str(c.weekday.name()),
                Token::WeekdayAbbrev => out.push_str(c.weekday.abbrev()),
                Token::Hour2 => out.push_str(&format!("{:02}", c.hour)),
                Token::Hour => out.push_str(&c.hour.to_string()),
                Token::Hour12Padded => out.push_str(&format!("{:02}", hour12)),
                Token::Hour12 => out.push_str(&hour12.to_string()),
                Token::Minute2 => out.push_str(&format!("{:02}", c.minute)),
                Token::Minute => out.push_str(&c.minute.to_string()),
                Token::Second2 => out.push_str(&format!("{:02}", c.second)),
                Token::Second => out.push_str(&c.second.to_string()),
                Token::Nanos => out.push_str(&format!("{:09}", c.nanosecond)),
                Token::Micros => out.push_str(&format!("{:06}", c.microsecond)),
                Token::Millis => out.push_str(&format!("{:03}", c.millisecond)),
                Token::MeridiemUpper => out.push_str(if c.hour < 12 { "AM" } else { "PM" }),
                Token::MeridiemLower => out.push_str(if c.hour < 12 { "am" } else { "pm" }),
                Token::Offset => out.push_str(&value.offset().to_string()),
            },
        }
    }
    out
}

// ============================================================================
// Parsing
// ============================================================================

#[derive(Debug, Default)]
struct Fields {
    year: Option<i64>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    nanosecond: u32,
    offset: Option<Offset>,
}

fn error(message: String) -> CarbonError {
    CarbonError::LayoutParse(message)
}

/// Take between `min` and `max` ASCII digits from the front of `input`
fn take_digits<'a>(
    input: &'a str,
    min: usize,
    max: usize,
    what: &str,
) -> Result<(u64, &'a str), CarbonError> {
    let len = input.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if len < min {
        return Err(error(format!("expected {} at '{}'", what, input)));
    }
    let (digits, rest) = input.split_at(len);
    let n = digits
        .parse()
        .map_err(|_| error(format!("invalid {} '{}'", what, digits)))?;
    Ok((n, rest))
}

/// Match one of `names` (case-insensitive) at the front of `input`
fn take_name<'a, I>(input: &'a str, names: I, what: &str) -> Result<(usize, &'a str), CarbonError>
where
    I: IntoIterator<Item = &'static str>,
{
    names
        .into_iter()
        .enumerate()
        .find_map(|(index, name)| {
            let head = input.get(..name.len())?;
            head.eq_ignore_ascii_case(name)
                .then(|| (index, &input[name.len()..]))
        })
        .ok_or_else(|| error(format!("expected {} at '{}'", what, input)))
}

fn take_offset(input: &str) -> Result<(Offset, &str), CarbonError> {
    if let Some(rest) = input.strip_prefix(['Z', 'z']) {
        return Ok((Offset::UTC, rest));
    }
    if !input.starts_with(['+', '-']) {
        return Err(error(format!("expected UTC offset at '{}'", input)));
    }
    let len = 1 + input[1..]
        .bytes()
        .take(8)
        .take_while(|b| b.is_ascii_digit() || *b == b':')
        .count();
    let (text, rest) = input.split_at(len);
    let offset = text
        .parse()
        .map_err(|_| error(format!("invalid UTC offset '{}'", text)))?;
    Ok((offset, rest))
}

/// Digits a year may span when nothing numeric follows it
const MAX_YEAR_DIGITS: usize = 12;

/// Consume one token; `digits_follow` pins `YYYY` to exactly four digits
fn take_token<'a>(
    token: Token,
    input: &'a str,
    digits_follow: bool,
    fields: &mut Fields,
) -> Result<&'a str, CarbonError> {
    let rest = match token {
        Token::Year4 => {
            let (negative, digits) = match input.strip_prefix('-') {
                Some(digits) => (true, digits),
                None => (false, input),
            };
            let max = if digits_follow { 4 } else { MAX_YEAR_DIGITS };
            let (year, rest) = take_digits(digits, 4, max, "year")?;
            let year = year as i64;
            fields.year = Some(if negative { -year } else { year });
            rest
        }
        Token::Year2 => {
            let (yy, rest) = take_digits(input, 2, 2, "2-digit year")?;
            fields.year = Some(if yy >= 70 { 1900 + yy as i64 } else { 2000 + yy as i64 });
            rest
        }
        Token::MonthName => {
            let (index, rest) = take_name(input, (1..=12).map(month_name), "month name")?;
            fields.month = Some(index as u32 + 1);
            rest
        }
        Token::MonthAbbrev => {
            let (index, rest) = take_name(input, (1..=12).map(month_abbrev), "month abbreviation")?;
            fields.month = Some(index as u32 + 1);
            rest
        }
        Token::WeekdayName => take_name(input, Weekday::ALL.map(Weekday::name), "weekday")?.1,
        Token::WeekdayAbbrev => take_name(input, Weekday::ALL.map(Weekday::abbrev), "weekday")?.1,
        Token::MeridiemUpper | Token::MeridiemLower => {
            let (index, rest) = take_name(input, ["AM", "PM"], "AM/PM")?;
            fields.pm = Some(index == 1);
            rest
        }
        Token::Offset => {
            let (offset, rest) = take_offset(input)?;
            fields.offset = Some(offset);
            rest
        }
        numeric => {
            let (min, max, what) = match numeric {
                Token::Month2 => (2, 2, "month"),
                Token::Month => (1, 2, "month"),
                Token::Day2 => (2, 2, "day"),
                Token::Day => (1, 2, "day"),
                Token::Hour2 | Token::Hour12Padded => (2, 2, "hour"),
                Token::Hour | Token::Hour12 => (1, 2, "hour"),
                Token::Minute2 => (2, 2, "minute"),
                Token::Minute => (1, 2, "minute"),
                Token::Second2 => (2, 2, "second"),
                Token::Second => (1, 2, "second"),
                Token::Millis => (3, 3, "milliseconds"),
                Token::Micros => (6, 6, "microseconds"),
                _ => (9, 9, "nanoseconds"),
            };
            let (n, rest) = take_digits(input, min, max, what)?;
            let n = n as u32;
            match numeric {
                Token::Month2 | Token::Month => fields.month = Some(n),
                Token::Day2 | Token::Day => fields.day = Some(n),
                Token::Hour2 | Token::Hour => fields.hour = Some(n),
                Token::Hour12Padded | Token::Hour12 => fields.hour12 = Some(n),
                Token::Minute2 | Token::Minute => fields.minute = Some(n),
                Token::Second2 | Token::Second => fields.second = Some(n),
                Token::Millis => fields.nanosecond = n * 1_000_000,
                Token::Micros => fields.nanosecond = n * 1_000,
                _ => fields.nanosecond = n,
            }
            rest
        }
    };
    Ok(rest)
}

fn check_range(value: u32, low: u32, high: u32, what: &str) -> Result<u32, CarbonError> {
    if value < low || value > high {
        return Err(error(format!("{} {} out of range {}-{}", what, value, low, high)));
    }
    Ok(value)
}

/// Parse `value` against a layout pattern
///
/// The whole input must be consumed. Fields the layout does not mention
/// default to 1970-01-01 00:00:00, and `default_offset` applies unless the
/// layout carries a `Z` token.
pub fn parse(pattern: &str, value: &str, default_offset: Offset) -> Result<Carbon, CarbonError> {
    let mut fields = Fields::default();
    let mut input = value;

    let items = tokenize(pattern);
    for (index, item) in items.iter().enumerate() {
        input = match *item {
            Item::Literal(text) => input
                .strip_prefix(text)
                .ok_or_else(|| error(format!("expected '{}' at '{}'", text, input)))?,
            Item::Token(token) => {
                let digits_follow =
                    matches!(items.get(index + 1), Some(Item::Token(next)) if next.is_numeric());
                take_token(token, input, digits_follow, &mut fields)?
            }
        };
    }
    if !input.is_empty() {
        return Err(error(format!("unparsed trailing text '{}'", input)));
    }

    let year = fields.year.unwrap_or(1970);
    let month = check_range(fields.month.unwrap_or(1), 1, 12, "month")?;
    let day = check_range(fields.day.unwrap_or(1), 1, days_in_month(year, month), "day")?;
    let hour = match (fields.hour, fields.hour12) {
        (Some(hour), _) => check_range(hour, 0, 23, "hour")?,
        (None, Some(hour12)) => {
            let hour12 = check_range(hour12, 1, 12, "hour")?;
            (hour12 % 12) + if fields.pm == Some(true) { 12 } else { 0 }
        }
        (None, None) => 0,
    };
    let minute = check_range(fields.minute.unwrap_or(0), 0, 59, "minute")?;
    let second = check_range(fields.second.unwrap_or(0), 0, 59, "second")?;
    let offset = fields.offset.unwrap_or(default_offset);

    Carbon::create_with_nanos(
        year,
        month as i64,
        day as i64,
        hour as i64,
        minute as i64,
        second as i64,
        fields.nanosecond as i64,
        offset,
    )
}

impl Carbon {
    /// Render with a layout pattern such as `"YYYY-MM-DD HH:mm:ss"`
    pub fn format(&self, layout: &str) -> String {
        format(self, layout)
    }

    /// Parse a value with a layout pattern, in UTC unless the layout has an offset
    pub fn parse(layout: &str, value: &str) -> Result<Self, CarbonError> {
        Self::parse_in(layout, value, Offset::UTC)
    }

    /// Parse a value with a layout pattern, in `offset` unless the layout has one
    pub fn parse_in(layout: &str, value: &str, offset: Offset) -> Result<Self, CarbonError> {
        parse(layout, value, offset).inspect_err(|err| {
            tracing::debug!(layout, value, error = %err, "layout parse failed");
        })
    }

    /// Same as [`Carbon::parse_in`]
    pub fn create_from_format(layout: &str, value: &str, offset: Offset) -> Result<Self, CarbonError> {
        Self::parse_in(layout, value, offset)
    }
}
