//! Static lexicon tables for Hindi temporal vocabulary.
//!
//! Pure lookups over normalized token surface forms (or lemmas): an
//! absent entry is `None`, never an error. Tables cover month names
//! (full and short forms), weekday names, cardinal numerals 1-31 in
//! three scripts/forms, ordinal day words, recurrence trigger words,
//! time-unit words, and range separators.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Day of the week, anchored the ISO-8601 way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// ISO-8601 index, Monday = 1 through Sunday = 7.
    pub fn iso_index(self) -> u8 {
        match self {
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
            Weekday::Sunday => 7,
        }
    }
}

/// Day-of-month anchor for a monthly recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthDay {
    /// A fixed day, 1-31.
    Day(u8),
    /// The last day of the month, whatever its length.
    Last,
}

/// Unit words that parameterize a recurrence trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
}

/// Hindi number words 1-31, the cardinal range a day-of-month can take.
static NUMBER_WORDS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    [
        ("एक", 1),
        ("दो", 2),
        ("तीन", 3),
        ("चार", 4),
        ("पाँच", 5),
        ("पांच", 5),
        ("छह", 6),
        ("छः", 6),
        ("सात", 7),
        ("आठ", 8),
        ("नौ", 9),
        ("दस", 10),
        ("ग्यारह", 11),
        ("बारह", 12),
        ("तेरह", 13),
        ("चौदह", 14),
        ("पंद्रह", 15),
        ("सोलह", 16),
        ("सत्रह", 17),
        ("अठारह", 18),
        ("उन्नीस", 19),
        ("बीस", 20),
        ("इक्कीस", 21),
        ("बाईस", 22),
        ("तेईस", 23),
        ("चौबीस", 24),
        ("पच्चीस", 25),
        ("छब्बीस", 26),
        ("सत्ताईस", 27),
        ("अट्ठाईस", 28),
        ("उनतीस", 29),
        ("तीस", 30),
        ("इकतीस", 31),
    ]
    .into_iter()
    .collect()
});

/// Month-name lookup, full and short forms. Returns 1-12.
pub fn month_number(text: &str) -> Option<u8> {
    match text {
        "जनवरी" | "जन" => Some(1),
        "फरवरी" | "फर" => Some(2),
        "मार्च" => Some(3),
        "अप्रैल" | "अप्रै" => Some(4),
        "मई" => Some(5),
        "जून" => Some(6),
        "जुलाई" | "जुला" => Some(7),
        "अगस्त" | "अग" => Some(8),
        "सितंबर" | "सित" => Some(9),
        "अक्टूबर" | "अक्टू" => Some(10),
        "नवंबर" | "नवं" => Some(11),
        "दिसंबर" | "दिस" => Some(12),
        _ => None,
    }
}

/// Weekday-name lookup, including the common variant spellings.
pub fn weekday(text: &str) -> Option<Weekday> {
    match text {
        "सोमवार" => Some(Weekday::Monday),
        "मंगलवार" => Some(Weekday::Tuesday),
        "बुधवार" => Some(Weekday::Wednesday),
        "गुरुवार" | "बृहस्पतिवार" => Some(Weekday::Thursday),
        "शुक्रवार" => Some(Weekday::Friday),
        "शनिवार" => Some(Weekday::Saturday),
        "रविवार" | "इतवार" => Some(Weekday::Sunday),
        _ => None,
    }
}

/// Numeric value of a token: an ASCII digit string, a Devanagari digit
/// string, or a Hindi number word.
pub fn numeral_value(text: &str) -> Option<u32> {
    if let Some(value) = NUMBER_WORDS.get(text) {
        return Some(u32::from(*value));
    }
    digits_value(text)
}

/// Parse a digit string, accepting ASCII and Devanagari digits.
pub(crate) fn digits_value(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for ch in text.chars() {
        let digit = digit_value(ch)?;
        value = value.checked_mul(10)?.checked_add(digit)?;
    }
    Some(value)
}

fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        // Devanagari digits are a contiguous block, ० (U+0966) to ९
        '०'..='९' => Some(ch as u32 - '०' as u32),
        _ => None,
    }
}

/// True when the token is a 4-digit number in either script: a year.
pub fn is_year_token(text: &str) -> bool {
    text.chars().count() == 4 && digits_value(text).is_some()
}

/// Ordinal day words as used in "हर महीने की पहली तारीख".
pub fn ordinal_day(text: &str) -> Option<MonthDay> {
    match text {
        "पहली" | "पहला" | "पहले" => Some(MonthDay::Day(1)),
        "दूसरी" | "दूसरा" | "दूसरे" => Some(MonthDay::Day(2)),
        "तीसरी" | "तीसरा" | "तीसरे" => Some(MonthDay::Day(3)),
        "चौथी" | "चौथा" | "चौथे" => Some(MonthDay::Day(4)),
        "आखिरी" | "अंतिम" => Some(MonthDay::Last),
        _ => None,
    }
}

/// Words that signal a repeating schedule ("every ...").
pub fn is_recurrence_trigger(text: &str) -> bool {
    matches!(text, "हर" | "प्रत्येक" | "प्रति")
}

/// Time-unit words a recurrence trigger can absorb.
pub fn time_unit(text: &str) -> Option<TimeUnit> {
    match text {
        "दिन" | "रोज़" | "रोज" | "तारीख" => Some(TimeUnit::Day),
        "हफ़्ते" | "हफ्ते" | "हफ़्ता" | "हफ्ता" | "सप्ताह" => Some(TimeUnit::Week),
        "महीने" | "महीना" | "माह" => Some(TimeUnit::Month),
        "साल" | "वर्ष" => Some(TimeUnit::Year),
        _ => None,
    }
}

/// Range separator tokens between the two halves of a date range.
pub fn is_range_separator(text: &str) -> bool {
    matches!(text, "से" | "तक" | "-" | "–")
}

/// Genitive linkers glueing a recurrence phrase together ("महीने की पहली").
pub(crate) fn is_genitive_linker(text: &str) -> bool {
    matches!(text, "की" | "के" | "का")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup_covers_full_and_short_forms() {
        assert_eq!(month_number("जनवरी"), Some(1));
        assert_eq!(month_number("जन"), Some(1));
        assert_eq!(month_number("दिसंबर"), Some(12));
        assert_eq!(month_number("दिस"), Some(12));
        assert_eq!(month_number("मेला"), None);
    }

    #[test]
    fn weekday_lookup_handles_variants() {
        assert_eq!(weekday("सोमवार"), Some(Weekday::Monday));
        assert_eq!(weekday("गुरुवार"), Some(Weekday::Thursday));
        assert_eq!(weekday("बृहस्पतिवार"), Some(Weekday::Thursday));
        assert_eq!(weekday("इतवार"), Some(Weekday::Sunday));
        assert_eq!(weekday("सोम"), None);
    }

    #[test]
    fn weekday_iso_indices() {
        assert_eq!(Weekday::Monday.iso_index(), 1);
        assert_eq!(Weekday::Sunday.iso_index(), 7);
    }

    #[test]
    fn numerals_across_scripts_and_words() {
        assert_eq!(numeral_value("15"), Some(15));
        assert_eq!(numeral_value("१५"), Some(15));
        assert_eq!(numeral_value("पंद्रह"), Some(15));
        assert_eq!(numeral_value("इकतीस"), Some(31));
        assert_eq!(numeral_value("से"), None);
        assert_eq!(numeral_value(""), None);
    }

    #[test]
    fn year_tokens_are_four_digits_in_either_script() {
        assert!(is_year_token("2024"));
        assert!(is_year_token("२०२४"));
        assert!(!is_year_token("15"));
        assert!(!is_year_token("20245"));
        assert!(!is_year_token("साल"));
    }

    #[test]
    fn ordinal_days_and_last() {
        assert_eq!(ordinal_day("पहली"), Some(MonthDay::Day(1)));
        assert_eq!(ordinal_day("पहला"), Some(MonthDay::Day(1)));
        assert_eq!(ordinal_day("आखिरी"), Some(MonthDay::Last));
        assert_eq!(ordinal_day("तारीख"), None);
    }

    #[test]
    fn recurrence_vocabulary() {
        assert!(is_recurrence_trigger("हर"));
        assert!(is_recurrence_trigger("प्रत्येक"));
        assert!(!is_recurrence_trigger("सोमवार"));

        assert_eq!(time_unit("महीने"), Some(TimeUnit::Month));
        assert_eq!(time_unit("महीना"), Some(TimeUnit::Month));
        assert_eq!(time_unit("तारीख"), Some(TimeUnit::Day));
        assert_eq!(time_unit("साल"), Some(TimeUnit::Year));
        assert_eq!(time_unit("योग"), None);
    }

    #[test]
    fn range_separators() {
        assert!(is_range_separator("से"));
        assert!(is_range_separator("तक"));
        assert!(is_range_separator("-"));
        assert!(!is_range_separator("और"));
    }
}
