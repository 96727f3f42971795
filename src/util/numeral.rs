/// Code point of the Devanagari digit zero (`०`).
pub const DEVANAGARI_ZERO: char = '\u{0966}';
/// Code point of the Devanagari digit nine (`९`).
pub const DEVANAGARI_NINE: char = '\u{096F}';

/// Returns the value of `c` if it is a Devanagari digit.
///
/// ## Example
/// ```
/// use lipi::util::numeral::devanagari_digit;
///
/// assert_eq!(devanagari_digit('७'), Some(7));
/// assert_eq!(devanagari_digit('7'), None);
/// ```
#[must_use]
pub fn devanagari_digit(c: char) -> Option<u32> {
    (DEVANAGARI_ZERO..=DEVANAGARI_NINE).contains(&c)
                                       .then(|| u32::from(c) - u32::from(DEVANAGARI_ZERO))
}

/// Checks whether `text` is a numeral written only with Devanagari digits.
///
/// Empty text is not a numeral, and neither is text containing an ASCII digit
/// or any other character.
///
/// ## Example
/// ```
/// use lipi::util::numeral::is_devanagari_numeral;
///
/// assert!(is_devanagari_numeral("१०२४"));
/// assert!(!is_devanagari_numeral(""));
/// assert!(!is_devanagari_numeral("१2"));
/// assert!(!is_devanagari_numeral("१.५"));
/// ```
#[must_use]
pub fn is_devanagari_numeral(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| devanagari_digit(c).is_some())
}

/// Reads a Devanagari numeral as a base-10 number, most significant digit
/// first.
///
/// The caller must make sure `text` passes [`is_devanagari_numeral`]; any
/// other character is skipped.
///
/// ## Example
/// ```
/// use lipi::util::numeral::devanagari_to_number;
///
/// assert_eq!(devanagari_to_number("४२"), 42.0);
/// assert_eq!(devanagari_to_number("००७"), 7.0);
/// ```
#[must_use]
pub fn devanagari_to_number(text: &str) -> f64 {
    text.chars()
        .filter_map(devanagari_digit)
        .fold(0.0, |acc, digit| acc.mul_add(10.0, f64::from(digit)))
}

/// Formats a number as plain ASCII decimal text.
///
/// Integral values print without a fractional part and negative zero prints
/// as `0`.
///
/// ## Example
/// ```
/// use lipi::util::numeral::native_number_text;
///
/// assert_eq!(native_number_text(8.0), "8");
/// assert_eq!(native_number_text(-2.5), "-2.5");
/// assert_eq!(native_number_text(-0.0), "0");
/// ```
#[must_use]
pub fn native_number_text(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

/// Renders a number with Devanagari digits.
///
/// The number is first formatted as native decimal text, then each ASCII digit
/// is swapped for its Devanagari counterpart. Signs and the decimal point are
/// left alone.
///
/// ## Example
/// ```
/// use lipi::util::numeral::number_to_devanagari;
///
/// assert_eq!(number_to_devanagari(14.0), "१४");
/// assert_eq!(number_to_devanagari(-3.5), "-३.५");
/// ```
#[must_use]
pub fn number_to_devanagari(n: f64) -> String {
    native_number_text(n).chars()
                         .map(|c| match c.to_digit(10) {
                             Some(d) => {
                                 char::from_u32(u32::from(DEVANAGARI_ZERO) + d).unwrap_or(c)
                             },
                             None => c,
                         })
                         .collect()
}

/// Converts numeral text in either digit alphabet to a number.
///
/// Devanagari digits are accumulated as they are scanned. An ASCII digit marks
/// the text as mixed, and the scan goes on. Any other character rejects the
/// text straight away. Pure, non-empty Devanagari text yields the accumulated
/// numeral. Otherwise the number is read from the leading run of ASCII digits,
/// and whatever follows that run is ignored.
///
/// Returns `None` when the text is not a number.
///
/// ## Example
/// ```
/// use lipi::util::numeral::text_to_number;
///
/// assert_eq!(text_to_number("१५"), Some(15.0));
/// assert_eq!(text_to_number("15"), Some(15.0));
/// assert_eq!(text_to_number("2१"), Some(2.0));
/// assert_eq!(text_to_number("१5"), None);
/// assert_eq!(text_to_number("नमस्ते"), None);
/// assert_eq!(text_to_number(""), None);
/// ```
#[must_use]
pub fn text_to_number(text: &str) -> Option<f64> {
    let mut pure_devanagari = true;
    let mut accumulated = 0.0_f64;

    for c in text.chars() {
        if let Some(digit) = devanagari_digit(c) {
            accumulated = accumulated.mul_add(10.0, f64::from(digit));
        } else if c.is_ascii_digit() {
            pure_devanagari = false;
        } else {
            return None;
        }
    }

    if pure_devanagari && !text.is_empty() {
        return Some(accumulated);
    }

    let digits = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text[..digits].parse::<f64>().ok()
}
