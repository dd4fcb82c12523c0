//! Human-readable labels from field identifiers
//!
//! `split_camel_case("productID")` -> `"Product ID"`

use once_cell::sync::Lazy;
use regex::Regex;

/// Abbreviations kept as single words, in match priority order.
///
/// A whole word spelling one of these in any case is emitted canonically, so
/// `userId` becomes `User ID` and `Xml` becomes `XML`.
pub const ACRONYMS: &[&str] = &["ID", "UoM", "URL", "API", "HTML", "XML"];

static ACRONYM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = ACRONYMS
        .iter()
        .map(|acronym| regex::escape(acronym))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("({})", alternation)).expect("acronym alternation is a valid regex")
});

// "orderDate" -> "order Date"
static LOWER_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z])([A-Z])").expect("valid regex"));

// "HTTPServer" -> "HTTP Server"
static CAPITAL_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("([A-Z])([A-Z][a-z])").expect("valid regex"));

/// Turns a camelCase / PascalCase identifier into a title-cased label.
///
/// Known acronyms (see [`ACRONYMS`]) stay intact wherever they occur, and a
/// word that spells an acronym in another case (`html`, `Id`) is emitted in
/// its canonical form.
pub fn split_camel_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut words: Vec<String> = Vec::new();
    for fragment in split_keeping_acronyms(input) {
        if let Some(acronym) = exact_acronym(fragment) {
            words.push(acronym.to_string());
            continue;
        }

        let spaced = LOWER_UPPER.replace_all(fragment, "${1} ${2}");
        let spaced = CAPITAL_RUN.replace_all(&spaced, "${1} ${2}");
        words.extend(
            spaced
                .split(' ')
                .filter(|word| !word.is_empty())
                .map(|word| match canonical_acronym(word) {
                    Some(acronym) => acronym.to_string(),
                    None => title_case(word),
                }),
        );
    }

    words.join(" ").trim().to_string()
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first_letter(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capturing split: acronym matches and the text between them, in order,
/// without empty pieces.
fn split_keeping_acronyms(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for found in ACRONYM_PATTERN.find_iter(input) {
        parts.push(&input[last..found.start()]);
        parts.push(found.as_str());
        last = found.end();
    }
    parts.push(&input[last..]);
    parts.retain(|part| !part.is_empty());
    parts
}

fn exact_acronym(fragment: &str) -> Option<&'static str> {
    ACRONYMS.iter().copied().find(|acronym| *acronym == fragment)
}

fn canonical_acronym(word: &str) -> Option<&'static str> {
    ACRONYMS
        .iter()
        .copied()
        .find(|acronym| acronym.eq_ignore_ascii_case(word))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(split_camel_case(""), "");
    }

    #[test]
    fn test_plain_camel_case() {
        assert_eq!(split_camel_case("orderDateTime"), "Order Date Time");
        assert_eq!(split_camel_case("totalAmount"), "Total Amount");
        assert_eq!(split_camel_case("name"), "Name");
        assert_eq!(split_camel_case("SupplierName"), "Supplier Name");
    }

    #[test]
    fn test_embedded_acronyms() {
        assert_eq!(split_camel_case("productID"), "Product ID");
        assert_eq!(split_camel_case("supplierURL"), "Supplier URL");
        assert_eq!(split_camel_case("productIDList"), "Product ID List");
        assert_eq!(split_camel_case("baseUoM"), "Base UoM");
        assert_eq!(split_camel_case("APIKey"), "API Key");
    }

    #[test]
    fn test_leading_lowercase_acronym() {
        assert_eq!(split_camel_case("htmlTemplate"), "HTML Template");
        assert_eq!(split_camel_case("uomName"), "UoM Name");
        assert_eq!(split_camel_case("productId"), "Product ID");
    }

    #[test]
    fn test_mixed_case_acronym_words_are_canonical() {
        assert_eq!(split_camel_case("userId"), "User ID");
        assert_eq!(split_camel_case("Xml"), "XML");
        assert_eq!(split_camel_case("imageUrl"), "Image URL");
    }

    #[test]
    fn test_adjacent_acronyms_stay_separate() {
        assert_eq!(split_camel_case("XMLHTMLParser"), "XML HTML Parser");
        assert_eq!(split_camel_case("IDURL"), "ID URL");
    }

    #[test]
    fn test_capital_run_before_word() {
        assert_eq!(split_camel_case("HTTPServer"), "Http Server");
    }

    #[test]
    fn test_acronym_letters_inside_word_are_not_split() {
        assert_eq!(split_camel_case("identity"), "Identity");
        assert_eq!(split_camel_case("provider"), "Provider");
    }

    #[test]
    fn test_deterministic() {
        let input = "goodsReceiptID";
        assert_eq!(split_camel_case(input), split_camel_case(input));
        assert_eq!(split_camel_case(input), "Goods Receipt ID");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("staff"), "Staff");
        assert_eq!(capitalize_first_letter("goodsReceipt"), "GoodsReceipt");
        assert_eq!(capitalize_first_letter(""), "");
    }
}
