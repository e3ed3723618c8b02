//! Casing and punctuation helpers shared by both dialects.

/// Title-cases `value`: the first cased letter of every letter run is
/// upper-case, the rest lower-case.
///
/// Any non-cased character (space, digit, punctuation) starts a new run, so
/// `"sipil-jalan 2a"` becomes `"Sipil-Jalan 2A"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_cased = false;
    for c in value.chars() {
        if is_cased(c) {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}

/// Upper-cases the first character and lower-cases the remainder.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Removes every comma and period.
pub fn strip_commas_and_periods(value: &str) -> String {
    value.replace([',', '.'], "")
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

#[cfg(test)]
mod tests {
    use super::{capitalize, strip_commas_and_periods, title_case};

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("sipil JALAN"), "Sipil Jalan");
        assert_eq!(title_case("sipil-jalan 2a"), "Sipil-Jalan 2A");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("pengecoran JALAN"), "Pengecoran jalan");
        assert_eq!(capitalize("éclat"), "Éclat");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn strip_removes_only_commas_and_periods() {
        assert_eq!(strip_commas_and_periods("a, b. c; d"), "a b c; d");
    }
}
