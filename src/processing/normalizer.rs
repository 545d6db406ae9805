//! Text normalization: case folding and boilerplate removal

/// Site chrome and legal notices that leak into pasted job ads, in English and Turkish.
pub const BOILERPLATE_DENYLIST: &[&str] = &[
    "linkedin",
    "privacy policy",
    "terms",
    "cookie",
    "sign in",
    "log in",
    "çerez",
    "gizlilik",
    "kullanıcı anlaşması",
];

/// Lowercase, strip every denylisted substring (in list order, not
/// word-boundary aware), then trim.
pub fn normalize(text: &str) -> String {
    let mut cleaned = text.to_lowercase();
    for term in BOILERPLATE_DENYLIST {
        if cleaned.contains(term) {
            cleaned = cleaned.replace(term, "");
        }
    }
    cleaned.trim().to_string()
}

/// Number of whitespace-delimited tokens.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folded_removal() {
        assert_eq!(normalize("My LinkedIn Profile"), "my  profile");
        assert_eq!(normalize("LinkedIn Profile"), "profile");
    }

    #[test]
    fn test_removal_inside_words() {
        // "terms" is stripped even when embedded in a longer word
        assert_eq!(normalize("Midterms review"), "mid review");
    }

    #[test]
    fn test_multilingual_entries() {
        let text = "Çerez politikası ve Gizlilik. Kullanıcı Anlaşması geçerlidir";
        let normalized = normalize(text);
        assert!(!normalized.contains("çerez"));
        assert!(!normalized.contains("gizlilik"));
        assert!(!normalized.contains("kullanıcı anlaşması"));
        assert!(normalized.contains("geçerlidir"));
    }

    #[test]
    fn test_chrome_phrases() {
        let text = "Sign in | Log in | Privacy Policy | Cookie settings\nRust developer";
        let normalized = normalize(text);
        assert!(normalized.starts_with('|'));
        assert!(normalized.ends_with("settings\nrust developer"));
        for term in ["sign in", "log in", "privacy policy", "cookie"] {
            assert!(!normalized.contains(term));
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(token_count(""), 0);
    }

    #[test]
    fn test_token_count() {
        assert_eq!(token_count("rust  tokio\nserde\tclap "), 4);
    }
}
