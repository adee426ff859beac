//! HTML rendering with context-aware escaping.
//!
//! # Responsibilities
//! - Escape untrusted values for the HTML element context
//! - Assemble the greeting page
//!
//! # Design Decisions
//! - `greeting_page` is the only HTML producer in the crate; every
//!   dynamic value it interpolates goes through `escape_html`
//! - Escaping covers the five HTML-significant characters so values are
//!   inert in both element and attribute positions

use crate::datastore::UserRecord;
use crate::profile::StoredProfile;

/// Escape a string for inclusion in HTML output.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the greeting page.
///
/// `listing` is present only when the request named a known listing
/// alias; `profile` only when the stored profile loaded cleanly.
pub fn greeting_page(
    input: &str,
    records: &[UserRecord],
    listing: Option<&str>,
    profile: Option<&StoredProfile>,
) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<body>\n");
    page.push_str(&format!("<h1>Welcome {}</h1>\n", escape_html(input)));

    if records.is_empty() {
        page.push_str("<p>No matching users.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for record in records {
            page.push_str(&format!(
                "<li>{}: {}</li>\n",
                escape_html(&record.name),
                escape_html(&record.data)
            ));
        }
        page.push_str("</ul>\n");
    }

    if let Some(listing) = listing {
        page.push_str(&format!("<pre>{}</pre>\n", escape_html(listing)));
    }

    if let Some(profile) = profile {
        page.push_str(&format!(
            "<p>{} &mdash; {}</p>\n",
            escape_html(&profile.display_name),
            escape_html(&profile.bio)
        ));
        if !profile.interests.is_empty() {
            let interests: Vec<String> =
                profile.interests.iter().map(|i| escape_html(i)).collect();
            page.push_str(&format!("<p>Interests: {}</p>\n", interests.join(", ")));
        }
    }

    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape_html(r#"a"b&c"#), "a&quot;b&amp;c");
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("alice"), "alice");
    }

    #[test]
    fn test_page_encodes_hostile_input() {
        let page = greeting_page("<script>alert(1)</script>", &[], None, None);
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_page_encodes_record_fields() {
        let records = vec![UserRecord {
            name: "mallory".into(),
            data: "<img src=x onerror=alert(1)>".into(),
        }];
        let page = greeting_page("mallory", &records, None, None);
        assert!(!page.contains("<img"));
        assert!(page.contains("&lt;img"));
    }

    #[test]
    fn test_page_encodes_listing_output() {
        let page = greeting_page("bob", &[], Some("<b>dir</b>\nnotes.txt"), None);
        assert!(page.contains("&lt;b&gt;dir&lt;/b&gt;"));
        assert!(page.contains("notes.txt"));
    }
}
