//! Owner contact scraping from `tel:` / `mailto:` links.

use std::collections::BTreeSet;

use super::document::ListingPage;

/// Phones and emails found on a page. Each list is sorted, deduplicated by
/// exact string, and `None` when nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub phones: Option<Vec<String>>,
    pub emails: Option<Vec<String>>,
}

pub fn extract_contacts(page: &ListingPage) -> ContactDetails {
    let mut phones = BTreeSet::new();
    let mut emails = BTreeSet::new();

    for href in page.link_targets() {
        if let Some(phone) = href.strip_prefix("tel:") {
            insert_trimmed(&mut phones, phone);
        } else if let Some(email) = href.strip_prefix("mailto:") {
            insert_trimmed(&mut emails, email);
        }
    }

    ContactDetails {
        phones: non_empty(phones),
        emails: non_empty(emails),
    }
}

fn insert_trimmed(set: &mut BTreeSet<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        set.insert(value.to_string());
    }
}

fn non_empty(set: BTreeSet<String>) -> Option<Vec<String>> {
    (!set.is_empty()).then(|| set.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emails_sorted_case_preserved() {
        let page = ListingPage::parse(
            r#"<a href="mailto:a@x.com">a</a><a href="mailto:B@x.com">b</a><a href="mailto:a@x.com">dup</a>"#,
        );
        let found = extract_contacts(&page);
        assert_eq!(found.emails, Some(vec!["B@x.com".to_string(), "a@x.com".to_string()]));
        assert_eq!(found.phones, None);
    }

    #[test]
    fn test_phones_trimmed_and_deduplicated() {
        let page = ListingPage::parse(
            r#"<a href="tel: +971 4 000 0000 ">call</a>
               <a href="tel:+971500000000">mobile</a>
               <a href="tel:+971 4 000 0000">again</a>
               <a href="tel:">blank</a>"#,
        );
        let found = extract_contacts(&page);
        assert_eq!(
            found.phones,
            Some(vec!["+971 4 000 0000".to_string(), "+971500000000".to_string()])
        );
    }

    #[test]
    fn test_other_links_ignored() {
        let page = ListingPage::parse(
            r#"<a href="https://wa.me/971500000000">wa</a><a href="TEL:123">upper</a><a>none</a>"#,
        );
        assert_eq!(extract_contacts(&page), ContactDetails::default());
    }
}
