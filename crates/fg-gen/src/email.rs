//! Address synthesis: `janesmith@genomap.com` from "Jane Smith" at "GenoMap".

use std::collections::HashSet;

const FALLBACK_LOCAL_PART: &str = "user";
const FALLBACK_DOMAIN: &str = "example";

/// Names such as "Siobhan O'Neill" lose the apostrophe everywhere they are used.
pub fn strip_apostrophes(name: &str) -> String {
    name.replace('\'', "")
}

/// `<name>@<org name>.com`, lower-cased with whitespace and punctuation dropped.
pub fn synthesize_email(name: &str, org_name: &str) -> String {
    let local = address_part(name);
    let domain = address_part(org_name);

    format!(
        "{}@{}.com",
        if local.is_empty() { FALLBACK_LOCAL_PART } else { local.as_str() },
        if domain.is_empty() { FALLBACK_DOMAIN } else { domain.as_str() },
    )
}

/// Lower-cased ASCII alphanumerics and `-`, in dot-separated labels.
/// Labels never start or end with `-` and are never empty.
fn address_part(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    kept.split('.')
        .map(|label| label.trim_matches('-'))
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Tracks addresses handed out in one run so every user gets a distinct one.
#[derive(Debug, Default)]
pub struct EmailRegistry {
    taken: HashSet<String>,
}

impl EmailRegistry {
    /// Returns `email` if unused, otherwise the first free `local<N>@domain` for N >= 2.
    pub fn claim(&mut self, email: String) -> String {
        if self.taken.insert(email.to_lowercase()) {
            return email;
        }

        let (local, domain) = match email.split_once('@') {
            Some((local, domain)) => (local, Some(domain)),
            None => (email.as_str(), None),
        };

        let mut suffix: u32 = 2;
        loop {
            let candidate = match domain {
                Some(domain) => format!("{local}{suffix}@{domain}"),
                None => format!("{local}{suffix}"),
            };
            if self.taken.insert(candidate.to_lowercase()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
