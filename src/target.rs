use crate::error::{Error, Result};
use url::Url;

/// Parsed generation target. `domain` always contains at least one dot;
/// `subdomain` is a single label and never `"www"` (a leading www label is
/// dropped during parsing, so "no subdomain" and "www subdomain" are the
/// same state downstream).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub domain: String,
    pub subdomain: Option<String>,
}

impl Target {
    /// Domain label: text before the first dot. Everything after the first
    /// dot (including compound suffixes like `co.uk`) is treated as one
    /// opaque trailing unit; this policy applies everywhere in the crate.
    pub fn label(&self) -> &str {
        self.domain.split('.').next().unwrap_or(&self.domain)
    }

    /// Subdomain label, falling back to the domain label when absent.
    pub fn subdomain_label(&self) -> &str {
        self.subdomain.as_deref().unwrap_or_else(|| self.label())
    }

    /// Fully qualified subdomain host. Without an explicit subdomain this is
    /// `www.<domain>` (default web traffic resolves through a www label);
    /// this is the single "no subdomain" policy for qualified forms.
    pub fn qualified_subdomain(&self) -> String {
        match &self.subdomain {
            Some(s) => format!("{}.{}", s, self.domain),
            None => format!("www.{}", self.domain),
        }
    }
}

/// Parse a raw URL string into a [`Target`].
///
/// Accepted shape: `scheme://[www.][subdomain.]domain.tld[/...]`. The host
/// must contain at least one dot. With three or more labels (after dropping
/// a leading `www`) the first label becomes the subdomain and the remainder
/// the domain; with exactly two labels there is no subdomain.
pub fn parse(raw: &str) -> Result<Target> {
    let invalid = || Error::InvalidUrl { input: raw.to_string() };

    let url = Url::parse(raw).map_err(|_| invalid())?;
    let host = url.host_str().ok_or_else(invalid)?;

    let mut labels: Vec<&str> = host.split('.').collect();
    if labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    if labels.first() == Some(&"www") {
        labels.remove(0);
    }
    if labels.len() < 2 {
        return Err(invalid());
    }

    if labels.len() == 2 {
        Ok(Target {
            domain: labels.join("."),
            subdomain: None,
        })
    } else {
        let sub = labels.remove(0);
        Ok(Target {
            domain: labels.join("."),
            subdomain: Some(sub.to_string()),
        })
    }
}
