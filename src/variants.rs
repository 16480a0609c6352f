use crate::target::Target;
use std::collections::BTreeSet;

/// Produce the set of textual domain variants used as substrings in
/// generated candidates.
///
/// Always present: the bare domain label, the full dotted domain, the full
/// domain with dots replaced by `_`, by `-`, and removed entirely, plus the
/// qualified subdomain host (`sub.domain`, falling back to `www.domain`
/// when no subdomain is present). With a subdomain the subdomain label is
/// also combined with the domain label in both orderings and with both
/// separators.
///
/// Returns a `BTreeSet` so iteration order is reproducible; the contract is
/// set membership, not sequence.
pub fn normalize(target: &Target) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let label = target.label();

    out.insert(label.to_string());
    out.insert(target.domain.clone());
    out.insert(target.domain.replace('.', "_"));
    out.insert(target.domain.replace('.', "-"));
    out.insert(target.domain.replace('.', ""));
    out.insert(target.qualified_subdomain());

    if let Some(sub) = target.subdomain.as_deref() {
        // parse() already collapses a bare www label, keep the guard anyway
        if sub != "www" {
            out.insert(sub.to_string());
            for sep in ['_', '-'] {
                out.insert(format!("{}{}{}", sub, sep, label));
                out.insert(format!("{}{}{}", label, sep, sub));
            }
        }
    }

    out
}
