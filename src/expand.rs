//! Pattern expander: domain variants x dictionary categories x dates x tags
//! under declared join forms, then the extension cross product.

use crate::dates::{Granularity, DEFAULT_FORMATS};
use crate::dicts::Dictionary;
use std::collections::BTreeSet;

/// Join forms combining a domain variant with a date string. Declared once
/// as data, never re-derived per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateJoin {
    /// `<variant>_<date>`
    VariantDate,
    /// `<date>_<variant>`
    DateVariant,
    /// `backup_<variant>_<date>`
    BackupVariantDate,
    /// `backup_<date>` (variant-independent)
    BackupDate,
    /// `<date>_log` (variant-independent)
    DateLog,
}

impl DateJoin {
    pub fn render(&self, variant: &str, date: &str) -> String {
        match self {
            DateJoin::VariantDate => format!("{}_{}", variant, date),
            DateJoin::DateVariant => format!("{}_{}", date, variant),
            DateJoin::BackupVariantDate => format!("backup_{}_{}", variant, date),
            DateJoin::BackupDate => format!("backup_{}", date),
            DateJoin::DateLog => format!("{}_log", date),
        }
    }
}

/// Join forms combining a domain variant with a version/status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagJoin {
    /// `<variant>_backup_<tag>`
    VariantBackupTag,
    /// `backup_<tag>` (variant-independent)
    BackupTag,
}

impl TagJoin {
    pub fn render(&self, variant: &str, tag: &str) -> String {
        match self {
            TagJoin::VariantBackupTag => format!("{}_backup_{}", variant, tag),
            TagJoin::BackupTag => format!("backup_{}", tag),
        }
    }
}

const BACKUP_DATE_JOINS: &[DateJoin] = &[
    DateJoin::BackupVariantDate,
    DateJoin::VariantDate,
    DateJoin::BackupDate,
];

const LOG_DATE_JOINS: &[DateJoin] = &[
    DateJoin::VariantDate,
    DateJoin::DateVariant,
    DateJoin::DateLog,
];

const FULL_DATE_JOINS: &[DateJoin] = &[
    DateJoin::VariantDate,
    DateJoin::DateVariant,
    DateJoin::BackupVariantDate,
    DateJoin::BackupDate,
    DateJoin::DateLog,
];

const BACKUP_TAG_JOINS: &[TagJoin] = &[TagJoin::VariantBackupTag, TagJoin::BackupTag];

const BACKUP_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Backup,
    Log,
    Full,
}

/// One parameterized expander configuration. The backup/log generators
/// differ only in which categories, join forms and extensions are enabled,
/// not in code paths.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub kind: ProfileKind,
    pub cms: bool,
    pub hosting: bool,
    pub database: bool,
    pub backup_terms: bool,
    pub version_tags: bool,
    pub log_names: bool,
    /// Emit each domain variant itself as a base pattern.
    pub bare_variants: bool,
    pub date_joins: &'static [DateJoin],
    pub tag_joins: &'static [TagJoin],
    pub formats: &'static [&'static str],
    pub granularity: Granularity,
}

impl Profile {
    pub fn backup() -> Self {
        Profile {
            kind: ProfileKind::Backup,
            cms: true,
            hosting: true,
            database: true,
            backup_terms: true,
            version_tags: true,
            log_names: false,
            bare_variants: true,
            date_joins: BACKUP_DATE_JOINS,
            tag_joins: BACKUP_TAG_JOINS,
            formats: BACKUP_FORMATS,
            granularity: Granularity::Day,
        }
    }

    pub fn log() -> Self {
        Profile {
            kind: ProfileKind::Log,
            cms: false,
            hosting: false,
            database: false,
            backup_terms: false,
            version_tags: false,
            log_names: true,
            bare_variants: false,
            date_joins: LOG_DATE_JOINS,
            tag_joins: &[],
            formats: DEFAULT_FORMATS,
            granularity: Granularity::Quarter,
        }
    }

    pub fn full() -> Self {
        Profile {
            kind: ProfileKind::Full,
            cms: true,
            hosting: true,
            database: true,
            backup_terms: true,
            version_tags: true,
            log_names: true,
            bare_variants: true,
            date_joins: FULL_DATE_JOINS,
            tag_joins: BACKUP_TAG_JOINS,
            formats: DEFAULT_FORMATS,
            granularity: Granularity::Quarter,
        }
    }

    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Backup => Profile::backup(),
            ProfileKind::Log => Profile::log(),
            ProfileKind::Full => Profile::full(),
        }
    }

    /// Extension list for this profile, deduplicated (`.sql` appears in
    /// both dictionary lists).
    pub fn extensions<'a>(&self, dict: &Dictionary<'a>) -> Vec<&'a str> {
        let mut set: BTreeSet<&'a str> = BTreeSet::new();
        match self.kind {
            ProfileKind::Backup => set.extend(dict.archive_extensions.iter().copied()),
            ProfileKind::Log => set.extend(dict.log_extensions.iter().copied()),
            ProfileKind::Full => {
                set.extend(dict.archive_extensions.iter().copied());
                set.extend(dict.log_extensions.iter().copied());
            }
        }
        set.into_iter().collect()
    }

    pub fn default_output(&self) -> &'static str {
        match self.kind {
            ProfileKind::Backup => "custom_backup_list.txt",
            ProfileKind::Log => "custom_logfinder.txt",
            ProfileKind::Full => "custom_wordlist.txt",
        }
    }
}

/// Expand base patterns: for each variant, render the enabled category
/// idioms, terms, tags and date join forms, and union everything.
///
/// Size is O(variants x (categories + dates x joins + tags x joins));
/// categories are never nested against each other.
pub fn base_patterns(
    variants: &BTreeSet<String>,
    dict: &Dictionary<'_>,
    dates: &BTreeSet<String>,
    profile: &Profile,
) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for v in variants {
        if profile.bare_variants {
            out.insert(v.clone());
        }
        if profile.cms {
            for i in dict.cms {
                out.insert(i.render(v));
            }
        }
        if profile.hosting {
            for i in dict.hosting {
                out.insert(i.render(v));
            }
        }
        if profile.database {
            for i in dict.database {
                out.insert(i.render(v));
            }
        }
        if profile.backup_terms {
            for t in dict.backup_terms {
                out.insert((*t).to_string());
                out.insert(format!("{}_{}", v, t));
            }
        }
        if profile.version_tags {
            for tag in dict.version_tags {
                for j in profile.tag_joins {
                    out.insert(j.render(v, tag));
                }
            }
        }
        if profile.log_names {
            for n in dict.log_names {
                out.insert((*n).to_string());
                out.insert(format!("{}_{}", v, n));
            }
        }
        for d in dates {
            for j in profile.date_joins {
                out.insert(j.render(v, d));
            }
        }
    }
    out
}

/// Cross-product base patterns with the extension list. `include_bare`
/// keeps the extensionless pattern as a candidate too. Leading dots on
/// extensions are normalized so `"foo"` + `".zip"` is `"foo.zip"`, never
/// `"foo..zip"`.
pub fn with_extensions(
    patterns: &BTreeSet<String>,
    extensions: &[&str],
    include_bare: bool,
) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for p in patterns {
        let base = p.trim_end_matches('.');
        if base.is_empty() {
            continue;
        }
        if include_bare {
            out.insert(base.to_string());
        }
        for ext in extensions {
            let e = ext.trim_start_matches('.');
            out.insert(format!("{}.{}", base, e));
        }
    }
    out
}
