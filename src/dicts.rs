//! Embedded naming-idiom dictionaries.
//! Static, hand-curated tables of backup/log filename conventions, kept as
//! data and injected into the expander so tests can substitute smaller ones.

/// One naming idiom: static text around a domain-variant placeholder.
/// Placement (prefix, suffix, infix) is explicit in the two halves, so a
/// variant is substituted exactly once per idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idiom {
    pub before: &'static str,
    pub after: &'static str,
}

impl Idiom {
    pub fn render(&self, variant: &str) -> String {
        format!("{}{}{}", self.before, variant, self.after)
    }
}

macro_rules! idiom {
    ($before:expr, $after:expr) => {
        Idiom { before: $before, after: $after }
    };
}

/// Immutable dictionary handed to the pattern expander. The `'static`
/// instance is [`builtin`]; tests build their own from slices.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary<'a> {
    /// CMS backup plugin conventions (WordPress, Joomla, Drupal).
    pub cms: &'a [Idiom],
    /// Hosting-panel backup conventions (cPanel, Plesk, DirectAdmin).
    pub hosting: &'a [Idiom],
    /// Database dump conventions.
    pub database: &'a [Idiom],
    /// Generic backup terms appended to a domain variant.
    pub backup_terms: &'a [&'a str],
    /// Version / environment tags.
    pub version_tags: &'a [&'a str],
    /// Common log basenames.
    pub log_names: &'a [&'a str],
    /// Archive/dump extensions (leading dot included).
    pub archive_extensions: &'a [&'a str],
    /// Log extensions (leading dot included).
    pub log_extensions: &'a [&'a str],
}

const CMS: &[Idiom] = &[
    idiom!("", "_wp_backup"),
    idiom!("", "_wordpress_backup"),
    idiom!("updraft_", ""),
    idiom!("backwpup_", "_backups"),
    idiom!("ai1wm-", "-backup"),
    idiom!("duplicator_", "_archive"),
    idiom!("", "_wpress"),
    idiom!("akeeba_backup_", ""),
    idiom!("", "_joomla_backup"),
    idiom!("", "_drupal_backup"),
    idiom!("sites_default_", ""),
    idiom!("", "_typo3_backup"),
];

const HOSTING: &[Idiom] = &[
    idiom!("cpmove-", ""),
    idiom!("", "_cpanel_backup"),
    idiom!("backup-", ""),
    idiom!("", "_plesk_backup"),
    idiom!("plesk_backup_", ""),
    idiom!("", "_directadmin"),
    idiom!("vhost_", "_backup"),
    idiom!("", "_public_html"),
    idiom!("home_", ""),
    idiom!("", "_htdocs"),
];

const DATABASE: &[Idiom] = &[
    idiom!("", "_mysql_dump"),
    idiom!("mysqldump_", ""),
    idiom!("", "_db_backup"),
    idiom!("db_", ""),
    idiom!("dump_", ""),
    idiom!("", "_postgres_dump"),
    idiom!("pg_dump_", ""),
    idiom!("", "_database"),
    idiom!("sqldump_", ""),
    idiom!("", "_mariadb_backup"),
];

const BACKUP_TERMS: &[&str] = &[
    "website_backup",
    "site_backup",
    "daily_backup",
    "weekly_backup",
    "monthly_backup",
    "full_backup",
    "incremental_backup",
    "database_backup",
    "files_backup",
    "server_backup",
    "web_backup",
    "public_html_backup",
    "www_backup",
    "backup_archive",
    "website_snapshot",
    "site_copy",
    "data_backup",
    "website_data",
    "html_backup",
    "mysql_backup",
    "postgres_backup",
    "sql_backup",
    "logs_backup",
    "config_backup",
    "assets_backup",
    "images_backup",
    "documents_backup",
    "code_backup",
    "media_backup",
    "content_backup",
    "system_backup",
    "resources_backup",
    "template_backup",
    "theme_backup",
    "plugins_backup",
    "modules_backup",
    "settings_backup",
];

const VERSION_TAGS: &[&str] = &[
    "v1",
    "v2",
    "production",
    "staging",
    "test",
    "dev",
    "old",
    "final",
    "latest",
];

const LOG_NAMES: &[&str] = &[
    "access",
    "error",
    "debug",
    "info",
    "warn",
    "warning",
    "fatal",
    "security",
    "auth",
    "application",
    "system",
    "webserver",
    "app",
    "server",
    "request",
    "response",
    "transaction",
    "event",
    "service",
    "audit",
];

const ARCHIVE_EXTENSIONS: &[&str] = &[
    ".zip",
    ".tar",
    ".tar.gz",
    ".tgz",
    ".tar.bz2",
    ".tar.xz",
    ".7z",
    ".rar",
    ".sql",
    ".bak",
    ".dump",
    ".gzip",
    ".bz2",
    ".gz",
];

const LOG_EXTENSIONS: &[&str] = &[".log", ".txt", ".sql"];

/// The built-in dictionary, loaded once as data.
pub fn builtin() -> Dictionary<'static> {
    Dictionary {
        cms: CMS,
        hosting: HOSTING,
        database: DATABASE,
        backup_terms: BACKUP_TERMS,
        version_tags: VERSION_TAGS,
        log_names: LOG_NAMES,
        archive_extensions: ARCHIVE_EXTENSIONS,
        log_extensions: LOG_EXTENSIONS,
    }
}
