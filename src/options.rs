use crate::dates::Granularity;
use crate::expand::{Profile, ProfileKind};
use std::path::PathBuf;

/// Resolved run options, assembled by `main` from the CLI args.
#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
    pub profile: ProfileKind,
    pub output: Option<PathBuf>,
    pub output_type: String,
    pub gzip: bool,
    pub append: bool,
    pub days: u32,
    /// Overrides the profile default when set.
    pub granularity: Option<Granularity>,
    pub include_bare: bool,
    pub not_print: bool,
    pub silent: bool,
    pub log_level: String,
}

impl Options {
    pub fn check(&mut self) {
        // a .gz suffix implies gzip, same convention as the output flags
        if !self.gzip {
            if let Some(p) = &self.output {
                if let Some(s) = p.as_os_str().to_str() {
                    if s.ends_with(".gz") {
                        self.gzip = true;
                    }
                }
            }
        }
        if self.silent {
            self.log_level = "silent".into();
        }
    }

    /// Output path, defaulting per profile.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(p) => p.clone(),
            None => PathBuf::from(Profile::for_kind(self.profile).default_output()),
        }
    }
}
