use crate::dates::{self, Granularity};
use crate::dicts::{self, Dictionary};
use crate::error::Result;
use crate::expand::{self, Profile};
use crate::options::Options;
use crate::output;
use crate::target::{self, Target};
use crate::variants;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

pub struct Runner {
    pub options: Options,
}

impl Runner {
    pub fn new(options: Options) -> Self {
        Runner { options }
    }

    /// Run the whole pipeline once: parse the target, generate the candidate
    /// set, write it out, print a summary. Errors abort the run with no
    /// partial file.
    pub fn run(&self) -> Result<()> {
        let opt = &self.options;
        let target = target::parse(&opt.url)?;
        if opt.log_level == "debug" {
            println!("parsed target: {:?}", target);
        }

        let profile = Profile::for_kind(opt.profile);
        let dict = dicts::builtin();
        let candidates = generate(
            &target,
            &dict,
            &profile,
            Utc::now(),
            opt.days,
            opt.granularity,
            opt.include_bare,
        );

        let path = opt.output_path();
        let n = output::write_candidates(&candidates, &path, &opt.output_type, opt.gzip, opt.append)?;

        if !opt.not_print && !opt.silent {
            for c in &candidates {
                println!("{}", c);
            }
        }
        if !opt.silent {
            println!("{} candidates written to {}", n, path.display());
        }
        Ok(())
    }
}

/// Pure generation pipeline: target -> variants -> dates -> base patterns ->
/// extension cross product. `now` is injected; only [`Runner::run`] reads
/// the clock.
pub fn generate(
    target: &Target,
    dict: &Dictionary<'_>,
    profile: &Profile,
    now: DateTime<Utc>,
    lookback_days: u32,
    granularity: Option<Granularity>,
    include_bare: bool,
) -> BTreeSet<String> {
    let variants = variants::normalize(target);
    let granularity = granularity.unwrap_or(profile.granularity);
    let dates = dates::expand(now, lookback_days, profile.formats, granularity);
    let base = expand::base_patterns(&variants, dict, &dates, profile);
    let exts = profile.extensions(dict);
    expand::with_extensions(&base, &exts, include_bare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::expand::ProfileKind;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_backup_end_to_end() {
        let target = target::parse("https://www.example.com/path").unwrap();
        assert_eq!(target.domain, "example.com");
        assert_eq!(target.subdomain, None);

        let dict = dicts::builtin();
        let profile = Profile::backup();
        let out = generate(&target, &dict, &profile, fixed_now(), 2, None, false);

        assert!(out.contains("example_com_website_backup.zip"));
        assert!(out.contains("cpmove-example.tar.gz"));
        assert!(out.contains("example-com_mysql_dump.sql"));
        assert!(out.contains("backup_example_20240310.zip"));
        assert!(out.contains("backup_20240309.sql"));
        // at least one candidate per configured extension
        for ext in dict.archive_extensions {
            assert!(out.iter().any(|c| c.ends_with(ext)), "no candidate for {}", ext);
        }
        // include_bare=false: every candidate carries an extension
        assert!(out.iter().all(|c| c.contains('.')));
    }

    #[test]
    fn test_log_compound_suffix_policy_is_consistent() {
        let target = target::parse("https://blog.example.co.uk").unwrap();
        let dict = dicts::builtin();
        let profile = Profile::log();
        let out = generate(&target, &dict, &profile, fixed_now(), 1, Some(Granularity::Day), false);

        // first-dot label policy applied to both subdomain joins and the
        // date-qualified full-domain forms
        assert!(out.contains("blog_example_access.log"));
        assert!(out.contains("blog_example_20240310.log"));
        assert!(out.contains("example_co_uk_20240310.txt"));
        assert!(out.contains("blog.example.co.uk_20240310.log"));
        assert!(out.contains("20240310_log.log"));
        assert!(!out.iter().any(|c| c.starts_with("co_")));
    }

    #[test]
    fn test_qualified_subdomain_date_forms() {
        let dict = dicts::builtin();
        let profile = Profile::log();

        // explicit subdomain: qualified host joined with the date stamps
        let target = target::parse("https://blog.example.com").unwrap();
        let out = generate(&target, &dict, &profile, fixed_now(), 1, Some(Granularity::Day), false);
        assert!(out.contains("blog.example.com_20240310.log"));
        assert!(out.iter().any(|c| c.contains("blog.example.com")));

        // no subdomain: the www-qualified host stands in
        let target = target::parse("https://example.com").unwrap();
        let out = generate(&target, &dict, &profile, fixed_now(), 1, Some(Granularity::Day), false);
        assert!(out.contains("www.example.com_20240310.log"));
        assert!(out.contains("20240310_www.example.com.txt"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let target = target::parse("https://api.example.com").unwrap();
        let dict = dicts::builtin();
        let profile = Profile::full();
        let a = generate(&target, &dict, &profile, fixed_now(), 3, None, true);
        let b = generate(&target, &dict, &profile, fixed_now(), 3, None, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_invalid_url_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let runner = Runner::new(Options {
            url: "not-a-url".into(),
            profile: ProfileKind::Backup,
            output: Some(path.clone()),
            output_type: "txt".into(),
            gzip: false,
            append: false,
            days: 1,
            granularity: None,
            include_bare: false,
            not_print: true,
            silent: true,
            log_level: "silent".into(),
        });
        assert!(matches!(runner.run(), Err(Error::InvalidUrl { .. })));
        assert!(!path.exists());

        // an existing output file stays untouched on parse failure
        std::fs::write(&path, "keep\n").unwrap();
        assert!(runner.run().is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep\n");
    }

    #[test]
    fn test_run_writes_summary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let runner = Runner::new(Options {
            url: "https://www.example.com".into(),
            profile: ProfileKind::Log,
            output: Some(path.clone()),
            output_type: "txt".into(),
            gzip: false,
            append: false,
            days: 1,
            granularity: Some(Granularity::Day),
            include_bare: false,
            not_print: true,
            silent: true,
            log_level: "silent".into(),
        });
        runner.run().unwrap();
        let data = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert!(!lines.is_empty());
        // no duplicate lines in the sink
        let unique: std::collections::BTreeSet<&str> = lines.iter().copied().collect();
        assert_eq!(unique.len(), lines.len());
        // sorted lexicographically by byte order
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, lines);
    }
}
