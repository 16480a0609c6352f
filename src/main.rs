use anyhow::Result;
use clap::{CommandFactory, Parser};
use rubak::cli::{Cli, Commands, GenArgs};
use rubak::expand::ProfileKind;
use rubak::options::Options;
use rubak::runner::Runner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (profile, args, name) = match cli.command {
        Commands::Backup(args) => (ProfileKind::Backup, args, "backup"),
        Commands::Log(args) => (ProfileKind::Log, args, "log"),
        Commands::Full(args) => (ProfileKind::Full, args, "full"),
    };

    let GenArgs {
        common,
        output,
        output_type,
        gzip,
        append,
        days,
        granularity,
        include_bare,
        not_print,
        silent,
    } = args;

    let url = match common.url.or(common.positional_url) {
        Some(u) => u,
        None => {
            let mut cmd = Cli::command();
            if let Some(sc) = cmd.find_subcommand_mut(name) {
                let _ = sc.print_help();
                println!();
            }
            return Ok(());
        }
    };

    let mut opt = Options {
        url,
        profile,
        output,
        output_type,
        gzip,
        append,
        days,
        granularity,
        include_bare,
        not_print,
        silent,
        log_level: common.log_level,
    };
    opt.check();

    if !opt.silent && opt.log_level == "debug" {
        println!("Parsed Options: {:#?}", opt);
    }

    Runner::new(opt).run()?;
    Ok(())
}
