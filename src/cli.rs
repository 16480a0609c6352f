use crate::dates::Granularity;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rubak - 备份/日志文件名字典生成工具",
    long_about = "NAME:\n  rubak - 针对目标站点生成备份与日志文件名候选字典\n\nUSAGE:\n  rubak <SUBCOMMAND> [OPTIONS] [URL]\n\nCOMMANDS:\n  backup (b)  备份/归档文件名字典：CMS 插件、主机面板、数据库导出、通用备份词、版本标签、日期戳\n  log (l)     日志文件名字典：常见日志名、日期/时间戳 (小时/15分钟粒度，带上限)\n  full (f)    以上两类的并集\n\n说明:\n  - 输入为目标 URL (scheme://[www.][sub.]domain.tld[/...])，解析出主域与子域后代入内置命名习惯字典做组合展开。\n  - 结果集合去重、按字节序排序，逐行写入输出文件；仅本地生成，不发起任何网络探测。\n\n快速示例:\n  rubak backup https://www.example.com -o backup_list.txt\n  rubak log https://blog.example.com --days 14 --granularity hour\n  rubak full https://example.com -o all.txt.gz"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 备份字典 (backup) - CMS/主机面板/数据库/通用备份词/版本标签/日期戳
    #[command(alias = "b")]
    Backup(GenArgs),
    /// 日志字典 (log) - 常见日志名与日期时间戳组合
    #[command(alias = "l")]
    Log(GenArgs),
    /// 全量字典 (full) - backup 与 log 的并集
    #[command(alias = "f")]
    Full(GenArgs),
}

/// Common args reused by every generation subcommand
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// 目标 URL
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// 位置参数 URL（可直接在子命令后写 URL，不需要 -u）
    #[arg(value_name = "URL")]
    pub positional_url: Option<String>,

    /// 日志级别: error|warn|info|debug|silent
    #[arg(long = "log-level", default_value = "info", value_parser = ["error","warn","info","debug","silent"])]
    pub log_level: String,
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// 基本通用参数
    #[command(flatten)]
    pub common: CommonArgs,

    /// 输出文件路径（默认按子命令: custom_backup_list.txt / custom_logfinder.txt / custom_wordlist.txt）
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// 输出类型: txt/json
    #[arg(long = "output-type", alias = "oy", default_value = "txt", value_parser = ["txt", "json"])]
    pub output_type: String,

    /// 使用 gzip 压缩（文件名以 .gz 结尾自动开启）
    #[arg(long = "gzip")]
    pub gzip: bool,

    /// 追加写入输出文件（默认覆盖写入；追加模式不经过临时文件）
    #[arg(long = "append")]
    pub append: bool,

    /// 日期回溯天数（含当天）
    #[arg(long = "days", default_value_t = 7)]
    pub days: u32,

    /// 时间粒度: day/hour/quarter（默认按子命令：backup=day, log/full=quarter）
    #[arg(long = "granularity", value_enum)]
    pub granularity: Option<Granularity>,

    /// 同时保留不带扩展名的候选
    #[arg(long = "include-bare")]
    pub include_bare: bool,

    /// 不在屏幕打印候选（默认打印；文件输出不受影响）
    #[arg(long = "not-print", alias = "np")]
    pub not_print: bool,

    /// 静默模式，不打印任何输出
    #[arg(long = "silent")]
    pub silent: bool,
}
