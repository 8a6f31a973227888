use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use encfix_core::{fix_tree, FixOptions, ScanEngine};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "encfix", version, about = "把无 BOM 的 windows-1250 / UTF-8 文本文件统一转写为 UTF-8")]
struct Cli {
    /// 扫描根目录（默认当前工作目录）
    root: Option<PathBuf>,

    /// 配置文件（TOML）：扩展名、重音字母表、旧式编码标签
    #[arg(long)]
    config: Option<PathBuf>,

    /// 指纹扫描引擎
    #[arg(long, value_enum, default_value_t = EngineArg::AhoCorasick)]
    engine: EngineArg,

    /// 仅判定并报告，不改写文件
    #[arg(long)]
    dry_run: bool,

    /// 改写后的文件带 UTF-8 BOM
    #[arg(long)]
    bom: bool,

    /// 处理结果报告输出路径（JSON 数组）
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    Naive,
    AhoCorasick,
}

impl From<EngineArg> for ScanEngine {
    fn from(e: EngineArg) -> Self {
        match e {
            EngineArg::Naive => ScanEngine::Naive,
            EngineArg::AhoCorasick => ScanEngine::AhoCorasick,
        }
    }
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let root = match cli.root {
        Some(p) => p,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    info!(?root, dry_run = cli.dry_run, "starting");

    let opts = FixOptions {
        engine: cli.engine.into(),
        dry_run: cli.dry_run,
        write_bom: cli.bom,
        config_path: cli.config,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut report = match &cli.report {
        Some(p) => Some(BufWriter::new(File::create(p).with_context(|| format!("create report file {}", p.display()))?)),
        None => None,
    };

    let stats = fix_tree(&root, &mut out, report.as_mut().map(|w| w as &mut dyn Write), &opts)
        .with_context(|| format!("fix encodings under {}", root.display()))?;
    if let Some(w) = report.as_mut() { w.flush().context("flush report")?; }
    out.flush().ok();

    info!(
        files = stats.files_visited,
        converted_legacy = stats.converted_legacy,
        rewritten_utf8 = stats.rewritten_utf8,
        would_convert = stats.would_convert,
        unchanged = stats.unchanged,
        skipped_bom = stats.skipped_bom,
        ambiguous = stats.ambiguous,
        "{}",
        if cli.dry_run { "dry run finished, nothing written" } else { "finished" }
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只保留歧义文件行
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
