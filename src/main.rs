use std::path::PathBuf;

use clap::Parser;
use electro_toolbox::{app, config, i18n};
use tracing_subscriber::EnvFilter;

/// 전기·기계 설계 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "electro_toolbox", version, about)]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// 언어팩(TOML) 디렉터리
    #[arg(long)]
    locales: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language_override());
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales.as_deref());
    tracing::debug!(lang = %lang, config = %cli.config.display(), "시작");
    app::run(&mut cfg, &tr)?;
    Ok(())
}
