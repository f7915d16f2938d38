use clap::Parser;
use tracing_subscriber::EnvFilter;

use geothermal_plant_sim::app::{self, AppError};
use geothermal_plant_sim::cli::Args;
use geothermal_plant_sim::i18n::{self, keys, Translator};

/// 프로그램의 엔트리 포인트. 로그를 초기화한 뒤 시뮬레이션을 실행한다.
fn main() {
    // RUST_LOG가 없으면 info 수준, 로그는 stderr로 보내 stdout 출력과 섞이지 않게 한다.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let session = match app::load(&args) {
        Ok(session) => session,
        // 설정을 읽지 못했으므로 플래그와 시스템 로케일로만 언어를 정한다.
        Err(err) => fail(
            &Translator::new(&i18n::resolve_language(args.lang.as_deref(), None)),
            &err,
        ),
    };
    if let Err(err) = app::run(&args, &session) {
        fail(&session.translator, &err);
    }
}

fn fail(tr: &Translator, err: &AppError) -> ! {
    eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
    std::process::exit(1);
}
