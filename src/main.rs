//! 저장 방식 비교 데모 애플리케이션
//!
//! 저장소에 연결한 뒤 같은 학생 레코드를 세 가지 인코딩으로 저장하고 되읽어 출력합니다.
//! 모든 에러는 치명적으로 처리되어 종료 코드 1로 끝납니다.

use std::process;
use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use redis_struct_store::caching::memory::MemoryStore;
use redis_struct_store::caching::redis::RedisClient;
use redis_struct_store::caching::store::Store;
use redis_struct_store::config::{StoreBackend, StoreConfig};
use redis_struct_store::errors::AppResult;
use redis_struct_store::services::students::{sample_student, StudentShowcase, HASH_JSON_KEY, HASH_KEY, JSON_KEY};
use redis_struct_store::utils::display_terminal::{print_boxed_title, print_step_start, print_sub_task, print_typed_value};

#[tokio::main]
async fn main() {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let config = StoreConfig::from_env();
    info!("🚀 저장 방식 비교 시작 - backend: {:?}", config.backend);

    let result = match config.backend {
        StoreBackend::Redis => {
            let client = match RedisClient::from_config(&config).await {
                Ok(client) => client,
                Err(e) => {
                    error!("Failed to connect to redis-server @ {}: {}", config.address, e);
                    process::exit(1);
                }
            };
            run_showcase(Arc::new(client)).await
        }
        StoreBackend::Memory => run_showcase(Arc::new(MemoryStore::new())).await,
    };

    if let Err(e) = result {
        error!("저장 방식 비교 실패: {}", e);
        process::exit(1);
    }
}

/// 비교 시나리오를 실행하고 결과를 출력합니다
async fn run_showcase<S: Store>(store: Arc<S>) -> AppResult<()> {
    let showcase = StudentShowcase::new(store);
    let student = sample_student();

    print_boxed_title("Redis Struct Store");
    print_step_start(1, "HSET flattened / JSON.SET / HSET JSON");

    let report = showcase.run(&student).await?;

    print_step_start(2, "Read back");
    print_typed_value("HASH", "Student Info", &report.flattened_info().unwrap_or_default().to_string());
    print_typed_value("HASH", "Rebuilt Info", &report.flattened_student.info);
    print_typed_value("ReJSON", "Student Info", &report.native_student.info);
    print_typed_value("HSET JSON", "Student Info", &report.hash_json_student.info);

    print_step_start(3, "Stored documents");
    let mut flat_fields: Vec<_> = report.flattened.iter().collect();
    flat_fields.sort();
    for (field, value) in flat_fields {
        print_sub_task(&format!("{} {}", HASH_KEY, field), value);
    }
    print_sub_task(JSON_KEY, &report.native_document);
    print_sub_task(HASH_JSON_KEY, &report.hash_json_document);

    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 직접 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            // 개발 환경에서는 .env.dev가 없어도 기본값으로 동작
            dotenv::from_filename(".env.dev").ok();
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=redis_struct_store=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
