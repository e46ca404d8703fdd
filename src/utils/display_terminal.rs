//! 터미널 출력 포맷팅 유틸리티
//! 
//! 데모 실행 결과를 박스 제목, 진행 단계, 타입 정보와 함께 출력합니다.

use std::fmt::Debug;

/// 박스 형태로 둘러싸인 제목을 출력합니다
/// 
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 Redis Struct Store               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
/// 
/// Output:
/// ```text
/// → Step 1: HSET flattened struct
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 서브 항목을 들여쓰기된 트리 형태로 출력합니다
/// 
/// Output:
/// ```text
///    ├─ JohnDoeJSON: {"info":{...},"rank":1}
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 값과 그 값의 Rust 타입을 함께 출력합니다
/// 
/// 평탄화된 값은 `String`으로, JSON에서 디코딩한 값은 구조체 타입으로 표시되어
/// 인코딩별 차이를 한눈에 볼 수 있습니다.
/// 
/// # Examples
/// 
/// ```rust,ignore
/// print_typed_value("HASH", "Student Info", &"StudentDetails { .. }".to_string());
/// ```
/// 
/// Output:
/// ```text
/// [HASH] Student Info "StudentDetails { .. }" [Type alloc::string::String]
/// ```
pub fn print_typed_value<T: Debug>(tag: &str, label: &str, value: &T) {
    println!("[{}] {} {:?} [Type {}]", tag, label, value, type_name_of(value));
}

/// 값의 타입 이름
pub fn type_name_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::StudentDetails;

    #[test]
    fn test_type_name_distinguishes_encodings() {
        let flat = String::from("StudentDetails { .. }");
        let decoded = Some(Box::new(StudentDetails::default()));

        assert!(type_name_of(&flat).ends_with("String"));
        assert!(type_name_of(&decoded).contains("StudentDetails"));
    }
}
