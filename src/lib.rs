//! 전기·기계 설계 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.
//! 모든 계산 함수는 상태가 없는 순수 함수이며 참조 테이블은 `const` 데이터다.

pub mod app;
pub mod config;
pub mod electrical;
pub mod i18n;
pub mod mechanical;
pub mod motor;
pub mod resistor;
pub mod tables;
pub mod thermal;
pub mod ui_cli;
