//! 기어/풀리 다단 감속과 볼스크류 직선 운동 계산 모듈.

pub mod transmission;

pub use transmission::*;
