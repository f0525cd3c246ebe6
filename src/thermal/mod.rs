//! 판넬(외함) 열수지 계산 모듈.

pub mod panel_cooling;

pub use panel_cooling::*;
