//! 전동기 정격전류, Y-Δ 기동, 직입 기동 보호기기 선정 모듈 모음.

pub mod nominal;
pub mod protection;
pub mod star_delta;

pub use nominal::*;
pub use protection::*;
pub use star_delta::*;
