//! 전력/전류/전압강하 기본식과 케이블 사이징 모듈 모음.

pub mod cable_sizing;
pub mod formulas;
pub mod system;

pub use cable_sizing::*;
pub use formulas::*;
pub use system::*;
