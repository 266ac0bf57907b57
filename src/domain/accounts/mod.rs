//! 계정 도메인 모듈

pub mod account;

pub use account::{Account, AccountStatus};
