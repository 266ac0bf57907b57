//! HTTP 요청/응답 처리 계층 모듈

pub mod token_handlers;
