//! `wordbook_core`：纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI 或其他前端都能复用同一套逻辑
//! - **分层清晰**：command -> session -> store，结果统一收敛为 `Outcome`
//! - **存储可替换**：文件读写通过 `Storage` trait 注入，测试可用内存实现
pub mod command;
pub mod dictionary;
pub mod outcome;
pub mod session;
pub mod store;
