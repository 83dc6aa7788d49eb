// ==========================================
// 面试排期匹配引擎 - 核心库
// ==========================================
// 系统定位: 候选人 × 时段 × 面试官 的批量分配
// 硬约束: 每个时段恰好 interviewers_per_slot 位面试官,双方只参加声明过的时段
// 软目标: 面试官负载尽量均衡
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 参与方与匹配结果
pub mod domain;

// 引擎层 - 流网络与求解
pub mod engine;

// 配置层 - 匹配配置
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::MatcherConfig;
pub use domain::{MatchOutcome, Participant, ParticipantRole, SlotMatch};
pub use engine::{match_participants, InterviewMatcher, MatchReport, MatchStats};
pub use error::{MatcherError, MatcherResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "面试排期匹配引擎";
