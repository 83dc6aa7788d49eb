// ==========================================
// 面试排期匹配引擎 - 配置层
// ==========================================
// 职责: 匹配配置的加载、默认值与校验
// 来源: 外部读取器提供的 JSON / 直接构造
// ==========================================

pub mod matcher_config;

// 重导出核心配置
pub use matcher_config::{
    config_keys, MatcherConfig, DEFAULT_BALANCE_PASSES, DEFAULT_INTERVIEWERS_PER_SLOT,
    DEFAULT_MAX_INTERVIEWS_PER_INTERVIEWER,
};
