// ==========================================
// 面试排期匹配引擎 - 日志初始化
// ==========================================
// 工具: tracing-subscriber（EnvFilter + fmt）
// 默认只输出本库 info 级别: 增广上限、空结果等告警 + 各步骤完成统计
// 红线: 只在调用方显式请求时安装全局 subscriber,重复调用不覆盖
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时使用的过滤指令
pub const DEFAULT_DIRECTIVE: &str = "interview_matcher=info";

/// 测试环境过滤指令（展开每次增广与均衡动作）
pub const TEST_DIRECTIVE: &str = "interview_matcher=debug";

/// 安装全局日志 subscriber
///
/// # 环境变量
/// - RUST_LOG: 覆盖默认过滤指令
///   例如: RUST_LOG=interview_matcher::engine::max_flow=debug
///
/// # 返回
/// - true: 本次完成安装
/// - false: 进程内已有全局 subscriber,保持原状
///
/// # 示例
/// ```
/// use interview_matcher::{logging, match_participants, MatcherConfig, Participant};
///
/// assert!(logging::init());
/// assert!(!logging::init());
///
/// let candidates = vec![Participant::new("C1", ["S1"])];
/// let interviewers = vec![Participant::new("I1", ["S1"])];
/// let outcome = match_participants(&candidates, &interviewers, MatcherConfig::default()).unwrap();
/// assert_eq!(outcome.matches.len(), 1);
/// ```
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}

/// 测试用日志: 输出到测试捕获流,可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_DIRECTIVE))
        .with_test_writer()
        .try_init();
}
