// ==========================================
// 面试排期匹配引擎 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 范围: 配置错误 + 输入数据错误
// 红线: 匹配核心本身不返回错误（无可行分配 = 空 matches）
// ==========================================

use crate::domain::types::ParticipantRole;
use thiserror::Error;

/// 匹配引擎错误类型
#[derive(Error, Debug)]
pub enum MatcherError {
    // ===== 配置错误 =====
    #[error("每个时段的面试官人数无效: {0}（必须为正整数）")]
    InvalidInterviewersPerSlot(usize),

    #[error("每位面试官的面试上限无效: {0}（必须为正整数）")]
    InvalidMaxInterviewsPerInterviewer(usize),

    #[error("最大增广次数无效: {0}（必须为正整数，或不设置）")]
    InvalidMaxAugmentations(usize),

    #[error("配置解析失败: {0}")]
    ConfigParseError(String),

    // ===== 输入数据错误 =====
    #[error("{role} 第 {position} 条记录缺少 id")]
    MissingId {
        role: ParticipantRole,
        position: usize,
    },

    #[error("{role} {id} 重复声明")]
    DuplicateId { role: ParticipantRole, id: String },

    #[error("{role} {id} 的可用时段为空")]
    EmptySlots { role: ParticipantRole, id: String },

    #[error("{role} {id} 的第 {position} 个时段标识为空")]
    BlankSlot {
        role: ParticipantRole,
        id: String,
        position: usize,
    },

    // ===== 业务结果 =====
    #[error("在当前配置下无法为任何候选人分配面试时段")]
    NoAssignmentAvailable,
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for MatcherError {
    fn from(err: serde_json::Error) -> Self {
        MatcherError::ConfigParseError(err.to_string())
    }
}

/// Result 类型别名
pub type MatcherResult<T> = Result<T, MatcherError>;
