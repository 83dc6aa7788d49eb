// ==========================================
// 面试排期匹配引擎 - 领域模型层
// ==========================================
// 职责: 定义输入参与方、匹配输出与基础类型
// 红线: 不含引擎逻辑
// ==========================================

pub mod matching;
pub mod participant;
pub mod types;

// 重导出核心类型
pub use matching::{MatchOutcome, SlotMatch};
pub use participant::Participant;
pub use types::ParticipantRole;
