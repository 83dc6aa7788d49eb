// ==========================================
// 面试排期匹配引擎 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 参与方角色 (Participant Role)
// ==========================================
// 两个互不相交的集合: 候选人 / 面试官
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Candidate,   // 候选人
    Interviewer, // 面试官
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantRole::Candidate => write!(f, "候选人"),
            ParticipantRole::Interviewer => write!(f, "面试官"),
        }
    }
}
