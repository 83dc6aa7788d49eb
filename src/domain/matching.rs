// ==========================================
// 面试排期匹配引擎 - 匹配结果领域模型
// ==========================================
// 输出形态:
// {
//   "matches": [{"slot", "candidate", "interviewers": [...]}],
//   "interviews_per_interviewer": {id -> 次数}
// }
// ==========================================

use crate::error::{MatcherError, MatcherResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// SlotMatch - 单个时段的完整分配
// ==========================================
// 红线: interviewers 数量恒等于 interviewers_per_slot,候选人恰好一名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotMatch {
    pub slot: String,
    pub candidate: String,
    pub interviewers: Vec<String>,
}

impl SlotMatch {
    /// 面试官是否在本场面试小组中
    pub fn has_interviewer(&self, interviewer_id: &str) -> bool {
        self.interviewers.iter().any(|i| i == interviewer_id)
    }
}

// ==========================================
// MatchOutcome - 一次匹配调用的输出
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub matches: Vec<SlotMatch>,
    /// 每位面试官（含未被使用者,值为 0）的面试场次
    pub interviews_per_interviewer: BTreeMap<String, usize>,
}

impl MatchOutcome {
    /// 是否没有任何分配
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// 已被分配的候选人
    pub fn matched_candidates(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.candidate.as_str())
    }

    /// 查找某个候选人的分配
    pub fn match_for_candidate(&self, candidate_id: &str) -> Option<&SlotMatch> {
        self.matches.iter().find(|m| m.candidate == candidate_id)
    }

    /// 面试总场次（所有面试官负载之和）
    pub fn total_interviews(&self) -> usize {
        self.interviews_per_interviewer.values().sum()
    }

    /// 将"无任何分配"转换为错误
    ///
    /// 匹配核心只用空列表表达无可行分配,是否视为失败由调用方决定。
    pub fn ensure_assigned(self) -> MatcherResult<Self> {
        if self.is_empty() {
            return Err(MatcherError::NoAssignmentAvailable);
        }
        Ok(self)
    }
}
