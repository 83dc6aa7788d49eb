// ==========================================
// 面试排期匹配引擎 - 输入校验
// ==========================================
// 职责: 匹配前的参与方数据结构校验（可选前置步骤）
// 规则:
// - id 非空
// - 可用时段非空,且不含空白时段标识
// - 同一集合内 id 唯一
// ==========================================

use crate::domain::participant::Participant;
use crate::domain::types::ParticipantRole;
use crate::error::{MatcherError, MatcherResult};
use std::collections::HashSet;

// ==========================================
// InputValidator - 输入校验器
// ==========================================
pub struct InputValidator;

impl InputValidator {
    /// 校验单个参与方集合
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err: 第一条违规（position 从 1 开始计数）
    pub fn validate(role: ParticipantRole, participants: &[Participant]) -> MatcherResult<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(participants.len());

        for (index, participant) in participants.iter().enumerate() {
            let id = participant.id.trim();
            if id.is_empty() {
                return Err(MatcherError::MissingId {
                    role,
                    position: index + 1,
                });
            }

            if participant.slots.is_empty() {
                return Err(MatcherError::EmptySlots {
                    role,
                    id: participant.id.clone(),
                });
            }

            if let Some(position) = participant.slots.iter().position(|s| s.trim().is_empty()) {
                return Err(MatcherError::BlankSlot {
                    role,
                    id: participant.id.clone(),
                    position: position + 1,
                });
            }

            if !seen.insert(participant.id.as_str()) {
                return Err(MatcherError::DuplicateId {
                    role,
                    id: participant.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// 校验候选人与面试官两个集合
    pub fn validate_all(
        candidates: &[Participant],
        interviewers: &[Participant],
    ) -> MatcherResult<()> {
        Self::validate(ParticipantRole::Candidate, candidates)?;
        Self::validate(ParticipantRole::Interviewer, interviewers)?;
        Ok(())
    }
}
