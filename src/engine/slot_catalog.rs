// ==========================================
// 面试排期匹配引擎 - 时段目录
// ==========================================
// 职责: 汇总双方声明的全部时段
// 输出: 去重 + 字典序排序的时段列表
// ==========================================

use crate::domain::participant::Participant;
use std::collections::BTreeSet;

// ==========================================
// SlotCatalog - 时段目录
// ==========================================
pub struct SlotCatalog;

impl SlotCatalog {
    /// 收集候选人与面试官引用的全部时段
    ///
    /// # 返回
    /// 去重后按字典序排列的时段标识
    pub fn collect(candidates: &[Participant], interviewers: &[Participant]) -> Vec<String> {
        candidates
            .iter()
            .chain(interviewers.iter())
            .flat_map(|p| p.slots.iter())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
