use super::builder::FlowNetwork;
use crate::config::MatcherConfig;
use crate::domain::participant::Participant;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// FeasibilityPruner - 可行性剪枝
// ==========================================
// 声明某时段的面试官人数 < interviewers_per_slot 时,
// 清空该时段过滤节点的整列入边,求解前即判定不可达
pub struct FeasibilityPruner;

impl FeasibilityPruner {
    /// 剪除人手不足的时段
    ///
    /// # 返回
    /// 被剪除的时段（时段目录顺序）
    #[instrument(skip_all, fields(interviewers_per_slot = config.interviewers_per_slot))]
    pub fn prune(
        network: &mut FlowNetwork,
        interviewers: &[Participant],
        config: &MatcherConfig,
    ) -> Vec<String> {
        let mut staffing: HashMap<&str, usize> = HashMap::new();
        for interviewer in interviewers {
            for slot in &interviewer.slots {
                *staffing.entry(slot.as_str()).or_insert(0) += 1;
            }
        }

        let mut pruned = Vec::new();
        for (pos, slot) in network.index.slots().iter().enumerate() {
            let available = staffing.get(slot.as_str()).copied().unwrap_or(0);
            if available < config.interviewers_per_slot {
                let slot_filter = network.info.slot_filters.start + pos;
                network.capacity.clear_column(slot_filter);
                debug!(slot = %slot, available, "时段人手不足,已剪除");
                pruned.push(slot.clone());
            }
        }

        pruned
    }
}
