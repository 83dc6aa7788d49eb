use super::builder::FlowNetwork;
use super::node::NodeKind;
use crate::config::MatcherConfig;
use crate::domain::participant::Participant;
use tracing::instrument;

// ==========================================
// CapacityPopulator - 容量填充
// ==========================================
// 规则:
// - 源点 → 面试官            = max_interviews_per_interviewer
// - 面试官 → 时段过滤节点     = 1（仅声明过的时段）
// - 时段过滤节点 → 时段节点   = 1
// - 时段过滤节点 → 汇点       = interviewers_per_slot - 1
// - 时段节点 → 候选人         = 1（仅声明过的时段）
// - 候选人 → 汇点             = 1
pub struct CapacityPopulator;

impl CapacityPopulator {
    /// 按配置填充容量矩阵（原地修改）
    ///
    /// 参与方按在列表中的位置定位节点,列表顺序必须与构建网络时一致。
    #[instrument(skip_all, fields(
        interviewers_per_slot = config.interviewers_per_slot,
        max_interviews_per_interviewer = config.max_interviews_per_interviewer
    ))]
    pub fn populate(
        network: &mut FlowNetwork,
        candidates: &[Participant],
        interviewers: &[Participant],
        config: &MatcherConfig,
    ) {
        let source = network.source();
        let sink = network.sink();
        // 超出 i64 范围的上限按 i64::MAX 处理（等价于不限）
        let per_interviewer = saturating_capacity(config.max_interviews_per_interviewer);
        let filler_units = saturating_capacity(config.interviewers_per_slot.saturating_sub(1));

        // 源点 → 面试官, 面试官 → 时段过滤节点
        for (pos, interviewer) in interviewers.iter().enumerate() {
            let node = network.index.node_id(NodeKind::Interviewer(pos));
            network.capacity[(source, node)] = per_interviewer;

            for slot in &interviewer.slots {
                if let Some(slot_filter) = network.index.slot_filter_node(slot) {
                    network.capacity[(node, slot_filter)] = 1;
                }
            }
        }

        // 时段过滤节点 → 时段节点 / 汇点
        for slot_filter in network.info.slot_filters.clone() {
            let slot = network.info.slot_of_filter(slot_filter);
            network.capacity[(slot_filter, slot)] = 1;
            network.capacity[(slot_filter, sink)] = filler_units;
        }

        // 时段节点 → 候选人, 候选人 → 汇点
        for (pos, candidate) in candidates.iter().enumerate() {
            let node = network.index.node_id(NodeKind::Candidate(pos));

            for slot in &candidate.slots {
                if let Some(slot_node) = network.index.slot_node(slot) {
                    network.capacity[(slot_node, node)] = 1;
                }
            }

            network.capacity[(node, sink)] = 1;
        }

        debug_assert!(network.capacity.is_non_negative(), "容量矩阵出现负值");
    }
}

/// usize → i64 容量,溢出时饱和
fn saturating_capacity(units: usize) -> i64 {
    i64::try_from(units).unwrap_or(i64::MAX)
}
