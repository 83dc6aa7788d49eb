// ==========================================
// 面试排期匹配引擎 - 匹配结果解码
// ==========================================
// 职责: 将最终流量矩阵解码为时段分配 + 面试官负载表
// 规则: 时段过滤节点"完整" ⇔
//       flow(过滤节点→汇点) + flow(过滤节点→时段节点) == interviewers_per_slot
// 不完整的时段被静默忽略（即"该时段无分配"的表达方式）
// ==========================================

use crate::domain::matching::{MatchOutcome, SlotMatch};
use crate::engine::network::{FlowNetwork, SquareMatrix};
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// MatchDecoder - 结果解码器
// ==========================================
pub struct MatchDecoder;

impl MatchDecoder {
    /// 解码流量矩阵
    ///
    /// # 参数
    /// - `network`: 求解所用的流网络
    /// - `flow`: 最终流量矩阵
    /// - `interviewers_per_slot`: 每时段面试官人数
    ///
    /// # 返回
    /// 按时段目录顺序排列的分配,以及覆盖全部面试官的负载表
    #[instrument(skip_all, fields(interviewers_per_slot = interviewers_per_slot))]
    pub fn decode(
        network: &FlowNetwork,
        flow: &SquareMatrix,
        interviewers_per_slot: usize,
    ) -> MatchOutcome {
        let info = &network.info;
        let index = &network.index;

        let mut interviews_per_interviewer: BTreeMap<String, usize> = index
            .interviewer_ids()
            .iter()
            .map(|id| (id.clone(), 0))
            .collect();

        let mut matches = Vec::new();
        for slot_filter in info.slot_filters.clone() {
            if !Self::is_complete(network, flow, slot_filter, interviewers_per_slot) {
                continue;
            }

            let slot = info.slot_of_filter(slot_filter);
            let Some(candidate) = info
                .candidates
                .clone()
                .find(|&c| flow[(slot, c)] == 1)
                .and_then(|c| index.label_of(c))
            else {
                continue;
            };

            let interviewers: Vec<String> = info
                .interviewers
                .clone()
                .filter(|&i| flow[(i, slot_filter)] == 1)
                .filter_map(|i| index.label_of(i))
                .map(str::to_string)
                .collect();

            debug_assert_eq!(interviewers.len(), interviewers_per_slot);

            for interviewer in &interviewers {
                if let Some(load) = interviews_per_interviewer.get_mut(interviewer) {
                    *load += 1;
                }
            }

            matches.push(SlotMatch {
                slot: index.label_of(slot_filter).unwrap_or_default().to_string(),
                candidate: candidate.to_string(),
                interviewers,
            });
        }

        MatchOutcome {
            matches,
            interviews_per_interviewer,
        }
    }

    /// 时段过滤节点是否已凑齐面试官与候选人
    pub fn is_complete(
        network: &FlowNetwork,
        flow: &SquareMatrix,
        slot_filter: usize,
        interviewers_per_slot: usize,
    ) -> bool {
        let slot = network.info.slot_of_filter(slot_filter);
        let sink = network.sink();
        i64::try_from(interviewers_per_slot)
            .is_ok_and(|quota| flow[(slot_filter, sink)] + flow[(slot_filter, slot)] == quota)
    }
}
