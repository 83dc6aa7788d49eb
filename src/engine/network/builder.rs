use super::matrix::SquareMatrix;
use super::node::{GraphInfo, NodeIndex};
use crate::domain::participant::Participant;
use tracing::instrument;

// ==========================================
// FlowNetwork - 流网络上下文
// ==========================================
// 每次匹配调用独占一份,按引用在各阶段之间传递
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork {
    pub index: NodeIndex,
    pub info: GraphInfo,
    pub capacity: SquareMatrix,
}

impl FlowNetwork {
    /// 节点总数
    pub fn node_count(&self) -> usize {
        self.capacity.size()
    }

    pub fn source(&self) -> usize {
        self.info.source
    }

    pub fn sink(&self) -> usize {
        self.info.sink
    }
}

// ==========================================
// GraphBuilder - 网络骨架构建
// ==========================================
pub struct GraphBuilder;

impl GraphBuilder {
    /// 分配分层节点 id,生成全零容量矩阵与节点分区
    ///
    /// # 参数
    /// - `candidates`: 候选人列表
    /// - `interviewers`: 面试官列表
    /// - `slots`: 时段目录（已排序）
    ///
    /// # 返回
    /// 容量全为 0 的 FlowNetwork,大小为 1 + I + 2S + C + 1
    #[instrument(skip_all, fields(
        candidates_count = candidates.len(),
        interviewers_count = interviewers.len(),
        slots_count = slots.len()
    ))]
    pub fn build(
        candidates: &[Participant],
        interviewers: &[Participant],
        slots: &[String],
    ) -> FlowNetwork {
        let index = NodeIndex::new(
            interviewers.iter().map(|p| p.id.clone()).collect(),
            slots.to_vec(),
            candidates.iter().map(|p| p.id.clone()).collect(),
        );
        let info = index.graph_info();
        let capacity = SquareMatrix::zeros(index.node_count());

        FlowNetwork {
            index,
            info,
            capacity,
        }
    }
}
