// ==========================================
// 按节点类型的邻居扩展顺序（策略表）
// ==========================================
// 源点:         面试官按源点剩余容量降序（已分配场次少者优先）
// 面试官:       时段过滤节点按当前已占用面试官数升序
// 时段过滤节点: 先时段节点,再汇点（时段尚未承载候选人单位时跳过汇点）,
//               最后是回退到面试官的反向残量边
// 时段节点:     未分配候选人优先,其次已分配候选人,最后回退到时段过滤节点
// 其他:         按节点 id 降序
// ==========================================
// 每个策略只返回残量 > 0 的邻居
// ==========================================

use crate::engine::network::{FlowNetwork, NodeKind, SquareMatrix};

/// 残量图只读视图
pub struct ResidualView<'a> {
    pub network: &'a FlowNetwork,
    pub flow: &'a SquareMatrix,
}

impl<'a> ResidualView<'a> {
    pub fn new(network: &'a FlowNetwork, flow: &'a SquareMatrix) -> Self {
        Self { network, flow }
    }

    /// 残量 = capacity[i][j] - flow[i][j]
    #[inline]
    pub fn residual(&self, from: usize, to: usize) -> i64 {
        self.network.capacity[(from, to)] - self.flow[(from, to)]
    }

    #[inline]
    fn has_residual(&self, from: usize, to: usize) -> bool {
        self.residual(from, to) > 0
    }

    /// 时段过滤节点当前已接收的面试官单位数
    fn filter_fill(&self, slot_filter: usize) -> i64 {
        let info = &self.network.info;
        self.flow[(slot_filter, info.sink)] + self.flow[(slot_filter, info.slot_of_filter(slot_filter))]
    }
}

/// 邻居扩展策略
pub(crate) type NeighborStrategy = fn(usize, &ResidualView<'_>) -> Vec<usize>;

/// 按节点类型选择扩展策略
pub(crate) fn strategy_for(kind: NodeKind) -> NeighborStrategy {
    match kind {
        NodeKind::Source => source_neighbors,
        NodeKind::Interviewer(_) => interviewer_neighbors,
        NodeKind::SlotFilter(_) => slot_filter_neighbors,
        NodeKind::Slot(_) => slot_neighbors,
        NodeKind::Candidate(_) | NodeKind::Sink => default_neighbors,
    }
}

fn source_neighbors(node: usize, view: &ResidualView<'_>) -> Vec<usize> {
    let mut interviewers: Vec<usize> = view
        .network
        .info
        .interviewers
        .clone()
        .filter(|&i| view.has_residual(node, i))
        .collect();

    // 稳定排序: 同剩余容量时保持 id 升序
    interviewers.sort_by_key(|&i| std::cmp::Reverse(view.residual(node, i)));
    interviewers
}

fn interviewer_neighbors(node: usize, view: &ResidualView<'_>) -> Vec<usize> {
    let mut slot_filters: Vec<usize> = view
        .network
        .info
        .slot_filters
        .clone()
        .filter(|&sf| view.has_residual(node, sf))
        .collect();

    slot_filters.sort_by_key(|&sf| view.filter_fill(sf));
    slot_filters
}

fn slot_filter_neighbors(node: usize, view: &ResidualView<'_>) -> Vec<usize> {
    let info = &view.network.info;
    let slot = info.slot_of_filter(node);
    let mut neighbors = Vec::new();

    if view.has_residual(node, slot) {
        neighbors.push(slot);
    }

    // 候选人单位未到位前不计入陪同面试官单位
    if view.has_residual(node, info.sink) && view.flow[(node, slot)] > 0 {
        neighbors.push(info.sink);
    }

    neighbors.extend(
        info.interviewers
            .clone()
            .rev()
            .filter(|&i| view.has_residual(node, i)),
    );
    neighbors
}

fn slot_neighbors(node: usize, view: &ResidualView<'_>) -> Vec<usize> {
    let info = &view.network.info;

    let (unassigned, assigned): (Vec<usize>, Vec<usize>) = info
        .candidates
        .clone()
        .filter(|&c| view.has_residual(node, c))
        .partition(|&c| view.flow[(c, info.sink)] == 0);

    let mut neighbors = unassigned;
    neighbors.extend(assigned);

    let slot_filter = info.filter_of_slot(node);
    if view.has_residual(node, slot_filter) {
        neighbors.push(slot_filter);
    }
    neighbors
}

fn default_neighbors(node: usize, view: &ResidualView<'_>) -> Vec<usize> {
    (0..view.network.node_count())
        .rev()
        .filter(|&j| view.has_residual(node, j))
        .collect()
}
