use super::neighbor_order::{strategy_for, ResidualView};
use super::search_node::SearchArena;
use crate::engine::network::{FlowNetwork, SquareMatrix};
use std::collections::VecDeque;
use tracing::{debug, instrument, warn};

// ==========================================
// MaxFlowSolution - 求解结果
// ==========================================
#[derive(Debug, Clone)]
pub struct MaxFlowSolution {
    /// 流量矩阵（反对称: flow[i][j] == -flow[j][i]）
    pub flow: SquareMatrix,
    /// 增广次数（每次恰好增加 1 个单位）
    pub augmentations: usize,
    /// 是否因增广次数上限提前停止
    pub cap_hit: bool,
}

impl MaxFlowSolution {
    /// 总流量 = 源点流出之和
    pub fn value(&self) -> i64 {
        self.flow.row_sum(0)
    }
}

// ==========================================
// MaxFlowSolver - 最大流求解器
// ==========================================
pub struct MaxFlowSolver {
    max_augmentations: Option<usize>,
}

impl MaxFlowSolver {
    /// 构造函数
    ///
    /// # 参数
    /// - `max_augmentations`: 增广次数硬上限（None 表示不限制）
    pub fn new(max_augmentations: Option<usize>) -> Self {
        Self { max_augmentations }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算最大流
    ///
    /// 循环: 搜索一条增广路径 → 沿路径 +1、反向 -1 → 直至搜索失败
    #[instrument(skip_all, fields(
        node_count = network.node_count(),
        max_augmentations = ?self.max_augmentations
    ))]
    pub fn solve(&self, network: &FlowNetwork) -> MaxFlowSolution {
        let mut flow = SquareMatrix::zeros(network.node_count());
        let mut augmentations = 0usize;
        let mut cap_hit = false;

        loop {
            if let Some(cap) = self.max_augmentations {
                if augmentations >= cap {
                    warn!(augmentations, "达到增广次数上限,提前停止求解");
                    cap_hit = true;
                    break;
                }
            }

            let Some(path) = Self::find_augmenting_path(network, &flow) else {
                break;
            };

            for &(from, to) in &path {
                flow[(from, to)] += 1;
                flow[(to, from)] -= 1;
            }
            augmentations += 1;
            debug!(augmentations, path_len = path.len(), "完成一次增广");
        }

        debug_assert!(flow.is_antisymmetric(), "流量矩阵失去反对称性");

        MaxFlowSolution {
            flow,
            augmentations,
            cap_hit,
        }
    }

    /// 在残量图上搜索一条源点到汇点的增广路径
    ///
    /// 队列式遍历,出队时判定汇点与访问标记;邻居顺序由节点类型策略决定。
    ///
    /// # 返回
    /// - Some(path): 边序列 (from, to)
    /// - None: 不存在增广路径
    pub fn find_augmenting_path(
        network: &FlowNetwork,
        flow: &SquareMatrix,
    ) -> Option<Vec<(usize, usize)>> {
        let view = ResidualView::new(network, flow);
        let node_count = network.node_count();
        let sink = network.sink();

        let mut arena = SearchArena::with_capacity(node_count);
        let mut visited = vec![false; node_count];
        let mut frontier = VecDeque::new();
        frontier.push_back(arena.push(network.source(), None));

        while let Some(handle) = frontier.pop_front() {
            let node = arena.node(handle);

            if node == sink {
                return Some(arena.path_to(handle));
            }

            if visited[node] {
                continue;
            }
            visited[node] = true;

            let expand = strategy_for(network.index.kind_of(node));
            for next in expand(node, &view) {
                if !visited[next] {
                    frontier.push_back(arena.push(next, Some(handle)));
                }
            }
        }

        None
    }
}
