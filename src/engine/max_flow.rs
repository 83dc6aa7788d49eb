// ==========================================
// 面试排期匹配引擎 - 最大流求解器
// ==========================================
// 职责: 在剪枝后的流网络上反复寻找增广路径并饱和,直至不存在增广路径
// 输入: FlowNetwork（容量矩阵只读）
// 输出: 流量矩阵（反对称）+ 增广统计
// ==========================================
// 启发式: 邻居扩展顺序由节点类型决定（见 neighbor_order）
// 注: 返回"某条"合法增广路径,不保证最短
// ==========================================

mod core;
mod neighbor_order;
mod search_node;

#[cfg(test)]
mod tests;

pub use self::core::{MaxFlowSolution, MaxFlowSolver};
pub use neighbor_order::ResidualView;
