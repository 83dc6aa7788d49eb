// ==========================================
// 面试排期匹配引擎 - 流网络构建
// ==========================================
// 职责: 由可用时段数据构建带容量的分层流网络
// 输入: 候选人列表 + 面试官列表 + 时段目录 + 匹配配置
// 输出: FlowNetwork（节点索引 + 容量矩阵 + 节点分区）
// ==========================================
// 分层: 源点 → 面试官 → 时段过滤节点 → 时段节点 → 候选人 → 汇点
// 时段过滤节点: 每位面试官贡献一个单位,其中恰好一个单位经时段节点
//              流向候选人,其余 interviewers_per_slot - 1 个单位直接流向汇点
// ==========================================

mod builder;
mod matrix;
mod node;
mod populator;
mod pruner;


pub use builder::{FlowNetwork, GraphBuilder};
pub use matrix::SquareMatrix;
pub use node::{GraphInfo, NodeIndex, NodeKind};
pub use populator::CapacityPopulator;
pub use pruner::FeasibilityPruner;
