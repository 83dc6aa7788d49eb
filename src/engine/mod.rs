// ==========================================
// 面试排期匹配引擎 - 引擎层
// ==========================================
// 职责: 流网络建模、最大流求解、结果解码、负载均衡
// 红线: 引擎无 I/O,每次调用为一次性批量计算
// ==========================================

pub mod load_balancer;
pub mod match_decoder;
pub mod max_flow;
pub mod network;
pub mod orchestrator;
pub mod slot_catalog;
pub mod validation;

// 重导出核心引擎
pub use load_balancer::{BalanceStats, LoadBalancer};
pub use match_decoder::MatchDecoder;
pub use max_flow::{MaxFlowSolution, MaxFlowSolver, ResidualView};
pub use network::{
    CapacityPopulator, FeasibilityPruner, FlowNetwork, GraphBuilder, GraphInfo, NodeIndex,
    NodeKind, SquareMatrix,
};
pub use orchestrator::{match_participants, InterviewMatcher, MatchReport, MatchStats};
pub use slot_catalog::SlotCatalog;
pub use validation::InputValidator;
