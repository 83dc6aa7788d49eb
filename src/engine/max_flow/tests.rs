use super::*;
use crate::config::MatcherConfig;
use crate::domain::participant::Participant;
use crate::engine::network::{
    CapacityPopulator, FeasibilityPruner, FlowNetwork, GraphBuilder, SquareMatrix,
};
use crate::engine::slot_catalog::SlotCatalog;

// ==========================================
// 测试辅助函数
// ==========================================

fn prepare(
    candidates: &[Participant],
    interviewers: &[Participant],
    config: &MatcherConfig,
) -> FlowNetwork {
    let slots = SlotCatalog::collect(candidates, interviewers);
    let mut network = GraphBuilder::build(candidates, interviewers, &slots);
    CapacityPopulator::populate(&mut network, candidates, interviewers, config);
    FeasibilityPruner::prune(&mut network, interviewers, config);
    network
}

/// 断言流守恒、容量约束与反对称性
fn assert_valid_flow(network: &FlowNetwork, flow: &SquareMatrix) {
    let n = network.node_count();
    assert!(flow.is_antisymmetric());

    for i in 0..n {
        for j in 0..n {
            let cap = network.capacity[(i, j)];
            if cap > 0 {
                assert!(flow[(i, j)] >= 0, "边 {}→{} 流量为负", i, j);
            }
            assert!(flow[(i, j)] <= cap, "边 {}→{} 超出容量", i, j);
        }
    }

    for node in 1..n - 1 {
        // 反对称矩阵下,行和为 0 等价于流入 = 流出
        assert_eq!(flow.row_sum(node), 0, "节点 {} 流量不守恒", node);
    }

    assert_eq!(flow.row_sum(network.source()), -flow.row_sum(network.sink()));
}

// ==========================================
// 基本求解
// ==========================================

#[test]
fn test_solve_single_pair() {
    let candidates = vec![Participant::new("C1", ["S1"])];
    let interviewers = vec![Participant::new("I1", ["S1"])];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(1, 10));

    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_eq!(solution.value(), 1);
    assert_eq!(solution.augmentations, 1);
    assert!(!solution.cap_hit);
    assert_valid_flow(&network, &solution.flow);
}

#[test]
fn test_solve_empty_network() {
    let network = prepare(&[], &[], &MatcherConfig::default());
    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_eq!(solution.value(), 0);
    assert_eq!(solution.augmentations, 0);
}

#[test]
fn test_solve_panel_of_two() {
    let candidates = vec![
        Participant::new("C1", ["S1", "S2"]),
        Participant::new("C2", ["S2"]),
    ];
    let interviewers = vec![
        Participant::new("I1", ["S1", "S2"]),
        Participant::new("I2", ["S1", "S2"]),
    ];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(2, 10));

    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_valid_flow(&network, &solution.flow);

    // 两个时段各需 2 位面试官: 4 个单位,2 名候选人
    assert_eq!(solution.value(), 4);
    let sink = network.sink();
    for c in network.info.candidates.clone() {
        assert_eq!(solution.flow[(c, sink)], 1);
    }
}

#[test]
fn test_solve_respects_interview_cap() {
    let candidates = vec![
        Participant::new("C1", ["S1"]),
        Participant::new("C2", ["S2"]),
        Participant::new("C3", ["S3"]),
    ];
    let interviewers = vec![Participant::new("I1", ["S1", "S2", "S3"])];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(1, 2));

    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_valid_flow(&network, &solution.flow);
    assert_eq!(solution.value(), 2);
}

#[test]
fn test_solve_reroutes_through_reverse_edges() {
    // 首条路径把 C1 放进 S1 后, C2 只能经反向边把 C1 挪到 S2
    let candidates = vec![
        Participant::new("C1", ["S1", "S2"]),
        Participant::new("C2", ["S1"]),
    ];
    let interviewers = vec![
        Participant::new("I1", ["S1"]),
        Participant::new("I2", ["S2"]),
    ];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(1, 5));

    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_valid_flow(&network, &solution.flow);
    assert_eq!(solution.value(), 2);

    let idx = &network.index;
    let s1 = idx.slot_node("S1").unwrap();
    let c2 = idx.candidate_node("C2").unwrap();
    assert_eq!(solution.flow[(s1, c2)], 1);
}

#[test]
fn test_solve_stops_at_augmentation_cap() {
    let candidates = vec![
        Participant::new("C1", ["S1"]),
        Participant::new("C2", ["S2"]),
        Participant::new("C3", ["S3"]),
    ];
    let interviewers = vec![Participant::new("I1", ["S1", "S2", "S3"])];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(1, 10));

    let solution = MaxFlowSolver::new(Some(2)).solve(&network);
    assert!(solution.cap_hit);
    assert_eq!(solution.augmentations, 2);
    assert_eq!(solution.value(), 2);
    assert_valid_flow(&network, &solution.flow);
}

#[test]
fn test_solve_is_deterministic() {
    let candidates = vec![
        Participant::new("C1", ["S1", "S2", "S3"]),
        Participant::new("C2", ["S2", "S3"]),
        Participant::new("C3", ["S1"]),
    ];
    let interviewers = vec![
        Participant::new("I1", ["S1", "S2"]),
        Participant::new("I2", ["S2", "S3"]),
        Participant::new("I3", ["S1", "S3"]),
    ];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(2, 3));

    let first = MaxFlowSolver::new(None).solve(&network);
    let second = MaxFlowSolver::new(None).solve(&network);
    assert_eq!(first.flow, second.flow);
    assert_valid_flow(&network, &first.flow);
}

// ==========================================
// 邻居扩展顺序
// ==========================================

#[test]
fn test_source_prefers_least_loaded_interviewer() {
    // 三个时段三位面试官: 源点按剩余容量降序,首轮增广应把负载摊开
    let candidates = vec![
        Participant::new("C1", ["S1"]),
        Participant::new("C2", ["S2"]),
        Participant::new("C3", ["S3"]),
    ];
    let interviewers = vec![
        Participant::new("I1", ["S1", "S2", "S3"]),
        Participant::new("I2", ["S1", "S2", "S3"]),
        Participant::new("I3", ["S1", "S2", "S3"]),
    ];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(1, 10));

    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_eq!(solution.value(), 3);
    for i in network.info.interviewers.clone() {
        assert_eq!(solution.flow[(0, i)], 1);
    }
}

#[test]
fn test_filler_units_wait_for_candidate_unit() {
    let candidates = vec![Participant::new("C1", ["S1"])];
    let interviewers = vec![
        Participant::new("I1", ["S1"]),
        Participant::new("I2", ["S1"]),
    ];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(2, 5));

    // 空流时,时段过滤节点不能直接流向汇点
    let flow = SquareMatrix::zeros(network.node_count());
    let path = MaxFlowSolver::find_augmenting_path(&network, &flow).unwrap();
    let sf = network.index.slot_filter_node("S1").unwrap();
    let slot = network.index.slot_node("S1").unwrap();
    assert!(path.contains(&(sf, slot)));
    assert!(!path.contains(&(sf, network.sink())));

    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_eq!(solution.flow[(sf, slot)], 1);
    assert_eq!(solution.flow[(sf, network.sink())], 1);
}

#[test]
fn test_slot_prefers_unassigned_candidate() {
    let candidates = vec![
        Participant::new("C1", ["S1"]),
        Participant::new("C2", ["S1"]),
    ];
    let interviewers = vec![Participant::new("I1", ["S1"])];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(1, 5));
    let c1 = network.index.candidate_node("C1").unwrap();
    let c2 = network.index.candidate_node("C2").unwrap();

    // C1 已占用汇点容量时,时段节点应优先扩展 C2
    let mut flow = SquareMatrix::zeros(network.node_count());
    flow[(c1, network.sink())] = 1;
    flow[(network.sink(), c1)] = -1;

    let slot = network.index.slot_node("S1").unwrap();
    let view = ResidualView::new(&network, &flow);
    let order = super::neighbor_order::strategy_for(network.index.kind_of(slot))(slot, &view);
    assert_eq!(order, vec![c2, c1]);
}

#[test]
fn test_pruned_slot_carries_no_flow() {
    let candidates = vec![Participant::new("C1", ["S1"])];
    let interviewers = vec![Participant::new("I1", ["S1"])];
    let network = prepare(&candidates, &interviewers, &MatcherConfig::new(2, 5));

    let solution = MaxFlowSolver::new(None).solve(&network);
    assert_eq!(solution.value(), 0);
    assert!(MaxFlowSolver::find_augmenting_path(&network, &solution.flow).is_none());
}
