// ==========================================
// 面试排期匹配引擎 - 面试官负载均衡
// ==========================================
// 职责: 在不改变"哪些候选人被分配"的前提下,局部搜索均衡面试官负载
// 输入: 解码后的 MatchOutcome + 双方可用时段
// 输出: 原地更新的 MatchOutcome + 均衡统计
// ==========================================
// 动作:
// (a) 时段迁移: 候选人整场移至另一个空闲时段,换上低负载面试官小组
// (b) 面试官替换: 用低负载面试官替下同场中负载更高的面试官
// 终止: 达到轮数上限,或某轮无任何动作被接受
// 随机性: 仅用于时段迁移时同负载候补面试官之间的平局打散
// ==========================================

use crate::config::MatcherConfig;
use crate::domain::matching::MatchOutcome;
use crate::domain::participant::Participant;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, instrument};

/// 负载均衡统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceStats {
    pub passes_run: usize,
    pub relocations: usize,
    pub substitutions: usize,
}

impl BalanceStats {
    /// 被接受的动作总数
    pub fn moves(&self) -> usize {
        self.relocations + self.substitutions
    }
}

// ==========================================
// LoadBalancer - 负载均衡器
// ==========================================
pub struct LoadBalancer<'a> {
    interviewers: &'a [Participant],
    interviewer_rank: HashMap<&'a str, usize>,
    interviewer_slots: HashMap<&'a str, &'a BTreeSet<String>>,
    candidate_slots: HashMap<&'a str, &'a BTreeSet<String>>,
    interviewers_per_slot: usize,
    max_interviews_per_interviewer: usize,
    max_passes: usize,
}

impl<'a> LoadBalancer<'a> {
    /// 构造函数
    ///
    /// # 参数
    /// - `candidates`: 候选人列表
    /// - `interviewers`: 面试官列表（顺序决定同负载时的处理顺序）
    /// - `config`: 匹配配置（读取 interviewers_per_slot / 面试上限 / 轮数）
    pub fn new(
        candidates: &'a [Participant],
        interviewers: &'a [Participant],
        config: &MatcherConfig,
    ) -> Self {
        Self {
            interviewers,
            interviewer_rank: interviewers
                .iter()
                .enumerate()
                .map(|(rank, p)| (p.id.as_str(), rank))
                .collect(),
            interviewer_slots: interviewers
                .iter()
                .map(|p| (p.id.as_str(), &p.slots))
                .collect(),
            candidate_slots: candidates
                .iter()
                .map(|p| (p.id.as_str(), &p.slots))
                .collect(),
            interviewers_per_slot: config.interviewers_per_slot,
            max_interviews_per_interviewer: config.max_interviews_per_interviewer,
            max_passes: config.balance_passes,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行负载均衡（原地修改 outcome）
    ///
    /// 每轮: 面试官按当前负载升序,逐场尝试 (a) 时段迁移 → (b) 面试官替换。
    /// 某轮无任何动作被接受时提前结束。
    #[instrument(skip_all, fields(
        matches_count = outcome.matches.len(),
        max_passes = self.max_passes
    ))]
    pub fn balance<R: Rng + ?Sized>(&self, outcome: &mut MatchOutcome, rng: &mut R) -> BalanceStats {
        let mut stats = BalanceStats::default();

        for pass in 0..self.max_passes {
            let order = self.interviewers_by_load(&outcome.interviews_per_interviewer);
            let mut moves = 0usize;

            for low in &order {
                for m in 0..outcome.matches.len() {
                    if outcome.matches[m].has_interviewer(low) {
                        continue;
                    }

                    if self.try_relocate(outcome, m, low, rng) {
                        stats.relocations += 1;
                        moves += 1;
                    } else if self.try_substitute(outcome, m, low) {
                        stats.substitutions += 1;
                        moves += 1;
                    }
                }
            }

            stats.passes_run += 1;
            debug!(pass, moves, "负载均衡轮次完成");

            if moves == 0 {
                break;
            }
        }

        stats
    }

    // ==========================================
    // 动作 (a): 时段迁移
    // ==========================================

    fn try_relocate<R: Rng + ?Sized>(
        &self,
        outcome: &mut MatchOutcome,
        m: usize,
        low: &str,
        rng: &mut R,
    ) -> bool {
        let Some((target, new_panel)) = self.plan_relocation(outcome, m, low, rng) else {
            return false;
        };

        let loads = &mut outcome.interviews_per_interviewer;
        let record = &mut outcome.matches[m];

        for id in &record.interviewers {
            if let Some(load) = loads.get_mut(id) {
                *load = load.saturating_sub(1);
            }
        }
        for id in &new_panel {
            *loads.entry(id.clone()).or_insert(0) += 1;
        }

        debug!(
            candidate = %record.candidate,
            from = %record.slot,
            to = %target,
            "时段迁移"
        );

        record.slot = target;
        record.interviewers = new_panel;
        true
    }

    /// 寻找可迁移的空闲时段及新面试官小组
    ///
    /// 条件:
    /// 1) 候选人与 low 均可参加目标时段,且目标时段当前无分配
    /// 2) 目标时段除 low 外仍有足够的可用面试官（且未达面试上限）
    /// 3) 新小组的负载之和严格小于原小组
    fn plan_relocation<R: Rng + ?Sized>(
        &self,
        outcome: &MatchOutcome,
        m: usize,
        low: &str,
        rng: &mut R,
    ) -> Option<(String, Vec<String>)> {
        let loads = &outcome.interviews_per_interviewer;
        let current = &outcome.matches[m];

        if load_of(loads, low) >= self.max_interviews_per_interviewer {
            return None;
        }

        let candidate_slots = self.candidate_slots.get(current.candidate.as_str())?;
        let occupied: HashSet<&str> = outcome.matches.iter().map(|r| r.slot.as_str()).collect();
        let old_sum: usize = current.interviewers.iter().map(|i| load_of(loads, i)).sum();
        let companions = self.interviewers_per_slot.saturating_sub(1);

        for target in candidate_slots.iter() {
            if occupied.contains(target.as_str()) || !self.is_available(low, target) {
                continue;
            }

            let mut pool: Vec<&str> = self
                .eligible_interviewers(target)
                .into_iter()
                .filter(|&i| i != low)
                .filter(|&i| {
                    // 原小组成员迁移后先扣减一次
                    let effective = load_of(loads, i)
                        .saturating_sub(usize::from(current.has_interviewer(i)));
                    effective < self.max_interviews_per_interviewer
                })
                .collect();

            if pool.len() < companions {
                continue;
            }

            // 打乱后稳定排序: 同负载者随机先后
            pool.shuffle(rng);
            pool.sort_by_key(|&i| load_of(loads, i));

            let mut panel: Vec<String> = std::iter::once(low)
                .chain(pool.into_iter().take(companions))
                .map(str::to_string)
                .collect();

            let new_sum: usize = panel.iter().map(|i| load_of(loads, i)).sum();
            if new_sum >= old_sum {
                continue;
            }

            panel.sort_by_key(|i| self.rank_of(i));
            return Some((target.clone(), panel));
        }

        None
    }

    // ==========================================
    // 动作 (b): 面试官替换
    // ==========================================

    /// 用 low 替下同场中第一位负载比 low 至少高 2 的面试官
    fn try_substitute(&self, outcome: &mut MatchOutcome, m: usize, low: &str) -> bool {
        let loads = &outcome.interviews_per_interviewer;
        let record = &outcome.matches[m];

        if !self.is_available(low, &record.slot) {
            return false;
        }

        let low_load = load_of(loads, low);
        if low_load >= self.max_interviews_per_interviewer {
            return false;
        }

        let Some(pos) = record
            .interviewers
            .iter()
            .position(|high| load_of(loads, high) > low_load + 1)
        else {
            return false;
        };

        let high = std::mem::replace(&mut outcome.matches[m].interviewers[pos], low.to_string());
        let loads = &mut outcome.interviews_per_interviewer;
        if let Some(load) = loads.get_mut(&high) {
            *load = load.saturating_sub(1);
        }
        *loads.entry(low.to_string()).or_insert(0) += 1;

        debug!(slot = %outcome.matches[m].slot, from = %high, to = %low, "面试官替换");
        true
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 面试官按当前负载升序（同负载保持输入顺序）
    fn interviewers_by_load(&self, loads: &BTreeMap<String, usize>) -> Vec<String> {
        let mut ids: Vec<String> = self.interviewers.iter().map(|p| p.id.clone()).collect();
        ids.sort_by_key(|id| load_of(loads, id));
        ids
    }

    /// 可参加某时段的全部面试官（输入顺序）
    fn eligible_interviewers(&self, slot: &str) -> Vec<&'a str> {
        self.interviewers
            .iter()
            .filter(|p| p.is_available(slot))
            .map(|p| p.id.as_str())
            .collect()
    }

    fn is_available(&self, interviewer_id: &str, slot: &str) -> bool {
        self.interviewer_slots
            .get(interviewer_id)
            .is_some_and(|slots| slots.contains(slot))
    }

    fn rank_of(&self, interviewer_id: &str) -> usize {
        self.interviewer_rank
            .get(interviewer_id)
            .copied()
            .unwrap_or(usize::MAX)
    }
}

#[inline]
fn load_of(loads: &BTreeMap<String, usize>, interviewer_id: &str) -> usize {
    loads.get(interviewer_id).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matching::SlotMatch;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn slot_match(slot: &str, candidate: &str, interviewers: &[&str]) -> SlotMatch {
        SlotMatch {
            slot: slot.to_string(),
            candidate: candidate.to_string(),
            interviewers: interviewers.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn outcome_of(matches: Vec<SlotMatch>, loads: &[(&str, usize)]) -> MatchOutcome {
        MatchOutcome {
            matches,
            interviews_per_interviewer: loads
                .iter()
                .map(|(id, load)| (id.to_string(), *load))
                .collect(),
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    // ==========================================
    // 面试官替换
    // ==========================================

    #[test]
    fn test_substitution_spreads_single_interviewer_load() {
        let candidates = vec![
            Participant::new("C1", ["S1"]),
            Participant::new("C2", ["S2"]),
            Participant::new("C3", ["S3"]),
        ];
        let interviewers = vec![
            Participant::new("A", ["S1", "S2", "S3"]),
            Participant::new("B", ["S1", "S2", "S3"]),
            Participant::new("C", ["S1", "S2", "S3"]),
        ];
        let config = MatcherConfig::new(1, 10);
        let mut outcome = outcome_of(
            vec![
                slot_match("S1", "C1", &["A"]),
                slot_match("S2", "C2", &["A"]),
                slot_match("S3", "C3", &["A"]),
            ],
            &[("A", 3), ("B", 0), ("C", 0)],
        );

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());

        assert_eq!(outcome.total_interviews(), 3);
        assert!(outcome.interviews_per_interviewer.values().all(|&l| l == 1));
        assert_eq!(stats.substitutions, 2);
        assert_eq!(stats.relocations, 0);

        // 候选人与时段保持不变
        let slots: Vec<_> = outcome
            .matches
            .iter()
            .map(|m| (m.slot.as_str(), m.candidate.as_str()))
            .collect();
        assert_eq!(slots, vec![("S1", "C1"), ("S2", "C2"), ("S3", "C3")]);
    }

    #[test]
    fn test_substitution_requires_availability() {
        let candidates = vec![
            Participant::new("C1", ["S1"]),
            Participant::new("C2", ["S2"]),
        ];
        let interviewers = vec![
            Participant::new("A", ["S1", "S2"]),
            Participant::new("B", ["S9"]),
        ];
        let config = MatcherConfig::new(1, 10);
        let mut outcome = outcome_of(
            vec![slot_match("S1", "C1", &["A"]), slot_match("S2", "C2", &["A"])],
            &[("A", 2), ("B", 0)],
        );

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());

        assert_eq!(stats.moves(), 0);
        assert_eq!(stats.passes_run, 1);
        assert_eq!(outcome.interviews_per_interviewer["A"], 2);
    }

    #[test]
    fn test_no_swap_between_adjacent_loads() {
        let candidates = vec![Participant::new("C1", ["S1"])];
        let interviewers = vec![
            Participant::new("A", ["S1"]),
            Participant::new("B", ["S1"]),
        ];
        let config = MatcherConfig::new(1, 10);
        let mut outcome = outcome_of(vec![slot_match("S1", "C1", &["A"])], &[("A", 1), ("B", 0)]);

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());

        assert_eq!(stats.moves(), 0);
        assert_eq!(outcome.matches[0].interviewers, vec!["A"]);
    }

    // ==========================================
    // 时段迁移
    // ==========================================

    #[test]
    fn test_relocation_moves_match_to_free_slot() {
        let candidates = vec![
            Participant::new("C1", ["S1", "S2"]),
            Participant::new("C2", ["S3"]),
        ];
        let interviewers = vec![
            Participant::new("A", ["S1", "S2", "S3"]),
            Participant::new("B", ["S2"]),
        ];
        let config = MatcherConfig::new(1, 10);
        let mut outcome = outcome_of(
            vec![slot_match("S1", "C1", &["A"]), slot_match("S3", "C2", &["A"])],
            &[("A", 2), ("B", 0)],
        );

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());

        assert_eq!(stats.relocations, 1);
        assert_eq!(outcome.matches[0], slot_match("S2", "C1", &["B"]));
        assert_eq!(outcome.interviews_per_interviewer["A"], 1);
        assert_eq!(outcome.interviews_per_interviewer["B"], 1);
    }

    #[test]
    fn test_relocation_builds_full_panel() {
        let candidates = vec![Participant::new("C1", ["S1", "S2"])];
        let interviewers = vec![
            Participant::new("A", ["S1", "S2"]),
            Participant::new("B", ["S1"]),
            Participant::new("C", ["S2"]),
            Participant::new("D", ["S2"]),
        ];
        let config = MatcherConfig::new(2, 10);
        let mut outcome = outcome_of(
            vec![slot_match("S1", "C1", &["A", "B"])],
            &[("A", 4), ("B", 4), ("C", 0), ("D", 0)],
        );

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());

        assert_eq!(stats.relocations, 1);
        let record = &outcome.matches[0];
        assert_eq!(record.slot, "S2");
        assert_eq!(record.candidate, "C1");
        assert_eq!(record.interviewers, vec!["C", "D"]);
        assert_eq!(outcome.interviews_per_interviewer["A"], 3);
        assert_eq!(outcome.interviews_per_interviewer["B"], 3);
        assert_eq!(outcome.interviews_per_interviewer["C"], 1);
        assert_eq!(outcome.interviews_per_interviewer["D"], 1);
    }

    #[test]
    fn test_relocation_skips_occupied_slot() {
        let candidates = vec![
            Participant::new("C1", ["S1", "S2"]),
            Participant::new("C2", ["S2"]),
        ];
        let interviewers = vec![
            Participant::new("A", ["S1", "S2"]),
            Participant::new("B", ["S2"]),
        ];
        let config = MatcherConfig::new(1, 10);
        let mut outcome = outcome_of(
            vec![slot_match("S1", "C1", &["A"]), slot_match("S2", "C2", &["B"])],
            &[("A", 1), ("B", 1)],
        );

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());
        assert_eq!(stats.moves(), 0);
    }

    // ==========================================
    // 上限与轮数
    // ==========================================

    #[test]
    fn test_respects_interview_cap() {
        let candidates = vec![
            Participant::new("C1", ["S1"]),
            Participant::new("C2", ["S2"]),
            Participant::new("C3", ["S3"]),
        ];
        let interviewers = vec![
            Participant::new("A", ["S1", "S2", "S3"]),
            Participant::new("B", ["S1", "S2", "S3"]),
        ];
        // B 已到达上限 1,不可再接收
        let config = MatcherConfig::new(1, 1);
        let mut outcome = outcome_of(
            vec![
                slot_match("S1", "C1", &["A"]),
                slot_match("S2", "C2", &["A"]),
                slot_match("S3", "C3", &["B"]),
            ],
            &[("A", 2), ("B", 1)],
        );

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());
        assert_eq!(stats.moves(), 0);
        assert_eq!(outcome.interviews_per_interviewer["B"], 1);
    }

    #[test]
    fn test_zero_passes_leaves_outcome_untouched() {
        let candidates = vec![Participant::new("C1", ["S1"]), Participant::new("C2", ["S2"])];
        let interviewers = vec![
            Participant::new("A", ["S1", "S2"]),
            Participant::new("B", ["S1", "S2"]),
        ];
        let config = MatcherConfig::new(1, 10).with_balance_passes(0);
        let original = outcome_of(
            vec![slot_match("S1", "C1", &["A"]), slot_match("S2", "C2", &["A"])],
            &[("A", 2), ("B", 0)],
        );
        let mut outcome = original.clone();

        let stats = LoadBalancer::new(&candidates, &interviewers, &config)
            .balance(&mut outcome, &mut rng());
        assert_eq!(stats, BalanceStats::default());
        assert_eq!(outcome, original);
    }
}
