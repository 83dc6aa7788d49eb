// ==========================================
// 面试排期匹配引擎 - 引擎编排器
// ==========================================
// 用途: 协调各阶段的执行顺序
// 流程: 时段目录 → 网络构建 → 容量填充 → 可行性剪枝
//       → 最大流求解 → 结果解码 → 负载均衡
// 红线: 每次调用独占全部中间结构,调用间不共享可变状态
// ==========================================

use crate::config::MatcherConfig;
use crate::domain::matching::MatchOutcome;
use crate::domain::participant::Participant;
use crate::engine::{
    CapacityPopulator, FeasibilityPruner, GraphBuilder, InputValidator, LoadBalancer,
    MatchDecoder, MaxFlowSolver, SlotCatalog,
};
use crate::error::MatcherResult;
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// MatchStats / MatchReport - 运行报告
// ==========================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    // 网络规模
    pub slot_count: usize,
    pub pruned_slots: Vec<String>,

    // 求解
    pub augmentations: usize,
    pub augmentation_cap_hit: bool,

    // 均衡
    pub balance_passes_run: usize,
    pub relocations: usize,
    pub substitutions: usize,

    // 未分配候选人（输入顺序）
    pub unmatched_candidates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub outcome: MatchOutcome,
    pub stats: MatchStats,
}

impl MatchReport {
    /// 是否全部候选人都已分配
    pub fn all_candidates_matched(&self) -> bool {
        self.stats.unmatched_candidates.is_empty()
    }
}

// ==========================================
// InterviewMatcher - 引擎编排器
// ==========================================

pub struct InterviewMatcher {
    config: MatcherConfig,
}

impl InterviewMatcher {
    /// 创建编排器（校验配置）
    pub fn new(config: MatcherConfig) -> MatcherResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// 执行完整匹配流程
    ///
    /// 随机源: config.seed 存在时确定性初始化,否则取系统熵。
    pub fn run(&self, candidates: &[Participant], interviewers: &[Participant]) -> MatchReport {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.run_with_rng(candidates, interviewers, &mut rng)
    }

    /// 先校验参与方数据,再执行匹配
    pub fn run_validated(
        &self,
        candidates: &[Participant],
        interviewers: &[Participant],
    ) -> MatcherResult<MatchReport> {
        InputValidator::validate_all(candidates, interviewers)?;
        Ok(self.run(candidates, interviewers))
    }

    /// 使用外部注入的随机源执行完整匹配流程
    ///
    /// # 参数
    /// - candidates: 候选人列表
    /// - interviewers: 面试官列表
    /// - rng: 负载均衡平局打散所用随机源
    ///
    /// # 返回
    /// 运行报告（无可行分配时 outcome.matches 为空,不视为错误）
    #[instrument(skip_all, fields(
        candidates_count = candidates.len(),
        interviewers_count = interviewers.len(),
        interviewers_per_slot = self.config.interviewers_per_slot
    ))]
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        candidates: &[Participant],
        interviewers: &[Participant],
        rng: &mut R,
    ) -> MatchReport {
        let run_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();
        let clock = Instant::now();
        let config = &self.config;

        info!(run_id = %run_id, "开始执行匹配流程");

        // ==========================================
        // 步骤1: 网络构建 + 容量填充 + 可行性剪枝
        // ==========================================
        debug!("步骤1: 构建流网络");

        let slots = SlotCatalog::collect(candidates, interviewers);
        let mut network = GraphBuilder::build(candidates, interviewers, &slots);
        CapacityPopulator::populate(&mut network, candidates, interviewers, config);
        let pruned_slots = FeasibilityPruner::prune(&mut network, interviewers, config);

        info!(
            node_count = network.node_count(),
            slot_count = slots.len(),
            pruned_count = pruned_slots.len(),
            "流网络构建完成"
        );

        // ==========================================
        // 步骤2: 最大流求解
        // ==========================================
        debug!("步骤2: 执行最大流求解");

        let solution = MaxFlowSolver::new(config.max_augmentations).solve(&network);

        info!(
            augmentations = solution.augmentations,
            flow_value = solution.value(),
            cap_hit = solution.cap_hit,
            "最大流求解完成"
        );

        // ==========================================
        // 步骤3: 结果解码
        // ==========================================
        debug!("步骤3: 解码匹配结果");

        let mut outcome =
            MatchDecoder::decode(&network, &solution.flow, config.interviewers_per_slot);

        info!(matches_count = outcome.matches.len(), "匹配结果解码完成");

        // ==========================================
        // 步骤4: 负载均衡
        // ==========================================
        debug!("步骤4: 执行负载均衡");

        let balance = LoadBalancer::new(candidates, interviewers, config).balance(&mut outcome, rng);

        info!(
            passes = balance.passes_run,
            relocations = balance.relocations,
            substitutions = balance.substitutions,
            "负载均衡完成"
        );

        // ==========================================
        // 返回结果
        // ==========================================

        let unmatched_candidates: Vec<String> = candidates
            .iter()
            .filter(|c| outcome.match_for_candidate(&c.id).is_none())
            .map(|c| c.id.clone())
            .collect();

        if outcome.is_empty() {
            warn!("在当前配置下未能为任何候选人分配时段");
        } else if !unmatched_candidates.is_empty() {
            info!(
                unmatched_count = unmatched_candidates.len(),
                "部分候选人未能分配,已输出全部可行分配"
            );
        }

        MatchReport {
            run_id,
            started_at,
            elapsed_ms: elapsed_millis(clock.elapsed()),
            stats: MatchStats {
                slot_count: slots.len(),
                pruned_slots,
                augmentations: solution.augmentations,
                augmentation_cap_hit: solution.cap_hit,
                balance_passes_run: balance.passes_run,
                relocations: balance.relocations,
                substitutions: balance.substitutions,
                unmatched_candidates,
            },
            outcome,
        }
    }
}

/// 一次性匹配（校验配置 → 执行流程 → 返回输出形态）
///
/// # 示例
/// ```
/// use interview_matcher::{match_participants, MatcherConfig, Participant};
///
/// let candidates = vec![Participant::new("carol", ["S1"])];
/// let interviewers = vec![Participant::new("ian", ["S1"])];
/// let outcome = match_participants(&candidates, &interviewers, MatcherConfig::new(1, 5)).unwrap();
/// assert_eq!(outcome.matches[0].candidate, "carol");
/// assert_eq!(outcome.interviews_per_interviewer["ian"], 1);
/// ```
pub fn match_participants(
    candidates: &[Participant],
    interviewers: &[Participant],
    config: MatcherConfig,
) -> MatcherResult<MatchOutcome> {
    let matcher = InterviewMatcher::new(config)?;
    Ok(matcher.run(candidates, interviewers).outcome)
}

/// 耗时毫秒数,超出 u64 时饱和
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
