// ==========================================
// 面试排期匹配引擎 - 匹配配置
// ==========================================
// 职责: 配置加载（JSON）、默认值、合法性校验
// ==========================================

use crate::error::{MatcherError, MatcherResult};
use serde::{Deserialize, Serialize};

// ==========================================
// 配置键（供外部读取器映射）
// ==========================================
pub mod config_keys {
    pub const INTERVIEWERS_PER_SLOT: &str = "interviewers_per_slot";
    pub const MAX_INTERVIEWS_PER_INTERVIEWER: &str = "max_interviews_per_interviewer";
    pub const BALANCE_PASSES: &str = "balance_passes";
    pub const MAX_AUGMENTATIONS: &str = "max_augmentations";
    pub const SEED: &str = "seed";
}

/// 默认每时段面试官人数
pub const DEFAULT_INTERVIEWERS_PER_SLOT: usize = 1;

/// 默认每位面试官面试上限（等同于不限制）
pub const DEFAULT_MAX_INTERVIEWS_PER_INTERVIEWER: usize = 100_000;

/// 默认负载均衡轮数
pub const DEFAULT_BALANCE_PASSES: usize = 20;

// ==========================================
// MatcherConfig - 匹配配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// 每个时段恰好需要的面试官人数
    #[serde(default = "default_interviewers_per_slot")]
    pub interviewers_per_slot: usize,

    /// 每位面试官最多参加的面试场次
    #[serde(default = "default_max_interviews_per_interviewer")]
    pub max_interviews_per_interviewer: usize,

    /// 负载均衡最大轮数（0 表示跳过均衡）
    #[serde(default = "default_balance_passes")]
    pub balance_passes: usize,

    /// 最大流求解的增广次数硬上限（None 表示不限制）
    #[serde(default)]
    pub max_augmentations: Option<usize>,

    /// 负载均衡随机源种子（None 表示从系统熵初始化）
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_interviewers_per_slot() -> usize {
    DEFAULT_INTERVIEWERS_PER_SLOT
}

fn default_max_interviews_per_interviewer() -> usize {
    DEFAULT_MAX_INTERVIEWS_PER_INTERVIEWER
}

fn default_balance_passes() -> usize {
    DEFAULT_BALANCE_PASSES
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            interviewers_per_slot: DEFAULT_INTERVIEWERS_PER_SLOT,
            max_interviews_per_interviewer: DEFAULT_MAX_INTERVIEWS_PER_INTERVIEWER,
            balance_passes: DEFAULT_BALANCE_PASSES,
            max_augmentations: None,
            seed: None,
        }
    }
}

impl MatcherConfig {
    /// 以两个必填参数构造配置,其余取默认值
    pub fn new(interviewers_per_slot: usize, max_interviews_per_interviewer: usize) -> Self {
        Self {
            interviewers_per_slot,
            max_interviews_per_interviewer,
            ..Self::default()
        }
    }

    /// 设置随机种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 设置负载均衡轮数
    pub fn with_balance_passes(mut self, passes: usize) -> Self {
        self.balance_passes = passes;
        self
    }

    /// 设置增广次数硬上限
    pub fn with_max_augmentations(mut self, cap: usize) -> Self {
        self.max_augmentations = Some(cap);
        self
    }

    /// 从 JSON 字符串加载并校验配置
    ///
    /// # 示例
    /// ```
    /// use interview_matcher::config::MatcherConfig;
    /// let config = MatcherConfig::from_json_str(r#"{"interviewers_per_slot": 2}"#).unwrap();
    /// assert_eq!(config.interviewers_per_slot, 2);
    /// assert_eq!(config.balance_passes, 20);
    /// ```
    pub fn from_json_str(raw: &str) -> MatcherResult<Self> {
        let config: MatcherConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    ///
    /// # 规则
    /// - interviewers_per_slot > 0
    /// - max_interviews_per_interviewer > 0
    /// - max_augmentations 若设置则 > 0
    pub fn validate(&self) -> MatcherResult<()> {
        if self.interviewers_per_slot == 0 {
            return Err(MatcherError::InvalidInterviewersPerSlot(
                self.interviewers_per_slot,
            ));
        }
        if self.max_interviews_per_interviewer == 0 {
            return Err(MatcherError::InvalidMaxInterviewsPerInterviewer(
                self.max_interviews_per_interviewer,
            ));
        }
        if let Some(0) = self.max_augmentations {
            return Err(MatcherError::InvalidMaxAugmentations(0));
        }
        Ok(())
    }
}
