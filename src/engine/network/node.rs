use std::collections::HashMap;
use std::ops::Range;

// ==========================================
// NodeKind - 节点类型
// ==========================================
// 携带的 usize 为该节点在所属层内的位置（输入顺序 / 时段目录顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Source,
    Interviewer(usize),
    SlotFilter(usize),
    Slot(usize),
    Candidate(usize),
    Sink,
}

// ==========================================
// GraphInfo - 节点分区
// ==========================================
// 四个互不相交的节点 id 区间,求解器启发式与结果解码共用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInfo {
    pub interviewers: Range<usize>,
    pub slot_filters: Range<usize>,
    pub slots: Range<usize>,
    pub candidates: Range<usize>,
    pub source: usize,
    pub sink: usize,
}

impl GraphInfo {
    /// 时段过滤节点对应的时段节点
    #[inline]
    pub fn slot_of_filter(&self, slot_filter: usize) -> usize {
        slot_filter + self.slot_filters.len()
    }

    /// 时段节点对应的时段过滤节点
    #[inline]
    pub fn filter_of_slot(&self, slot: usize) -> usize {
        slot - self.slot_filters.len()
    }
}

// ==========================================
// NodeIndex - 节点 id 与 (类型, 原始标识) 的双向索引
// ==========================================
// 分层编号:
//   0                      源点
//   [1, 1+I)               面试官
//   [1+I, 1+I+S)           时段过滤节点
//   [1+I+S, 1+I+2S)        时段节点
//   [1+I+2S, 1+I+2S+C)     候选人
//   1+I+2S+C               汇点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIndex {
    interviewer_ids: Vec<String>,
    slots: Vec<String>,
    candidate_ids: Vec<String>,
    interviewer_lookup: HashMap<String, usize>,
    slot_lookup: HashMap<String, usize>,
    candidate_lookup: HashMap<String, usize>,
}

impl NodeIndex {
    /// 创建索引
    ///
    /// # 参数
    /// - `interviewer_ids`: 面试官标识（输入顺序）
    /// - `slots`: 时段目录（已排序）
    /// - `candidate_ids`: 候选人标识（输入顺序）
    pub fn new(interviewer_ids: Vec<String>, slots: Vec<String>, candidate_ids: Vec<String>) -> Self {
        let lookup = |ids: &[String]| -> HashMap<String, usize> {
            ids.iter()
                .enumerate()
                .map(|(pos, id)| (id.clone(), pos))
                .collect()
        };

        Self {
            interviewer_lookup: lookup(&interviewer_ids),
            slot_lookup: lookup(&slots),
            candidate_lookup: lookup(&candidate_ids),
            interviewer_ids,
            slots,
            candidate_ids,
        }
    }

    pub fn interviewer_count(&self) -> usize {
        self.interviewer_ids.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_ids.len()
    }

    /// 节点总数 = 1 + I + 2S + C + 1
    pub fn node_count(&self) -> usize {
        self.sink() + 1
    }

    pub fn source(&self) -> usize {
        0
    }

    pub fn sink(&self) -> usize {
        1 + self.interviewer_count() + 2 * self.slot_count() + self.candidate_count()
    }

    /// 节点类型 → 节点 id
    pub fn node_id(&self, kind: NodeKind) -> usize {
        let i = self.interviewer_count();
        let s = self.slot_count();
        match kind {
            NodeKind::Source => 0,
            NodeKind::Interviewer(pos) => 1 + pos,
            NodeKind::SlotFilter(pos) => 1 + i + pos,
            NodeKind::Slot(pos) => 1 + i + s + pos,
            NodeKind::Candidate(pos) => 1 + i + 2 * s + pos,
            NodeKind::Sink => self.sink(),
        }
    }

    /// 节点 id → 节点类型
    pub fn kind_of(&self, node: usize) -> NodeKind {
        debug_assert!(node < self.node_count(), "节点 id 越界: {}", node);

        let i = self.interviewer_count();
        let s = self.slot_count();
        let c = self.candidate_count();

        if node == 0 {
            NodeKind::Source
        } else if node < 1 + i {
            NodeKind::Interviewer(node - 1)
        } else if node < 1 + i + s {
            NodeKind::SlotFilter(node - 1 - i)
        } else if node < 1 + i + 2 * s {
            NodeKind::Slot(node - 1 - i - s)
        } else if node < 1 + i + 2 * s + c {
            NodeKind::Candidate(node - 1 - i - 2 * s)
        } else {
            NodeKind::Sink
        }
    }

    /// 节点类型 → 原始标识（源点/汇点没有原始标识）
    pub fn label(&self, kind: NodeKind) -> Option<&str> {
        match kind {
            NodeKind::Interviewer(pos) => self.interviewer_ids.get(pos),
            NodeKind::SlotFilter(pos) | NodeKind::Slot(pos) => self.slots.get(pos),
            NodeKind::Candidate(pos) => self.candidate_ids.get(pos),
            NodeKind::Source | NodeKind::Sink => None,
        }
        .map(String::as_str)
    }

    /// 节点 id → 原始标识
    pub fn label_of(&self, node: usize) -> Option<&str> {
        self.label(self.kind_of(node))
    }

    pub fn interviewer_node(&self, interviewer_id: &str) -> Option<usize> {
        self.interviewer_lookup
            .get(interviewer_id)
            .map(|&pos| self.node_id(NodeKind::Interviewer(pos)))
    }

    pub fn slot_filter_node(&self, slot: &str) -> Option<usize> {
        self.slot_lookup
            .get(slot)
            .map(|&pos| self.node_id(NodeKind::SlotFilter(pos)))
    }

    pub fn slot_node(&self, slot: &str) -> Option<usize> {
        self.slot_lookup
            .get(slot)
            .map(|&pos| self.node_id(NodeKind::Slot(pos)))
    }

    pub fn candidate_node(&self, candidate_id: &str) -> Option<usize> {
        self.candidate_lookup
            .get(candidate_id)
            .map(|&pos| self.node_id(NodeKind::Candidate(pos)))
    }

    /// 时段目录
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// 面试官标识（输入顺序）
    pub fn interviewer_ids(&self) -> &[String] {
        &self.interviewer_ids
    }

    /// 构建节点分区
    pub fn graph_info(&self) -> GraphInfo {
        let i = self.interviewer_count();
        let s = self.slot_count();
        let c = self.candidate_count();

        GraphInfo {
            interviewers: 1..1 + i,
            slot_filters: 1 + i..1 + i + s,
            slots: 1 + i + s..1 + i + 2 * s,
            candidates: 1 + i + 2 * s..1 + i + 2 * s + c,
            source: 0,
            sink: self.sink(),
        }
    }
}
