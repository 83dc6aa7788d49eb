// ==========================================
// 面试排期匹配引擎 - 参与方领域模型
// ==========================================
// 用途: 候选人 / 面试官的可用时段声明
// 红线: 输入只读,一次匹配调用内不可变
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Participant - 参与方
// ==========================================
// JSON 形态: {"id": "...", "slots": ["...", ...]}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,             // 集合内唯一标识
    pub slots: BTreeSet<String>, // 可参加的时段（去重 + 有序）
}

impl Participant {
    /// 构造参与方
    ///
    /// # 参数
    /// - `id`: 参与方标识
    /// - `slots`: 可用时段（重复项会被合并）
    pub fn new<I, S>(id: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    /// 是否声明了某个时段
    pub fn is_available(&self, slot: &str) -> bool {
        self.slots.contains(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deduplicates_slots() {
        let p = Participant::new("alice", ["S2", "S1", "S2"]);
        assert_eq!(p.slots.len(), 2);
        assert_eq!(p.slots.iter().next().map(String::as_str), Some("S1"));
        assert!(p.is_available("S2"));
        assert!(!p.is_available("S3"));
    }

    #[test]
    fn test_deserialize_from_json_array() {
        let p: Participant =
            serde_json::from_str(r#"{"id": "bob", "slots": ["Mon 10:00", "Tue 14:00"]}"#)
                .unwrap();
        assert_eq!(p.id, "bob");
        assert!(p.is_available("Tue 14:00"));
    }
}
