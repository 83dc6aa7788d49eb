// ==========================================
// 搜索节点簿记
// ==========================================
// 每次入队记录 (节点 id, 前驱句柄),找到汇点后沿前驱链回溯出路径
// ==========================================

#[derive(Debug, Clone, Copy)]
struct SearchNode {
    node: usize,
    prev: Option<usize>,
}

/// 单次路径搜索的搜索节点池
#[derive(Debug, Default)]
pub(crate) struct SearchArena {
    nodes: Vec<SearchNode>,
}

impl SearchArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// 登记一个搜索节点,返回句柄
    pub(crate) fn push(&mut self, node: usize, prev: Option<usize>) -> usize {
        self.nodes.push(SearchNode { node, prev });
        self.nodes.len() - 1
    }

    /// 句柄对应的图节点 id
    pub(crate) fn node(&self, handle: usize) -> usize {
        self.nodes[handle].node
    }

    /// 回溯出从起点到 handle 的边序列 (from, to)
    pub(crate) fn path_to(&self, handle: usize) -> Vec<(usize, usize)> {
        let mut path = Vec::new();
        let mut current = self.nodes[handle];

        while let Some(prev_handle) = current.prev {
            let prev = self.nodes[prev_handle];
            path.push((prev.node, current.node));
            current = prev;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_walks_back_to_root() {
        let mut arena = SearchArena::with_capacity(4);
        let root = arena.push(0, None);
        let a = arena.push(3, Some(root));
        let b = arena.push(7, Some(a));
        let _sibling = arena.push(5, Some(root));

        assert_eq!(arena.node(b), 7);
        assert_eq!(arena.path_to(b), vec![(0, 3), (3, 7)]);
        assert!(arena.path_to(root).is_empty());
    }
}
