use std::ops::{Index, IndexMut};

// ==========================================
// SquareMatrix - 方阵（容量矩阵 / 流量矩阵）
// ==========================================
// 行优先连续存储; 流量矩阵允许负值（反向边）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl SquareMatrix {
    /// 创建全零方阵
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// 边长
    pub fn size(&self) -> usize {
        self.size
    }

    /// 第 i 行
    pub fn row(&self, i: usize) -> &[i64] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// 将第 j 列全部置零（删除所有指向 j 的边）
    pub fn clear_column(&mut self, j: usize) {
        for i in 0..self.size {
            self[(i, j)] = 0;
        }
    }

    /// 第 j 列之和
    pub fn column_sum(&self, j: usize) -> i64 {
        (0..self.size).map(|i| self[(i, j)]).sum()
    }

    /// 第 i 行之和
    pub fn row_sum(&self, i: usize) -> i64 {
        self.row(i).iter().sum()
    }

    /// 是否所有元素均非负（容量矩阵不变量）
    pub fn is_non_negative(&self) -> bool {
        self.cells.iter().all(|&c| c >= 0)
    }

    /// 是否为反对称矩阵（m[i][j] == -m[j][i]）
    pub fn is_antisymmetric(&self) -> bool {
        (0..self.size).all(|i| (i..self.size).all(|j| self[(i, j)] == -self[(j, i)]))
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = i64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        debug_assert!(i < self.size && j < self.size, "矩阵下标越界: ({}, {})", i, j);
        &self.cells[i * self.size + j]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i64 {
        debug_assert!(i < self.size && j < self.size, "矩阵下标越界: ({}, {})", i, j);
        &mut self.cells[i * self.size + j]
    }
}
