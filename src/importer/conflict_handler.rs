// ==========================================
// 校园招聘管理系统 - 冲突处理器实现
// ==========================================
// 职责: 检测同批次内 / 与已有记录重复的业务键
// 说明: 仅在配置 reject_duplicates = true 时启用
// ==========================================

use crate::domain::ValidationError;
use std::collections::{HashMap, HashSet};

// ==========================================
// Duplicate - 重复记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateKind {
    WithinBatch { first_row: usize }, // 同批次内重复（不含首次出现）
    Existing,                         // 与已入库记录重复
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub row: usize,
    pub key: String,
    pub kind: DuplicateKind,
}

impl Duplicate {
    /// 转为挂在业务键列上的行级错误
    pub fn to_error(&self, key_field: &str) -> ValidationError {
        let message = match &self.kind {
            DuplicateKind::WithinBatch { first_row } => {
                format!("重复值（与第 {} 行相同）: {}", first_row, self.key)
            }
            DuplicateKind::Existing => format!("与已有记录重复: {}", self.key),
        };
        ValidationError::new(self.row, key_field, message)
    }
}

pub struct ConflictHandler;

impl ConflictHandler {
    /// 检测重复业务键
    ///
    /// # 参数
    /// - keys: (表格行号, 业务键) 列表；无法读取业务键的行为 None
    /// - existing_keys: 目标集合中已存在的业务键
    ///
    /// # 返回
    /// - 每个重复行一条；与已有记录重复优先于同批次重复
    pub fn detect(
        &self,
        keys: &[(usize, Option<String>)],
        existing_keys: &HashSet<String>,
    ) -> Vec<Duplicate> {
        let mut first_occurrence: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();

        for (row, key) in keys {
            let Some(key) = key else { continue };

            if existing_keys.contains(key) {
                duplicates.push(Duplicate {
                    row: *row,
                    key: key.clone(),
                    kind: DuplicateKind::Existing,
                });
                continue;
            }

            match first_occurrence.get(key.as_str()) {
                Some(first_row) => duplicates.push(Duplicate {
                    row: *row,
                    key: key.clone(),
                    kind: DuplicateKind::WithinBatch {
                        first_row: *first_row,
                    },
                }),
                None => {
                    first_occurrence.insert(key.as_str(), *row);
                }
            }
        }

        duplicates
    }
}
