// ==========================================
// 校园招聘管理系统 - 记录仓储
// ==========================================
// 职责: 学生/岗位集合的读取、追加、更新
// 红线: 追加为全有或全无；追加不修改已有记录
// ==========================================

use crate::domain::Record;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::collections::HashSet;
use std::sync::Mutex;
use tracing::{debug, info};

// ==========================================
// RecordRepository Trait
// ==========================================
// 用途: 导入器与表单依赖此能力，而非具体集合
// 实现者: InMemoryRepository
pub trait RecordRepository<T: Record>: Send + Sync {
    /// 全部记录（按追加顺序）
    fn list(&self) -> RepositoryResult<Vec<T>>;

    /// 批量追加
    ///
    /// # 返回
    /// - Ok(usize): 追加条数
    /// - Err: 任何一条无法写入时整体失败，集合保持原样
    fn append(&self, records: Vec<T>) -> RepositoryResult<usize>;

    /// 按 id 局部更新；补丁不得修改 id
    fn update(&self, id: &str, patch: &mut dyn FnMut(&mut T)) -> RepositoryResult<()>;

    /// 已有记录的业务键（重复检测使用）
    fn existing_keys(&self) -> RepositoryResult<HashSet<String>>;

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.list()?.len())
    }
}

// ==========================================
// InMemoryRepository - 内存仓储
// ==========================================
pub struct InMemoryRepository<T> {
    entity: &'static str,
    records: Mutex<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new(entity: &'static str) -> Self {
        Self::with_records(entity, Vec::new())
    }

    pub fn with_records(entity: &'static str, records: Vec<T>) -> Self {
        Self {
            entity,
            records: Mutex::new(records),
        }
    }
}

impl<T: Record> RecordRepository<T> for InMemoryRepository<T> {
    fn list(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.records.lock()?.clone())
    }

    fn append(&self, records: Vec<T>) -> RepositoryResult<usize> {
        let mut store = self.records.lock()?;

        // 先整体校验 id 唯一，再一次性写入
        let mut ids: HashSet<String> = store.iter().map(|r| r.id().to_string()).collect();
        for record in &records {
            if !ids.insert(record.id().to_string()) {
                return Err(RepositoryError::UniqueConstraintViolation(format!(
                    "{} id 重复: {}",
                    self.entity,
                    record.id()
                )));
            }
        }

        let count = records.len();
        store.extend(records);
        info!(entity = self.entity, appended = count, total = store.len(), "记录已追加");
        Ok(count)
    }

    fn update(&self, id: &str, patch: &mut dyn FnMut(&mut T)) -> RepositoryResult<()> {
        let mut store = self.records.lock()?;
        let slot = store
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: self.entity.to_string(),
                id: id.to_string(),
            })?;

        // 在副本上打补丁，校验通过后替换
        let mut patched = slot.clone();
        patch(&mut patched);
        if patched.id() != id {
            return Err(RepositoryError::BusinessRuleViolation(format!(
                "不允许修改 {} 的 id: {} → {}",
                self.entity,
                id,
                patched.id()
            )));
        }

        *slot = patched;
        debug!(entity = self.entity, id = id, "记录已更新");
        Ok(())
    }

    fn existing_keys(&self) -> RepositoryResult<HashSet<String>> {
        Ok(self
            .records
            .lock()?
            .iter()
            .filter_map(|r| r.natural_key())
            .collect())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.records.lock()?.len())
    }
}
