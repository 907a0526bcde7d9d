// ==========================================
// 校园招聘管理系统 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载与查询
// 优先级: 显式路径 > PLACEMENT_IMPORTER_CONFIG > 用户配置目录 > 默认值
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::config::importer_config::{ImporterConfig, JobRules, StudentRules};
use crate::importer::error::{ImportError, ImporterResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "PLACEMENT_IMPORTER_CONFIG";

const CONFIG_DIR_NAME: &str = "placement-importer";
const CONFIG_FILE_NAME: &str = "importer.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: ImporterConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用内存中的配置
    pub fn from_config(config: ImporterConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 从指定 JSON 文件加载
    ///
    /// # 返回
    /// - Err: 文件不存在、不可读或 JSON 非法
    pub fn load<P: AsRef<Path>>(path: P) -> ImporterResult<Self> {
        let path = path.as_ref();
        let config_error = |message: String| ImportError::ConfigError {
            path: path.display().to_string(),
            message,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let config: ImporterConfig =
            serde_json::from_str(&raw).map_err(|e| config_error(e.to_string()))?;

        info!(path = %path.display(), "导入配置已加载");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 按优先级查找配置
    ///
    /// 环境变量指定的文件必须存在；用户配置目录中的文件缺失时使用默认值
    pub fn discover() -> ImporterResult<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("未找到导入配置文件，使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 用户配置目录下的默认路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// 配置来源文件（默认配置返回 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl ImportConfigReader for ConfigManager {
    fn student_rules(&self) -> &StudentRules {
        &self.config.student
    }

    fn job_rules(&self) -> &JobRules {
        &self.config.job
    }

    fn error_preview_limit(&self) -> usize {
        self.config.error_preview_limit
    }

    fn reject_duplicates(&self) -> bool {
        self.config.reject_duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"error_preview_limit": 5, "job": {{"ctc_min": 1.5}}}}"#).unwrap();

        let manager = ConfigManager::load(temp_file.path()).unwrap();

        assert_eq!(manager.error_preview_limit(), 5);
        assert_eq!(manager.job_rules().ctc_min, 1.5);
        assert_eq!(manager.student_rules().roll_number_max_len, 12);
        assert_eq!(manager.source(), Some(temp_file.path()));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not json").unwrap();

        let result = ConfigManager::load(temp_file.path());

        assert!(matches!(result, Err(ImportError::ConfigError { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigManager::load("/definitely/not/here/importer.json");
        assert!(matches!(result, Err(ImportError::ConfigError { .. })));
    }
}
