use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "placement-importer")]
#[command(about = "校园招聘管理系统 - 学生/岗位批量导入工具", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 配置文件（JSON）；缺省时按环境变量与用户配置目录查找
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 以 JSON 格式输出日志
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 解析并校验表格，输出汇总与错误（不提交）
    Validate {
        /// 记录类型
        kind: RecordKind,

        /// 表格文件（xlsx/xls/ods/csv）
        file: PathBuf,

        /// 以 JSON 输出完整校验结果
        #[arg(long)]
        json: bool,
    },

    /// 校验后确认提交到集合，并写出提交后的集合
    Import {
        /// 记录类型
        kind: RecordKind,

        /// 表格文件（xlsx/xls/ods/csv）
        file: PathBuf,

        /// 已有集合（JSON 数组），作为提交目标
        #[arg(short, long)]
        existing: Option<PathBuf>,

        /// 跳过交互确认
        #[arg(short, long)]
        yes: bool,

        /// 输出 JSON 文件（默认: 标准输出）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 生成导入模板工作簿
    Template {
        /// 记录类型
        kind: RecordKind,

        /// 输出 xlsx 文件
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Students,
    Jobs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_command() {
        let cli = Cli::parse_from(["placement-importer", "validate", "students", "a.xlsx", "--json"]);

        match cli.command {
            Commands::Validate { kind, file, json } => {
                assert_eq!(kind, RecordKind::Students);
                assert_eq!(file, PathBuf::from("a.xlsx"));
                assert!(json);
            }
            _ => panic!("期望 validate 子命令"),
        }
    }

    #[test]
    fn test_parse_import_command_with_global_config() {
        let cli = Cli::parse_from([
            "placement-importer",
            "import",
            "jobs",
            "jobs.csv",
            "--yes",
            "--config",
            "rules.json",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("rules.json")));
        assert!(matches!(
            cli.command,
            Commands::Import { kind: RecordKind::Jobs, yes: true, .. }
        ));
    }
}
