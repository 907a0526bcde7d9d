// ==========================================
// 校园招聘管理系统 - 命令行入口
// ==========================================
// 子命令: validate / import / template
// 日志写入 stderr，结果写入 stdout 或 --output
// ==========================================

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands, RecordKind};
use placement_importer::config::ConfigManager;
use placement_importer::domain::ImportSummary;
use placement_importer::importer::{
    write_template, BulkImporter, ImportSession, JobSchema, RecordSchema, StudentSchema,
};
use placement_importer::logging;
use placement_importer::repository::{InMemoryRepository, RecordRepository};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    let manager = match &cli.config {
        Some(path) => ConfigManager::load(path)?,
        None => ConfigManager::discover()?,
    };
    tracing::debug!(source = ?manager.source(), "配置已就绪");

    match cli.command {
        Commands::Validate { kind, file, json } => match kind {
            RecordKind::Students => validate(StudentSchema::from_config(&manager), &manager, &file, json),
            RecordKind::Jobs => validate(JobSchema::from_config(&manager), &manager, &file, json),
        },

        Commands::Import {
            kind,
            file,
            existing,
            yes,
            output,
        } => {
            let options = ImportOptions {
                existing,
                yes,
                output,
            };
            match kind {
                RecordKind::Students => {
                    import(StudentSchema::from_config(&manager), &manager, &file, options)
                }
                RecordKind::Jobs => import(JobSchema::from_config(&manager), &manager, &file, options),
            }
        }

        Commands::Template { kind, output } => {
            match kind {
                RecordKind::Students => write_template(&StudentSchema::from_config(&manager), &output)?,
                RecordKind::Jobs => write_template(&JobSchema::from_config(&manager), &output)?,
            }
            println!("✔ 模板已生成: {}", output.display());
            Ok(())
        }
    }
}

struct ImportOptions {
    existing: Option<PathBuf>,
    yes: bool,
    output: Option<PathBuf>,
}

fn validate<S>(schema: S, manager: &ConfigManager, file: &Path, json: bool) -> Result<()>
where
    S: RecordSchema,
    S::Record: Serialize,
{
    let importer = BulkImporter::new(schema, manager);
    let result = importer.process_file(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&importer.summarize(&result));
    }
    Ok(())
}

fn import<S>(schema: S, manager: &ConfigManager, file: &Path, options: ImportOptions) -> Result<()>
where
    S: RecordSchema,
    S::Record: Serialize + DeserializeOwned,
{
    let existing: Vec<S::Record> = match &options.existing {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取已有集合: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("已有集合格式错误: {}", path.display()))?
        }
        None => Vec::new(),
    };
    let repo = InMemoryRepository::with_records(schema.name(), existing);

    let importer = BulkImporter::new(schema, manager).with_existing_from(&repo)?;
    let mut session = ImportSession::new(importer);

    let summary = session.process_file(file)?;
    print_summary(&summary);

    if summary.valid_rows == 0 {
        session.cancel();
        bail!("没有可提交的有效记录");
    }

    if !options.yes && !confirm_prompt(summary.valid_rows)? {
        session.cancel();
        println!("已取消，未提交任何记录");
        return Ok(());
    }

    let committed = session.confirm_to(&repo)?;
    println!("✔ 已提交 {} 条记录", committed);

    let collection = repo
        .list()
        .map_err(|e| anyhow::anyhow!(e))
        .context("读取提交后的集合失败")?;
    let json = serde_json::to_string_pretty(&collection)?;
    match &options.output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("✔ 集合已保存: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn print_summary(summary: &ImportSummary) {
    println!("总行数: {}", summary.total_rows);
    println!("有效行: {}", summary.valid_rows);
    println!("无效行: {}", summary.invalid_rows);

    if !summary.groups.is_empty() {
        println!("\n有效记录分布:");
        for (group, count) in &summary.groups {
            println!("  {}: {}", group, count);
        }
    }

    if summary.error_count > 0 {
        println!("\n错误 ({} 条):", summary.error_count);
        for line in summary.preview_lines() {
            println!("  {}", line);
        }
    }
}

fn confirm_prompt(valid_rows: usize) -> Result<bool> {
    print!("\n确认提交 {} 条有效记录? [y/N] ", valid_rows);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
