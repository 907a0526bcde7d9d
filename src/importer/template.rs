// ==========================================
// 校园招聘管理系统 - 导入模板生成
// ==========================================
// 职责: 生成带表头与示例行的 xlsx 模板
// 红线: 示例行必须能通过对应模式的逐行校验
// ==========================================

use crate::importer::error::ImporterResult;
use crate::importer::importer_trait::RecordSchema;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;
use tracing::info;

const COLUMN_WIDTH: f64 = 22.0;

// ==========================================
// TemplateCell - 模板单元格
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateCell {
    Text(String),
    Number(f64),
}

impl TemplateCell {
    pub fn text(value: impl Into<String>) -> Self {
        TemplateCell::Text(value.into())
    }
}

/// 构造模板工作簿
pub fn template_workbook<S: RecordSchema>(schema: &S) -> ImporterResult<Workbook> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xDDEBF7))
        .set_border(FormatBorder::Thin);

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(schema.name())?;

        for (col, column) in schema.columns().iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, *column, &header_format)?;
            worksheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        for (row_idx, cells) in schema.template_rows().iter().enumerate() {
            let row = (row_idx + 1) as u32;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    TemplateCell::Text(value) => {
                        worksheet.write_string(row, col, value.as_str())?;
                    }
                    TemplateCell::Number(value) => {
                        worksheet.write_number(row, col, *value)?;
                    }
                }
            }
        }
    }

    Ok(workbook)
}

/// 模板字节流（供下载）
pub fn template_bytes<S: RecordSchema>(schema: &S) -> ImporterResult<Vec<u8>> {
    let mut workbook = template_workbook(schema)?;
    Ok(workbook.save_to_buffer()?)
}

/// 模板写入文件
pub fn write_template<S, P>(schema: &S, path: P) -> ImporterResult<()>
where
    S: RecordSchema,
    P: AsRef<Path>,
{
    let mut workbook = template_workbook(schema)?;
    workbook.save(path.as_ref())?;
    info!(schema = schema.name(), path = %path.as_ref().display(), "导入模板已生成");
    Ok(())
}
