#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use lopdf::{Document, Object, Stream, dictionary};

const LEFT: f64 = 72.0;
const TOP: f64 = 722.0;
const COL_WIDTH: f64 = 100.0;
const ROW_HEIGHT: f64 = 30.0;

/// Content stream for a fully ruled grid with one text run per cell.
pub fn ruled_table(rows: &[&[&str]]) -> Vec<u8> {
    let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let right = LEFT + COL_WIDTH * cols as f64;
    let bottom = TOP - ROW_HEIGHT * rows.len() as f64;

    let mut stream = String::from("1 w\n");
    for row in 0..=rows.len() {
        let y = TOP - ROW_HEIGHT * row as f64;
        stream.push_str(&format!("{LEFT} {y} m {right} {y} l S\n"));
    }
    for col in 0..=cols {
        let x = LEFT + COL_WIDTH * col as f64;
        stream.push_str(&format!("{x} {TOP} m {x} {bottom} l S\n"));
    }

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, text) in row.iter().enumerate() {
            let x = LEFT + COL_WIDTH * col_index as f64 + 5.0;
            let y = TOP - ROW_HEIGHT * row_index as f64 - 20.0;
            stream.push_str(&format!("BT /F1 10 Tf {x} {y} Td ({text}) Tj ET\n"));
        }
    }

    stream.into_bytes()
}

pub fn plain_text(lines: &[&str]) -> Vec<u8> {
    let mut stream = String::new();
    for (index, line) in lines.iter().enumerate() {
        let y = 750.0 - 16.0 * index as f64;
        stream.push_str(&format!("BT /F1 12 Tf 50 {y} Td ({line}) Tj ET\n"));
    }
    stream.into_bytes()
}

pub fn build_pdf(pages: &[Vec<u8>]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids = Vec::new();
    for content in pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => font_id,
                },
            },
        });
        page_ids.push(page_id);
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::from(*id)).collect::<Vec<_>>(),
            "Count" => i64::try_from(page_ids.len())?,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

pub fn write_pdf(path: &Path, pages: &[Vec<u8>]) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, build_pdf(pages)?)?;
    Ok(())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Sheet names and the trimmed text of every sheet, in workbook order.
pub fn read_workbook(bytes: Vec<u8>) -> Vec<(String, Vec<Vec<String>>)> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).expect("output should be a valid XLSX");

    workbook
        .sheet_names()
        .into_iter()
        .map(|name| {
            let range = workbook
                .worksheet_range(&name)
                .expect("sheet should be readable");
            let rows = range
                .rows()
                .map(|row| row.iter().map(cell_text).collect())
                .collect();
            (name, rows)
        })
        .collect()
}
