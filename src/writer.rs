//! Comma-delimited output: `size,frequency,item1,...,itemN` per line.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use crate::itemsets::ItemsetRow;

pub fn write_rows<W: Write>(mut writer: W, rows: &[ItemsetRow]) -> io::Result<()> {
    for row in rows {
        if row.items.is_empty() {
            writeln!(writer, "{},{}", row.size, row.frequency)?;
        } else {
            writeln!(
                writer,
                "{},{},{}",
                row.size,
                row.frequency,
                row.items.iter().join(",")
            )?;
        }
    }
    writer.flush()
}

pub fn write_file(path: impl AsRef<Path>, rows: &[ItemsetRow]) -> io::Result<()> {
    let file = File::create(path)?;
    write_rows(BufWriter::new(file), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ItemsetRow> {
        vec![
            ItemsetRow { size: 3, frequency: 5, items: vec![39, 48, 41] },
            ItemsetRow { size: 4, frequency: 4, items: vec![32, 38, 39, 48] },
        ]
    }

    #[test]
    fn writes_one_line_per_row() {
        let mut out = Vec::new();
        write_rows(&mut out, &rows()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3,5,39,48,41\n4,4,32,38,39,48\n"
        );
    }

    #[test]
    fn no_rows_no_output() {
        let mut out = Vec::new();
        write_rows(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("retail_sigma4_setsize3.csv");

        write_file(&path, &rows()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(written.starts_with("3,5,"));
    }
}
