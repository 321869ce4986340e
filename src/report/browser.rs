// Paginated view of raw trip rows
// Author: Gabriel Demetrios Lafis

use std::io::Write;
use std::ops::Range;

use crate::data::DataSet;
use crate::utils::AppResult;

/// Pages through a trip table, showing source columns only
pub struct RawDataBrowser<'a> {
    trips: &'a DataSet,
    page_size: usize,
    visible: Vec<usize>,
}

impl<'a> RawDataBrowser<'a> {
    /// Create a browser; a page size of zero is treated as one
    pub fn new(trips: &'a DataSet, page_size: usize) -> Self {
        let visible = trips
            .schema
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| !field.derived)
            .map(|(i, _)| i)
            .collect();

        RawDataBrowser {
            trips,
            page_size: page_size.max(1),
            visible,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.trips.len()
    }

    /// Row ranges of every page, the last one clamped to the table
    pub fn pages(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let total = self.total_rows();
        (0..total)
            .step_by(self.page_size)
            .map(move |start| start..(start + self.page_size).min(total))
    }

    /// Print the rows of one page as an aligned table
    pub fn render_page<W: Write>(&self, out: &mut W, rows: Range<usize>) -> AppResult<()> {
        let rows = rows.start.min(self.total_rows())..rows.end.min(self.total_rows());

        let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
        let mut header = vec![String::new()];
        header.extend(self.visible.iter().map(|&i| self.trips.schema.fields[i].name.clone()));
        table.push(header);

        for idx in rows.clone() {
            let row = &self.trips.data[idx];
            let mut line = vec![idx.to_string()];
            line.extend(self.visible.iter().map(|&i| row.values[i].to_string()));
            table.push(line);
        }

        let mut widths = vec![0; self.visible.len() + 1];
        for line in &table {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(out, "\n")?;
        for line in &table {
            let cells: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
                .collect();
            writeln!(out, "{}", cells.join("  "))?;
        }

        writeln!(
            out,
            "Showing {} rows ({}:{}) of {}",
            rows.len(),
            rows.start,
            rows.end,
            self.total_rows()
        )?;
        Ok(())
    }
}
