use std::fmt::{self, Display};
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// A row of a plain-text table with a fixed set of columns.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cell(&self, column_index: usize) -> &str;
}

pub fn display_table<Row: TableRow>(rows: &[Row], mut output: impl Write) -> io::Result<()> {
    let mut column_widths = Row::HEADERS.iter().map(|h| h.width()).collect::<Vec<_>>();
    for row in rows {
        for (column_index, width) in column_widths.iter_mut().enumerate() {
            *width = std::cmp::max(row.cell(column_index).width(), *width);
        }
    }

    output_row(&mut output, &column_widths, |column_index, width| {
        Padded(Row::HEADERS[column_index], width)
    })?;
    output_row(&mut output, &column_widths, |_, width| Divider(width))?;
    for row in rows {
        output_row(&mut output, &column_widths, |column_index, width| {
            Padded(row.cell(column_index), width)
        })?;
    }

    Ok(())
}

fn output_row<F, D>(mut output: impl Write, column_widths: &[usize], get_cell: F) -> io::Result<()>
where
    D: Display,
    F: Fn(usize, usize) -> D,
{
    for (column_index, &width) in column_widths.iter().enumerate() {
        if column_index != 0 {
            write!(&mut output, "  ")?;
        }
        write!(&mut output, "{}", get_cell(column_index, width))?;
    }
    writeln!(&mut output)?;
    Ok(())
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "─")?;
        }
        Ok(())
    }
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}
