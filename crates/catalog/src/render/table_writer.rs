use std::{cmp::max, io::Write};

const DEFAULT_MIN_WIDTH: usize = 5;
const DEFAULT_PADDING: usize = 3;

/// Buffers tab delimited lines, and writes them out left aligned on flush.
///
/// Columns are aligned across each contiguous block of lines holding more
/// than one cell. Lines with a single cell, such as titles or blank lines,
/// end a block and are written as is.
pub struct TableWriter<W: Write> {
    out: W,
    min_width: usize,
    padding: usize,
    lines: Vec<Vec<String>>,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            min_width: DEFAULT_MIN_WIDTH,
            padding: DEFAULT_PADDING,
            lines: Vec::new(),
        }
    }

    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn write_line<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn blank_line(&mut self) {
        self.lines.push(Vec::new());
    }

    pub fn flush(mut self) -> std::io::Result<W> {
        let lines = std::mem::take(&mut self.lines);

        let mut start = 0;
        while start < lines.len() {
            if lines[start].len() <= 1 {
                let cell = lines[start].first().map(String::as_str).unwrap_or("");
                writeln!(self.out, "{cell}")?;
                start += 1;
                continue;
            }

            let end = lines[start..]
                .iter()
                .position(|l| l.len() <= 1)
                .map(|p| start + p)
                .unwrap_or(lines.len());

            self.write_block(&lines[start..end])?;
            start = end;
        }

        self.out.flush()?;

        Ok(self.out)
    }

    fn write_block(&mut self, block: &[Vec<String>]) -> std::io::Result<()> {
        let mut widths: Vec<usize> = Vec::new();
        for line in block {
            // the last cell of a line is never padded, so it never widens a column
            for (i, cell) in line.iter().take(line.len() - 1).enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = max(*w, width),
                    None => widths.push(width),
                }
            }
        }

        for line in block {
            let mut output = String::new();
            for (i, cell) in line.iter().enumerate() {
                if i == line.len() - 1 {
                    output.push_str(cell);
                    break;
                }

                let width = max(widths[i] + self.padding, self.min_width);
                output.push_str(&format!("{:<width$}", cell, width = width));
            }

            writeln!(self.out, "{output}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(f: impl FnOnce(&mut TableWriter<Vec<u8>>)) -> anyhow::Result<String> {
        let mut writer = TableWriter::new(Vec::new());
        f(&mut writer);
        let out = writer.flush()?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn aligns_columns_within_a_block() -> anyhow::Result<()> {
        let output = render(|w| {
            w.write_line(["Title:"]);
            w.write_line(["NAME", "PROJECT", "SUPPORTED"]);
            w.write_line(["nodejs (*)", "openshift", "YES"]);
            w.blank_line();
        })?;

        let expected = "\
Title:
NAME         PROJECT     SUPPORTED
nodejs (*)   openshift   YES

";
        assert_eq!(expected, output);

        Ok(())
    }

    #[test]
    fn single_cell_lines_split_blocks() -> anyhow::Result<()> {
        let output = render(|w| {
            w.write_line(["a", "b"]);
            w.write_line(["break"]);
            w.write_line(["longer-name", "b"]);
        })?;

        let expected = "\
a    b
break
longer-name   b
";
        assert_eq!(expected, output);

        Ok(())
    }

    #[test]
    fn honors_min_width_and_padding() -> anyhow::Result<()> {
        let mut writer = TableWriter::new(Vec::new())
            .with_min_width(8)
            .with_padding(1);
        writer.write_line(["ab", "cd", "ef"]);
        writer.write_line(["abcdefghij", "x", "y"]);

        let output = String::from_utf8(writer.flush()?)?;

        let expected = "\
ab         cd      ef
abcdefghij x       y
";
        assert_eq!(expected, output);

        Ok(())
    }

    #[test]
    fn empty_writer_writes_nothing() -> anyhow::Result<()> {
        assert_eq!("", render(|_| {})?);

        Ok(())
    }
}
