use crate::Cell;
use anyhow::{anyhow, bail, ensure, Context, Result};

/// Largest pattern accepted from an RLE header.
const MAX_PATTERN_CELLS: usize = 1 << 30;

/// Returns `width`, `height` and row-major vector filled with cells of the parsed RLE pattern.
pub fn parse_rle(data: &[u8]) -> Result<(u32, u32, Vec<Cell>)> {
    let text = std::str::from_utf8(data).context("RLE data is not valid UTF-8")?;
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines.next().ok_or_else(|| anyhow!("RLE header is missing"))?;
    let (width, height) = parse_header(header)?;
    let (w, h) = (width as usize, height as usize);
    let size = w
        .checked_mul(h)
        .filter(|&size| size <= MAX_PATTERN_CELLS)
        .ok_or_else(|| anyhow!("Pattern {}x{} is too large", width, height))?;
    let mut result = Vec::new();
    result
        .try_reserve_exact(size)
        .with_context(|| format!("Pattern {}x{} does not fit in memory", width, height))?;
    result.resize(size, Cell::Dead);

    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, None::<usize>);
    'body: for line in lines {
        for ch in line.chars() {
            match ch {
                '0'..='9' => {
                    let digit = ch as usize - '0' as usize;
                    cnt = Some(
                        cnt.unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|c| c.checked_add(digit))
                            .ok_or_else(|| anyhow!("Run count is too large"))?,
                    );
                }
                'b' | 'o' => {
                    let run = cnt.take().unwrap_or(1);
                    ensure!(
                        x.checked_add(run).is_some_and(|end| end <= w) && y < h,
                        "Run at ({}, {}) overflows the declared {}x{} pattern",
                        x,
                        y,
                        width,
                        height
                    );
                    if ch == 'o' {
                        result[y * w + x..y * w + x + run].fill(Cell::Alive);
                    }
                    x += run;
                }
                '$' => {
                    let skip = cnt.take().unwrap_or(1);
                    y = y.checked_add(skip).filter(|&y| y <= h).ok_or_else(|| {
                        anyhow!("Row skip at row {} overflows the declared height {}", y, height)
                    })?;
                    x = 0;
                }
                '!' => break 'body,
                c if c.is_whitespace() => {}
                c => bail!("Unexpected symbol {:?} in RLE data", c),
            }
        }
    }
    Ok((width, height, result))
}

/// Parses `x = W, y = H[, rule = R]`.
fn parse_header(line: &str) -> Result<(u32, u32)> {
    let (mut width, mut height) = (None, None);
    for field in line.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("Malformed RLE header field {:?}", field.trim()))?;
        let value = value.trim();
        match key.trim() {
            "x" => width = Some(value.parse::<u32>().context("Bad pattern width")?),
            "y" => height = Some(value.parse::<u32>().context("Bad pattern height")?),
            "rule" => {
                let rule = value.to_ascii_uppercase();
                ensure!(
                    rule == "B3/S23" || rule == "23/3",
                    "Unsupported rule {:?}, only B3/S23 is available",
                    value
                );
            }
            other => bail!("Unknown RLE header field {:?}", other),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok((w, h)),
        (Some(w), Some(h)) => bail!("Pattern size {}x{} must be positive", w, h),
        _ => bail!("RLE header must declare both x and y"),
    }
}
