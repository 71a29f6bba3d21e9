use itertools::{EitherOrBoth, Itertools};
use std::fmt::Write;

pub const ROW_WIDTH: usize = 16;

/// Rows beyond this many are summarized in one line.
pub const MAX_ROWS: usize = 24;

pub fn first_divergence(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter().zip_longest(b.iter()).position(|pair| match pair {
        EitherOrBoth::Both(x, y) => x != y,
        EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => true,
    })
}

fn hex_row(row: &[u8]) -> String {
    row.iter().map(|b| format!("{b:02x}")).join(" ")
}

/// Renders the rows where `a` and `b` differ, side by side and keyed by offset.
pub fn diff_dump(a: &[u8], b: &[u8]) -> String {
    let mut out = String::new();
    let (a_rows, b_rows) = (a.chunks(ROW_WIDTH), b.chunks(ROW_WIDTH));
    let differing = a_rows
        .zip_longest(b_rows)
        .enumerate()
        .filter_map(|(i, pair)| {
            let (a_row, b_row) = match pair {
                EitherOrBoth::Both(a_row, b_row) => (a_row, b_row),
                EitherOrBoth::Left(a_row) => (a_row, &[][..]),
                EitherOrBoth::Right(b_row) => (&[][..], b_row),
            };
            (a_row != b_row).then_some((i * ROW_WIDTH, a_row, b_row))
        })
        .collect::<Vec<_>>();

    let width = ROW_WIDTH * 3 - 1;
    for (offset, a_row, b_row) in differing.iter().take(MAX_ROWS) {
        writeln!(
            out,
            "{offset:08x}  {:<width$}  |  {}",
            hex_row(a_row),
            hex_row(b_row),
        )
        .ok();
    }
    if differing.len() > MAX_ROWS {
        writeln!(out, "... {} more differing rows", differing.len() - MAX_ROWS).ok();
    }
    out
}
