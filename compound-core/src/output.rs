//! Line-oriented CSV rendering of recorded rows.
//!
//! The header carries a trailing `null` column that data rows never fill;
//! downstream readers of existing tables depend on the exact header text.

use std::io::{self, Write};

use crate::config::SimConfig;
use crate::project::RecordedRow;

pub fn header_line(config: &SimConfig) -> String {
    let mut header = String::from("prj,activity,activity_no_kill,seq");
    for i in 1..=config.bit_vector_length {
        header.push_str(",f");
        header.push_str(&i.to_string());
    }
    header.push_str(",null");
    header
}

pub fn format_row(config: &SimConfig, row: &RecordedRow) -> String {
    let bits = row.fingerprint.bits(config.bit_vector_length);
    let mut line = format!(
        "p{},{},{},{}",
        row.project_id, row.activity.activity, row.activity.activity_no_kill, row.seq
    );
    line.reserve(bits.len() * 2);
    for bit in bits {
        line.push(',');
        line.push(bit as char);
    }
    line
}

pub fn write_row<W: Write>(out: &mut W, config: &SimConfig, row: &RecordedRow) -> io::Result<()> {
    writeln!(out, "{}", format_row(config, row))
}
