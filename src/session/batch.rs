use super::{Printer, Reader};
use crate::calc::SharedCalc;
use std::io::Write;

pub fn run_arguments<O: Write, E: Write>(
    calc: &SharedCalc,
    args: &[String],
    printer: &mut Printer<O, E>,
) -> anyhow::Result<i32> {
    let mut failed = false;
    for (i, arg) in args.iter().enumerate() {
        let prefix = format!("Expression {}", i + 1);
        if !printer.report(calc, arg, Some(&prefix))? {
            failed = true;
        }
    }
    Ok(failed as i32)
}

pub fn run_stream<R: Reader, O: Write, E: Write>(
    calc: &SharedCalc,
    reader: &mut R,
    printer: &mut Printer<O, E>,
) -> anyhow::Result<i32> {
    let mut status = 0;
    let mut number = 0;
    while let Some(line) = reader.next_line()? {
        number += 1;
        if line.trim().is_empty() {
            continue;
        }
        let prefix = format!("Line {}", number);
        status = if printer.report(calc, &line, Some(&prefix))? {
            0
        } else {
            1
        };
    }
    tracing::debug!(lines = number, status, "stream finished");
    Ok(status)
}
